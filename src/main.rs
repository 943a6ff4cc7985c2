use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use shorts::{Scope, ShortcutError};

mod cli;

#[derive(Parser)]
#[command(name = "sc")]
#[command(about = "A CLI shortcut management tool")]
#[command(version)]
struct Cli {
    /// Working directory used for local scope discovery (defaults to current directory)
    #[arg(short, long, global = true)]
    path: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Define a new shortcut
    Add {
        name: String,
        /// Command template (%1, %2, ... positional, %@ remaining args, %% literal %).
        ///
        /// Words are joined with single spaces, so shell quoting around a word
        /// is lost. Quote the whole template to keep it: sc add g 'grep "a b"'
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
        /// Store in the local (project) scope instead of global
        #[arg(short, long)]
        local: bool,
        /// Allow hiding a shortcut of the same name from another scope
        #[arg(long)]
        shadow: bool,
    },

    /// Replace the command of an existing shortcut
    Update {
        name: String,
        /// New command template, words joined with single spaces (see `add`)
        #[arg(required = true, num_args = 1.., trailing_var_arg = true, allow_hyphen_values = true)]
        command: Vec<String>,
        #[arg(short, long)]
        local: bool,
    },

    /// Delete a shortcut from one scope
    #[command(alias = "remove")]
    Rm {
        name: String,
        #[arg(short, long)]
        local: bool,
    },

    /// Show the shortcut a name resolves to
    Show {
        name: String,
        #[arg(long)]
        json: bool,
    },

    /// List visible shortcuts (local shadowing global)
    #[command(alias = "list")]
    Ls {
        /// Only list the raw contents of one scope
        #[arg(short, long, value_parser = cli::parse_scope)]
        scope: Option<Scope>,
        #[arg(long)]
        json: bool,
    },

    /// Print the expanded command without running it
    Expand {
        name: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Expand and execute a shortcut
    Run {
        name: String,
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },

    /// Create a local scope marker in the working directory
    Init,

    /// Show active scopes and their store files
    Scopes,

    /// `sc <name> [args...]` runs the shortcut
    #[command(external_subcommand)]
    External(Vec<String>),
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level)),
        )
        .with_writer(std::io::stderr)
        .init();

    match dispatch(cli) {
        Ok(code) => ExitCode::from(u8::try_from(code).unwrap_or(1)),
        Err(err) => {
            eprintln!("error: {err:#}");
            let code = err
                .downcast_ref::<ShortcutError>()
                .map(ShortcutError::exit_code)
                .unwrap_or(1);
            ExitCode::from(code as u8)
        }
    }
}

fn dispatch(cli: Cli) -> Result<i32> {
    // Determine the working directory
    let work_dir = cli.path.unwrap_or_else(|| PathBuf::from("."));

    match cli.command {
        Commands::Add {
            name,
            command,
            local,
            shadow,
        } => {
            let command = command.join(" ");
            cli::shortcut::add_command(&work_dir, &name, &command, cli::scope_flag(local), shadow)?;
        }
        Commands::Update {
            name,
            command,
            local,
        } => {
            let command = command.join(" ");
            cli::shortcut::update_command(&work_dir, &name, &command, cli::scope_flag(local))?;
        }
        Commands::Rm { name, local } => {
            cli::shortcut::remove_command(&work_dir, &name, cli::scope_flag(local))?;
        }
        Commands::Show { name, json } => {
            cli::shortcut::show_command(&work_dir, &name, json)?;
        }
        Commands::Ls { scope, json } => {
            cli::shortcut::list_command(&work_dir, scope, json)?;
        }
        Commands::Expand { name, args } => {
            cli::run::expand_command(&work_dir, &name, &args)?;
        }
        Commands::Run { name, args } => {
            return cli::run::run_command(&work_dir, &name, &args);
        }
        Commands::Init => {
            cli::init::init_command(&work_dir)?;
        }
        Commands::Scopes => {
            cli::init::scopes_command(&work_dir)?;
        }
        Commands::External(mut argv) => {
            let name = argv.remove(0);
            return cli::run::run_command(&work_dir, &name, &argv);
        }
    }

    Ok(0)
}
