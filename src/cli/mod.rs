//! CLI command implementations

pub mod init;
pub mod run;
pub mod shortcut;

use std::path::Path;

use anyhow::{Context as _, Result};

use shorts::{Config, Context, Lookup, Registry, Scope, Shortcut};

/// A lookup miss surfaced by a command that needs the shortcut to exist
#[derive(Debug, thiserror::Error)]
#[error("no shortcut named '{name}'{}", did_you_mean(.suggestions))]
pub struct MissError {
    pub name: String,
    pub suggestions: Vec<String>,
}

fn did_you_mean(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!(" (did you mean: {}?)", suggestions.join(", "))
    }
}

/// Everything a command needs: configuration, registry and invocation context
pub struct Session {
    pub config: Config,
    pub registry: Registry,
    pub context: Context,
}

impl Session {
    /// Load the global config and build a file-backed registry for `work_dir`
    pub fn open(work_dir: &Path) -> Result<Self> {
        let global_dir = Config::global_dir();
        let config = Config::load_from(&global_dir)?;
        let registry = Registry::open(&global_dir, &config);
        let context = Context::new(
            work_dir
                .canonicalize()
                .with_context(|| format!("Invalid working directory: {}", work_dir.display()))?,
        );

        Ok(Self {
            config,
            registry,
            context,
        })
    }

    /// Look up `name`, turning a miss into a `MissError`
    pub fn require(&self, name: &str) -> Result<Shortcut> {
        match self.registry.lookup(name, &self.context)? {
            Lookup::Found(shortcut) => Ok(shortcut),
            Lookup::Miss { name, suggestions } => Err(MissError { name, suggestions }.into()),
        }
    }
}

/// Scope selected by the `--local` flag
pub fn scope_flag(local: bool) -> Scope {
    if local { Scope::Local } else { Scope::Global }
}

/// clap value parser for scope names and their aliases
pub fn parse_scope(s: &str) -> Result<Scope, String> {
    Scope::from_str(s).ok_or_else(|| format!("unknown scope '{s}' (expected global or local)"))
}
