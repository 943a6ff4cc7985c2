//! Expand and run commands

use anyhow::{Context as _, Result};
use std::path::Path;
use std::process::Command;
use tracing::debug;

use super::Session;

/// Print the expanded command for `name` without running it
pub fn expand_command(work_dir: &Path, name: &str, args: &[String]) -> Result<()> {
    let session = Session::open(work_dir)?;
    let shortcut = session.require(name)?;
    println!("{}", session.registry.expand(&shortcut, args)?);
    Ok(())
}

/// Expand `name` and execute it with the configured shell.
///
/// Returns the child's exit code; a child killed by a signal reports 128 + signal
/// on Unix, or 1 elsewhere.
pub fn run_command(work_dir: &Path, name: &str, args: &[String]) -> Result<i32> {
    let session = Session::open(work_dir)?;
    let shortcut = session.require(name)?;
    let command = session.registry.expand(&shortcut, args)?;
    let shell = &session.config.settings.shell;

    debug!("Running {} shortcut '{}': {} -c {}", shortcut.scope, name, shell, command);

    let status = Command::new(shell)
        .arg("-c")
        .arg(&command)
        .current_dir(&session.context.cwd)
        .status()
        .with_context(|| format!("Failed to run '{}' with {}", command, shell))?;

    Ok(exit_code(status))
}

#[cfg(unix)]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    use std::os::unix::process::ExitStatusExt;
    status
        .code()
        .or_else(|| status.signal().map(|sig| 128 + sig))
        .unwrap_or(1)
}

#[cfg(not(unix))]
fn exit_code(status: std::process::ExitStatus) -> i32 {
    status.code().unwrap_or(1)
}
