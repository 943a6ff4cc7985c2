//! Shortcut CRUD commands (edit the scope's `shortcuts.yaml`).

use anyhow::Result;
use std::path::Path;
use tracing::warn;

use shorts::registry::max_placeholder;
use shorts::{Lookup, Scope, Shortcut};

use super::Session;

pub fn add_command(
    work_dir: &Path,
    name: &str,
    command: &str,
    scope: Scope,
    shadow: bool,
) -> Result<()> {
    let session = Session::open(work_dir)?;
    let shortcut = session
        .registry
        .create(name, command, scope, &session.context, shadow)?;

    println!("Shortcut saved: {} ({})", shortcut.name, shortcut.scope);
    Ok(())
}

pub fn update_command(work_dir: &Path, name: &str, command: &str, scope: Scope) -> Result<()> {
    let session = Session::open(work_dir)?;
    let shortcut = session
        .registry
        .update(name, command, scope, &session.context)?;

    println!("Shortcut updated: {} ({})", shortcut.name, shortcut.scope);
    Ok(())
}

pub fn remove_command(work_dir: &Path, name: &str, scope: Scope) -> Result<()> {
    let session = Session::open(work_dir)?;
    let removed = session.registry.delete(name, scope, &session.context)?;

    println!("Shortcut deleted: {} ({})", removed.name, removed.scope);

    // Tell the user when a shadowed shortcut becomes visible again. The
    // removal already happened, so a failing lookup only warns.
    match session.registry.lookup(name, &session.context) {
        Ok(Lookup::Found(revealed)) => {
            println!("Now resolves to {} shortcut: {}", revealed.scope, revealed.command);
        }
        Ok(Lookup::Miss { .. }) => {}
        Err(e) => warn!("Could not check what '{}' resolves to now: {}", name, e),
    }
    Ok(())
}

pub fn show_command(work_dir: &Path, name: &str, json: bool) -> Result<()> {
    let session = Session::open(work_dir)?;
    let shortcut = session.require(name)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&shortcut)?);
    } else {
        println!("name:      {}", shortcut.name);
        println!("command:   {}", shortcut.command);
        println!("scope:     {}", shortcut.scope);
        println!("arguments: {}", max_placeholder(&shortcut.command));
        println!("created:   {}", shortcut.created_at.to_rfc3339());
        println!("updated:   {}", shortcut.updated_at.to_rfc3339());
    }
    Ok(())
}

pub fn list_command(work_dir: &Path, scope: Option<Scope>, json: bool) -> Result<()> {
    let session = Session::open(work_dir)?;
    let shortcuts: Vec<Shortcut> = match scope {
        Some(scope) => session.registry.list_scope(scope, &session.context)?,
        None => session.registry.list(&session.context)?,
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&shortcuts)?);
        return Ok(());
    }

    let width = shortcuts.iter().map(|s| s.name.len()).max().unwrap_or(0);
    for shortcut in &shortcuts {
        println!(
            "{:<width$}  [{}]  {}",
            shortcut.name,
            if shortcut.scope == Scope::Local { "L" } else { "G" },
            shortcut.command,
        );
    }
    Ok(())
}
