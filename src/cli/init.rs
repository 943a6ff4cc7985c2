//! Init and scopes commands

use anyhow::{bail, Result};
use std::path::Path;
use tracing::info;

use shorts::fsutil::ensure_directory;
use shorts::store::STORE_FILE_NAME;
use shorts::Scope;

use super::Session;

/// Create a local scope marker in `work_dir`
pub fn init_command(work_dir: &Path) -> Result<()> {
    let session = Session::open(work_dir)?;
    let resolver = session.registry.resolver();
    let marker = session.context.cwd.join(resolver.marker());

    if resolver.is_global_dir(&marker) {
        bail!(
            "Cannot initialize a local scope at {}: it is the global store directory",
            marker.display()
        );
    }
    if marker.is_dir() {
        println!("Local scope already initialized: {}", marker.display());
        return Ok(());
    }
    if let Some(existing) = resolver.find_local(&session.context) {
        info!("Nested local scope below {}", existing.display());
    }

    ensure_directory(&marker, Scope::Local)?;
    println!("Initialized local scope: {}", marker.display());
    Ok(())
}

/// Show the active scopes and their store files, lowest priority first
pub fn scopes_command(work_dir: &Path) -> Result<()> {
    let session = Session::open(work_dir)?;

    for resolved in session.registry.scopes(&session.context) {
        let path = resolved.dir.join(STORE_FILE_NAME);
        let state = if path.exists() { "" } else { " (not created yet)" };
        println!("{:<6}  {}{}", resolved.scope.as_str(), path.display(), state);
    }
    Ok(())
}
