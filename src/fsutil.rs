//! Filesystem helpers

use std::path::Path;

use tracing::debug;

use crate::domain::Scope;
use crate::error::{Result, ShortcutError};

/// Create `path`, the directory of a `scope` store, and any missing parents.
///
/// Succeeds silently when the directory already exists. Anything else in the
/// way (a regular file, missing permissions) is a `DirectoryCreation` error.
pub fn ensure_directory(path: &Path, scope: Scope) -> Result<()> {
    if path.is_dir() {
        return Ok(());
    }

    match std::fs::create_dir_all(path) {
        Ok(()) => {
            debug!("Created directory {}", path.display());
            Ok(())
        }
        // Lost a race with another process creating the same directory
        Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists && path.is_dir() => Ok(()),
        Err(source) => Err(ShortcutError::DirectoryCreation {
            path: path.to_path_buf(),
            scope,
            source,
        }),
    }
}
