//! Error types for the shortcut registry
//!
//! Every variant carries the offending name or path plus the scope involved,
//! so the message alone is enough for a user to fix the condition.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Scope;

/// Errors surfaced by the store, resolver and registry
#[derive(Error, Debug)]
pub enum ShortcutError {
    #[error("invalid {scope} shortcut name '{name}': {reason}")]
    InvalidName {
        name: String,
        scope: Scope,
        reason: &'static str,
    },

    #[error("shortcut '{name}' already exists in {scope} scope")]
    DuplicateName { name: String, scope: Scope },

    #[error("shortcut '{name}' not found in {scope} scope")]
    NotFound { name: String, scope: Scope },

    #[error(
        "{scope} shortcut '{name}' references %{index} but only {supplied} argument(s) were given"
    )]
    Arity {
        name: String,
        scope: Scope,
        index: usize,
        supplied: usize,
    },

    #[error("{scope} store at {} is corrupt: {source}", .path.display())]
    CorruptStore {
        path: PathBuf,
        scope: Scope,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("failed to persist {scope} store at {}: {source}", .path.display())]
    Persistence {
        path: PathBuf,
        scope: Scope,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to create {scope} scope directory {}: {source}", .path.display())]
    DirectoryCreation {
        path: PathBuf,
        scope: Scope,
        #[source]
        source: std::io::Error,
    },
}

/// Result type alias for registry operations
pub type Result<T> = std::result::Result<T, ShortcutError>;

impl ShortcutError {
    /// Stable process exit code for this error kind.
    ///
    /// 0 and 1 are left to success and lookup misses.
    pub fn exit_code(&self) -> i32 {
        match self {
            ShortcutError::DirectoryCreation { .. } => 3,
            ShortcutError::InvalidName { .. } => 4,
            ShortcutError::DuplicateName { .. } => 5,
            ShortcutError::NotFound { .. } => 6,
            ShortcutError::Arity { .. } => 7,
            ShortcutError::CorruptStore { .. } => 8,
            ShortcutError::Persistence { .. } => 9,
        }
    }

    pub(crate) fn persistence(path: impl Into<PathBuf>, scope: Scope, source: std::io::Error) -> Self {
        Self::Persistence {
            path: path.into(),
            scope,
            source,
        }
    }
}
