use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Scope;
use crate::error::{Result, ShortcutError};

/// A named alias for a parametrized shell command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Shortcut {
    /// Identifier, unique within its scope
    pub name: String,

    /// Command template (`%1`, `%2`, ... positional, `%@` remaining, `%%` literal)
    pub command: String,

    /// Where the shortcut is persisted
    pub scope: Scope,

    /// Set by the store when the shortcut is first written
    pub created_at: DateTime<Utc>,

    /// Re-stamped by the store on every update
    pub updated_at: DateTime<Utc>,
}

/// Check that `name` is a valid identifier for a shortcut in `scope`.
///
/// Names are non-empty, made of ASCII alphanumerics, `-` and `_`, and must not
/// start with a digit.
pub fn validate_name(name: &str, scope: Scope) -> Result<()> {
    let invalid = |reason| ShortcutError::InvalidName {
        name: name.to_string(),
        scope,
        reason,
    };

    let Some(first) = name.chars().next() else {
        return Err(invalid("name must not be empty"));
    };
    if first.is_ascii_digit() {
        return Err(invalid("name must not start with a digit"));
    }
    if !name
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(invalid("only ASCII letters, digits, '-' and '_' are allowed"));
    }

    Ok(())
}
