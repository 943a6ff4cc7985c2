use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// The namespace layer a shortcut is persisted in
///
/// Variant order is the override order: a later scope shadows an earlier one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// User-wide shortcuts (~/.shorts)
    #[default]
    Global,
    /// Project shortcuts, active below a `.shorts` marker directory
    Local,
}

impl Scope {
    /// All scopes in override order, least specific first
    pub const ALL: [Scope; 2] = [Scope::Global, Scope::Local];

    /// Parse a scope from a string (supports short aliases)
    /// - global: g, glob, global, user
    /// - local: l, loc, local, project
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "g" | "glob" | "global" | "user" => Some(Scope::Global),
            "l" | "loc" | "local" | "project" => Some(Scope::Local),
            _ => None,
        }
    }

    /// Get the canonical string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Scope::Global => "global",
            Scope::Local => "local",
        }
    }
}

impl std::fmt::Display for Scope {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A scope that is active for an invocation, together with the directory
/// holding its store
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedScope {
    /// The scope layer
    pub scope: Scope,

    /// Directory containing the scope's backing file
    pub dir: PathBuf,
}

impl ResolvedScope {
    pub fn new(scope: Scope, dir: impl Into<PathBuf>) -> Self {
        Self {
            scope,
            dir: dir.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scope_from_str_aliases() {
        assert_eq!(Scope::from_str("g"), Some(Scope::Global));
        assert_eq!(Scope::from_str("GLOBAL"), Some(Scope::Global));
        assert_eq!(Scope::from_str("loc"), Some(Scope::Local));
        assert_eq!(Scope::from_str("project"), Some(Scope::Local));
        assert_eq!(Scope::from_str("system"), None);
    }

    #[test]
    fn test_override_order() {
        assert!(Scope::Global < Scope::Local);
        assert_eq!(Scope::ALL, [Scope::Global, Scope::Local]);
    }
}
