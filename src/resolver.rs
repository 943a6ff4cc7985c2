//! Scope resolution
//!
//! Decides which scopes are active for an invocation:
//! 1. Global: always, stored in the global directory (lower priority)
//! 2. Local: when a marker directory exists at or above the working
//!    directory (higher priority, shadows global)
//!
//! Resolution only probes the filesystem; it never creates anything.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::config::Config;
use crate::domain::{ResolvedScope, Scope};

/// The invocation context a lookup is evaluated in
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    /// Working directory of the invocation
    pub cwd: PathBuf,
}

impl Context {
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        let cwd = cwd.into();
        let cwd = std::path::absolute(&cwd).unwrap_or(cwd);
        Self { cwd }
    }

    /// Context for the process's current directory
    pub fn current() -> std::io::Result<Self> {
        Ok(Self::new(std::env::current_dir()?))
    }
}

/// Finds the active scopes and their store directories
#[derive(Debug, Clone)]
pub struct ScopeResolver {
    /// Directory of the global store
    global_dir: PathBuf,
    /// Marker directory name for local scopes (e.g. `.shorts`)
    marker: String,
}

impl ScopeResolver {
    pub fn new(global_dir: impl Into<PathBuf>, marker: impl Into<String>) -> Self {
        Self {
            global_dir: global_dir.into(),
            marker: marker.into(),
        }
    }

    /// Create a resolver using the configured marker directory name
    pub fn from_config(global_dir: impl Into<PathBuf>, config: &Config) -> Self {
        Self::new(global_dir, config.settings.marker_dir.clone())
    }

    pub fn global_dir(&self) -> &Path {
        &self.global_dir
    }

    pub fn marker(&self) -> &str {
        &self.marker
    }

    /// Find the nearest local marker directory at or above `context.cwd`.
    ///
    /// The global directory never counts as a local marker, even when a
    /// project lives below the directory holding it.
    pub fn find_local(&self, context: &Context) -> Option<PathBuf> {
        context
            .cwd
            .ancestors()
            .map(|dir| dir.join(&self.marker))
            .find(|candidate| candidate.is_dir() && !same_dir(candidate, &self.global_dir))
    }

    /// Active scopes for `context`, most specific last
    pub fn resolve(&self, context: &Context) -> Vec<ResolvedScope> {
        let mut scopes = vec![ResolvedScope::new(Scope::Global, &self.global_dir)];

        match self.find_local(context) {
            Some(dir) => {
                debug!("Local scope active at {}", dir.display());
                scopes.push(ResolvedScope::new(Scope::Local, dir));
            }
            None => debug!("No local scope above {}", context.cwd.display()),
        }

        scopes
    }

    /// The directory operations on `scope` address from `context`.
    ///
    /// For local scope this is the discovered marker, or a marker directly in
    /// the working directory when none exists yet (created on first write).
    /// `None` when that fallback marker would be the global directory itself,
    /// as happens when working in the directory that holds it.
    pub fn target(&self, scope: Scope, context: &Context) -> Option<ResolvedScope> {
        match scope {
            Scope::Global => Some(ResolvedScope::new(Scope::Global, &self.global_dir)),
            Scope::Local => {
                let dir = match self.find_local(context) {
                    Some(dir) => dir,
                    None => {
                        let fallback = context.cwd.join(&self.marker);
                        if self.is_global_dir(&fallback) {
                            debug!("No local scope at {}: global directory", fallback.display());
                            return None;
                        }
                        fallback
                    }
                };
                Some(ResolvedScope::new(Scope::Local, dir))
            }
        }
    }

    /// Whether `dir` is the global store directory
    pub fn is_global_dir(&self, dir: &Path) -> bool {
        same_dir(dir, &self.global_dir)
    }
}

/// Compare directories by identity when both exist, by path otherwise
fn same_dir(a: &Path, b: &Path) -> bool {
    match (a.canonicalize(), b.canonicalize()) {
        (Ok(a), Ok(b)) => a == b,
        _ => a == b,
    }
}
