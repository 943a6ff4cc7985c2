//! Shortcut registry
//!
//! The single entry point callers use. Composes the scope resolver with
//! whatever store provider it was built with:
//! - lookups merge every active scope, local shadowing global
//! - writes always address one explicit scope

mod template;

pub use template::{expand, max_placeholder};

use std::collections::BTreeMap;
use std::path::PathBuf;

use tracing::debug;

use crate::config::Config;
use crate::domain::{validate_name, ResolvedScope, Scope, Shortcut};
use crate::error::{Result, ShortcutError};
use crate::resolver::{Context, ScopeResolver};
use crate::store::{FileStores, ShortcutStore, StoreProvider};

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// Outcome of a lookup. A miss is an ordinary result, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Lookup {
    Found(Shortcut),
    Miss {
        name: String,
        /// Similar visible names, best match first
        suggestions: Vec<String>,
    },
}

impl Lookup {
    pub fn found(self) -> Option<Shortcut> {
        match self {
            Lookup::Found(shortcut) => Some(shortcut),
            Lookup::Miss { .. } => None,
        }
    }

    pub fn is_miss(&self) -> bool {
        matches!(self, Lookup::Miss { .. })
    }
}

/// Shortcut registry over an injected store provider
pub struct Registry<P = FileStores> {
    resolver: ScopeResolver,
    provider: P,
    suggestions: usize,
}

impl Registry<FileStores> {
    /// Registry over YAML file stores, configured from `config`
    pub fn open(global_dir: impl Into<PathBuf>, config: &Config) -> Self {
        Registry::with_provider(ScopeResolver::from_config(global_dir, config), FileStores)
            .with_suggestions(config.settings.suggestions)
    }
}

impl<P: StoreProvider> Registry<P> {
    pub fn with_provider(resolver: ScopeResolver, provider: P) -> Self {
        Self {
            resolver,
            provider,
            suggestions: 3,
        }
    }

    /// Limit "did you mean" suggestions on a miss (0 disables them)
    pub fn with_suggestions(mut self, limit: usize) -> Self {
        self.suggestions = limit;
        self
    }

    pub fn resolver(&self) -> &ScopeResolver {
        &self.resolver
    }

    /// Active scopes for `context`, most specific last
    pub fn scopes(&self, context: &Context) -> Vec<ResolvedScope> {
        self.resolver.resolve(context)
    }

    /// Store addressed by writes to `scope`, `None` when that scope cannot
    /// exist at `context` (no local scope in the global directory's parent)
    fn store_for(&self, scope: Scope, context: &Context) -> Option<Box<dyn ShortcutStore>> {
        self.resolver
            .target(scope, context)
            .map(|target| self.provider.open(&target))
    }

    /// Effective namespace: every active scope merged in override order
    fn namespace(&self, context: &Context) -> Result<BTreeMap<String, Shortcut>> {
        let mut merged = BTreeMap::new();
        for resolved in self.resolver.resolve(context) {
            let store = self.provider.open(&resolved);
            for (name, record) in store.load()? {
                let shortcut = record.to_shortcut(&name, resolved.scope);
                // Later scopes overwrite earlier ones
                merged.insert(name, shortcut);
            }
        }
        Ok(merged)
    }

    /// Resolve `name` in the effective namespace of `context`
    pub fn lookup(&self, name: &str, context: &Context) -> Result<Lookup> {
        let mut namespace = self.namespace(context)?;

        if let Some(shortcut) = namespace.remove(name) {
            debug!("Resolved '{}' from {} scope", name, shortcut.scope);
            return Ok(Lookup::Found(shortcut));
        }

        Ok(Lookup::Miss {
            name: name.to_string(),
            suggestions: self.suggest(name, namespace.keys()),
        })
    }

    fn suggest<'a>(&self, name: &str, candidates: impl Iterator<Item = &'a String>) -> Vec<String> {
        if self.suggestions == 0 {
            return Vec::new();
        }

        let mut scored: Vec<(f64, &String)> = candidates
            .map(|candidate| (strsim::jaro_winkler(name, candidate), candidate))
            .filter(|(score, _)| *score >= SUGGESTION_THRESHOLD)
            .collect();
        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| a.1.cmp(b.1)));

        scored
            .into_iter()
            .take(self.suggestions)
            .map(|(_, candidate)| candidate.clone())
            .collect()
    }

    /// Substitute `args` into the shortcut's command template
    pub fn expand(&self, shortcut: &Shortcut, args: &[String]) -> Result<String> {
        template::expand(shortcut, args)
    }

    /// Define `name` in `scope`.
    ///
    /// Unless `shadow` is set, the name must not be visible from `context` in
    /// any scope, so a global shortcut is never hidden by accident. Even with
    /// `shadow`, the target scope itself must not already define it.
    pub fn create(
        &self,
        name: &str,
        command: &str,
        scope: Scope,
        context: &Context,
        shadow: bool,
    ) -> Result<Shortcut> {
        validate_name(name, scope)?;

        for resolved in self.resolver.resolve(context) {
            if resolved.scope != scope && shadow {
                continue;
            }
            if self.provider.open(&resolved).get(name)?.is_some() {
                return Err(ShortcutError::DuplicateName {
                    name: name.to_string(),
                    scope: resolved.scope,
                });
            }
        }

        let Some(store) = self.store_for(scope, context) else {
            let marker = context.cwd.join(self.resolver.marker());
            return Err(ShortcutError::DirectoryCreation {
                source: std::io::Error::new(
                    std::io::ErrorKind::AlreadyExists,
                    "this is the global store directory",
                ),
                path: marker,
                scope,
            });
        };
        // Ensure the scope directory exists before the first write
        store.prepare()?;
        store.add(name, command)
    }

    /// Replace the command of `name` in exactly `scope`
    pub fn update(
        &self,
        name: &str,
        command: &str,
        scope: Scope,
        context: &Context,
    ) -> Result<Shortcut> {
        match self.store_for(scope, context) {
            Some(store) => store.update(name, command),
            None => Err(not_found(name, scope)),
        }
    }

    /// Delete `name` from exactly `scope`; a shortcut it shadowed stays
    pub fn delete(&self, name: &str, scope: Scope, context: &Context) -> Result<Shortcut> {
        match self.store_for(scope, context) {
            Some(store) => store.remove(name),
            None => Err(not_found(name, scope)),
        }
    }

    /// Snapshot of the effective namespace, sorted by name
    pub fn list(&self, context: &Context) -> Result<Vec<Shortcut>> {
        Ok(self.namespace(context)?.into_values().collect())
    }

    /// Raw contents of one scope, including shortcuts shadowed in the
    /// effective namespace
    pub fn list_scope(&self, scope: Scope, context: &Context) -> Result<Vec<Shortcut>> {
        let Some(store) = self.store_for(scope, context) else {
            return Ok(Vec::new());
        };
        Ok(store
            .load()?
            .iter()
            .map(|(name, record)| record.to_shortcut(name, scope))
            .collect())
    }
}

fn not_found(name: &str, scope: Scope) -> ShortcutError {
    ShortcutError::NotFound {
        name: name.to_string(),
        scope,
    }
}
