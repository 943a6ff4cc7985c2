//! In-memory store, for tests and embedding

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, PoisonError};

use super::{ShortcutMap, ShortcutStore, StoreProvider};
use crate::domain::{ResolvedScope, Scope};
use crate::error::Result;

type Backend = Arc<Mutex<HashMap<PathBuf, ShortcutMap>>>;

/// Store whose mapping lives in a shared in-memory table keyed by directory
#[derive(Debug, Clone)]
pub struct MemoryStore {
    scope: Scope,
    dir: PathBuf,
    backend: Backend,
}

impl ShortcutStore for MemoryStore {
    fn scope(&self) -> Scope {
        self.scope
    }

    fn location(&self) -> &Path {
        &self.dir
    }

    fn load(&self) -> Result<ShortcutMap> {
        let tables = self.backend.lock().unwrap_or_else(PoisonError::into_inner);
        Ok(tables.get(&self.dir).cloned().unwrap_or_default())
    }

    fn save(&self, map: &ShortcutMap) -> Result<()> {
        let mut tables = self.backend.lock().unwrap_or_else(PoisonError::into_inner);
        tables.insert(self.dir.clone(), map.clone());
        Ok(())
    }
}

/// Provider handing out `MemoryStore`s that share one backend.
///
/// Clones share state, so a test can keep a handle and inspect what the
/// registry wrote.
#[derive(Debug, Clone, Default)]
pub struct MemoryStores {
    backend: Backend,
}

impl MemoryStores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether anything was ever saved for `dir`
    pub fn contains(&self, dir: &Path) -> bool {
        self.backend
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(dir)
    }
}

impl StoreProvider for MemoryStores {
    fn open(&self, scope: &ResolvedScope) -> Box<dyn ShortcutStore> {
        Box::new(MemoryStore {
            scope: scope.scope,
            dir: scope.dir.clone(),
            backend: Arc::clone(&self.backend),
        })
    }
}
