//! Shortcut persistence, one store per scope
//!
//! A store owns the full name -> record mapping of a single scope. Every
//! mutation is a whole-mapping read-modify-write: load, change, save.

mod file;
mod memory;

pub use file::{FileStore, FileStores, STORE_FILE_NAME};
pub use memory::{MemoryStore, MemoryStores};

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::domain::{validate_name, ResolvedScope, Scope, Shortcut};
use crate::error::{Result, ShortcutError};

/// On-disk form of a shortcut; the name is the mapping key
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortcutRecord {
    pub command: String,

    /// Hand-written entries without timestamps load as the Unix epoch
    #[serde(default)]
    pub created_at: DateTime<Utc>,

    #[serde(default)]
    pub updated_at: DateTime<Utc>,
}

impl ShortcutRecord {
    /// Build the full shortcut for a record stored under `name` in `scope`
    pub fn to_shortcut(&self, name: &str, scope: Scope) -> Shortcut {
        Shortcut {
            name: name.to_string(),
            command: self.command.clone(),
            scope,
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Name-ordered contents of one store
pub type ShortcutMap = BTreeMap<String, ShortcutRecord>;

/// Durable CRUD over one scope's mapping.
///
/// Implementors provide `load` and `save`; the mutating operations are
/// provided on top of them.
pub trait ShortcutStore {
    /// The scope this store persists
    fn scope(&self) -> Scope;

    /// Where the store lives, for messages
    fn location(&self) -> &Path;

    /// Read the full mapping. A store that was never written is empty.
    fn load(&self) -> Result<ShortcutMap>;

    /// Replace the full mapping.
    fn save(&self, map: &ShortcutMap) -> Result<()>;

    /// Make sure `save` can succeed, e.g. by creating the parent directory.
    ///
    /// Callers invoke this before the first write; `save` itself never
    /// creates anything besides the store file.
    fn prepare(&self) -> Result<()> {
        Ok(())
    }

    /// Look up a single shortcut
    fn get(&self, name: &str) -> Result<Option<Shortcut>> {
        Ok(self
            .load()?
            .get(name)
            .map(|record| record.to_shortcut(name, self.scope())))
    }

    /// Define a new shortcut
    fn add(&self, name: &str, command: &str) -> Result<Shortcut> {
        validate_name(name, self.scope())?;

        let mut map = self.load()?;
        if map.contains_key(name) {
            return Err(ShortcutError::DuplicateName {
                name: name.to_string(),
                scope: self.scope(),
            });
        }

        let now = Utc::now();
        let record = ShortcutRecord {
            command: command.to_string(),
            created_at: now,
            updated_at: now,
        };
        let shortcut = record.to_shortcut(name, self.scope());
        map.insert(name.to_string(), record);
        self.save(&map)?;

        info!("Added {} shortcut '{}'", self.scope(), name);
        Ok(shortcut)
    }

    /// Delete a shortcut, returning what was removed
    fn remove(&self, name: &str) -> Result<Shortcut> {
        let mut map = self.load()?;
        let Some(record) = map.remove(name) else {
            return Err(ShortcutError::NotFound {
                name: name.to_string(),
                scope: self.scope(),
            });
        };
        self.save(&map)?;

        info!("Removed {} shortcut '{}'", self.scope(), name);
        Ok(record.to_shortcut(name, self.scope()))
    }

    /// Replace the command of an existing shortcut
    fn update(&self, name: &str, command: &str) -> Result<Shortcut> {
        let mut map = self.load()?;
        let Some(record) = map.get_mut(name) else {
            return Err(ShortcutError::NotFound {
                name: name.to_string(),
                scope: self.scope(),
            });
        };

        record.command = command.to_string();
        record.updated_at = Utc::now();
        let shortcut = record.to_shortcut(name, self.scope());
        self.save(&map)?;

        info!("Updated {} shortcut '{}'", self.scope(), name);
        Ok(shortcut)
    }
}

/// Opens the store backing a resolved scope.
///
/// The registry never reaches for a global store itself; whatever provider it
/// is built with decides where shortcuts live.
pub trait StoreProvider {
    fn open(&self, scope: &ResolvedScope) -> Box<dyn ShortcutStore>;
}
