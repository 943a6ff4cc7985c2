//! YAML file backed store

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use fs2::FileExt;
use tracing::debug;

use super::{ShortcutMap, ShortcutStore, StoreProvider};
use crate::domain::{ResolvedScope, Scope};
use crate::error::{Result, ShortcutError};
use crate::fsutil::ensure_directory;

/// File name of the store inside a scope directory
pub const STORE_FILE_NAME: &str = "shortcuts.yaml";

/// Store persisted as `<dir>/shortcuts.yaml`
#[derive(Debug, Clone)]
pub struct FileStore {
    scope: Scope,
    dir: PathBuf,
    path: PathBuf,
}

impl FileStore {
    pub fn new(scope: Scope, dir: impl Into<PathBuf>) -> Self {
        let dir = dir.into();
        let path = dir.join(STORE_FILE_NAME);
        Self { scope, dir, path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        self.path.with_extension("yaml.tmp")
    }

    fn lock_path(&self) -> PathBuf {
        self.path.with_extension("yaml.lock")
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> ShortcutError {
        ShortcutError::persistence(path, self.scope, source)
    }

    /// Write serialized content to the temp file and flush it to disk.
    ///
    /// Nothing a reader sees changes until `commit` renames it into place.
    fn write_temp(&self, content: &str) -> Result<PathBuf> {
        let temp_path = self.temp_path();
        let mut temp_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&temp_path)
            .map_err(|e| self.io_error(&temp_path, e))?;

        temp_file
            .write_all(content.as_bytes())
            .map_err(|e| self.io_error(&temp_path, e))?;
        temp_file
            .sync_all()
            .map_err(|e| self.io_error(&temp_path, e))?;

        Ok(temp_path)
    }

    fn commit(&self, temp_path: &Path) -> Result<()> {
        std::fs::rename(temp_path, &self.path).map_err(|e| self.io_error(&self.path, e))
    }
}

impl ShortcutStore for FileStore {
    fn scope(&self) -> Scope {
        self.scope
    }

    fn location(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> Result<ShortcutMap> {
        let content = match std::fs::read_to_string(&self.path) {
            Ok(content) => content,
            // A store that was never written, possibly not even its directory
            Err(e)
                if matches!(
                    e.kind(),
                    std::io::ErrorKind::NotFound | std::io::ErrorKind::NotADirectory
                ) =>
            {
                debug!("No {} store at {}, starting empty", self.scope, self.path.display());
                return Ok(ShortcutMap::new());
            }
            Err(e) => return Err(self.io_error(&self.path, e)),
        };

        if self.temp_path().exists() {
            debug!(
                "Ignoring leftover temp file {} (interrupted or concurrent write)",
                self.temp_path().display()
            );
        }

        if content.trim().is_empty() {
            return Ok(ShortcutMap::new());
        }

        let map: ShortcutMap =
            serde_yaml::from_str(&content).map_err(|source| ShortcutError::CorruptStore {
                path: self.path.clone(),
                scope: self.scope,
                source,
            })?;

        debug!("Loaded {} shortcut(s) from {}", map.len(), self.path.display());
        Ok(map)
    }

    /// Save with atomic write and file locking.
    ///
    /// 1. Exclusive lock on a sibling lock file serializes concurrent writers
    /// 2. Temp file + fsync + rename means a crash never corrupts the old state
    /// 3. The parent directory must already exist (see `prepare`)
    fn save(&self, map: &ShortcutMap) -> Result<()> {
        let content = serde_yaml::to_string(map)
            .map_err(|e| self.io_error(&self.path, std::io::Error::other(e)))?;

        // Lock file is separate from the store so the rename never touches it
        let lock_path = self.lock_path();
        let lock_file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(true)
            .open(&lock_path)
            .map_err(|e| self.io_error(&lock_path, e))?;

        lock_file
            .lock_exclusive()
            .map_err(|e| self.io_error(&lock_path, e))?;

        let temp_path = self.write_temp(&content)?;
        self.commit(&temp_path)?;

        debug!("Saved {} shortcut(s) to {}", map.len(), self.path.display());
        // Lock is released when lock_file is dropped
        Ok(())
    }

    fn prepare(&self) -> Result<()> {
        ensure_directory(&self.dir, self.scope)
    }
}

/// Provider opening a `FileStore` in each resolved scope's directory
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStores;

impl StoreProvider for FileStores {
    fn open(&self, scope: &ResolvedScope) -> Box<dyn ShortcutStore> {
        Box::new(FileStore::new(scope.scope, &scope.dir))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn prepared_store(temp: &TempDir) -> FileStore {
        let store = FileStore::new(Scope::Global, temp.path().join(".shorts"));
        store.prepare().unwrap();
        store
    }

    #[test]
    fn test_missing_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(Scope::Global, temp.path().join("nowhere"));

        assert!(store.load().unwrap().is_empty());
        // Probing must not create anything
        assert!(!temp.path().join("nowhere").exists());
    }

    #[test]
    fn test_empty_file_loads_empty() {
        let temp = TempDir::new().unwrap();
        let store = prepared_store(&temp);
        std::fs::write(store.path(), "\n").unwrap();

        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let temp = TempDir::new().unwrap();
        let store = prepared_store(&temp);

        store.add("greet", "echo hello %1").unwrap();
        store.add("deploy", "git push %@").unwrap();
        let before = store.load().unwrap();

        let reopened = FileStore::new(Scope::Global, temp.path().join(".shorts"));
        assert_eq!(reopened.load().unwrap(), before);
        assert!(!store.temp_path().exists());
    }

    #[test]
    fn test_file_is_human_editable_yaml() {
        let temp = TempDir::new().unwrap();
        let store = prepared_store(&temp);
        std::fs::write(store.path(), "ll:\n  command: ls -la\n").unwrap();

        let shortcut = store.get("ll").unwrap().unwrap();
        assert_eq!(shortcut.command, "ls -la");

        store.update("ll", "ls -lah").unwrap();
        let content = std::fs::read_to_string(store.path()).unwrap();
        assert!(content.contains("ll:"));
        assert!(content.contains("command: ls -lah"));
        assert!(content.contains("updated_at:"));
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let temp = TempDir::new().unwrap();
        let store = prepared_store(&temp);
        std::fs::write(store.path(), "just: [unclosed").unwrap();

        match store.load().unwrap_err() {
            ShortcutError::CorruptStore { path, scope, .. } => {
                assert_eq!(path, store.path());
                assert_eq!(scope, Scope::Global);
            }
            other => panic!("expected CorruptStore, got {other:?}"),
        }

        // A failed load must not be "repaired" by a write
        assert!(store.add("x", "y").is_err());
        assert_eq!(std::fs::read_to_string(store.path()).unwrap(), "just: [unclosed");
    }

    #[test]
    fn test_save_without_directory_fails() {
        let temp = TempDir::new().unwrap();
        let store = FileStore::new(Scope::Local, temp.path().join("absent"));

        let err = store.add("x", "echo").unwrap_err();
        assert!(matches!(err, ShortcutError::Persistence { scope: Scope::Local, .. }));
        assert!(!temp.path().join("absent").exists());
    }

    #[test]
    fn test_crash_before_rename_keeps_previous_state() {
        let temp = TempDir::new().unwrap();
        let store = prepared_store(&temp);
        store.add("keep", "echo kept").unwrap();
        let before = store.load().unwrap();

        // Simulate a crash after the temp write but before the rename
        let mut next = before.clone();
        next.insert("lost".to_string(), before["keep"].clone());
        let content = serde_yaml::to_string(&next).unwrap();
        store.write_temp(&content[..content.len() / 2]).unwrap();

        assert_eq!(store.load().unwrap(), before);

        // Recovery: the next write replaces the stale temp file
        store.add("after", "echo after").unwrap();
        let after = store.load().unwrap();
        assert_eq!(after.len(), 2);
        assert!(!store.temp_path().exists());
    }
}
