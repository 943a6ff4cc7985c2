//! shorts - a CLI shortcut manager
//!
//! Define named shortcuts for shell commands, persist them, and resolve or run
//! them by name later. Shortcuts live in one of two scopes:
//!
//! 1. **Global**: `~/.shorts/shortcuts.yaml` (or `$SHORTS_HOME`), visible everywhere
//! 2. **Local**: `<project>/.shorts/shortcuts.yaml`, visible at or below the
//!    project directory, shadowing global shortcuts of the same name
//!
//! Command templates take positional placeholders (`%1`, `%2`, ...), a
//! remaining-arguments placeholder (`%@`) and `%%` for a literal percent sign.

pub mod config;
pub mod domain;
pub mod error;
pub mod fsutil;
pub mod registry;
pub mod resolver;
pub mod store;

pub use config::{Config, Settings};
pub use domain::{ResolvedScope, Scope, Shortcut};
pub use error::{Result, ShortcutError};
pub use registry::{Lookup, Registry};
pub use resolver::{Context, ScopeResolver};
pub use store::{FileStore, FileStores, MemoryStores, ShortcutStore, StoreProvider};
