//! Core domain types for shorts

mod scope;
mod shortcut;

pub use scope::{ResolvedScope, Scope};
pub use shortcut::{validate_name, Shortcut};
