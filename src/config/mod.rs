//! Configuration loading and management

mod io;
mod settings;

pub use io::HOME_ENV;
pub use settings::Settings;

use serde::{Deserialize, Serialize};

/// Main configuration structure, read from `<global dir>/config.toml`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// General settings
    #[serde(default)]
    pub settings: Settings,
}
