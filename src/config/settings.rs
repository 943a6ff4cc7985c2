//! Settings configuration types

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

/// General settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Shell used to execute expanded shortcuts (`<shell> -c <command>`)
    #[serde(default = "default_shell")]
    pub shell: String,

    /// Name of the directory marking a local (project) scope
    #[serde(default = "default_marker_dir")]
    pub marker_dir: String,

    /// Maximum number of "did you mean" names offered on a lookup miss.
    /// Set to 0 to disable suggestions.
    #[serde(default = "default_suggestions")]
    pub suggestions: usize,
}

fn default_shell() -> String {
    "sh".to_string()
}

fn default_marker_dir() -> String {
    ".shorts".to_string()
}

fn default_suggestions() -> usize {
    3
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            shell: default_shell(),
            marker_dir: default_marker_dir(),
            suggestions: default_suggestions(),
        }
    }
}

impl Settings {
    /// Reject values that would make scope discovery or execution misbehave
    pub fn validate(&self) -> Result<()> {
        if self.shell.trim().is_empty() {
            bail!("settings.shell must not be empty");
        }
        if self.marker_dir.is_empty()
            || self.marker_dir == "."
            || self.marker_dir == ".."
            || self.marker_dir.contains(['/', '\\'])
        {
            bail!(
                "settings.marker_dir must be a plain directory name, got '{}'",
                self.marker_dir
            );
        }
        Ok(())
    }
}
