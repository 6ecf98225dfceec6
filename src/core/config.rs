//! User configuration for the status command.
//!
//! Read from `config.json` in the gstatus config directory (see
//! [`crate::core::dirs`]) or from an explicit `--config` path. Every field is
//! optional; missing ones take their defaults. The prompt path never writes
//! the file.

use crate::core::dirs::get_config_file;
use crate::core::error::{GstatusError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Executable run when no status lines are piped in
    pub git_command: String,
    pub status_args: Vec<String>,
    /// How long `--input auto` waits for piped data before running git
    pub stdin_wait_ms: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            git_command: "git".to_string(),
            status_args: vec![
                "status".to_string(),
                "--porcelain".to_string(),
                "--branch".to_string(),
            ],
            stdin_wait_ms: 100,
        }
    }
}

impl Config {
    /// Load from `explicit` when given, otherwise from the default location.
    ///
    /// Only a missing default file falls back to [`Config::default`]; a missing
    /// explicit file is an error.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        let config_file = get_config_file()?;
        if config_file.exists() {
            Self::load_from(&config_file)
        } else {
            log::debug!("No config at {}, using defaults", config_file.display());
            Ok(Self::default())
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content =
            fs::read_to_string(path).map_err(|e| GstatusError::config_read_failed(path, e))?;
        serde_json::from_str(&content).map_err(|e| GstatusError::config_parse_failed(path, e))
    }

    /// The status command as it would be typed, for logs and errors.
    pub fn command_line(&self) -> String {
        let mut parts = vec![self.git_command.as_str()];
        parts.extend(self.status_args.iter().map(String::as_str));
        parts.join(" ")
    }
}
