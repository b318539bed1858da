//! Shell configuration.
//!
//! The interpreter core has no configuration of its own; everything here
//! tunes the interactive shell around it. Loaded from an optional
//! `devcon.toml`; a missing file means defaults.

use std::path::Path;

use serde::Deserialize;

use crate::error::Result;

/// Configuration for the interactive shell.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    /// Prompt printed before each input line.
    pub prompt: String,
    /// Maximum number of recalled input lines.
    pub history_limit: usize,
    /// File the recall buffer is persisted to.
    pub history_path: String,
    /// Maximum number of autocomplete suggestions shown.
    pub max_suggestions: usize,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            prompt: "> ".to_string(),
            history_limit: 30,
            history_path: ".devcon_history".to_string(),
            max_suggestions: 10,
        }
    }
}

impl ShellConfig {
    /// Parse a configuration from TOML text.
    pub fn from_toml_str(text: &str) -> Result<Self> {
        Ok(toml::from_str(text)?)
    }

    /// Load a configuration file, falling back to defaults when the file
    /// does not exist. A file that exists but fails to parse is an error.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text)
    }
}
