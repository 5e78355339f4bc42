use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Result};
use serde::{Deserialize, Serialize};

/// Editor configuration
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Config {
    /// General editor settings
    #[serde(default)]
    pub editor: EditorConfig,
}

/// Editor settings
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EditorConfig {
    /// Key that starts a leader sequence
    #[serde(default = "default_leader_key")]
    pub leader_key: char,

    /// Gutter shows distances from the cursor row instead of absolute
    /// line numbers
    #[serde(default = "default_relative_line_numbers")]
    pub relative_line_numbers: bool,

    /// Maximum number of ranked results the palette keeps
    #[serde(default = "default_palette_limit")]
    pub palette_limit: usize,
}

// Default values
fn default_leader_key() -> char {
    ' '
}
fn default_relative_line_numbers() -> bool {
    true
}
fn default_palette_limit() -> usize {
    50
}

impl Default for Config {
    fn default() -> Self {
        Self {
            editor: EditorConfig::default(),
        }
    }
}

impl Default for EditorConfig {
    fn default() -> Self {
        Self {
            leader_key: default_leader_key(),
            relative_line_numbers: default_relative_line_numbers(),
            palette_limit: default_palette_limit(),
        }
    }
}

/// Configuration manager
pub struct ConfigManager {
    /// The config
    config: Config,

    /// The path to the config file
    config_path: PathBuf,
}

impl ConfigManager {
    /// Create a new config manager
    pub fn new(config_dir: &Path) -> Self {
        let config_path = config_dir.join("config.json");

        Self {
            config: Config::default(),
            config_path,
        }
    }

    /// Load the config. A missing file is not an error; defaults apply.
    pub fn load(&mut self) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            if !parent.exists() {
                fs::create_dir_all(parent)?;
            }
        }

        if self.config_path.exists() {
            let config_str = fs::read_to_string(&self.config_path)?;
            self.config = serde_json::from_str(&config_str)
                .map_err(|e| anyhow!("Failed to parse config: {}", e))?;
        }

        Ok(())
    }

    /// Save the config
    pub fn save(&self) -> Result<()> {
        let config_str = serde_json::to_string_pretty(&self.config)?;
        fs::write(&self.config_path, config_str)?;
        Ok(())
    }

    /// Get the config
    pub fn get_config(&self) -> &Config {
        &self.config
    }

    /// Get a mutable reference to the config
    pub fn get_config_mut(&mut self) -> &mut Config {
        &mut self.config
    }
}
