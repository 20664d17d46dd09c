use crate::error::{Result, ThreadzError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for threadz, stored next to the data slots in config.json
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct ThreadzConfig {
    /// Show creation times when listing comments
    #[serde(default)]
    pub show_timestamps: bool,
}

impl ThreadzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ThreadzError::Io)?;
        let config: ThreadzConfig =
            serde_json::from_str(&content).map_err(ThreadzError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ThreadzError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ThreadzError::Serialization)?;
        fs::write(config_path, content).map_err(ThreadzError::Io)?;
        Ok(())
    }

    pub fn exists<P: AsRef<Path>>(config_dir: P) -> bool {
        config_dir.as_ref().join(CONFIG_FILENAME).exists()
    }

    /// Value of a config key as shown to the user
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            SHOW_TIMESTAMPS_KEY => Some(self.show_timestamps.to_string()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        match key {
            SHOW_TIMESTAMPS_KEY => {
                self.show_timestamps = parse_flag(value)?;
                Ok(())
            }
            other => Err(format!("Unknown config key: {}", other)),
        }
    }

    pub fn keys() -> &'static [&'static str] {
        &[SHOW_TIMESTAMPS_KEY]
    }
}

pub const SHOW_TIMESTAMPS_KEY: &str = "show-timestamps";

/// Parses the boolean spellings accepted on the command line.
fn parse_flag(value: &str) -> std::result::Result<bool, String> {
    match value.trim().to_ascii_lowercase().as_str() {
        "true" | "on" | "yes" | "1" => Ok(true),
        "false" | "off" | "no" | "0" => Ok(false),
        other => Err(format!("Expected true/false, got: {}", other)),
    }
}
