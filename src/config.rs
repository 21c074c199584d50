use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

use crate::utils;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Location of the entry store; `~` is expanded at use
    #[serde(default)]
    pub database_path: String,
    /// chrono format string used when rendering entry dates in the table
    #[serde(default = "default_date_format")]
    pub date_format: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database_path: String::new(),
            date_format: default_date_format(),
        }
    }
}

// Default value functions
fn default_date_format() -> String {
    // Renders 2024-01-05 as "Jan 5, 2024"
    "%b %-d, %Y".to_string()
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config directory: {0}")]
    ConfigDirError(String),
    #[error("Failed to read config file: {0}")]
    ReadError(String),
    #[error("Failed to parse TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Failed to write config file: {0}")]
    WriteError(String),
}

impl Config {
    /// Load configuration from file, or create default if missing
    /// Uses the provided profile to determine config and database paths
    pub fn load_with_profile(profile: utils::Profile) -> Result<Self, ConfigError> {
        let config_path = Self::get_config_path(profile)?;

        if config_path.exists() {
            let contents = fs::read_to_string(&config_path)
                .map_err(|e| ConfigError::ReadError(e.to_string()))?;
            let mut config: Config = toml::from_str(&contents)?;

            // An unset database path falls back to the profile's data dir
            if config.database_path.is_empty() {
                config.database_path = Self::default_database_path_for_profile(profile);
            }

            Ok(config)
        } else {
            // Create default config and save it
            let mut config = Config::default();
            config.database_path = Self::default_database_path_for_profile(profile);
            let save_result = config.save_with_profile(profile);
            if let Err(ref e) = save_result {
                eprintln!("ERROR: Failed to save config file: {}", e);
                eprintln!("Config path: {:?}", config_path);
            }
            save_result?;
            Ok(config)
        }
    }

    /// Load configuration from file, using production profile
    /// Use load_with_profile() to specify a different profile
    pub fn load() -> Result<Self, ConfigError> {
        Self::load_with_profile(utils::Profile::Prod)
    }

    /// Save configuration to file
    pub fn save_with_profile(&self, profile: utils::Profile) -> Result<(), ConfigError> {
        let config_path = Self::get_config_path(profile)?;

        // Create parent directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| ConfigError::WriteError(e.to_string()))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| ConfigError::WriteError(format!("Failed to serialize config: {}", e)))?;

        fs::write(&config_path, toml_string).map_err(|e| ConfigError::WriteError(e.to_string()))?;

        Ok(())
    }

    /// Save configuration to file, using production profile
    /// Use save_with_profile() to specify a different profile
    pub fn save(&self) -> Result<(), ConfigError> {
        self.save_with_profile(utils::Profile::Prod)
    }

    /// Get the path to the config file
    pub fn get_config_path(profile: utils::Profile) -> Result<PathBuf, ConfigError> {
        let config_dir = utils::get_config_dir(profile).ok_or_else(|| {
            ConfigError::ConfigDirError("Could not determine config directory".to_string())
        })?;
        Ok(config_dir.join("config.toml"))
    }

    /// Get default database path for a specific profile
    fn default_database_path_for_profile(profile: utils::Profile) -> String {
        if let Some(data_dir) = utils::get_data_dir(profile) {
            data_dir.join("timecard.db").to_string_lossy().to_string()
        } else {
            // Fallback paths - platform-specific
            #[cfg(target_os = "macos")]
            {
                match profile {
                    utils::Profile::Dev => {
                        "~/Library/Application Support/timecard-dev/timecard.db".to_string()
                    }
                    utils::Profile::Prod => {
                        "~/Library/Application Support/timecard/timecard.db".to_string()
                    }
                }
            }
            #[cfg(not(target_os = "macos"))]
            {
                match profile {
                    utils::Profile::Dev => "~/.local/share/timecard-dev/timecard.db".to_string(),
                    utils::Profile::Prod => "~/.local/share/timecard/timecard.db".to_string(),
                }
            }
        }
    }

    /// Get the expanded database path (with ~ expansion)
    pub fn get_database_path(&self) -> PathBuf {
        utils::expand_path(&self.database_path)
    }
}
