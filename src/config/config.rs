//! Config file handling
//!
//! ```toml
//! [defaults]
//! workers = 4
//! format = "json"
//! log_format = "text"
//! ```

use std::path::{Path, PathBuf};

use clap::ValueEnum;

use crate::cli::{LogFormat, OutputFormat};
use crate::errors::CommanderError;

/// Overrides the config directory (used by tests and packagers)
pub const CONFIG_DIR_ENV: &str = "CURL_COMMANDER_CONFIG_DIR";

/// curl-commander configuration
///
/// Every setting is optional; command-line flags win over the file, and
/// built-in defaults fill whatever neither sets.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Config {
    pub config_dir: PathBuf,
    pub workers: Option<usize>,
    pub format: Option<OutputFormat>,
    pub log_format: Option<LogFormat>,
}

impl Config {
    /// Load configuration from the default config directory
    pub fn load() -> Result<Self, CommanderError> {
        Self::load_from(&Self::default_config_dir())
    }

    /// Load `config.toml` from `config_dir`; a missing file means defaults
    pub fn load_from(config_dir: &Path) -> Result<Self, CommanderError> {
        let config_file = config_dir.join("config.toml");

        if !config_file.exists() {
            return Ok(Self {
                config_dir: config_dir.to_path_buf(),
                ..Self::default()
            });
        }

        let content = std::fs::read_to_string(&config_file)
            .map_err(|e| CommanderError::Config(format!("Failed to read config: {}", e)))?;

        let mut config = Self::parse(&content)?;
        config.config_dir = config_dir.to_path_buf();
        Ok(config)
    }

    /// Parse config TOML text
    pub fn parse(content: &str) -> Result<Self, CommanderError> {
        let toml_value: toml::Value = toml::from_str(content)
            .map_err(|e| CommanderError::Config(format!("Invalid config TOML: {}", e)))?;

        let Some(defaults) = toml_value.get("defaults") else {
            return Ok(Self::default());
        };

        let workers = match defaults.get("workers") {
            None => None,
            Some(value) => match value.as_integer() {
                Some(n) if (1..=64).contains(&n) => Some(n as usize),
                _ => {
                    return Err(CommanderError::Config(format!(
                        "defaults.workers must be an integer between 1 and 64, got {}",
                        value
                    )))
                }
            },
        };

        Ok(Self {
            config_dir: PathBuf::new(),
            workers,
            format: Self::parse_enum(defaults, "format")?,
            log_format: Self::parse_enum(defaults, "log_format")?,
        })
    }

    /// Parse a string setting into one of the CLI's value enums
    fn parse_enum<T: ValueEnum>(defaults: &toml::Value, key: &str) -> Result<Option<T>, CommanderError> {
        let Some(value) = defaults.get(key) else {
            return Ok(None);
        };
        let text = value
            .as_str()
            .ok_or_else(|| CommanderError::Config(format!("defaults.{} must be a string", key)))?;
        T::from_str(text, true)
            .map(Some)
            .map_err(|e| CommanderError::Config(format!("defaults.{}: {}", key, e)))
    }

    /// Get the default config directory
    fn default_config_dir() -> PathBuf {
        if let Some(dir) = std::env::var_os(CONFIG_DIR_ENV) {
            return PathBuf::from(dir);
        }
        dirs::config_dir()
            .map(|p| p.join("curl-commander"))
            .unwrap_or_else(|| PathBuf::from(".curl-commander"))
    }

    /// Path of the config file itself
    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.toml")
    }
}
