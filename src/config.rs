use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::error::{BumperError, Result};
use crate::metadata::{ElementPath, DEFAULT_FILE_NAME, DEFAULT_NAME_PATH, DEFAULT_VERSION_PATH};

/// Name of the configuration file looked up in the working and user config directories.
pub const CONFIG_FILE_NAME: &str = "ncs-bump.toml";

/// Represents the complete configuration for ncs-pkg-bumper.
///
/// Contains the metadata file name used when a directory is given and the
/// paths of the elements the bump reads and writes.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_file_name")]
    pub file_name: String,

    #[serde(default)]
    pub elements: ElementsConfig,
}

fn default_file_name() -> String {
    DEFAULT_FILE_NAME.to_string()
}

fn default_name_path() -> String {
    DEFAULT_NAME_PATH.to_string()
}

fn default_version_path() -> String {
    DEFAULT_VERSION_PATH.to_string()
}

/// Element paths inside the metadata document.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct ElementsConfig {
    #[serde(default = "default_name_path")]
    pub name: String,

    #[serde(default = "default_version_path")]
    pub version: String,
}

impl Default for ElementsConfig {
    fn default() -> Self {
        ElementsConfig {
            name: default_name_path(),
            version: default_version_path(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            file_name: default_file_name(),
            elements: ElementsConfig::default(),
        }
    }
}

impl Config {
    /// Parse configuration from TOML text and validate it.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let config: Config = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    pub fn name_path(&self) -> Result<ElementPath> {
        ElementPath::parse(&self.elements.name)
    }

    pub fn version_path(&self) -> Result<ElementPath> {
        ElementPath::parse(&self.elements.version)
    }

    fn validate(&self) -> Result<()> {
        if self.file_name.trim().is_empty() || self.file_name.contains(['/', '\\']) {
            return Err(BumperError::config(format!(
                "file_name '{}' must be a plain file name",
                self.file_name
            )));
        }
        self.name_path()?;
        self.version_path()?;
        Ok(())
    }
}

/// Loads configuration from file or returns defaults.
///
/// Attempts to load configuration in the following order:
/// 1. Custom path provided as parameter
/// 2. `ncs-bump.toml` in current directory
/// 3. `ncs-bump.toml` in user config directory
/// 4. Default configuration if no file found
///
/// # Arguments
/// * `config_path` - Optional path to custom configuration file
///
/// # Returns
/// * `Ok(Config)` - Loaded or default configuration
/// * `Err` - If file exists but cannot be read, parsed or validated
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let config_str = if let Some(path) = config_path {
        fs::read_to_string(path).map_err(|e| {
            BumperError::config(format!("cannot read {}: {}", path.display(), e))
        })?
    } else if Path::new(CONFIG_FILE_NAME).exists() {
        fs::read_to_string(CONFIG_FILE_NAME)?
    } else if let Some(config_dir) = dirs::config_dir() {
        let config_path = config_dir.join(CONFIG_FILE_NAME);
        if config_path.exists() {
            fs::read_to_string(config_path)?
        } else {
            return Ok(Config::default());
        }
    } else {
        return Ok(Config::default());
    };

    Config::from_toml(&config_str)
}
