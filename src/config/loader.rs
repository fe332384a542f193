#![warn(clippy::all, clippy::pedantic)]

use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::Config;

// Fallback config file path when no user config directory exists
const CONFIG_FILE_PATH: &str = "config/polybridge.toml";

// Environment variable that overrides the config file location
pub const CONFIG_ENV_VAR: &str = "POLYBRIDGE_CONFIG";

// Load the configuration from the default location
pub fn load_config_from_file() -> Result<Config, ConfigError> {
    load_config_from(&get_config_file_path())
}

/// Reads the config at `path`, writing a default one first if it does not exist.
/// Missing keys fall back to their defaults and display sizes are clamped to
/// what a terminal can draw.
///
/// # Errors
///
/// Fails if the file cannot be created or read, or is not valid TOML.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        let default_config = Config::default();
        save_config_to(&default_config, path)?;
        return Ok(default_config);
    }

    let contents = fs::read_to_string(path)?;
    let mut config: Config = toml::from_str(&contents)?;
    config.display = config.display.clamped();
    Ok(config)
}

/// Writes `config` to `path` as TOML, creating parent directories as needed.
///
/// # Errors
///
/// Fails if the directory or file cannot be written.
pub fn save_config_to(config: &Config, path: &Path) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            fs::create_dir_all(parent)?;
        }
    }

    let toml_string = toml::to_string_pretty(config)?;
    fs::write(path, toml_string)?;

    Ok(())
}

// Get the path to the config file
#[must_use]
pub fn get_config_file_path() -> PathBuf {
    if let Ok(path) = std::env::var(CONFIG_ENV_VAR) {
        return PathBuf::from(path);
    }

    if let Some(config_dir) = dirs::config_dir() {
        config_dir.join("polybridge").join("config.toml")
    } else {
        PathBuf::from(CONFIG_FILE_PATH)
    }
}

// Custom error type for configuration operations
#[derive(Debug)]
pub enum ConfigError {
    Io(io::Error),
    Parse(toml::de::Error),
    Serialize(toml::ser::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(err) => write!(f, "config file I/O failed: {err}"),
            ConfigError::Parse(err) => write!(f, "config file is not valid TOML: {err}"),
            ConfigError::Serialize(err) => write!(f, "config could not be serialized: {err}"),
        }
    }
}

impl std::error::Error for ConfigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ConfigError::Io(err) => Some(err),
            ConfigError::Parse(err) => Some(err),
            ConfigError::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for ConfigError {
    fn from(err: io::Error) -> Self {
        ConfigError::Io(err)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::Parse(err)
    }
}

impl From<toml::ser::Error> for ConfigError {
    fn from(err: toml::ser::Error) -> Self {
        ConfigError::Serialize(err)
    }
}
