//! Configuration management for jiramark.
//!
//! Settings live in a TOML file in the platform configuration directory
//! (`~/.config/jiramark/config.toml` on Linux). A missing file at the
//! default location means default settings.

mod settings;

use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::{debug, warn};

pub use settings::{OutputFormat, Settings};

/// Errors that can occur while loading configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The platform configuration directory could not be determined.
    #[error("Could not determine configuration directory")]
    NoConfigDir,

    /// The configuration file could not be read.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    /// The configuration file is not valid TOML for [`Settings`].
    #[error("Failed to parse config file: {0}")]
    ParseError(#[from] toml::de::Error),

    /// The configuration parsed but holds invalid values.
    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

/// Result type for configuration operations.
pub type Result<T> = std::result::Result<T, ConfigError>;

/// Path of the default configuration file.
pub fn config_path() -> Result<PathBuf> {
    let base_dir = dirs::config_dir().ok_or(ConfigError::NoConfigDir)?;
    Ok(base_dir.join("jiramark").join("config.toml"))
}

/// Load settings.
///
/// An explicit `path` must exist. Without one, the default location is
/// used and falls back to default settings when there is no file.
pub fn load(path: Option<&Path>) -> Result<Settings> {
    if let Some(path) = path {
        return load_from_path(path);
    }

    let path = match config_path() {
        Ok(path) => path,
        Err(e) => {
            warn!("{}, using default settings", e);
            return Ok(Settings::default());
        }
    };

    if !path.exists() {
        debug!(path = %path.display(), "No config file, using default settings");
        return Ok(Settings::default());
    }

    load_from_path(&path)
}

/// Load and validate settings from a specific file.
pub fn load_from_path(path: &Path) -> Result<Settings> {
    debug!(path = %path.display(), "Loading config");

    let content = std::fs::read_to_string(path)?;
    let settings: Settings = toml::from_str(&content)?;
    settings.validate()?;

    Ok(settings)
}
