//! Centralized error types for jiramark.
//!
//! Parsing and rendering never fail; everything here comes from the
//! surrounding command: configuration, reading input and writing output.

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;

/// The main application error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Configuration-related errors.
    #[error("{0}")]
    Config(#[from] ConfigError),

    /// Reading a markup input file failed.
    #[error("Failed to read '{}': {source}", .path.display())]
    Input {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO errors (stdin, stdout).
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serializing nodes to JSON failed.
    #[error("Serialization error: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Generic errors with a message.
    #[error("{0}")]
    Other(String),
}

impl AppError {
    /// Create an input error for `path`.
    pub fn input(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        AppError::Input {
            path: path.into(),
            source,
        }
    }

    /// Create a generic error.
    pub fn other(msg: impl Into<String>) -> Self {
        AppError::Other(msg.into())
    }

    /// Get a user-friendly message for display.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Config(e) => match e {
                ConfigError::NoConfigDir => {
                    "Could not find configuration directory. Please check your system settings."
                        .to_string()
                }
                ConfigError::ReadError(_) => {
                    "Could not read configuration file. Please check the file exists and is readable.".to_string()
                }
                ConfigError::ParseError(_) => {
                    "Configuration file is invalid. Please check the file format.".to_string()
                }
                ConfigError::ValidationError(msg) => format!("Configuration error: {}", msg),
            },
            AppError::Input { path, .. } => {
                format!("Could not read input file '{}'.", path.display())
            }
            AppError::Io(e) if e.kind() == std::io::ErrorKind::BrokenPipe => {
                "Output was closed before rendering finished.".to_string()
            }
            AppError::Io(_) => "Could not read input or write output.".to_string(),
            AppError::Serialize(_) => "Could not encode the parsed markup as JSON.".to_string(),
            AppError::Other(msg) => msg.clone(),
        }
    }

    /// Get a suggested action for resolving this error.
    pub fn suggested_action(&self) -> Option<&'static str> {
        match self {
            AppError::Config(ConfigError::ParseError(_))
            | AppError::Config(ConfigError::ValidationError(_)) => {
                Some("Fix the config file or pass a different one with --config.")
            }
            AppError::Config(ConfigError::ReadError(_)) => {
                Some("Check the path given with --config or JIRAMARK_CONFIG.")
            }
            AppError::Input { .. } => Some("Pass an existing file, or '-' to read stdin."),
            _ => None,
        }
    }
}

/// Result type for application operations.
pub type Result<T> = std::result::Result<T, AppError>;
