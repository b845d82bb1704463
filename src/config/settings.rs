//! Rendering settings.

use std::collections::BTreeMap;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::{ConfigError, Result};
use crate::render::palette::{is_foreground_code, Palette};
use crate::render::HyperlinkStyle;

/// Output format for rendered markup.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Terminal escape sequences.
    #[default]
    Ansi,
    /// Text without any styling.
    Plain,
    /// Inline HTML fragment.
    Html,
    /// The parsed nodes as a JSON array.
    Json,
}

/// User settings read from the configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Output format used when none is given on the command line.
    pub format: OutputFormat,
    /// How hyperlinks are written in ANSI output.
    pub hyperlinks: HyperlinkStyle,
    /// Additional `{color:NAME}` names mapped to SGR foreground codes.
    pub colors: BTreeMap<String, u8>,
}

impl Settings {
    /// Validate these settings.
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError::ValidationError` if a color name is empty or
    /// a color code is not an SGR foreground code.
    pub fn validate(&self) -> Result<()> {
        for (name, code) in &self.colors {
            if name.is_empty() {
                return Err(ConfigError::ValidationError(
                    "color name cannot be empty".to_string(),
                ));
            }

            if !is_foreground_code(*code) {
                return Err(ConfigError::ValidationError(format!(
                    "color '{}': code {} is not a foreground color (30-37 or 90-97)",
                    name, code
                )));
            }
        }

        Ok(())
    }

    /// Build the color palette described by these settings.
    pub fn palette(&self) -> Palette {
        Palette::with_extra(&self.colors)
    }
}
