//! Color name to terminal color mapping.

use std::collections::BTreeMap;

use ratatui::style::Color;

/// Colors every palette knows, as ANSI SGR foreground codes.
pub const DEFAULT_COLORS: &[(&str, u8)] = &[("red", 31), ("green", 32)];

/// Maps `{color:NAME}` names to SGR foreground codes.
///
/// Names missing from the palette are rendered without any styling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: BTreeMap<String, u8>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS
                .iter()
                .map(|(name, code)| (name.to_string(), *code))
                .collect(),
        }
    }
}

impl Palette {
    /// Create a palette with the default colors plus `extra`.
    ///
    /// Entries in `extra` override defaults of the same name.
    pub fn with_extra<'a>(extra: impl IntoIterator<Item = (&'a String, &'a u8)>) -> Self {
        let mut palette = Self::default();
        for (name, code) in extra {
            palette.colors.insert(name.clone(), *code);
        }
        palette
    }

    /// Look up the SGR foreground code for a color name.
    pub fn sgr_code(&self, name: &str) -> Option<u8> {
        self.colors.get(name).copied()
    }

    /// Look up the ratatui color for a color name.
    pub fn tui_color(&self, name: &str) -> Option<Color> {
        self.sgr_code(name).and_then(sgr_to_color)
    }
}

/// Whether `code` is an SGR foreground color code (normal or bright).
pub fn is_foreground_code(code: u8) -> bool {
    matches!(code, 30..=37 | 90..=97)
}

fn sgr_to_color(code: u8) -> Option<Color> {
    let color = match code {
        30 => Color::Black,
        31 => Color::Red,
        32 => Color::Green,
        33 => Color::Yellow,
        34 => Color::Blue,
        35 => Color::Magenta,
        36 => Color::Cyan,
        37 => Color::Gray,
        90 => Color::DarkGray,
        91 => Color::LightRed,
        92 => Color::LightGreen,
        93 => Color::LightYellow,
        94 => Color::LightBlue,
        95 => Color::LightMagenta,
        96 => Color::LightCyan,
        97 => Color::White,
        _ => return None,
    };
    Some(color)
}
