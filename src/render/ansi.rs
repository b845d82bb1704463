//! ANSI escape sequence renderer.
//!
//! Styles are emitted as SGR sequences and links as OSC-8 terminal
//! hyperlinks.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use super::palette::Palette;
use super::Render;
use crate::markup::{self, Node};

const BOLD: &str = "\x1b[1m";
const ITALIC: &str = "\x1b[3m";
const RESET: &str = "\x1b[0m";
const LINK_OPEN: &str = "\x1b]8;;";
const LINK_TARGET_END: &str = "\x07";
/// Link close sequence as emitted historically. It lacks the trailing `;`
/// and BEL, so most terminals never see the hyperlink end.
const LINK_CLOSE_LEGACY: &str = "\x1b]8;";
const LINK_CLOSE: &str = "\x1b]8;;\x07";

/// How hyperlinks are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum HyperlinkStyle {
    /// OSC-8 link closed with the historical `ESC ]8;` sequence.
    #[default]
    Legacy,
    /// OSC-8 link closed with a complete `ESC ]8;; BEL` sequence.
    Terminated,
    /// Link text only, no escape sequences.
    Off,
}

/// Renders nodes as a string with ANSI escape codes.
#[derive(Debug, Clone, Default)]
pub struct AnsiRenderer {
    palette: Palette,
    hyperlinks: HyperlinkStyle,
}

impl AnsiRenderer {
    /// Create a renderer with the given palette and hyperlink style.
    pub fn new(palette: Palette, hyperlinks: HyperlinkStyle) -> Self {
        Self {
            palette,
            hyperlinks,
        }
    }

    fn push_node(&self, out: &mut String, node: &Node) {
        match node {
            Node::Text { value } => out.push_str(value),
            Node::Bold { value } => wrap(out, BOLD, value, RESET),
            Node::Emphasis { value } => wrap(out, ITALIC, value, RESET),
            Node::Color { color, value } => match self.palette.sgr_code(color) {
                Some(code) => {
                    out.push_str(&format!("\x1b[{}m", code));
                    out.push_str(value);
                    out.push_str(RESET);
                }
                None => out.push_str(value),
            },
            Node::Link { url, value } => {
                let close = match self.hyperlinks {
                    HyperlinkStyle::Legacy => LINK_CLOSE_LEGACY,
                    HyperlinkStyle::Terminated => LINK_CLOSE,
                    HyperlinkStyle::Off => {
                        out.push_str(value);
                        return;
                    }
                };
                out.push_str(LINK_OPEN);
                out.push_str(url);
                out.push_str(LINK_TARGET_END);
                out.push_str(value);
                out.push_str(close);
            }
        }
    }
}

impl Render for AnsiRenderer {
    fn render(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            self.push_node(&mut out, node);
        }
        out
    }
}

fn wrap(out: &mut String, open: &str, value: &str, close: &str) {
    out.push_str(open);
    out.push_str(value);
    out.push_str(close);
}

/// Render nodes with the default palette and legacy hyperlinks.
pub fn render(nodes: &[Node]) -> String {
    AnsiRenderer::default().render(nodes)
}

/// Parse `text` as wiki markup and render it with [`render`].
///
/// # Example
///
/// ```
/// use jiramark::render::ansi::render_markup;
///
/// assert_eq!(render_markup("*bold*"), "\x1b[1mbold\x1b[0m");
/// ```
pub fn render_markup(text: &str) -> String {
    render(&markup::parse(text))
}
