//! Renderers turning parsed markup into display output.

pub mod ansi;
pub mod html;
pub mod palette;
pub mod plain;
pub mod tui;

use crate::markup::Node;

pub use ansi::{AnsiRenderer, HyperlinkStyle};
pub use html::HtmlRenderer;
pub use palette::Palette;
pub use plain::PlainRenderer;

/// A target format for a sequence of markup nodes.
///
/// Rendering never fails: styling a renderer cannot express is dropped and
/// the node content is written as-is.
pub trait Render {
    /// Render `nodes` in order into a single string.
    fn render(&self, nodes: &[Node]) -> String;
}
