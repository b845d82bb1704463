//! Renderer that drops all styling.

use super::Render;
use crate::markup::Node;

/// Emits the content of every node without any formatting.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainRenderer;

impl Render for PlainRenderer {
    fn render(&self, nodes: &[Node]) -> String {
        nodes.iter().map(Node::value).collect()
    }
}

/// Render nodes as plain text.
pub fn render(nodes: &[Node]) -> String {
    PlainRenderer.render(nodes)
}
