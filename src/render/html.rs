//! HTML fragment renderer.
//!
//! All node content is escaped, and links and colors are only emitted for
//! values that cannot run script, so the output can be embedded in a page
//! without further processing.

use html_escape::encode_quoted_attribute;

use super::Render;
use crate::markup::Node;

/// Renders nodes as an inline HTML fragment.
#[derive(Debug, Clone, Copy, Default)]
pub struct HtmlRenderer;

impl HtmlRenderer {
    fn push_node(out: &mut String, node: &Node) {
        match node {
            Node::Text { value } => out.push_str(&escape(value)),
            Node::Bold { value } => {
                out.push_str("<strong>");
                out.push_str(&escape(value));
                out.push_str("</strong>");
            }
            Node::Emphasis { value } => {
                out.push_str("<em>");
                out.push_str(&escape(value));
                out.push_str("</em>");
            }
            Node::Color { color, value } if is_css_color(color) => {
                out.push_str(&format!("<span style=\"color: {}\">", color));
                out.push_str(&escape(value));
                out.push_str("</span>");
            }
            Node::Color { value, .. } => out.push_str(&escape(value)),
            Node::Link { url, value } if is_safe_href(url) => {
                out.push_str(&format!("<a href=\"{}\">", escape(url)));
                out.push_str(&escape(value));
                out.push_str("</a>");
            }
            Node::Link { value, .. } => out.push_str(&escape(value)),
        }
    }
}

impl Render for HtmlRenderer {
    fn render(&self, nodes: &[Node]) -> String {
        let mut out = String::new();
        for node in nodes {
            Self::push_node(&mut out, node);
        }
        out
    }
}

/// Render nodes as HTML.
pub fn render(nodes: &[Node]) -> String {
    HtmlRenderer.render(nodes)
}

/// Escape `&`, `<`, `>`, `"` and `'`.
fn escape(text: &str) -> std::borrow::Cow<'_, str> {
    encode_quoted_attribute(text)
}

/// Color names and `#rrggbb` values only; anything else could break out of
/// the style attribute.
fn is_css_color(color: &str) -> bool {
    !color.is_empty() && color.chars().all(|c| c.is_ascii_alphanumeric() || c == '#')
}

/// Relative URLs and `http`, `https` or `mailto` URLs only.
fn is_safe_href(url: &str) -> bool {
    match url.find([':', '/', '?', '#']) {
        Some(end) if url[end..].starts_with(':') => {
            let scheme = url[..end].to_ascii_lowercase();
            matches!(scheme.as_str(), "http" | "https" | "mailto")
        }
        _ => true,
    }
}
