//! Parsed markup nodes.

use std::fmt;
use std::ops::Range;

use serde::{Deserialize, Serialize};

/// One classified run of markup text.
///
/// The `value` of every variant holds the inner content only; the markup
/// delimiters are stripped by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    /// Literal, unstyled content.
    Text { value: String },
    /// Content between `*` delimiters.
    Bold { value: String },
    /// Content between `_` delimiters.
    Emphasis { value: String },
    /// Content between `{color:NAME}` and `{color}`.
    ///
    /// The color name is kept verbatim, renderers decide whether they know it.
    Color { color: String, value: String },
    /// A `[text|url]` hyperlink.
    Link { url: String, value: String },
}

impl Node {
    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    /// Create a bold node.
    pub fn bold(value: impl Into<String>) -> Self {
        Node::Bold {
            value: value.into(),
        }
    }

    /// Create an emphasis node.
    pub fn emphasis(value: impl Into<String>) -> Self {
        Node::Emphasis {
            value: value.into(),
        }
    }

    /// Create a color node.
    pub fn color(color: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Color {
            color: color.into(),
            value: value.into(),
        }
    }

    /// Create a link node.
    pub fn link(url: impl Into<String>, value: impl Into<String>) -> Self {
        Node::Link {
            url: url.into(),
            value: value.into(),
        }
    }

    /// The displayed content of this node.
    pub fn value(&self) -> &str {
        match self {
            Node::Text { value }
            | Node::Bold { value }
            | Node::Emphasis { value }
            | Node::Color { value, .. }
            | Node::Link { value, .. } => value,
        }
    }

    /// Write this node back as wiki markup.
    ///
    /// `Text` nodes are emitted as-is, so text that came out of a
    /// `{noformat}` block does not get its delimiters back.
    pub fn to_markup(&self) -> String {
        match self {
            Node::Text { value } => value.clone(),
            Node::Bold { value } => format!("*{}*", value),
            Node::Emphasis { value } => format!("_{}_", value),
            Node::Color { color, value } => format!("{{color:{}}}{}{{color}}", color, value),
            Node::Link { url, value } => format!("[{}|{}]", value, url),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Text { value } => write!(f, "<Text {}>", value),
            Node::Bold { value } => write!(f, "<Bold {}>", value),
            Node::Emphasis { value } => write!(f, "<Emphasis {}>", value),
            Node::Color { color, value } => write!(f, "<Color({}) {}>", color, value),
            Node::Link { url, value } => write!(f, "<Link({}) {}>", url, value),
        }
    }
}

/// A node together with the byte range of the input it was parsed from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Spanned {
    /// Byte range in the original input, delimiters included.
    pub span: Range<usize>,
    /// The classified node.
    pub node: Node,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_accessor() {
        assert_eq!(Node::text("plain").value(), "plain");
        assert_eq!(Node::bold("b").value(), "b");
        assert_eq!(Node::emphasis("e").value(), "e");
        assert_eq!(Node::color("red", "c").value(), "c");
        assert_eq!(Node::link("https://example.com", "l").value(), "l");
    }

    #[test]
    fn test_structural_equality() {
        assert_eq!(Node::bold("x"), Node::bold("x"));
        assert_ne!(Node::bold("x"), Node::emphasis("x"));
        assert_ne!(Node::color("red", "x"), Node::color("green", "x"));
        assert_ne!(
            Node::link("https://a.example", "x"),
            Node::link("https://b.example", "x")
        );
    }

    #[test]
    fn test_to_markup() {
        assert_eq!(Node::bold("b").to_markup(), "*b*");
        assert_eq!(Node::emphasis("e").to_markup(), "_e_");
        assert_eq!(
            Node::color("green", "value").to_markup(),
            "{color:green}value{color}"
        );
        assert_eq!(
            Node::link("https://example.com", "Example").to_markup(),
            "[Example|https://example.com]"
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(Node::text("a").to_string(), "<Text a>");
        assert_eq!(Node::color("red", "a").to_string(), "<Color(red) a>");
        assert_eq!(
            Node::link("https://example.com", "a").to_string(),
            "<Link(https://example.com) a>"
        );
    }

    #[test]
    fn test_serialization_is_tagged() {
        let json = serde_json::to_string(&Node::color("red", "x")).unwrap();
        assert_eq!(json, r#"{"type":"color","color":"red","value":"x"}"#);

        let parsed: Node = serde_json::from_str(r#"{"type":"bold","value":"b"}"#).unwrap();
        assert_eq!(parsed, Node::bold("b"));
    }
}
