//! Conversion of markup nodes into ratatui text.
//!
//! Used when issue descriptions and comments are shown inside a TUI
//! widget instead of being printed to the terminal directly.

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};

use super::palette::Palette;
use crate::markup::{self, Node};

/// Convert nodes into styled ratatui text, one [`Line`] per input line.
pub fn to_text(nodes: &[Node], palette: &Palette) -> Text<'static> {
    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();

    for node in nodes {
        let style = style_for(node, palette);
        let mut parts = node.value().split('\n');

        if let Some(first) = parts.next() {
            push_span(&mut current, first, style);
        }
        for part in parts {
            end_line(&mut lines, &mut current);
            push_span(&mut current, part, style);
        }
    }
    end_line(&mut lines, &mut current);

    Text::from(lines)
}

/// Parse `text` as wiki markup and convert it with [`to_text`].
pub fn markup_to_text(text: &str, palette: &Palette) -> Text<'static> {
    to_text(&markup::parse(text), palette)
}

fn style_for(node: &Node, palette: &Palette) -> Style {
    match node {
        Node::Text { .. } => Style::default(),
        Node::Bold { .. } => Style::default().add_modifier(Modifier::BOLD),
        Node::Emphasis { .. } => Style::default().add_modifier(Modifier::ITALIC),
        Node::Color { color, .. } => match palette.tui_color(color) {
            Some(fg) => Style::default().fg(fg),
            None => Style::default(),
        },
        Node::Link { .. } => Style::default().add_modifier(Modifier::UNDERLINED),
    }
}

fn push_span(spans: &mut Vec<Span<'static>>, content: &str, style: Style) {
    if !content.is_empty() {
        spans.push(Span::styled(content.to_string(), style));
    }
}

/// Finish the current line. A trailing `\r` from CRLF input is dropped so
/// it never reaches the terminal buffer.
fn end_line(lines: &mut Vec<Line<'static>>, current: &mut Vec<Span<'static>>) {
    if let Some(last) = current.last_mut() {
        if let Some(stripped) = last.content.strip_suffix('\r').map(str::to_string) {
            last.content = stripped.into();
        }
    }
    current.retain(|span| !span.content.is_empty());
    lines.push(Line::from(std::mem::take(current)));
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;

    #[test]
    fn test_single_line_styles() {
        let text = markup_to_text("*bold* and {color:red}red{color}", &Palette::default());

        assert_eq!(text.lines.len(), 1);
        let spans = &text.lines[0].spans;
        assert_eq!(spans.len(), 3);
        assert_eq!(spans[0].content, "bold");
        assert!(spans[0].style.add_modifier.contains(Modifier::BOLD));
        assert_eq!(spans[1].content, " and ");
        assert_eq!(spans[2].style.fg, Some(Color::Red));
    }

    #[test]
    fn test_newlines_split_lines() {
        let text = markup_to_text("first\n_second\nthird_ end", &Palette::default());

        assert_eq!(text.lines.len(), 3);
        assert_eq!(text.lines[0].spans[0].content, "first");
        assert_eq!(text.lines[1].spans[0].content, "second");
        assert!(text.lines[1].spans[0]
            .style
            .add_modifier
            .contains(Modifier::ITALIC));
        assert_eq!(text.lines[2].spans[0].content, "third");
        assert_eq!(text.lines[2].spans[1].content, " end");
    }

    #[test]
    fn test_unknown_color_unstyled() {
        let text = markup_to_text("{color:blue}x{color}", &Palette::default());
        assert_eq!(text.lines[0].spans[0].style, Style::default());
    }

    #[test]
    fn test_link_underlined() {
        let text = markup_to_text("[Example|https://example.com]", &Palette::default());
        let span = &text.lines[0].spans[0];
        assert_eq!(span.content, "Example");
        assert!(span.style.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_empty_input_is_one_empty_line() {
        let text = to_text(&[], &Palette::default());
        assert_eq!(text.lines.len(), 1);
        assert!(text.lines[0].spans.is_empty());
    }

    #[test]
    fn test_crlf_line_endings() {
        let text = markup_to_text("*a*\r\nb\r\n\r\nc", &Palette::default());

        assert_eq!(text.lines.len(), 4);
        assert_eq!(text.lines[0].spans.len(), 1);
        assert_eq!(text.lines[0].spans[0].content, "a");
        assert_eq!(text.lines[1].spans[0].content, "b");
        assert!(text.lines[2].spans.is_empty());
        assert_eq!(text.lines[3].spans[0].content, "c");
        for line in &text.lines {
            for span in &line.spans {
                assert!(!span.content.contains('\r'));
            }
        }
    }

    #[test]
    fn test_carriage_return_inside_line_is_kept() {
        let text = markup_to_text("a\rb", &Palette::default());
        assert_eq!(text.lines[0].spans[0].content, "a\rb");
    }
}
