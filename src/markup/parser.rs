//! Two-phase markup parser.
//!
//! 1. Segmentation scans the input for styled shapes, producing literal
//!    runs and candidate spans in document order.
//! 2. Classification re-matches each fragment from its start to decide the
//!    node variant and extract its inner content.
//!
//! At any position the shapes are tried in precedence order: no-format
//! blocks, color blocks, bold, emphasis and finally links. The leftmost
//! position with a match wins.
//!
//! Segmentation is a hand-written scan rather than one regex alternation.
//! Repeated leftmost-first searches rescan the rest of the input after every
//! failed greedy attempt, which is quadratic on text full of unclosed
//! `{color:` or `[` openers. The scanner memoizes each forward search so
//! every closer lookup is amortized O(1).

use std::ops::Range;
use std::sync::OnceLock;

use regex::Regex;
use tracing::trace;

use super::node::{Node, Spanned};

const NOFORMAT: &str = "{noformat}";
const COLOR_OPEN: &str = "{color:";
const COLOR_CLOSE: &str = "{color}";

const NOFORMAT_PATTERN: &str = r"^\{noformat\}(.*?)\{noformat\}";
const BOLD_PATTERN: &str = r"^\*([^*\n]*)\*";
const EMPHASIS_PATTERN: &str = r"^_([^_]*)_";
// Greedy on purpose: the last `{color}` on the line closes the block.
const COLOR_PATTERN: &str = r"^\{color:([^}]*)\}(.*)\{color\}";
const LINK_PATTERN: &str = r"^\[([^|]*)\|([^\]]*)\]";

/// Compiled classification patterns, shared by every parse call.
struct Patterns {
    noformat: Regex,
    bold: Regex,
    emphasis: Regex,
    color: Regex,
    link: Regex,
}

impl Patterns {
    fn compile() -> Self {
        Self {
            noformat: Regex::new(NOFORMAT_PATTERN).expect("invalid noformat pattern"),
            bold: Regex::new(BOLD_PATTERN).expect("invalid bold pattern"),
            emphasis: Regex::new(EMPHASIS_PATTERN).expect("invalid emphasis pattern"),
            color: Regex::new(COLOR_PATTERN).expect("invalid color pattern"),
            link: Regex::new(LINK_PATTERN).expect("invalid link pattern"),
        }
    }
}

fn patterns() -> &'static Patterns {
    static PATTERNS: OnceLock<Patterns> = OnceLock::new();
    PATTERNS.get_or_init(Patterns::compile)
}

/// Parse wiki markup into a sequence of nodes.
///
/// Never fails: text without recognizable markup comes back as a single
/// [`Node::Text`], and unterminated delimiters stay part of the surrounding
/// text. An empty input yields an empty sequence.
///
/// # Example
///
/// ```
/// use jiramark::markup::{parse, Node};
///
/// assert_eq!(
///     parse("*bold* text"),
///     vec![Node::bold("bold"), Node::text(" text")]
/// );
/// ```
pub fn parse(input: &str) -> Vec<Node> {
    parse_spans(input)
        .into_iter()
        .map(|spanned| spanned.node)
        .collect()
}

/// Parse wiki markup, keeping the byte range each node was taken from.
///
/// Concatenating `&input[span]` over the result reproduces `input`.
pub fn parse_spans(input: &str) -> Vec<Spanned> {
    let spans: Vec<Spanned> = segment(input)
        .into_iter()
        .map(|span| {
            let node = classify(&input[span.clone()]);
            Spanned { span, node }
        })
        .collect();

    trace!(
        input_len = input.len(),
        nodes = spans.len(),
        "Parsed markup"
    );

    spans
}

/// Split the input into alternating literal runs and candidate spans.
///
/// Empty runs, such as the gap between two adjacent spans, are dropped.
fn segment(input: &str) -> Vec<Range<usize>> {
    let mut fragments = Vec::new();
    let mut last = 0;

    for span in styled_spans(input) {
        if span.start > last {
            fragments.push(last..span.start);
        }
        last = span.end;
        fragments.push(span);
    }

    if last < input.len() {
        fragments.push(last..input.len());
    }

    fragments
}

/// Leftmost, non-overlapping styled spans in document order.
fn styled_spans(input: &str) -> Vec<Range<usize>> {
    let mut scanner = Scanner::new(input);
    let mut spans = Vec::new();
    let mut pos = 0;

    while pos < input.len() {
        match scanner.span_at(pos) {
            Some(end) => {
                spans.push(pos..end);
                pos = end;
            }
            None => pos += 1,
        }
    }

    spans
}

/// Forward search for a fixed needle, memoized across start positions.
///
/// Queries are expected to move forward. A cached hit stays valid while the
/// query position has not passed it, and a miss stays valid forever after.
struct NextMatch<'a> {
    haystack: &'a str,
    needle: &'static str,
    searched_from: Option<usize>,
    found: Option<usize>,
}

impl<'a> NextMatch<'a> {
    fn new(haystack: &'a str, needle: &'static str) -> Self {
        Self {
            haystack,
            needle,
            searched_from: None,
            found: None,
        }
    }

    /// Byte offset of the first occurrence starting at or after `pos`.
    fn at_or_after(&mut self, pos: usize) -> Option<usize> {
        let reusable = match self.searched_from {
            Some(from) => from <= pos && self.found.map_or(true, |found| found >= pos),
            None => false,
        };

        if !reusable {
            self.found = self
                .haystack
                .get(pos..)
                .and_then(|rest| rest.find(self.needle))
                .map(|offset| pos + offset);
            self.searched_from = Some(pos);
        }

        self.found
    }
}

/// Finds where a styled span starting at a given position ends.
///
/// Every shape has its own searches so each one only ever moves forward.
struct Scanner<'a> {
    input: &'a str,
    noformat_close: NextMatch<'a>,
    noformat_newline: NextMatch<'a>,
    color_name_end: NextMatch<'a>,
    color_newline: NextMatch<'a>,
    /// Last `{color}` start on the line ending at the cached offset.
    color_last_close: Option<(usize, Option<usize>)>,
    bold_close: NextMatch<'a>,
    bold_newline: NextMatch<'a>,
    emphasis_close: NextMatch<'a>,
    link_pipe: NextMatch<'a>,
    link_close: NextMatch<'a>,
}

impl<'a> Scanner<'a> {
    fn new(input: &'a str) -> Self {
        Self {
            input,
            noformat_close: NextMatch::new(input, NOFORMAT),
            noformat_newline: NextMatch::new(input, "\n"),
            color_name_end: NextMatch::new(input, "}"),
            color_newline: NextMatch::new(input, "\n"),
            color_last_close: None,
            bold_close: NextMatch::new(input, "*"),
            bold_newline: NextMatch::new(input, "\n"),
            emphasis_close: NextMatch::new(input, "_"),
            link_pipe: NextMatch::new(input, "|"),
            link_close: NextMatch::new(input, "]"),
        }
    }

    /// End offset of the span starting at `start`, if any shape matches there.
    fn span_at(&mut self, start: usize) -> Option<usize> {
        match self.input.as_bytes()[start] {
            b'{' => self.noformat_at(start).or_else(|| self.color_at(start)),
            b'*' => self.bold_at(start),
            b'_' => self.emphasis_at(start),
            b'[' => self.link_at(start),
            _ => None,
        }
    }

    /// `{noformat}` up to the first closer on the same line.
    fn noformat_at(&mut self, start: usize) -> Option<usize> {
        if !self.input[start..].starts_with(NOFORMAT) {
            return None;
        }

        let body = start + NOFORMAT.len();
        let close = self.noformat_close.at_or_after(body)?;
        if self
            .noformat_newline
            .at_or_after(body)
            .is_some_and(|newline| newline < close)
        {
            return None;
        }

        Some(close + NOFORMAT.len())
    }

    /// `{color:NAME}` up to the last `{color}` on the line the body starts on.
    fn color_at(&mut self, start: usize) -> Option<usize> {
        if !self.input[start..].starts_with(COLOR_OPEN) {
            return None;
        }

        // NAME may span lines; only the body is confined to one.
        let body = self.color_name_end.at_or_after(start + COLOR_OPEN.len())? + 1;
        let line_end = self
            .color_newline
            .at_or_after(body)
            .unwrap_or(self.input.len());

        let last_close = match self.color_last_close {
            Some((cached_end, last_close)) if cached_end == line_end => last_close,
            _ => {
                let last_close = self.input[body..line_end]
                    .rfind(COLOR_CLOSE)
                    .map(|offset| body + offset);
                self.color_last_close = Some((line_end, last_close));
                last_close
            }
        };

        last_close
            .filter(|&close| close >= body)
            .map(|close| close + COLOR_CLOSE.len())
    }

    /// `*` up to the next `*`, unless a newline comes first.
    fn bold_at(&mut self, start: usize) -> Option<usize> {
        let close = self.bold_close.at_or_after(start + 1)?;
        if self
            .bold_newline
            .at_or_after(start + 1)
            .is_some_and(|newline| newline < close)
        {
            return None;
        }

        Some(close + 1)
    }

    /// `_` up to the next `_`, across lines.
    fn emphasis_at(&mut self, start: usize) -> Option<usize> {
        self.emphasis_close
            .at_or_after(start + 1)
            .map(|close| close + 1)
    }

    /// `[` up to the first `|`, then up to the first `]` after it.
    fn link_at(&mut self, start: usize) -> Option<usize> {
        let pipe = self.link_pipe.at_or_after(start + 1)?;
        let close = self.link_close.at_or_after(pipe + 1)?;
        Some(close + 1)
    }
}

/// Decide which node a single fragment represents.
fn classify(fragment: &str) -> Node {
    let patterns = patterns();

    // Content of a no-format block is never parsed again.
    if let Some(caps) = patterns.noformat.captures(fragment) {
        return Node::text(&caps[1]);
    }

    if let Some(caps) = patterns.bold.captures(fragment) {
        return Node::bold(&caps[1]);
    }

    if let Some(caps) = patterns.emphasis.captures(fragment) {
        return Node::emphasis(&caps[1]);
    }

    if let Some(caps) = patterns.color.captures(fragment) {
        return Node::color(&caps[1], &caps[2]);
    }

    if let Some(caps) = patterns.link.captures(fragment) {
        return Node::link(&caps[2], &caps[1]);
    }

    Node::text(fragment)
}
