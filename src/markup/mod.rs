//! JIRA wiki markup parsing.
//!
//! Issue summaries, descriptions and comment bodies use a small inline
//! markup dialect. This module turns such text into a flat sequence of
//! [`Node`]s that the renderers in [`crate::render`] can present.
//!
//! Supported syntax:
//! - `*bold*`
//! - `_emphasis_`
//! - `{color:red}colored{color}`
//! - `[text|https://example.com]`
//! - `{noformat}literal *text*{noformat}`
//!
//! See <https://jira.atlassian.com/secure/WikiRendererHelpAction.jspa?section=all>.

mod node;
mod parser;

pub use node::{Node, Spanned};
pub use parser::{parse, parse_spans};
