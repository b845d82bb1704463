//! jiramark - render JIRA wiki markup for the terminal.
//!
//! Text from issue summaries, descriptions and comments is parsed into
//! [`markup::Node`]s and rendered as ANSI escape sequences, plain text,
//! HTML or ratatui text.
//!
//! ```
//! use jiramark::markup::parse;
//! use jiramark::render::ansi;
//!
//! let nodes = parse("{color:red}failed{color}");
//! assert_eq!(ansi::render(&nodes), "\x1b[31mfailed\x1b[0m");
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod markup;
pub mod render;
