//! Normalizes source-control text for display in Slack.
//!
//! Commit messages, merge request descriptions and file snippets are
//! bounded by line (see [`truncate_with_line`] and [`select_lines`]) and
//! their Markdown images and links rewritten as Slack mrkdwn (see
//! [`format_markdown_for_slack`]).

mod config;
mod lines;
mod markdown;
mod snippet;

pub use config::{Config, STDIN_PATH};
pub use lines::{
    LineRange, line_count, select_line, select_lines, select_range, truncate_with_line,
};
pub use markdown::{LinkSpan, format_markdown_for_slack};
pub use snippet::{SnippetOptions, render_snippet};
