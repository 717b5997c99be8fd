//! Snippet pipeline: line selection, truncation, and mrkdwn conversion.

use crate::lines::{self, LineRange};
use crate::markdown::format_markdown_for_slack;
use anyhow::Result;
use tracing::debug;

/// Options controlling how a text blob becomes a chat snippet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SnippetOptions {
    /// Lines to keep before truncation; `None` keeps all lines.
    pub lines: Option<LineRange>,
    /// Maximum number of lines; values below 1 disable truncation.
    pub max_lines: isize,
    /// Whether to rewrite Markdown images and links as mrkdwn.
    pub mrkdwn: bool,
}

impl Default for SnippetOptions {
    fn default() -> Self {
        Self {
            lines: None,
            max_lines: 0,
            mrkdwn: true,
        }
    }
}

/// Renders text as a chat snippet.
///
/// Applies the selected line range, then truncates, then converts
/// Markdown spans when `options.mrkdwn` is set.
///
/// # Arguments
///
/// * `text`: Raw text from the source-control platform
/// * `options`: Selection, truncation and conversion settings
///
/// # Errors
///
/// Returns error if the selected line range lies outside the text.
pub fn render_snippet(text: &str, options: &SnippetOptions) -> Result<String> {
    let selected = match options.lines {
        Some(range) => lines::select_range(text, range)?,
        None => text,
    };

    let truncated = lines::truncate_with_line(selected, options.max_lines);
    debug!(
        total_lines = lines::line_count(text),
        kept_lines = lines::line_count(truncated),
        "windowed snippet"
    );

    if options.mrkdwn {
        Ok(format_markdown_for_slack(truncated))
    } else {
        Ok(truncated.to_string())
    }
}
