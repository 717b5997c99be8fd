//! Single pass rewrite of Markdown spans into Slack mrkdwn.

use super::links::LinkSpan;
use regex::{Captures, Regex};
use std::sync::LazyLock;

/// Image or link span: optional `!`, bracketed text, parenthesized URL.
///
/// The destination must follow the closing bracket immediately, so a
/// checkbox marker such as `* [ ] ` never matches on its own. Brackets and
/// parentheses do not nest.
static SPAN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[([^\]]*)\]\(([^)]*)\)").expect("span pattern is valid")
});

/// Converts Markdown image and link spans to Slack mrkdwn.
///
/// Spans are matched left to right without overlap and each is replaced
/// by [`LinkSpan::to_mrkdwn`]. Text outside spans is copied unchanged.
/// Unbalanced brackets or parentheses are plain text, so this never fails.
///
/// # Arguments
///
/// * `text`: Markdown text, typically a commit or merge request description
///
/// # Returns
///
/// Text with image spans reduced to their alt text and links rewritten as
/// `<url|text>`
pub fn format_markdown_for_slack(text: &str) -> String {
    SPAN_PATTERN
        .replace_all(text, |caps: &Captures<'_>| {
            let is_image = !caps[1].is_empty();
            let span = LinkSpan::new(is_image, &caps[2], &caps[3]);
            span.to_mrkdwn().into_owned()
        })
        .into_owned()
}
