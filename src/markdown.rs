//! Markdown to Slack mrkdwn conversion.
//!
//! Source-control platforms emit a small Markdown dialect in commit and
//! merge request descriptions. Only image and link spans are rewritten;
//! everything else, checkbox markers and inline code included, passes
//! through untouched.

mod links;
mod renderer;

pub use links::LinkSpan;
pub use renderer::format_markdown_for_slack;
