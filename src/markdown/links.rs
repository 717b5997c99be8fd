//! Image and link spans and their mrkdwn rendering.

use std::borrow::Cow;

/// Single Markdown image or link span.
///
/// Borrows its parts from the scanned text so rendering a span that keeps
/// only one part allocates nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LinkSpan<'a> {
    /// `![alt](url)`
    Image { alt: &'a str, url: &'a str },
    /// `[text](url)`
    Link { text: &'a str, url: &'a str },
}

impl<'a> LinkSpan<'a> {
    /// Creates span from matched parts.
    ///
    /// # Arguments
    ///
    /// * `is_image`: Whether the span was prefixed with `!`
    /// * `text`: Bracketed part (alt text for images)
    /// * `url`: Parenthesized destination
    pub fn new(is_image: bool, text: &'a str, url: &'a str) -> Self {
        if is_image {
            Self::Image { alt: text, url }
        } else {
            Self::Link { text, url }
        }
    }

    /// Renders span as Slack mrkdwn.
    ///
    /// Slack cannot inline images, so an image collapses to its alt text,
    /// kept verbatim even when empty or blank. A link becomes `<url|text>`
    /// when both parts are present, otherwise whichever part exists.
    pub fn to_mrkdwn(&self) -> Cow<'a, str> {
        match *self {
            Self::Image { alt, .. } => Cow::Borrowed(alt),
            Self::Link { text, url } => match (text.is_empty(), url.is_empty()) {
                (false, false) => Cow::Owned(format!("<{}|{}>", url, text)),
                (false, true) => Cow::Borrowed(text),
                (true, false) => Cow::Borrowed(url),
                (true, true) => Cow::Borrowed(""),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_renders_alt_text() {
        // Arrange
        let span = LinkSpan::new(true, "logo", "/assets/logo.png");

        // Act
        let result = span.to_mrkdwn();

        // Assert
        assert_eq!(result, "logo");
    }

    #[test]
    fn test_image_keeps_blank_alt_text() {
        assert_eq!(LinkSpan::new(true, "", "/a.png").to_mrkdwn(), "");
        assert_eq!(LinkSpan::new(true, " ", "/a.png").to_mrkdwn(), " ");
    }

    #[test]
    fn test_link_with_text_and_url() {
        // Arrange
        let span = LinkSpan::new(false, "github", "https://github.com/");

        // Act
        let result = span.to_mrkdwn();

        // Assert
        assert_eq!(result, "<https://github.com/|github>");
        assert!(matches!(result, Cow::Owned(_)));
    }

    #[test]
    fn test_link_without_url_renders_text() {
        let result = LinkSpan::new(false, "github", "").to_mrkdwn();

        assert_eq!(result, "github");
        assert!(matches!(result, Cow::Borrowed(_)), "Should not allocate");
    }

    #[test]
    fn test_link_without_text_renders_url() {
        let result = LinkSpan::new(false, "", "https://github.com/").to_mrkdwn();

        assert_eq!(result, "https://github.com/");
    }

    #[test]
    fn test_empty_link_renders_nothing() {
        assert_eq!(LinkSpan::new(false, "", "").to_mrkdwn(), "");
    }

    #[test]
    fn test_link_text_passed_verbatim() {
        let result = LinkSpan::new(false, "`0.3.9...0.4.0`", "https://example.com/compare").to_mrkdwn();

        assert_eq!(result, "<https://example.com/compare|`0.3.9...0.4.0`>");
    }

    #[test]
    fn test_new_selects_variant() {
        assert_eq!(
            LinkSpan::new(true, "a", "b"),
            LinkSpan::Image { alt: "a", url: "b" }
        );
        assert_eq!(
            LinkSpan::new(false, "a", "b"),
            LinkSpan::Link { text: "a", url: "b" }
        );
    }
}
