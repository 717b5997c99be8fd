//! Line window operations over multi-line text.
//!
//! Lines are delimited by `\n` only. A single trailing delimiter does not
//! start another line, so `"a\nb\n"` holds two lines. Every operation
//! returns a slice of its input: selected lines are contiguous in the
//! source text, which keeps the content of each line byte for byte.

use anyhow::{Context, Result, bail};
use std::fmt;
use std::ops::Range;
use std::str::FromStr;

/// Returns byte ranges of each line, delimiters excluded.
fn line_spans(text: &str) -> Vec<Range<usize>> {
    let body = text.strip_suffix('\n').unwrap_or(text);

    let mut spans = Vec::new();
    let mut start = 0;
    for (idx, _) in body.match_indices('\n') {
        spans.push(start..idx);
        start = idx + 1;
    }
    spans.push(start..body.len());

    spans
}

/// Counts lines in text.
///
/// Empty text counts as a single empty line.
pub fn line_count(text: &str) -> usize {
    line_spans(text).len()
}

/// Truncates text to at most `max_lines` lines.
///
/// Text with `max_lines` or fewer lines is returned unchanged, trailing
/// newline included. Longer text is cut after line `max_lines` and loses
/// its trailing newline. A `max_lines` below 1 disables truncation.
///
/// # Arguments
///
/// * `text`: Text to truncate
/// * `max_lines`: Maximum number of lines to keep
///
/// # Returns
///
/// Prefix of `text` covering at most `max_lines` lines
pub fn truncate_with_line(text: &str, max_lines: isize) -> &str {
    if max_lines < 1 {
        return text;
    }

    let spans = line_spans(text);
    let max_lines = max_lines.unsigned_abs();
    if spans.len() <= max_lines {
        return text;
    }

    &text[..spans[max_lines - 1].end]
}

/// Selects a single line by 1-indexed line number.
///
/// # Errors
///
/// Returns error if `line` is zero or past the last line.
pub fn select_line(text: &str, line: usize) -> Result<&str> {
    select_lines(text, line, line)
}

/// Selects lines `start_line..=end_line`, 1-indexed.
///
/// The result joins the selected lines with `\n` and never ends with a
/// delimiter, whether or not the source text does.
///
/// # Arguments
///
/// * `text`: Source text
/// * `start_line`: First line to include
/// * `end_line`: Last line to include
///
/// # Errors
///
/// Returns error if either bound lies outside `1..=line_count` or if
/// `start_line` is greater than `end_line`.
pub fn select_lines(text: &str, start_line: usize, end_line: usize) -> Result<&str> {
    let spans = line_spans(text);
    let count = spans.len();

    if start_line == 0 || start_line > count {
        bail!("Line {} out of range (text has {} lines)", start_line, count);
    }
    if end_line > count {
        bail!("Line {} out of range (text has {} lines)", end_line, count);
    }
    if start_line > end_line {
        bail!(
            "Start line {} is after end line {}",
            start_line,
            end_line
        );
    }

    Ok(&text[spans[start_line - 1].start..spans[end_line - 1].end])
}

/// Selects the lines covered by `range`.
///
/// # Errors
///
/// Returns error if the range extends past the last line.
pub fn select_range(text: &str, range: LineRange) -> Result<&str> {
    select_lines(text, range.start(), range.end())
        .with_context(|| format!("Cannot select lines {}", range))
}

/// Inclusive, 1-indexed range of lines.
///
/// Parses the line anchors found in source-control blob URLs, with or
/// without the leading `#`: `L12`, `L12-20`, `L12-L20`, `12`, `12-20`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LineRange {
    start: usize,
    end: usize,
}

impl LineRange {
    /// Creates line range from inclusive bounds.
    ///
    /// # Errors
    ///
    /// Returns error if `start` is zero or greater than `end`.
    pub fn new(start: usize, end: usize) -> Result<Self> {
        if start == 0 {
            bail!("Line numbers start at 1");
        }
        if start > end {
            bail!("Start line {} is after end line {}", start, end);
        }

        Ok(Self { start, end })
    }

    /// Creates range covering one line.
    ///
    /// # Errors
    ///
    /// Returns error if `line` is zero.
    pub fn single(line: usize) -> Result<Self> {
        Self::new(line, line)
    }

    pub fn start(&self) -> usize {
        self.start
    }

    pub fn end(&self) -> usize {
        self.end
    }
}

impl fmt::Display for LineRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.start == self.end {
            write!(f, "L{}", self.start)
        } else {
            write!(f, "L{}-{}", self.start, self.end)
        }
    }
}

impl FromStr for LineRange {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let anchor = s.trim();
        let anchor = anchor.strip_prefix('#').unwrap_or(anchor);
        let anchor = anchor.strip_prefix('L').unwrap_or(anchor);

        let parse_line = |value: &str| -> Result<usize> {
            value
                .parse::<usize>()
                .with_context(|| format!("Invalid line number in anchor: {}", s))
        };

        match anchor.split_once('-') {
            Some((start, end)) => {
                let end = end.strip_prefix('L').unwrap_or(end);
                Self::new(parse_line(start)?, parse_line(end)?)
                    .with_context(|| format!("Invalid line range: {}", s))
            }
            None => Self::single(parse_line(anchor)?)
                .with_context(|| format!("Invalid line range: {}", s)),
        }
    }
}
