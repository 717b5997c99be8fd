//! Command line configuration.

use crate::lines::LineRange;
use crate::snippet::SnippetOptions;
use anyhow::{Result, bail};
use clap::Parser;
use std::path::{Path, PathBuf};

/// Input path that selects standard input.
pub const STDIN_PATH: &str = "-";

/// Command line configuration for slackdown.
#[derive(Debug, Clone, Parser)]
#[command(name = "slackdown", version, about, long_about = None)]
pub struct Config {
    /// Input file, `-` reads standard input
    #[arg(default_value = STDIN_PATH)]
    pub input: PathBuf,

    /// Line range to keep (L12, L12-20, 12-20)
    #[arg(short, long)]
    pub lines: Option<LineRange>,

    /// Maximum number of lines to output, values below 1 disable truncation
    #[arg(short, long, default_value_t = 0, allow_negative_numbers = true)]
    pub max_lines: isize,

    /// Skip Markdown to mrkdwn conversion
    #[arg(long)]
    pub raw: bool,

    /// Enable debug logging
    #[arg(long)]
    pub debug: bool,
}

impl Config {
    /// Parses configuration from command line arguments.
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Whether input comes from standard input.
    pub fn reads_stdin(&self) -> bool {
        self.input == Path::new(STDIN_PATH)
    }

    /// Validates configuration.
    ///
    /// # Errors
    ///
    /// Returns error if the input file does not exist.
    pub fn validate(&self) -> Result<()> {
        if !self.reads_stdin() && !self.input.is_file() {
            bail!("Input file does not exist: {}", self.input.display());
        }

        Ok(())
    }

    /// Returns snippet pipeline options described by this configuration.
    pub fn snippet_options(&self) -> SnippetOptions {
        SnippetOptions {
            lines: self.lines,
            max_lines: self.max_lines,
            mrkdwn: !self.raw,
        }
    }
}
