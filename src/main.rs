use anyhow::{Context, Result};
use slackdown::Config;
use std::fs;
use std::io::{self, Read, Write};
use tracing::debug;
use tracing_subscriber::EnvFilter;

/// Initializes stderr logging.
///
/// `--debug` forces debug level; otherwise `RUST_LOG` applies, falling back
/// to warnings only so stdout stays reserved for the snippet.
fn init_tracing(debug: bool) {
    let filter = if debug {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}

/// Reads input text from file or standard input.
fn read_input(config: &Config) -> Result<String> {
    if config.reads_stdin() {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read standard input")?;
        return Ok(text);
    }

    fs::read_to_string(&config.input)
        .with_context(|| format!("Failed to read {}", config.input.display()))
}

fn main() -> Result<()> {
    let config = Config::parse();
    init_tracing(config.debug);
    config.validate().context("Invalid configuration")?;

    let text = read_input(&config)?;
    debug!(bytes = text.len(), input = %config.input.display(), "read input");

    let options = config.snippet_options();
    debug!(?options, "rendering snippet");

    let snippet =
        slackdown::render_snippet(&text, &options).context("Failed to render snippet")?;

    let mut stdout = io::stdout().lock();
    stdout
        .write_all(snippet.as_bytes())
        .context("Failed to write output")?;
    stdout.flush().context("Failed to flush output")?;

    Ok(())
}
