//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing input files and running the slackdown
//! binary used across multiple test files.

#![allow(dead_code)]

use anyhow::Result;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::TempDir;

/// Commit message body shaped like a dependency update merge request.
pub const MERGE_REQUEST_BODY: &str = "\
Bumps dependencies.

* [ ] [hashdiff](https://github.com/liufengyun/hashdiff): [`0.3.9...0.4.0`](https://github.com/liufengyun/hashdiff/compare/v0.3.9...v0.4.0)
* [x] ![screenshot](/uploads/screenshot.png)

See [changelog]() for details.
";

/// Writes file into temporary directory.
///
/// # Returns
///
/// Temporary directory and path of the written file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_input(name: &str, content: &str) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join(name);
    std::fs::write(&path, content)?;
    Ok((dir, path))
}

/// Runs slackdown binary with arguments and optional standard input.
///
/// # Arguments
///
/// * `args`: Command line arguments
/// * `stdin`: Text piped to the process, if any
///
/// # Errors
///
/// Returns error if the process cannot be spawned or awaited
pub fn run_slackdown(args: &[&str], stdin: Option<&str>) -> Result<Output> {
    let mut child = Command::new(env!("CARGO_BIN_EXE_slackdown"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()?;

    {
        let mut pipe = child
            .stdin
            .take()
            .ok_or_else(|| anyhow::anyhow!("Child stdin unavailable"))?;
        if let Some(text) = stdin {
            pipe.write_all(text.as_bytes())?;
        }
    }

    Ok(child.wait_with_output()?)
}

/// Converts path to UTF8 argument.
///
/// # Errors
///
/// Returns error if path contains invalid UTF8
pub fn path_arg(path: &Path) -> Result<&str> {
    path.to_str()
        .ok_or_else(|| anyhow::anyhow!("Path contains invalid UTF8: {}", path.display()))
}
