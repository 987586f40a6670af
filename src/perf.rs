//! Invocation of the external `perf` binary
//!
//! Every call spawns one `perf` subprocess, blocks until it exits, and
//! captures stdout/stderr. `perf` must be installed separately (linux-tools
//! for the running kernel) and resolvable on PATH.

use std::io::ErrorKind;
use std::path::Path;
use std::process::Command;
use thiserror::Error;

/// Errors from running the external `perf` tool
#[derive(Error, Debug)]
pub enum PerfError {
    #[error("'perf' command not found. Install the perf tool (linux-tools) and ensure it is in your PATH")]
    ToolNotFound,

    #[error("'perf {subcommand}' failed:\n{stderr}")]
    ToolFailed {
        subcommand: &'static str,
        stderr: String,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PerfError>;

/// Run `perf report --stdio --no-children -i <input>` and capture its stdout.
pub fn report_stdout(input: &Path) -> Result<String> {
    let mut cmd = Command::new("perf");
    cmd.args(["report", "--stdio", "--no-children", "-i"]).arg(input);
    run(cmd, "report")
}

/// Run `perf annotate <symbol> --stdio -i <input>` and capture its stdout.
pub fn annotate_stdout(input: &Path, symbol: &str) -> Result<String> {
    let mut cmd = Command::new("perf");
    cmd.args(["annotate", symbol, "--stdio", "-i"]).arg(input);
    run(cmd, "annotate")
}

/// Spawn the command, wait for it, and return stdout on a zero exit status.
fn run(mut cmd: Command, subcommand: &'static str) -> Result<String> {
    tracing::debug!(?cmd, "spawning perf");
    let output = cmd.output().map_err(|e| {
        if e.kind() == ErrorKind::NotFound {
            PerfError::ToolNotFound
        } else {
            PerfError::Io(e)
        }
    })?;

    if !output.status.success() {
        tracing::debug!(status = ?output.status, subcommand, "perf exited non-zero");
        return Err(PerfError::ToolFailed {
            subcommand,
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
