#![allow(clippy::module_name_repetitions)]

use crate::flavor::Flavor;
use std::io;
use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Result alias used by xtask helpers.
pub type TaskResult<T> = Result<T, TaskError>;

/// Errors raised by workspace commands.
#[derive(Debug, Error)]
pub enum TaskError {
    /// I/O failure encountered while reading or writing files.
    #[error(transparent)]
    Io(#[from] io::Error),
    /// I/O failure tied to a specific path.
    #[error("{}: {source}", .path.display())]
    Path {
        /// Path being accessed.
        path: PathBuf,
        /// Underlying failure.
        source: io::Error,
    },
    /// Required external tooling was unavailable.
    #[error("{0}")]
    ToolMissing(String),
    /// A subprocess exited unsuccessfully.
    #[error("{program} {}{}", describe_status(.status), describe_stderr(.stderr))]
    CommandFailed {
        /// Program name used for diagnostics.
        program: String,
        /// Exit status returned by the program.
        status: ExitStatus,
        /// Trimmed standard error of the program.
        stderr: String,
    },
    /// A build thread panicked.
    #[error("build of {0} panicked")]
    Panicked(Flavor),
    /// One or more distribution flavors failed to build.
    #[error("failed to build {}", join_flavors(.0))]
    FlavorsFailed(Vec<Flavor>),
}

fn describe_status(status: &ExitStatus) -> String {
    match status.code() {
        Some(code) => format!("exited with status code {code}"),
        None => String::from("terminated by signal"),
    }
}

fn describe_stderr(stderr: &str) -> String {
    if stderr.is_empty() {
        String::new()
    } else {
        format!(":\n{stderr}")
    }
}

fn join_flavors(flavors: &[Flavor]) -> String {
    flavors
        .iter()
        .map(Flavor::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

pub(crate) fn map_command_error(error: io::Error, program: &str, install_hint: &str) -> TaskError {
    if error.kind() == io::ErrorKind::NotFound {
        TaskError::ToolMissing(format!("{program} is unavailable; {install_hint}"))
    } else {
        TaskError::Io(error)
    }
}
