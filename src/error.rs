//! # Errors
//!
//! The two ways a status render can fail. Neither is recovered from locally:
//! the binary prints the error to stderr and exits with status 1 without
//! writing anything to stdout.

use thiserror::Error;

/// Errors produced while querying tmux or rendering a status segment.
#[derive(Debug, Error)]
pub enum StatusError {
    /// Arguments that parse but cannot be used, such as a blank session name.
    #[error("{0}")]
    Usage(String),

    /// A tmux invocation could not be run, exited non-zero, or printed
    /// output that could not be parsed.
    #[error("tmux query `{command}` failed: {reason}")]
    QueryFailure { command: String, reason: String },
}

impl StatusError {
    pub(crate) fn query(command: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::QueryFailure {
            command: command.into(),
            reason: reason.into(),
        }
    }
}
