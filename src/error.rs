//! Error type shared by the whole crate.

use std::path::PathBuf;

/// Errors raised while loading input or computing subnet relationships.
///
/// None of these are recovered from; the run stops at the first one.
#[derive(Debug, thiserror::Error)]
pub enum NetError {
    #[error("usage: netfuncs infile.json")]
    Usage,
    #[error("{0}")]
    Format(String),
    #[error("invalid input {}: {source}", .path.display())]
    Input {
        path: PathBuf,
        source: serde_path_to_error::Error<serde_json::Error>,
    },
    #[error("cannot read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to write report: {0}")]
    Write(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, NetError>;

impl NetError {
    /// Shorthand for a [`NetError::Format`] with the given message.
    pub fn format<S: Into<String>>(msg: S) -> Self {
        NetError::Format(msg.into())
    }
}
