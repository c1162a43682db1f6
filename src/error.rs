//! Error types.

use thiserror::Error;

/// Error is returned when an operation's precondition is violated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("{0}")]
    InvalidArgument(String),
}

impl Error {
    /// Creates an invalid argument error.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Error::InvalidArgument(message.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
