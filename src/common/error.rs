//! Error types for the cache simulator.

use thiserror::Error;

/// Convenient Result type alias.
///
/// Instead of writing `Result<T, Error>` everywhere, we can write `Result<T>`.
pub type Result<T> = std::result::Result<T, Error>;

/// All possible errors in the simulator.
///
/// Only programmer errors and I/O failures are represented here. A lookup,
/// removal or move that does not find its target is an expected outcome and
/// is reported through `Option` or `bool` instead.
#[derive(Debug, Error)]
pub enum Error {
    /// A required argument was missing or out of range.
    ///
    /// Raised synchronously by the call that received the bad value:
    /// a zero capacity, a zero bucket count or an empty address token.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// I/O error while reading a workload.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Build an [`Error::InvalidArgument`] from anything printable.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Error::InvalidArgument(msg.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::invalid_argument("capacity must be positive");
        assert_eq!(
            format!("{}", err),
            "Invalid argument: capacity must be positive"
        );
    }

    #[test]
    fn test_io_error_conversion() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
        let err: Error = io_err.into();

        match err {
            Error::Io(_) => {} // Success
            _ => panic!("Expected Io error"),
        }
    }

    #[test]
    fn test_io_error_has_source() {
        use std::error::Error as _;

        let io_err = std::io::Error::new(std::io::ErrorKind::Other, "boom");
        let err = Error::from(io_err);
        assert!(err.source().is_some());
        assert!(Error::invalid_argument("x").source().is_none());
    }
}
