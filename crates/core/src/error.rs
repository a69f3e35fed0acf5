//! Core error types for Verdict operations.
//!
//! Domain failures travel as ordinary data inside [`Outcome`](crate::Outcome).
//! This enum only covers what the library itself can report.

use thiserror::Error;

/// Boxed error accepted at a capture boundary.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Core error type for Verdict operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("cannot build a non-empty list from an empty sequence")]
    EmptyList,

    #[error("captured failure: {message}")]
    Captured {
        message: String,
        #[source]
        source: BoxError,
    },
}

impl Error {
    /// Wrap an error raised behind a `try_to` boundary.
    pub fn captured(source: impl Into<BoxError>) -> Self {
        let source = source.into();
        Self::Captured {
            message: source.to_string(),
            source,
        }
    }

    /// Returns the machine-readable error code for this error.
    ///
    /// Error codes are always in `SCREAMING_SNAKE_CASE` format.
    #[must_use]
    pub const fn code(&self) -> &'static str {
        match self {
            Self::EmptyList => "EMPTY_LIST",
            Self::Captured { .. } => "CAPTURED",
        }
    }
}

/// Result alias for fallible Verdict operations.
pub type Result<T> = std::result::Result<T, Error>;
