//! Error types for Livraria Core

use thiserror::Error;

/// Result type alias using LivrariaError
pub type Result<T> = std::result::Result<T, LivrariaError>;

/// Result type for a single fetch of the book list
pub type FetchResult<T> = std::result::Result<T, FetchError>;

/// Errors raised while setting up a book source
#[derive(Debug, Error)]
pub enum LivrariaError {
    #[error("Invalid endpoint: {0}")]
    InvalidEndpoint(String),

    #[error("HTTP client error: {0}")]
    Client(String),
}

/// Errors that end a fetch of the book list
///
/// The display text of each variant is the message shown to the user
/// when the catalog view lands in its error state.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FetchError {
    /// No response was received, or its body could not be read
    #[error("{0}")]
    Transport(String),

    /// A response arrived with a non-success status
    #[error("Network response was not ok")]
    Status(u16),

    /// The body was not a list of book records
    #[error("{0}")]
    Decode(String),
}

impl FetchError {
    /// Build a transport error from an error and its whole source chain
    pub fn transport(err: &(dyn std::error::Error + 'static)) -> Self {
        let mut message = err.to_string();
        let mut source = err.source();
        while let Some(cause) = source {
            let cause = cause.to_string();
            if !message.contains(&cause) {
                message.push_str(": ");
                message.push_str(&cause);
            }
            source = source.and_then(|s| s.source());
        }
        FetchError::Transport(message)
    }
}
