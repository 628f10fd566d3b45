//! Chat client error types.

use thiserror::Error;

/// Errors that can occur when calling the chat-completion API.
#[derive(Debug, Error)]
pub enum ChatError {
    /// Connection, timeout, or transport failure.
    #[error("http request failed: {0}")]
    Network(#[from] reqwest::Error),

    /// Provider returned a non-success HTTP status.
    #[error("provider error (status {status}): {body}")]
    Provider { status: u16, body: String },

    /// The request could not be constructed.
    #[error("invalid request: {0}")]
    InvalidRequest(&'static str),
}
