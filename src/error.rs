//! Frontend Errors
//!
//! `TodoError` displays the message shown to the user; the transport
//! detail stays in its source for the console log.

use thiserror::Error;

/// Failure talking to the todo backend
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("server responded with status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Body(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum TodoError {
    #[error("Failed to fetch todos.")]
    Fetch(#[source] ApiError),
    #[error("Failed to add new todo.")]
    Create(#[source] ApiError),
}

impl TodoError {
    /// Underlying cause, for logging
    pub fn detail(&self) -> &ApiError {
        match self {
            TodoError::Fetch(e) | TodoError::Create(e) => e,
        }
    }
}
