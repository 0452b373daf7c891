//! Custom error types for the application.
//!
//! Every failure of a user action is one of the [`BrowserError`] variants.
//! They are handled where the action started and surfaced as a notification
//! (or a login redirect for [`BrowserError::AuthRequired`]).

use thiserror::Error;

/// Client-side input problems caught before any request is made.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Folder name is empty or whitespace only.
    #[error("Please enter a folder name")]
    EmptyFolderName,
    /// Upload submitted with nothing selected.
    #[error("Please select files to upload")]
    EmptySelection,
}

/// Failure of a backend call or of its client-side preconditions.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BrowserError {
    /// Fetch rejected (offline, DNS, CORS) or the body could not be read.
    #[error("Network error: {0}")]
    Network(String),
    /// The backend answered 401; the session is gone.
    #[error("Authentication required")]
    AuthRequired,
    /// Non-2xx response, with the server's message when it sent one.
    #[error("{}", .message.as_deref().unwrap_or("Request failed"))]
    Backend { status: u16, message: Option<String> },
    /// Rejected before sending.
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

impl BrowserError {
    /// Text for the error notification, preferring the server's message.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Backend {
                message: Some(message),
                ..
            } => message.clone(),
            Self::Validation(err) => err.to_string(),
            _ => fallback.to_string(),
        }
    }
}
