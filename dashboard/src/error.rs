//! Error handling for the inventory dashboard
//!
//! Read failures are logged and swallowed at the view layer (the view
//! renders empty); write failures surface through the notification seam
//! with the message string below. Nothing is retried.

use thiserror::Error;

/// Application error types
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] config::ConfigError),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-success response from the hosted backend's table API; carries the
    /// backend's own message string verbatim
    #[error("Backend error ({status}): {message}")]
    Backend { status: u16, message: String },

    #[error("Authentication failed: {0}")]
    Auth(String),

    #[error("Failed to decode backend response: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        AppError::Validation(errors.to_string())
    }
}

impl AppError {
    /// Message shown to the user in error notifications
    pub fn user_message(&self) -> String {
        match self {
            AppError::Backend { message, .. } if !message.is_empty() => message.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type alias for the dashboard
pub type AppResult<T> = Result<T, AppError>;
