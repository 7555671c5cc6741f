//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed (network, timeout, decode)
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// 2xx response whose payload lacked the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Resource not found (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// Any other non-2xx response, carrying the server's error envelope
    #[error("Server error ({code}): {message}")]
    Api { code: String, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl ClientError {
    /// The most specific message available for user-facing surfaces:
    /// the server envelope's message when present, otherwise the
    /// generic error display.
    pub fn detail_message(&self) -> String {
        match self {
            ClientError::Api { message, .. } if !message.is_empty() => message.clone(),
            ClientError::NotFound(msg) if !msg.is_empty() => msg.clone(),
            ClientError::InvalidResponse(msg) if !msg.is_empty() => msg.clone(),
            other => other.to_string(),
        }
    }
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
