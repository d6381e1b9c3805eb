//! Custom error types for translation operations

use thiserror::Error;

/// Translation-related errors
#[derive(Error, Debug)]
pub enum TranslationError {
    /// Client configuration is invalid (missing API key, bad base URL)
    #[error("Configuration error: {message}")]
    Configuration {
        /// What is wrong with the configuration
        message: String,
    },

    /// Request body serialization or HTTP request construction failed
    #[error("Failed to build request: {message}")]
    RequestBuild {
        /// Which build step failed and why
        message: String,
    },

    /// Network-level failure: connect, DNS, timeout, body read
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server answered with a status other than 200
    #[error("{}", api_error_message(.status, .message))]
    Api {
        /// HTTP status code
        status: u16,
        /// Non-empty `error` field from the response body
        message: Option<String>,
    },

    /// A 200 response whose body could not be decoded
    #[error("Failed to decode response: {message}")]
    Decode {
        /// Why the body was rejected
        message: String,
    },
}

fn api_error_message(status: &u16, message: &Option<String>) -> String {
    match message {
        Some(message) => message.clone(),
        None => format!("translation failed (HTTP {})", status),
    }
}

impl TranslationError {
    pub(crate) fn config(message: impl Into<String>) -> Self {
        TranslationError::Configuration {
            message: message.into(),
        }
    }

    /// HTTP status returned by the server, for API errors
    pub fn status(&self) -> Option<u16> {
        match self {
            TranslationError::Api { status, .. } => Some(*status),
            TranslationError::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Message supplied by the server in its `error` field, if any
    pub fn server_message(&self) -> Option<&str> {
        match self {
            TranslationError::Api { message, .. } => message.as_deref(),
            _ => None,
        }
    }

    /// Whether the request timed out
    pub fn is_timeout(&self) -> bool {
        matches!(self, TranslationError::Transport(e) if e.is_timeout())
    }

    /// Whether the connection to the server could not be established
    pub fn is_connect(&self) -> bool {
        matches!(self, TranslationError::Transport(e) if e.is_connect())
    }
}

/// Result type for translation operations
pub type Result<T> = std::result::Result<T, TranslationError>;
