//! Error types for the Mochi exporter.

use thiserror::Error;

/// Mochi API errors
#[derive(Debug, Error)]
pub enum MochiError {
    /// API key missing or rejected
    #[error("Authentication error: {0}")]
    AuthError(String),

    /// Connection error (network, DNS, timeout)
    #[error("Connection error: {0}")]
    ConnectionError(String),

    /// Non-success response from the API
    #[error("Mochi API error: {0}")]
    ApiError(String),

    /// Response body did not match the expected shape
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Deck name is empty
    #[error("Deck name must not be empty")]
    EmptyDeckName,
}

impl From<reqwest::Error> for MochiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_connect() || e.is_timeout() {
            MochiError::ConnectionError(e.to_string())
        } else if e.is_decode() {
            MochiError::InvalidResponse(e.to_string())
        } else if e.is_status() {
            match e.status() {
                Some(status) if status.as_u16() == 401 || status.as_u16() == 403 => {
                    MochiError::AuthError(format!("HTTP {}", status))
                }
                Some(status) => MochiError::ApiError(format!("HTTP {}: {}", status, e)),
                None => MochiError::ApiError(e.to_string()),
            }
        } else {
            MochiError::ApiError(e.to_string())
        }
    }
}

impl From<serde_json::Error> for MochiError {
    fn from(e: serde_json::Error) -> Self {
        MochiError::InvalidResponse(format!("JSON parsing error: {}", e))
    }
}
