//! Unified SDK error types.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    #[error("API error: {0}")]
    Api(#[from] ApiError),

    #[error("Verify error: {0}")]
    Verify(#[from] VerifyError),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Validation error: {0}")]
    Validation(String),
}

/// Result type alias for SDK operations.
pub type SdkResult<T> = Result<T, SdkError>;

/// Failures of the single HTTP round trip itself.
#[derive(Error, Debug)]
pub enum TransportError {
    /// Connection, DNS or timeout failure.
    #[cfg(feature = "http")]
    #[error("Network failure: {0}")]
    Network(#[from] reqwest::Error),

    /// The response body is not a valid envelope.
    #[error("Undecodable response (HTTP {status}): {source}")]
    Decode {
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("Request cancelled")]
    Cancelled,
}

/// Extra hints the Bot API attaches to some failures.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseParameters {
    /// The group has been migrated to a supergroup with this identifier.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub migrate_to_chat_id: Option<i64>,
    /// Seconds left to wait before the request can be repeated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub retry_after: Option<i64>,
}

/// The remote explicitly reported failure (`"ok": false`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiError {
    pub description: String,
    pub error_code: Option<i64>,
    pub parameters: Option<ResponseParameters>,
}

impl ApiError {
    pub fn new(description: impl Into<String>, error_code: Option<i64>) -> Self {
        Self {
            description: description.into(),
            error_code,
            parameters: None,
        }
    }

    /// Seconds the API asked us to back off, if any.
    pub fn retry_after(&self) -> Option<i64> {
        self.parameters.as_ref().and_then(|p| p.retry_after)
    }

    /// New chat identifier after a group to supergroup migration.
    pub fn migrate_to_chat_id(&self) -> Option<i64> {
        self.parameters.as_ref().and_then(|p| p.migrate_to_chat_id)
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.error_code {
            Some(code) => write!(f, "[{}] {}", code, self.description),
            None => f.write_str(&self.description),
        }
    }
}

impl std::error::Error for ApiError {}

/// Login widget verification could not run.
///
/// A hash mismatch is NOT an error; it is `Ok(false)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum VerifyError {
    #[error("Login claim is not defined")]
    MissingClaim,

    #[error("Internal verification failure: {0}")]
    Internal(String),
}
