//! Error payloads and parse errors for the fortune contract.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while interpreting contract values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TypesError {
    /// An unknown fortune type string was encountered.
    #[error("Unknown fortune type: {value}")]
    UnknownFortuneType { value: String },

    /// An unknown gender string was encountered.
    #[error("Unknown gender: {value}")]
    UnknownGender { value: String },
}

/// Structured error body returned by the backend.
///
/// Every field is optional on decode; only `message` is ever shown to users.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<u16>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl ErrorResponse {
    pub fn new(status: u16, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            error: Some(error.into()),
            message: Some(message.into()),
            path: None,
            timestamp: None,
        }
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_timestamp(mut self, timestamp: impl Into<String>) -> Self {
        self.timestamp = Some(timestamp.into());
        self
    }

    /// The user-facing message, if the backend supplied a non-blank one.
    pub fn user_message(&self) -> Option<&str> {
        self.message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
    }
}
