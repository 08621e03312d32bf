//! Error types for the fortune backend client.

use saju_types::FortuneType;
use std::time::Duration;
use thiserror::Error;

/// Result type alias for client operations.
pub type ClientResult<T> = std::result::Result<T, ClientError>;

/// Message shown for every transport-level failure.
pub const NETWORK_ERROR_MESSAGE: &str = "네트워크 오류가 발생했습니다";

/// Message shown when the health check fails.
pub const HEALTH_CHECK_MESSAGE: &str = "서버 연결을 확인할 수 없습니다";

/// Fallback when the backend fails without a usable message.
pub fn fallback_message(fortune_type: FortuneType) -> String {
    format!("{} 해석 중 오류가 발생했습니다", fortune_type.display_name())
}

/// Errors that can occur while talking to the backend.
#[derive(Error, Debug)]
pub enum ClientError {
    /// No response within the configured timeout
    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    /// Connection, DNS or other transport failure
    #[error("Network error: {0}")]
    Network(String),

    /// The backend answered with a non-success status
    #[error("Backend returned HTTP {status}: {}", .message.as_deref().unwrap_or("no message"))]
    Backend { status: u16, message: Option<String> },

    /// A success status with a body that is not a reading
    #[error("Unexpected response body: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Timeout and connection failures; everything the backend never saw.
    pub fn is_transport(&self) -> bool {
        matches!(self, ClientError::Timeout(_) | ClientError::Network(_))
    }

    /// The text to show the user for a failed `fortune_type` request.
    pub fn user_message(&self, fortune_type: FortuneType) -> String {
        match self {
            ClientError::Timeout(_) | ClientError::Network(_) => NETWORK_ERROR_MESSAGE.to_string(),
            ClientError::Backend {
                message: Some(message),
                ..
            } => message.clone(),
            ClientError::Backend { message: None, .. } | ClientError::Decode(_) => {
                fallback_message(fortune_type)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_transport_errors_share_one_message() {
        let timeout = ClientError::Timeout(Duration::from_secs(30));
        let network = ClientError::network("connection refused");
        assert!(timeout.is_transport());
        assert!(network.is_transport());
        assert_eq!(timeout.user_message(FortuneType::Saju), NETWORK_ERROR_MESSAGE);
        assert_eq!(network.user_message(FortuneType::Daily), NETWORK_ERROR_MESSAGE);
    }

    #[test]
    fn test_backend_message_surfaced_verbatim() {
        let err = ClientError::Backend {
            status: 400,
            message: Some("생년월일이 미래 날짜일 수 없습니다.".to_string()),
        };
        assert!(!err.is_transport());
        assert_eq!(err.user_message(FortuneType::Saju), "생년월일이 미래 날짜일 수 없습니다.");
    }

    #[test]
    fn test_fallback_messages() {
        let err = ClientError::Backend {
            status: 502,
            message: None,
        };
        assert_eq!(err.user_message(FortuneType::Saju), "사주 해석 중 오류가 발생했습니다");
        assert_eq!(
            ClientError::decode("missing field `result`").user_message(FortuneType::Daily),
            "오늘의 운세 해석 중 오류가 발생했습니다"
        );
    }
}
