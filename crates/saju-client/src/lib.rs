//! Client SDK for the fortune backend service
//!
//! The backend takes a birth date, time, gender and reading type and answers
//! with a free-text reading. This crate owns that boundary: it posts the
//! request, bounds the wait with a timeout, and sorts failures into
//! transport errors and structured backend errors so the caller can show the
//! right message. Nothing here retries; a retry is a fresh submission.

use async_trait::async_trait;
use saju_types::{FortuneRequest, FortuneResponse, HealthStatus};
use std::time::Duration;

pub mod error;
pub mod http_client;

pub use error::*;
pub use http_client::HttpFortuneClient;

/// FortuneClient trait for talking to a fortune backend
#[async_trait]
pub trait FortuneClient: Send + Sync {
    /// Request a reading for the given birth info
    async fn analyze(&self, request: &FortuneRequest) -> ClientResult<FortuneResponse>;

    /// Check that the backend is reachable
    async fn health_check(&self) -> ClientResult<HealthStatus>;
}

/// Factory for creating FortuneClient instances
pub struct FortuneClientFactory;

impl FortuneClientFactory {
    /// Create an HTTP client for a backend at `base_url`
    pub fn create_http_client(base_url: String, timeout: Duration) -> Box<dyn FortuneClient> {
        Box::new(HttpFortuneClient::new(base_url).with_timeout(timeout))
    }
}
