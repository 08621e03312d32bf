use async_trait::async_trait;
use saju_types::{ErrorResponse, FortuneRequest, FortuneResponse, HealthStatus};
use std::time::Duration;

use crate::{ClientError, ClientResult, FortuneClient};

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for the fortune backend
pub struct HttpFortuneClient {
    base_url: String,
    client: reqwest::Client,
    timeout: Duration,
}

impl HttpFortuneClient {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
            timeout: DEFAULT_TIMEOUT,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path.trim_start_matches('/'))
    }

    fn transport_error(&self, err: reqwest::Error) -> ClientError {
        if err.is_timeout() {
            ClientError::Timeout(self.timeout)
        } else if err.is_decode() {
            ClientError::decode(err.to_string())
        } else {
            ClientError::network(err.to_string())
        }
    }

    /// Turn a non-success response into a `Backend` error, keeping the
    /// backend's message when the body is a structured error.
    async fn backend_error(&self, response: reqwest::Response) -> ClientError {
        let status = response.status().as_u16();
        let body = match response.text().await {
            Ok(body) => body,
            Err(e) => return self.transport_error(e),
        };

        let message = match serde_json::from_str::<ErrorResponse>(&body) {
            Ok(error) => error.user_message().map(str::to_string),
            Err(_) => {
                log::debug!("Error body is not structured JSON: {}", body);
                None
            }
        };

        ClientError::Backend { status, message }
    }
}

#[async_trait]
impl FortuneClient for HttpFortuneClient {
    async fn analyze(&self, request: &FortuneRequest) -> ClientResult<FortuneResponse> {
        let url = self.endpoint("fortune/analyze");
        log::info!("[API Request] POST {}", url);
        log::debug!("Request body: {:?}", request);

        let response = self
            .client
            .post(&url)
            .header("Content-Type", "application/json")
            .timeout(self.timeout)
            .json(request)
            .send()
            .await
            .map_err(|e| {
                log::error!("[API Error] POST {}: {}", url, e);
                self.transport_error(e)
            })?;

        log::info!("[API Response] {} {}", response.status(), url);

        if !response.status().is_success() {
            let err = self.backend_error(response).await;
            log::error!("[API Error] POST {}: {}", url, err);
            return Err(err);
        }

        let body = response
            .text()
            .await
            .map_err(|e| self.transport_error(e))?;

        serde_json::from_str::<FortuneResponse>(&body).map_err(|e| {
            log::error!("Failed to decode reading from {}: {}", url, e);
            ClientError::decode(e.to_string())
        })
    }

    async fn health_check(&self) -> ClientResult<HealthStatus> {
        let url = self.endpoint("health");
        log::info!("[API Request] GET {}", url);

        let response = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| self.transport_error(e))?;

        log::info!("[API Response] {} {}", response.status(), url);

        if !response.status().is_success() {
            return Err(self.backend_error(response).await);
        }

        response
            .json::<HealthStatus>()
            .await
            .map_err(|e| self.transport_error(e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_trimmed() {
        let client = HttpFortuneClient::new("http://localhost:8080/api/".to_string());
        assert_eq!(client.base_url(), "http://localhost:8080/api");
        assert_eq!(
            client.endpoint("fortune/analyze"),
            "http://localhost:8080/api/fortune/analyze"
        );
        assert_eq!(client.endpoint("/health"), "http://localhost:8080/api/health");
    }

    #[test]
    fn test_default_timeout() {
        let client = HttpFortuneClient::new("http://localhost:8080/api".to_string());
        assert_eq!(client.timeout(), Duration::from_secs(30));

        let client = client.with_timeout(Duration::from_millis(250));
        assert_eq!(client.timeout(), Duration::from_millis(250));
    }
}
