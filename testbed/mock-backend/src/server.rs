use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use saju_types::ErrorResponse;
use serde_json::Value;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

use crate::handlers::{analyze_fortune, health_check};

/// Behavior knobs for a mock backend instance.
#[derive(Debug, Clone, Default)]
pub struct MockConfig {
    /// Wait this long before answering `/fortune/analyze`.
    pub delay: Option<Duration>,
    /// Answer every `/fortune/analyze` call with this instead of a reading.
    pub forced_error: Option<ForcedError>,
}

impl MockConfig {
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn with_forced_error(mut self, error: ForcedError) -> Self {
        self.forced_error = Some(error);
        self
    }
}

/// A canned failure response.
#[derive(Debug, Clone)]
pub struct ForcedError {
    pub status: u16,
    pub body: String,
}

impl ForcedError {
    /// A structured `{status, error, message}` body.
    pub fn structured(status: u16, error: &str, message: &str) -> Self {
        let body = serde_json::to_string(&ErrorResponse::new(status, error, message))
            .unwrap_or_default();
        Self { status, body }
    }

    /// Any body, sent as-is.
    pub fn raw(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

impl IntoResponse for ForcedError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
        (status, [(header::CONTENT_TYPE, "application/json")], self.body).into_response()
    }
}

#[derive(Clone)]
pub struct MockState {
    pub config: Arc<MockConfig>,
    requests: Arc<Mutex<Vec<Value>>>,
}

impl MockState {
    pub fn new(config: MockConfig) -> Self {
        Self {
            config: Arc::new(config),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    pub fn record(&self, body: Value) {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(body);
    }

    pub fn requests(&self) -> Vec<Value> {
        self.requests
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

pub fn router(state: MockState) -> Router {
    Router::new()
        .route("/api/fortune/analyze", post(analyze_fortune))
        .route("/api/health", get(health_check))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// A mock backend running on a background task.
pub struct MockBackend {
    addr: SocketAddr,
    shutdown_tx: tokio::sync::oneshot::Sender<()>,
    state: MockState,
}

impl MockBackend {
    /// Start on an ephemeral localhost port.
    pub async fn start(config: MockConfig) -> anyhow::Result<Self> {
        Self::bind("127.0.0.1:0", config).await
    }

    pub async fn bind(addr: &str, config: MockConfig) -> anyhow::Result<Self> {
        let state = MockState::new(config);
        let app = router(state.clone());

        let listener = TcpListener::bind(addr).await?;
        let addr = listener.local_addr()?;
        log::info!("Mock fortune backend listening on {}", addr);

        let (shutdown_tx, shutdown_rx) = tokio::sync::oneshot::channel::<()>();

        tokio::spawn(async move {
            let result = axum::serve(listener, app)
                .with_graceful_shutdown(async {
                    shutdown_rx.await.ok();
                    log::info!("Mock fortune backend shutting down");
                })
                .await;
            if let Err(e) = result {
                log::error!("Mock fortune backend error: {}", e);
            }
        });

        Ok(Self {
            addr,
            shutdown_tx,
            state,
        })
    }

    /// Base URL to hand to a client, including the `/api` prefix.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }

    /// Bodies received by `/fortune/analyze`, in arrival order.
    pub fn requests(&self) -> Vec<Value> {
        self.state.requests()
    }

    pub async fn shutdown(self) {
        if self.shutdown_tx.send(()).is_err() {
            log::warn!("Mock fortune backend already stopped");
        }
        tokio::time::sleep(Duration::from_millis(50)).await;
    }
}
