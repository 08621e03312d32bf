//! Mock fortune backend for client testing
//!
//! Serves the same contract as the real backend under `/api`:
//! `POST /api/fortune/analyze` answers with a canned reading per type and
//! reproduces the backend's validation errors, and `GET /api/health` reports
//! `UP`. Tests start it on an ephemeral port, optionally with an artificial
//! delay or a forced error, and inspect the request bodies it recorded.

pub mod fixtures;
pub mod handlers;
pub mod server;

pub use fixtures::{reading_for, DAILY_READING, SAJU_READING};
pub use server::{router, ForcedError, MockBackend, MockConfig, MockState};
