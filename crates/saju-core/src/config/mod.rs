//! Configuration for the saju client
//!
//! Resolution order: built-in defaults, then the YAML file, then the
//! `SAJU_API_BASE_URL` environment variable. Command-line flags are applied
//! on top by the binary.

pub mod loader;
pub mod types;

pub use loader::*;
pub use types::*;
