//! Type definitions for the fortune backend contract
//!
//! This crate holds the payloads exchanged between the saju client and the
//! fortune backend service: the birth-info request, the reading response and
//! the structured error body. Client, CLI and the mock backend all depend on
//! it so the JSON shapes cannot drift apart.
//!
//! ## Example
//!
//! ```rust
//! use saju_types::{FortuneRequest, FortuneType, Gender};
//!
//! let request = FortuneRequest {
//!     birth_date: "1990-05-03".to_string(),
//!     birth_time: "14:30".to_string(),
//!     gender: Gender::Male,
//!     fortune_type: FortuneType::Saju,
//! };
//!
//! let json = serde_json::to_value(&request).unwrap();
//! assert_eq!(json["birthDate"], "1990-05-03");
//! assert_eq!(json["fortuneType"], "saju");
//! ```

pub mod error;
pub mod types;

pub use error::*;
pub use types::*;
