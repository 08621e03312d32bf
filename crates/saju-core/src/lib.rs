//! Core logic for the saju fortune client.
//!
//! This crate contains everything the client does without touching the
//! network: collecting and validating a birth moment, and turning a reading
//! returned by the fortune backend into collapsible sections.
//!
//! # Architecture Overview
//!
//! - **Birth form**: per-session field state, ordered date/time validation and
//!   derivation of the request payload
//! - **Sections**: heading-based splitting of readings, keyword classification
//!   into icons and colors, body line formatting and expand/collapse state
//! - **Catalog**: the reading types offered and whether they are available
//! - **Configuration**: backend location and logging defaults loaded from YAML
//!   with an environment override

pub mod catalog;
pub mod config;
pub mod errors;
pub mod form;
pub mod sections;

pub use catalog::{FortuneCard, FORTUNE_CARDS};
pub use config::*;
pub use errors::SajuError;
pub use form::{BirthForm, FieldStatus, FormErrors, FormField, ValidationError, ValidationErrorKind};
pub use sections::{ContentLine, ExpansionState, FortuneSection, SectionParser, SectionTable, Span};
