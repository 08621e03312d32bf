//! Error types for configuration and I/O failures in the core crate
//!
//! Validation problems in the birth form are not errors in this sense: they
//! are kept as per-field state inside the form (see [`crate::form`]) and never
//! cross the crate boundary as `Err`.

use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum SajuError {
    #[error("Configuration error: {0}")]
    ConfigError(String),
    #[error("Parsing error: {0}")]
    ParsingError(String),
    #[error("I/O error: {0}")]
    IoError(String),
}

impl From<std::io::Error> for SajuError {
    fn from(err: std::io::Error) -> Self {
        SajuError::IoError(err.to_string())
    }
}

impl From<serde_yaml::Error> for SajuError {
    fn from(err: serde_yaml::Error) -> Self {
        SajuError::ParsingError(err.to_string())
    }
}
