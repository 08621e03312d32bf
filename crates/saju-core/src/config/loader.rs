//! Configuration loader for YAML files and environment resolution

use crate::config::types::*;
use crate::errors::SajuError;
use std::env;
use std::path::{Path, PathBuf};
use tokio::fs;

pub struct ConfigLoader;

impl ConfigLoader {
    /// `<config dir>/saju/config.yaml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("saju").join("config.yaml"))
    }

    /// Load from `path`, or from the default location when `path` is `None`.
    /// An explicit path must exist; a missing default file means defaults.
    pub async fn load(path: Option<&Path>) -> Result<SajuConfig, SajuError> {
        if let Some(path) = path {
            return Self::from_file(path).await;
        }

        match Self::default_path() {
            Some(default_path) if default_path.exists() => Self::from_file(&default_path).await,
            _ => {
                log::debug!("No configuration file found, using defaults");
                Self::from_defaults()
            }
        }
    }

    /// Built-in defaults with the environment applied.
    pub fn from_defaults() -> Result<SajuConfig, SajuError> {
        let mut config = SajuConfig::default();
        Self::resolve_environment(&mut config);
        config.validate()?;
        Ok(config)
    }

    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<SajuConfig, SajuError> {
        let path = path.as_ref();

        let content = fs::read_to_string(path).await.map_err(|e| {
            log::error!("Failed to read config file {}: {}", path.display(), e);
            SajuError::from(e)
        })?;

        log::info!("Loading configuration from {}", path.display());
        Self::from_str(&content)
    }

    /// Parse YAML, apply the environment and validate.
    pub fn from_str(content: &str) -> Result<SajuConfig, SajuError> {
        let mut config: SajuConfig = if content.trim().is_empty() {
            SajuConfig::default()
        } else {
            serde_yaml::from_str(content).map_err(|e| {
                log::error!("Failed to parse YAML config: {}", e);
                SajuError::from(e)
            })?
        };

        Self::resolve_environment(&mut config);
        config.validate()?;
        Ok(config)
    }

    /// Apply `SAJU_API_BASE_URL` when it is set to a non-blank value.
    pub fn resolve_environment(config: &mut SajuConfig) {
        if let Ok(base_url) = env::var(BASE_URL_ENV) {
            let base_url = base_url.trim();
            if !base_url.is_empty() {
                log::info!("Using backend base URL from {}: {}", BASE_URL_ENV, base_url);
                config.api.base_url = base_url.to_string();
            }
        }
    }
}
