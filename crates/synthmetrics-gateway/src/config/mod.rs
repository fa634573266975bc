//! Endpoint config loader (strict parsing).
//!
//! The document is read once at startup, from a local file or an HTTP(S) URL.
//! Any failure here is fatal: the process must not serve a partial config.

pub mod schema;

use std::fs;
use std::path::{Path, PathBuf};

use synthmetrics_core::error::{Result, SynthError};

pub use schema::{MetricConfig, MetricsConfig, ParamConfig, UriConfig, VersionConfig};

/// Where the config document lives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigSource {
    Url(String),
    File(PathBuf),
}

impl ConfigSource {
    /// `http://` and `https://` locations are fetched; anything else is a path.
    pub fn parse(s: &str) -> Self {
        if s.starts_with("http://") || s.starts_with("https://") {
            ConfigSource::Url(s.to_string())
        } else {
            ConfigSource::File(PathBuf::from(s))
        }
    }
}

pub async fn load(source: &ConfigSource) -> Result<MetricsConfig> {
    let cfg = match source {
        ConfigSource::Url(url) => load_from_url(url).await?,
        ConfigSource::File(path) => load_from_file(path)?,
    };
    tracing::info!(source = ?source, endpoints = cfg.endpoints.len(), "config loaded");
    Ok(cfg)
}

pub fn load_from_file(path: impl AsRef<Path>) -> Result<MetricsConfig> {
    let path = path.as_ref();
    let s = fs::read_to_string(path)
        .map_err(|e| SynthError::Fetch(format!("read {} failed: {e}", path.display())))?;
    load_from_str(&s)
}

pub async fn load_from_url(url: &str) -> Result<MetricsConfig> {
    let resp = reqwest::get(url)
        .await
        .and_then(|r| r.error_for_status())
        .map_err(|e| SynthError::Fetch(format!("GET {url} failed: {e}")))?;
    let body = resp
        .text()
        .await
        .map_err(|e| SynthError::Fetch(format!("reading body of {url} failed: {e}")))?;
    load_from_str(&body)
}

pub fn load_from_str(s: &str) -> Result<MetricsConfig> {
    let cfg: MetricsConfig = serde_yaml::from_str(s)
        .map_err(|e| SynthError::BadConfig(format!("invalid yaml: {e}")))?;
    cfg.validate()?;
    Ok(cfg)
}
