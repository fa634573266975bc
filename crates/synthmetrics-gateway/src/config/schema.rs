use std::collections::BTreeMap;

use serde::Deserialize;
use synthmetrics_core::error::{Result, SynthError};
use synthmetrics_core::model::ensure_unique_uris;
use synthmetrics_core::{GaugeShape, MetricModel, Provider};

/// Top-level document: a list of served endpoints.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct MetricsConfig {
    pub endpoints: Vec<UriConfig>,
}

impl MetricsConfig {
    pub fn validate(&self) -> Result<()> {
        for ep in &self.endpoints {
            ep.validate()?;
        }
        ensure_unique_uris(self.endpoints.iter().map(|ep| ep.uri.as_str()))?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UriConfig {
    pub uri: String,

    pub provider: String,

    #[serde(default)]
    pub headers: BTreeMap<String, String>,

    #[serde(default)]
    pub versions: Vec<VersionConfig>,
}

impl UriConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.uri.starts_with('/') {
            return Err(SynthError::BadConfig(format!(
                "uri must start with '/': {:?}",
                self.uri
            )));
        }
        self.provider.parse::<Provider>()?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct VersionConfig {
    #[serde(default)]
    pub params: Vec<ParamConfig>,

    #[serde(default)]
    pub metric: MetricConfig,
}

/// Query parameter name and the regex its value must contain.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ParamConfig {
    pub name: String,
    pub value: String,
}

#[derive(Debug, Deserialize, Default)]
#[serde(deny_unknown_fields)]
pub struct MetricConfig {
    #[serde(rename = "type", default)]
    pub kind: String,
    #[serde(default)]
    pub rate: f64,
    #[serde(default)]
    pub shift: f64,
    #[serde(default)]
    pub multiplier: f64,
    #[serde(default)]
    pub alpha: f64,
    #[serde(default)]
    pub beta: f64,
}

impl MetricConfig {
    /// Gauge shapes must be finite and positive for the Beta draw to be
    /// defined. Only the fields of the selected mode are checked.
    pub fn check_shape(&self) -> std::result::Result<(), String> {
        if let MetricModel::Gauge(shape) = self.to_model() {
            let positive = |x: f64| x.is_finite() && x > 0.0;
            if !positive(shape.alpha) || !positive(shape.beta) {
                return Err(format!(
                    "gauge alpha and beta must be finite and > 0 (alpha={}, beta={})",
                    shape.alpha, shape.beta
                ));
            }
        }
        Ok(())
    }

    pub fn to_model(&self) -> MetricModel {
        MetricModel::from_kind(
            &self.kind,
            self.rate,
            GaugeShape {
                shift: self.shift,
                multiplier: self.multiplier,
                alpha: self.alpha,
                beta: self.beta,
            },
        )
    }
}
