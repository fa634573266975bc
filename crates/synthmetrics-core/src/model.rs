//! Frozen endpoint model consumed by the gate, resolver, and generator.
//!
//! Everything here is built once at startup and shared read-only afterwards.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use regex::Regex;

use crate::error::{Result, SynthError};

/// Response format an endpoint answers in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Provider {
    /// Prometheus instant-query (`/api/v1/query`) response shape.
    Prometheus,
}

impl Provider {
    pub fn as_str(self) -> &'static str {
        match self {
            Provider::Prometheus => "Prometheus",
        }
    }
}

impl FromStr for Provider {
    type Err = SynthError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "Prometheus" => Ok(Provider::Prometheus),
            other => Err(SynthError::UnsupportedProvider(other.to_string())),
        }
    }
}

impl fmt::Display for Provider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Beta shape and affine transform of a gauge metric.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaugeShape {
    pub shift: f64,
    pub multiplier: f64,
    pub alpha: f64,
    pub beta: f64,
}

/// How a value is synthesized for a variant.
#[derive(Debug, Clone, PartialEq)]
pub enum MetricModel {
    /// `elapsed * rate`.
    Counter { rate: f64 },
    /// `shift + Beta((elapsed + 1) * alpha, (elapsed + 1) * beta) * multiplier`.
    Gauge(GaugeShape),
    /// Any other `type`; always yields [`crate::FALLBACK_VALUE`].
    Unrecognized { kind: String },
}

impl MetricModel {
    /// Select the model from its configured `type` string. Fields belonging
    /// to the other mode are dropped.
    pub fn from_kind(kind: &str, rate: f64, shape: GaugeShape) -> Self {
        match kind {
            "counter" => MetricModel::Counter { rate },
            "gauge" => MetricModel::Gauge(shape),
            other => MetricModel::Unrecognized {
                kind: other.to_string(),
            },
        }
    }

    pub fn kind(&self) -> &str {
        match self {
            MetricModel::Counter { .. } => "counter",
            MetricModel::Gauge(_) => "gauge",
            MetricModel::Unrecognized { kind } => kind,
        }
    }
}

/// Compiled form of a constraint pattern.
#[derive(Debug, Clone)]
enum Matcher {
    Compiled(Regex),
    /// Compile error text; the constraint can never be satisfied.
    Invalid(String),
}

/// A required query parameter and the pattern its first value must contain.
#[derive(Debug, Clone)]
pub struct QueryConstraint {
    name: String,
    pattern: String,
    matcher: Matcher,
}

impl QueryConstraint {
    /// Compile `pattern` once. A pattern that fails to compile is kept and
    /// reported by [`QueryConstraint::compile_error`].
    pub fn new(name: impl Into<String>, pattern: impl Into<String>) -> Self {
        let pattern = pattern.into();
        let matcher = match Regex::new(&pattern) {
            Ok(re) => Matcher::Compiled(re),
            Err(e) => Matcher::Invalid(e.to_string()),
        };
        Self {
            name: name.into(),
            pattern,
            matcher,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }

    pub fn compile_error(&self) -> Option<&str> {
        match &self.matcher {
            Matcher::Compiled(_) => None,
            Matcher::Invalid(e) => Some(e.as_str()),
        }
    }

    /// Unanchored match against `value`. `Err` carries the compile error of
    /// an invalid pattern.
    pub fn is_match(&self, value: &str) -> std::result::Result<bool, &str> {
        match &self.matcher {
            Matcher::Compiled(re) => Ok(re.is_match(value)),
            Matcher::Invalid(e) => Err(e.as_str()),
        }
    }
}

/// One configured version of the metric, selected by query constraints.
#[derive(Debug, Clone)]
pub struct Variant {
    pub constraints: Vec<QueryConstraint>,
    pub metric: MetricModel,
}

/// One served path: header gate plus ordered variants.
#[derive(Debug, Clone)]
pub struct EndpointConfig {
    pub uri: String,
    pub provider: Provider,
    /// Required header name -> exact value.
    pub headers: Vec<(String, String)>,
    /// Declaration order is resolution order.
    pub variants: Vec<Variant>,
}

/// Reject endpoint sets that register the same uri twice.
pub fn ensure_unique_uris<'a>(uris: impl IntoIterator<Item = &'a str>) -> Result<()> {
    let mut seen = HashSet::new();
    for uri in uris {
        if !seen.insert(uri) {
            return Err(SynthError::DuplicateUri(uri.to_string()));
        }
    }
    Ok(())
}
