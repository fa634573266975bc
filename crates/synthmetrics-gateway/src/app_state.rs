//! Shared application state for the synthmetrics gateway.
//!
//! Everything here is frozen after construction: the endpoint table, the
//! process start time, and the Beta sampler. Handlers clone the `Arc` and
//! read without locking.

use std::sync::Arc;

use synthmetrics_core::error::Result;
use synthmetrics_core::{
    BetaSampler, EndpointConfig, Provider, QueryConstraint, StartTime, ThreadRngBeta, Variant,
};

use crate::config::{MetricsConfig, UriConfig};
use crate::dispatch::EndpointTable;

#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    endpoints: EndpointTable,
    start: StartTime,
    sampler: Arc<dyn BetaSampler>,
}

impl AppState {
    /// Build application state with the thread-local RNG sampler.
    /// Returns Result so main can handle errors gracefully (no panic).
    pub fn new(cfg: MetricsConfig) -> Result<Self> {
        Self::with_sampler(cfg, Arc::new(ThreadRngBeta))
    }

    pub fn with_sampler(cfg: MetricsConfig, sampler: Arc<dyn BetaSampler>) -> Result<Self> {
        // 1) Compile endpoint runtimes (patterns are compiled once, here)
        let endpoints = cfg
            .endpoints
            .iter()
            .map(compile_endpoint)
            .collect::<Result<Vec<_>>>()?;

        // 2) Freeze the path table
        let endpoints = EndpointTable::new(endpoints)?;

        // 3) Start the clock last, right before serving
        Ok(Self {
            inner: Arc::new(AppStateInner {
                endpoints,
                start: StartTime::now(),
                sampler,
            }),
        })
    }

    pub fn endpoints(&self) -> &EndpointTable {
        &self.inner.endpoints
    }

    pub fn endpoint_for(&self, path: &str) -> Option<Arc<EndpointConfig>> {
        self.inner.endpoints.lookup(path)
    }

    pub fn start(&self) -> StartTime {
        self.inner.start
    }

    pub fn sampler(&self) -> &dyn BetaSampler {
        self.inner.sampler.as_ref()
    }
}

fn compile_endpoint(u: &UriConfig) -> Result<EndpointConfig> {
    let provider = u.provider.parse::<Provider>()?;

    let variants: Vec<Variant> = u
        .versions
        .iter()
        .enumerate()
        .map(|(i, v)| {
            let constraints = v
                .params
                .iter()
                .map(|p| {
                    let c = QueryConstraint::new(p.name.as_str(), p.value.as_str());
                    if let Some(e) = c.compile_error() {
                        // Not fatal: the variant just never matches.
                        tracing::warn!(uri=%u.uri, variant=i, param=%p.name, pattern=%p.value, error=%e, "invalid param pattern");
                    }
                    c
                })
                .collect();
            if let Err(e) = v.metric.check_shape() {
                // Served anyway: requests reaching this variant get NaN.
                tracing::warn!(uri=%u.uri, variant=i, error=%e, "gauge shape is not usable");
            }
            Variant {
                constraints,
                metric: v.metric.to_model(),
            }
        })
        .collect();

    if u.versions.is_empty() {
        tracing::warn!(uri=%u.uri, "endpoint has no versions; every request will get no match");
    }

    tracing::debug!(uri=%u.uri, provider=%provider, variants=variants.len(), "endpoint compiled");

    Ok(EndpointConfig {
        uri: u.uri.clone(),
        provider,
        headers: u.headers.iter().map(|(k, v)| (k.clone(), v.clone())).collect(),
        variants,
    })
}
