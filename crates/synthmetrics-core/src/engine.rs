//! Per-request evaluation: gate, resolve, generate.

use tracing::info;

use crate::auth::authorized;
use crate::generator::{generate, BetaSampler};
use crate::model::EndpointConfig;
use crate::request::RequestParts;
use crate::resolver::resolve;

/// Result of evaluating one request against one endpoint.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    /// Header gate failed; variants were not consulted.
    Unauthorized,
    /// No variant's constraints were satisfied.
    NoMatch,
    Value(f64),
}

/// Run the header gate, then the resolver, then the generator.
pub fn evaluate(
    endpoint: &EndpointConfig,
    req: &impl RequestParts,
    elapsed_secs: f64,
    sampler: &dyn BetaSampler,
) -> Outcome {
    if !authorized(endpoint, req) {
        return Outcome::Unauthorized;
    }

    let Some(variant) = resolve(endpoint, req) else {
        return Outcome::NoMatch;
    };

    let value = generate(&variant.metric, elapsed_secs, sampler);
    info!(uri = %endpoint.uri, kind = variant.metric.kind(), value, "generated");
    Outcome::Value(value)
}
