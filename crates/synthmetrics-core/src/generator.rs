//! Synthetic value generation from a metric model and process uptime.

use rand_distr::{Beta, Distribution};
use tracing::{debug, warn};

use crate::model::{GaugeShape, MetricModel};

/// Returned for metric kinds we do not know how to generate.
pub const FALLBACK_VALUE: f64 = 21.7639;

/// Draws one sample in `[0, 1]` from `Beta(alpha, beta)`.
pub trait BetaSampler: Send + Sync {
    fn sample(&self, alpha: f64, beta: f64) -> f64;
}

/// Samples with the calling thread's RNG.
#[derive(Debug, Clone, Copy, Default)]
pub struct ThreadRngBeta;

impl BetaSampler for ThreadRngBeta {
    fn sample(&self, alpha: f64, beta: f64) -> f64 {
        match Beta::new(alpha, beta) {
            Ok(dist) => dist.sample(&mut rand::thread_rng()),
            Err(e) => {
                // Non-positive gauge shapes load with a warning and land here.
                warn!(alpha, beta, error = %e, "invalid beta shape");
                f64::NAN
            }
        }
    }
}

/// Compute the value of `model` after `elapsed_secs` of uptime.
pub fn generate(model: &MetricModel, elapsed_secs: f64, sampler: &dyn BetaSampler) -> f64 {
    match model {
        MetricModel::Counter { rate } => {
            debug!(rate, elapsed_secs, "counter");
            elapsed_secs * rate
        }
        MetricModel::Gauge(shape) => gauge(shape, elapsed_secs, sampler),
        MetricModel::Unrecognized { kind } => {
            warn!(%kind, value = FALLBACK_VALUE, "unrecognized metric type; returning fallback");
            FALLBACK_VALUE
        }
    }
}

fn gauge(shape: &GaugeShape, elapsed_secs: f64, sampler: &dyn BetaSampler) -> f64 {
    // +1 keeps both shapes strictly positive at startup.
    let scale = elapsed_secs + 1.0;
    let alpha = scale * shape.alpha;
    let beta = scale * shape.beta;
    let draw = sampler.sample(alpha, beta);
    debug!(alpha, beta, draw, shift = shape.shift, multiplier = shape.multiplier, "gauge");
    shape.shift + draw * shape.multiplier
}
