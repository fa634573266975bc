//! Value generator behaviour.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Mutex;

use synthmetrics_core::{
    generate, BetaSampler, GaugeShape, MetricModel, ThreadRngBeta, FALLBACK_VALUE,
};

/// Returns a fixed draw and records the shapes it was asked for.
struct FixedBeta {
    draw: f64,
    seen: Mutex<Vec<(f64, f64)>>,
}

impl FixedBeta {
    fn new(draw: f64) -> Self {
        Self {
            draw,
            seen: Mutex::new(Vec::new()),
        }
    }
}

impl BetaSampler for FixedBeta {
    fn sample(&self, alpha: f64, beta: f64) -> f64 {
        self.seen.lock().unwrap().push((alpha, beta));
        self.draw
    }
}

fn gauge(shift: f64, multiplier: f64, alpha: f64, beta: f64) -> MetricModel {
    MetricModel::Gauge(GaugeShape {
        shift,
        multiplier,
        alpha,
        beta,
    })
}

#[test]
fn counter_is_elapsed_times_rate() {
    let m = MetricModel::Counter { rate: 2.0 };
    assert_eq!(generate(&m, 10.0, &ThreadRngBeta), 20.0);
    assert_eq!(generate(&m, 0.0, &ThreadRngBeta), 0.0);
}

#[test]
fn gauge_scales_shapes_by_elapsed_plus_one() {
    let sampler = FixedBeta::new(0.25);
    let v = generate(&gauge(10.0, 4.0, 2.0, 3.0), 4.0, &sampler);
    assert_eq!(v, 11.0);
    assert_eq!(*sampler.seen.lock().unwrap(), vec![(10.0, 15.0)]);
}

#[test]
fn gauge_at_zero_elapsed_uses_configured_shapes() {
    let sampler = FixedBeta::new(0.5);
    generate(&gauge(0.0, 1.0, 1.5, 0.5), 0.0, &sampler);
    assert_eq!(*sampler.seen.lock().unwrap(), vec![(1.5, 0.5)]);
}

#[test]
fn gauge_with_unit_transform_stays_in_unit_interval() {
    let m = gauge(0.0, 1.0, 1.0, 1.0);
    for elapsed in [0.0, 0.5, 3.0, 120.0, 86_400.0] {
        for _ in 0..200 {
            let v = generate(&m, elapsed, &ThreadRngBeta);
            assert!((0.0..=1.0).contains(&v), "{v} out of range at {elapsed}s");
        }
    }
}

#[test]
fn unrecognized_kind_returns_fallback() {
    let m = MetricModel::from_kind(
        "histogram",
        5.0,
        GaugeShape {
            shift: 1.0,
            multiplier: 1.0,
            alpha: 1.0,
            beta: 1.0,
        },
    );
    assert_eq!(m.kind(), "histogram");
    assert_eq!(generate(&m, 1234.0, &ThreadRngBeta), FALLBACK_VALUE);
    assert_eq!(FALLBACK_VALUE, 21.7639);
}

#[test]
fn invalid_shape_degrades_to_nan() {
    assert!(ThreadRngBeta.sample(0.0, 1.0).is_nan());
}
