//! synthmetrics core: endpoint model, request gating, variant resolution, and
//! synthetic value generation.
//!
//! This crate is transport-agnostic. The gateway adapts HTTP requests to
//! [`RequestParts`] and frames [`Outcome`] values into provider responses; the
//! decision and numeric logic lives here so it can be tested without a server.
//!
//! # Defensive guarantees
//! Panics, `unwrap`, and `expect` are compile-denied here
//! (`#![deny(clippy::panic, clippy::unwrap_used, clippy::expect_used)]`).
//! Bad patterns and odd metric definitions degrade to a per-request outcome
//! instead of taking the serving process down.

#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]

pub mod auth;
pub mod clock;
pub mod engine;
pub mod error;
pub mod generator;
pub mod model;
pub mod request;
pub mod resolver;

/// Shared result type.
pub use error::{Result, SynthError};

pub use clock::StartTime;
pub use engine::{evaluate, Outcome};
pub use generator::{generate, BetaSampler, ThreadRngBeta, FALLBACK_VALUE};
pub use model::{EndpointConfig, GaugeShape, MetricModel, Provider, QueryConstraint, Variant};
pub use request::{RequestParts, RequestSnapshot};
