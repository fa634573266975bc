//! Transport layer (HTTP).
//!
//! Adapts axum requests to the core's `RequestParts` view and hands the
//! evaluation outcome to the endpoint's provider for framing.

pub mod http;
