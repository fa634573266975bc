//! Provider response framing.
//!
//! Each `Provider` turns a core `Outcome` into the HTTP response its
//! monitoring backend would send.

pub mod prometheus;

use axum::response::Response;
use synthmetrics_core::{Outcome, Provider};

pub fn respond(provider: Provider, outcome: Outcome) -> Response {
    match provider {
        Provider::Prometheus => prometheus::respond(outcome),
    }
}
