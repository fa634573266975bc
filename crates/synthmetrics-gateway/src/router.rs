//! Axum router wiring.
//!
//! Configured uris are not registered as axum routes: every request goes to
//! one fallback handler that looks the path up in the frozen endpoint table.
//! This keeps arbitrary configured paths (including `:` or `*` segments)
//! literal.

use axum::Router;

use crate::{app_state::AppState, transport};

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .fallback(transport::http::serve_metric)
        .with_state(state)
}
