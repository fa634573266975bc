//! Variant resolution: first variant whose constraints all hold wins.

use tracing::{debug, warn};

use crate::model::{EndpointConfig, QueryConstraint, Variant};
use crate::request::RequestParts;

/// Return the first variant, in declaration order, whose constraints are all
/// satisfied by `req`. Later variants are not considered once one matches, so
/// an unconstrained variant placed last acts as a catch-all.
pub fn resolve<'a>(endpoint: &'a EndpointConfig, req: &impl RequestParts) -> Option<&'a Variant> {
    endpoint
        .variants
        .iter()
        .enumerate()
        .find(|(idx, variant)| {
            variant
                .constraints
                .iter()
                .all(|c| satisfied(&endpoint.uri, *idx, c, req))
        })
        .map(|(_, variant)| variant)
}

fn satisfied(uri: &str, variant: usize, c: &QueryConstraint, req: &impl RequestParts) -> bool {
    let value = match req.query_first(c.name()) {
        Some(v) if !v.is_empty() => v,
        _ => {
            warn!(%uri, variant, param = c.name(), "required query param missing or empty");
            return false;
        }
    };

    match c.is_match(value) {
        Ok(true) => {
            debug!(%uri, variant, param = c.name(), pattern = c.pattern(), %value, "param matched");
            true
        }
        Ok(false) => {
            warn!(%uri, variant, param = c.name(), pattern = c.pattern(), %value, "param did not match");
            false
        }
        Err(e) => {
            warn!(%uri, variant, param = c.name(), pattern = c.pattern(), error = %e, "invalid pattern; variant skipped");
            false
        }
    }
}
