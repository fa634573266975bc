//! Static header-equality gate.

use crate::model::EndpointConfig;
use crate::request::RequestParts;

/// True when every configured header is present with exactly the configured
/// value. A missing header reads as the empty string, so it fails the same
/// way a wrong value does (unless the configured value is itself empty).
pub fn authorized(endpoint: &EndpointConfig, req: &impl RequestParts) -> bool {
    endpoint
        .headers
        .iter()
        .all(|(name, expected)| req.header(name).unwrap_or("") == expected.as_str())
}
