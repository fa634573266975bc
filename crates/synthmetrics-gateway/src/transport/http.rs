//! Catch-all HTTP handler for configured metric endpoints.

use axum::{
    extract::{Query, State},
    http::{HeaderMap, StatusCode, Uri},
    response::{IntoResponse, Response},
};

use synthmetrics_core::{evaluate, RequestParts};

use crate::app_state::AppState;
use crate::provider;

/// Borrowed view over the parts of an HTTP request the core reads.
pub struct HttpRequest<'a> {
    query: &'a [(String, String)],
    headers: &'a HeaderMap,
}

impl<'a> HttpRequest<'a> {
    pub fn new(query: &'a [(String, String)], headers: &'a HeaderMap) -> Self {
        Self { query, headers }
    }
}

impl RequestParts for HttpRequest<'_> {
    fn query_first(&self, name: &str) -> Option<&str> {
        self.query
            .iter()
            .find(|(k, _)| k == name)
            .map(|(_, v)| v.as_str())
    }

    // HeaderMap lookups are case-insensitive. `HeaderValue::to_str` rejects
    // any non-ASCII byte, so decode the raw bytes; only non-UTF-8 reads as absent.
    fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(name)
            .and_then(|v| std::str::from_utf8(v.as_bytes()).ok())
    }
}

/// Query pairs in request order. A malformed query string carries no params.
pub fn query_pairs(uri: &Uri) -> Vec<(String, String)> {
    match Query::<Vec<(String, String)>>::try_from_uri(uri) {
        Ok(Query(pairs)) => pairs,
        Err(e) => {
            tracing::warn!(%uri, error = %e, "unparseable query string");
            Vec::new()
        }
    }
}

pub async fn serve_metric(State(app): State<AppState>, uri: Uri, headers: HeaderMap) -> Response {
    let Some(endpoint) = app.endpoint_for(uri.path()) else {
        return (StatusCode::NOT_FOUND, "404 page not found").into_response();
    };

    let query = query_pairs(&uri);
    let req = HttpRequest::new(&query, &headers);
    let outcome = evaluate(&endpoint, &req, app.start().elapsed_secs(), app.sampler());

    tracing::debug!(path = uri.path(), uri = %endpoint.uri, ?outcome, "request evaluated");
    provider::respond(endpoint.provider, outcome)
}
