//! Prometheus instant-query response shape.
//!
//! ```json
//! {"status":"success","data":{"resultType":"vector","result":[{"value":[1556823494.744,"21.7639"]}]}}
//! ```

use std::time::{SystemTime, UNIX_EPOCH};

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::Serialize;
use synthmetrics_core::Outcome;

pub const UNAUTHORIZED_BODY: &str = "headers are not matching";
pub const NO_MATCH_BODY: &str = "500 - cannot find any matching version in request!";

#[derive(Debug, Serialize)]
pub struct QueryResponse {
    pub status: &'static str,
    pub data: QueryData,
}

#[derive(Debug, Serialize)]
pub struct QueryData {
    #[serde(rename = "resultType")]
    pub result_type: &'static str,
    pub result: Vec<VectorSample>,
}

#[derive(Debug, Serialize)]
pub struct VectorSample {
    /// `[unix_seconds, "value"]`
    pub value: (f64, String),
}

impl QueryResponse {
    pub fn single(at: f64, value: f64) -> Self {
        Self {
            status: "success",
            data: QueryData {
                result_type: "vector",
                result: vec![VectorSample {
                    value: (at, format_value(value)),
                }],
            },
        }
    }
}

pub fn respond(outcome: Outcome) -> Response {
    match outcome {
        Outcome::Unauthorized => (StatusCode::UNAUTHORIZED, UNAUTHORIZED_BODY).into_response(),
        Outcome::NoMatch => (StatusCode::INTERNAL_SERVER_ERROR, NO_MATCH_BODY).into_response(),
        Outcome::Value(v) => {
            (StatusCode::OK, Json(QueryResponse::single(now_secs(), v))).into_response()
        }
    }
}

/// Sample values are strings in Prometheus, with its spelling of the
/// non-finite values.
pub fn format_value(v: f64) -> String {
    if v.is_nan() {
        "NaN".to_string()
    } else if v == f64::INFINITY {
        "+Inf".to_string()
    } else if v == f64::NEG_INFINITY {
        "-Inf".to_string()
    } else {
        v.to_string()
    }
}

// Millisecond resolution, like Prometheus timestamps.
fn now_secs() -> f64 {
    let ms = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();
    ms as f64 / 1000.0
}
