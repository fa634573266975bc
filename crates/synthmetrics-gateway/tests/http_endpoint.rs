//! HTTP behaviour of the gateway router.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]
#![allow(clippy::panic)]

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{HeaderValue, Request, StatusCode},
    Router,
};
use tower::ServiceExt;

use synthmetrics_core::BetaSampler;
use synthmetrics_gateway::provider::prometheus::format_value;
use synthmetrics_gateway::{app_state::AppState, config, router::build_router};

struct FixedBeta(f64);

impl BetaSampler for FixedBeta {
    fn sample(&self, _alpha: f64, _beta: f64) -> f64 {
        self.0
    }
}

const CONFIG: &str = r#"
- uri: /api/v1/query
  provider: Prometheus
  headers:
    Authorization: "Bearer secret"
  versions:
    - params:
        - name: version
          value: canary
      metric:
        type: gauge
        shift: 1
        multiplier: 2
        alpha: 1
        beta: 1
    - metric:
        type: summary
- uri: /open/
  provider: Prometheus
  versions:
    - params:
        - name: version
          value: "^v[0-9]+$"
      metric:
        type: counter
        rate: 0
- uri: /people
  provider: Prometheus
  headers:
    X-User: "josé"
  versions:
    - metric:
        type: counter
        rate: 0
- uri: /flat
  provider: Prometheus
  versions:
    - metric:
        type: gauge
        multiplier: 1
        alpha: 0
        beta: 1
"#;

fn app() -> Router {
    let cfg = config::load_from_str(CONFIG).unwrap();
    let state = AppState::with_sampler(cfg, Arc::new(FixedBeta(0.5))).unwrap();
    build_router(state)
}

async fn call(uri: &str, auth: Option<&str>) -> (StatusCode, String) {
    let mut req = Request::builder().method("GET").uri(uri);
    if let Some(token) = auth {
        req = req.header("authorization", token);
    }
    let resp = app()
        .oneshot(req.body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = resp.status();
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

fn sample_value(body: &str) -> String {
    let v: serde_json::Value = serde_json::from_str(body).unwrap();
    assert_eq!(v["status"], "success");
    assert_eq!(v["data"]["resultType"], "vector");
    let point = &v["data"]["result"][0]["value"];
    assert!(point[0].as_f64().unwrap() > 0.0);
    point[1].as_str().unwrap().to_string()
}

#[tokio::test]
async fn canary_gets_gauge_value() {
    let (status, body) = call("/api/v1/query?query=up&version=canary", Some("Bearer secret")).await;
    assert_eq!(status, StatusCode::OK);
    // 1 + 0.5 * 2
    assert_eq!(sample_value(&body), "2");
}

#[tokio::test]
async fn other_versions_fall_back_to_catch_all() {
    let (status, body) = call("/api/v1/query?version=stable", Some("Bearer secret")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sample_value(&body), "21.7639");

    let (status, body) = call("/api/v1/query", Some("Bearer secret")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sample_value(&body), "21.7639");
}

#[tokio::test]
async fn header_mismatch_is_401() {
    let (status, body) = call("/api/v1/query?version=canary", Some("Bearer nope")).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, "headers are not matching");

    let (status, _) = call("/api/v1/query?version=canary", None).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn no_matching_version_is_500() {
    let (status, body) = call("/open/query?version=latest", None).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, "500 - cannot find any matching version in request!");
}

#[tokio::test]
async fn subtree_endpoint_serves_nested_paths() {
    let (status, body) = call("/open/api/v1/query?version=v2", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(sample_value(&body), "0");
}

#[tokio::test]
async fn unknown_path_is_404() {
    let (status, _) = call("/nope", Some("Bearer secret")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn any_method_is_served() {
    let req = Request::builder()
        .method("POST")
        .uri("/api/v1/query?version=canary")
        .header("Authorization", "Bearer secret")
        .body(Body::empty())
        .unwrap();
    let resp = app().oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

async fn call_as_user(user: HeaderValue) -> StatusCode {
    let req = Request::builder()
        .uri("/people")
        .header("x-user", user)
        .body(Body::empty())
        .unwrap();
    app().oneshot(req).await.unwrap().status()
}

#[tokio::test]
async fn non_ascii_header_value_compares_exactly() {
    let ok = HeaderValue::from_bytes("josé".as_bytes()).unwrap();
    assert_eq!(call_as_user(ok).await, StatusCode::OK);

    let other = HeaderValue::from_bytes("jose".as_bytes()).unwrap();
    assert_eq!(call_as_user(other).await, StatusCode::UNAUTHORIZED);

    // Latin-1 "josé" is not UTF-8 and reads as a missing header.
    let latin1 = HeaderValue::from_bytes(b"jos\xe9").unwrap();
    assert_eq!(call_as_user(latin1).await, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn unusable_gauge_shape_serves_nan() {
    // The real sampler, not FixedBeta: Beta(0, 1) has no draw.
    let state = AppState::new(config::load_from_str(CONFIG).unwrap()).unwrap();
    let req = Request::builder().uri("/flat").body(Body::empty()).unwrap();
    let resp = build_router(state).oneshot(req).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();
    assert_eq!(sample_value(std::str::from_utf8(&bytes).unwrap()), "NaN");
}

#[test]
fn sample_value_spelling() {
    assert_eq!(format_value(20.0), "20");
    assert_eq!(format_value(21.7639), "21.7639");
    assert_eq!(format_value(0.00001), "0.00001");
    assert_eq!(format_value(f64::NAN), "NaN");
    assert_eq!(format_value(f64::INFINITY), "+Inf");
    assert_eq!(format_value(f64::NEG_INFINITY), "-Inf");
}
