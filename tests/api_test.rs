//! HTTP tests for the z-score API

mod utils;

use std::sync::Arc;

use axum::{
    Router,
    body::Body,
    http::{Request, StatusCode},
};
use tower::ServiceExt;
use utils::bundled_store;
use who_growth::api::{ErrorResponse, HealthResponse, create_router};

fn app() -> Router {
    create_router(Arc::new(bundled_store()))
}

async fn post_zscore(app: Router, body: serde_json::Value) -> (StatusCode, serde_json::Value) {
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/zscore")
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null))
}

#[tokio::test]
async fn test_zscore_ok() {
    let (status, json) = post_zscore(
        app(),
        serde_json::json!({
            "sex": "M",
            "indicator": "length",
            "years": 2,
            "months": 0,
            "length": 87.8161
        }),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(json["z_score"].as_f64(), Some(0.0));
    assert_eq!(json["classification"].as_str(), Some("Normal"));
}

#[tokio::test]
async fn test_zscore_unknown_sex() {
    let (status, json) = post_zscore(
        app(),
        serde_json::json!({"sex": "X", "indicator": "weight", "years": 1, "months": 0, "weight": 9.5}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error: ErrorResponse = serde_json::from_value(json).unwrap();
    assert_eq!(error.detail, "Unknown sex: X");
}

#[tokio::test]
async fn test_zscore_missing_age() {
    let (status, json) = post_zscore(
        app(),
        serde_json::json!({"sex": "F", "indicator": "weight", "weight": 9.5}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"].as_str(), Some("Provide both years and months"));
}

#[tokio::test]
async fn test_zscore_missing_weight_for_wfl() {
    let (status, json) = post_zscore(
        app(),
        serde_json::json!({"sex": "M", "indicator": "wfl", "length": 65.0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json["detail"].as_str(),
        Some("Provide both length (cm) and weight (kg)")
    );
}

#[tokio::test]
async fn test_zscore_no_matching_length() {
    let (status, json) = post_zscore(
        app(),
        serde_json::json!({"sex": "F", "indicator": "wfl", "length": 65.3, "weight": 7.0}),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["detail"].as_str(), Some("No data for given age or length"));
}

#[tokio::test]
async fn test_malformed_body_rejected() {
    let response = app()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/zscore")
                .header("content-type", "application/json")
                .body(Body::from("{\"sex\": 1"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert!(response.status().is_client_error());
}

#[tokio::test]
async fn test_health() {
    let response = app()
        .oneshot(Request::builder().uri("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    let health: HealthResponse = serde_json::from_slice(&bytes).unwrap();
    assert_eq!(health.status, "ok");
    assert_eq!(health.tables, 6);
}
