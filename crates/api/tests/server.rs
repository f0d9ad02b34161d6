//! Health, metrics, and end-to-end HTTP tests

use api::{create_router, AppState};
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use data_validator::Field;
use inference_engine::{save_artifact, ModelAdapter, PricePipeline};
use serde_json::{json, Value};
use std::sync::Arc;
use tower::ServiceExt;

fn pipeline() -> PricePipeline {
    PricePipeline::new(100_000.0)
        .with_numeric(Field::Seats, 5_000.0)
        .with_categories(Field::Company, &[("Honda", 20_000.0)])
        .with_categories(Field::Fuel, &[("Petrol", 0.0)])
}

async fn get_json(state: AppState, uri: &str) -> (StatusCode, Value) {
    let app = create_router(Arc::new(state));
    let request = Request::builder().uri(uri).body(Body::empty()).unwrap();
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&bytes).unwrap_or(Value::Null))
}

#[tokio::test]
async fn test_health_reports_loaded_model() {
    let state = AppState::new(ModelAdapter::from_model(pipeline(), "carprediction.bin"));
    let (status, body) = get_json(state, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["model"]["loaded"], true);
    assert_eq!(body["model"]["artifact"], "carprediction.bin");
}

#[tokio::test]
async fn test_health_degraded_after_failed_load() {
    let path = std::env::temp_dir().join("car-price-server-test-missing.bin");
    let state = AppState::new(ModelAdapter::load(&path));
    let (status, body) = get_json(state, "/health").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "degraded");
    assert_eq!(body["model"]["loaded"], false);
}

#[tokio::test]
async fn test_metrics_absent_without_recorder() {
    let state = AppState::new(ModelAdapter::unavailable("none"));
    let (status, _) = get_json(state, "/metrics").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_end_to_end_with_artifact() {
    let path = std::env::temp_dir().join(format!("car-price-{}-e2e.bin", std::process::id()));
    save_artifact(&pipeline(), &path).unwrap();
    let state = Arc::new(AppState::new(ModelAdapter::load(&path)));

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, create_router(state)).await.unwrap();
    });

    let response = reqwest::Client::new()
        .post(format!("http://{}/predict", addr))
        .header("Origin", "http://localhost:3000")
        .json(&json!([{
            "Company": "HONDA",
            "year": "2019",
            "km_driven": "30000",
            "fuel": "Petrol",
            "transmission": "Manual",
            "owner": "First Owner",
            "seller_type": "Dealer",
            "seats": 5
        }]))
        .send()
        .await
        .unwrap();

    assert_eq!(response.status(), reqwest::StatusCode::OK);
    assert_eq!(
        response
            .headers()
            .get("access-control-allow-origin")
            .and_then(|v| v.to_str().ok()),
        Some("*")
    );
    let body: Value = response.json().await.unwrap();
    assert_eq!(body["predicted_price"], 145_000.0);

    let _ = std::fs::remove_file(&path);
}
