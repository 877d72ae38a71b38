#![allow(dead_code)]

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use serde_json::Value;
use tower::ServiceExt;

use lightbulb_service::{
    routes, services::registry::LightbulbRegistry, utils::config::AppConfig, AppState,
};

/// Storage-backed app seeded with the given names, all switched off
pub fn setup_test_app(seeds: &[&str]) -> Router {
    let config = AppConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["*".to_string()],
        request_timeout_seconds: 30,
        seed_lightbulbs: seeds.iter().map(|s| s.to_string()).collect(),
    };

    routes::app_router(AppState::in_memory(&config))
}

/// Standalone app seeded the same way the standalone binary is by default
pub fn setup_standalone_app() -> Router {
    let config = AppConfig::standalone();
    routes::standalone_router(LightbulbRegistry::seeded(config.seed_lightbulbs))
}

/// Sends a request and returns the status with the body parsed as JSON
/// (`Value::Null` for an empty body).
pub async fn send(app: &Router, method: &str, uri: &str, body: Body) -> (StatusCode, Value) {
    let request = Request::builder()
        .uri(uri)
        .method(method)
        .body(body)
        .unwrap();

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();

    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let json = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, json)
}

pub async fn send_empty(app: &Router, method: &str, uri: &str) -> (StatusCode, Value) {
    send(app, method, uri, Body::empty()).await
}
