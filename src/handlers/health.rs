use axum::response::Json;
use serde_json::{json, Value};

/// Static liveness response
pub async fn health_check() -> Json<Value> {
    Json(json!({
        "message": "service is up and running"
    }))
}
