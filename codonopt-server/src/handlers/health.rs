use axum::response::Json;
use serde_json::{Value, json};

pub async fn root_handler() -> Json<&'static str> {
    Json("Hello World")
}

/// Liveness probe. The engine has no external dependencies to check.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
    }))
}
