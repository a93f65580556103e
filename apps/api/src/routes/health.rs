use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Liveness check, no side effects.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
