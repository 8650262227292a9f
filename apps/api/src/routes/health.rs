use axum::Json;
use serde_json::{json, Value};

/// GET / and GET /ping
/// Liveness probe; never touches the model.
pub async fn ping_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "prepmate-api",
        "message": "AI interview service is running"
    }))
}
