//! Health check endpoint.

use axum::Json;
use serde_json::{json, Value};

pub const SERVICE_NAME: &str = "Power Platform Code Analyzer";

pub async fn health_check() -> Json<Value> {
    Json(json!({
        "status": "healthy",
        "service": SERVICE_NAME,
    }))
}
