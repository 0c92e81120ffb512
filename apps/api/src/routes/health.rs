use axum::Json;
use serde_json::{json, Value};

/// GET /
/// Status/usage banner mirroring the service's front door.
pub async fn banner_handler() -> Json<Value> {
    Json(json!({
        "message": "Resume Hidden Talent Analyzer is running!",
        "usage": "Send a POST request to /analyze with a PDF file."
    }))
}

/// GET /health
/// Returns a simple status object with service version.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION"),
        "service": "talent-api"
    }))
}
