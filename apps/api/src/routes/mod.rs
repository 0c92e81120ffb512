pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::analysis::handlers;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::banner_handler))
        .route("/health", get(health::health_handler))
        .route("/analyze", post(handlers::handle_analyze))
        .route("/analyze-text", post(handlers::handle_analyze_text))
        .with_state(state)
}
