use axum::{routing::{get, post}, Router};
use std::sync::Arc;
use super::AppState;
use super::handlers;

pub fn routes(state: Arc<AppState>) -> Router {
    Router::new()
        // Health (public)
        .route("/health", get(handlers::health::health_check))
        // Registration (public)
        .route("/api/register", post(handlers::register::register))
        .with_state(state)
}
