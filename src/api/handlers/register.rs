use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use serde_json::Value;
use std::sync::Arc;

use crate::api::validators::registration::body_error;
use crate::api::AppState;
use crate::db::models::RegistrationView;
use crate::error::{AppError, AppResult};

/// POST /api/register
///
/// Malformed or non-JSON bodies are reported as a validation failure on
/// the `body` field instead of axum's plain-text rejection.
pub async fn register(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> AppResult<(StatusCode, Json<RegistrationView>)> {
    let Json(body) = payload.map_err(|e| {
        tracing::debug!("Rejected request body: {}", e.body_text());
        AppError::ValidationFailed(body_error().into())
    })?;

    let view = state.registrations.register(&body).await?;
    Ok((StatusCode::CREATED, Json(view)))
}
