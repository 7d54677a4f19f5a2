use thiserror::Error;

use crate::api::validators::FieldErrors;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed")]
    ValidationFailed(FieldErrors),

    #[error("Email already registered")]
    DuplicateEmail,

    #[error("Identity number already registered")]
    DuplicateIdentity,

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        use axum::http::StatusCode;
        use axum::Json;
        use serde_json::json;

        match &self {
            AppError::ValidationFailed(errors) => (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "status": "error",
                    "message": self.to_string(),
                    "errors": errors,
                })),
            )
                .into_response(),
            AppError::DuplicateEmail | AppError::DuplicateIdentity => (
                StatusCode::CONFLICT,
                Json(json!({ "status": "error", "message": self.to_string() })),
            )
                .into_response(),
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!("Request failed: {}", self);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "status": "error",
                        "message": "An error occurred while processing your request",
                        "error": self.to_string(),
                    })),
                )
                    .into_response()
            }
        }
    }
}

pub type AppResult<T> = Result<T, AppError>;
