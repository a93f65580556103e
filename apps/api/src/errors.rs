use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::improvement::dispatcher::{ErrorKind, ImproveError};

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Invalid model choice: {0}")]
    InvalidModelChoice(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Provider error: {0}")]
    Provider(String),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ImproveError> for AppError {
    fn from(err: ImproveError) -> Self {
        let message = err.to_string();
        match err.kind() {
            ErrorKind::InvalidSelector => AppError::InvalidModelChoice(message),
            ErrorKind::Config => AppError::Config(message),
            ErrorKind::ProviderFailure => AppError::Provider(message),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::InvalidModelChoice(msg) => {
                tracing::debug!("Rejected request: {msg}");
                (
                    StatusCode::BAD_REQUEST,
                    "INVALID_MODEL_CHOICE",
                    "Invalid model choice".to_string(),
                )
            }
            AppError::Config(msg) => {
                tracing::error!("Configuration error: {msg}");
                (StatusCode::INTERNAL_SERVER_ERROR, "CONFIG_ERROR", msg.clone())
            }
            AppError::Provider(msg) => {
                tracing::error!("Provider error: {msg}");
                (StatusCode::BAD_GATEWAY, "PROVIDER_ERROR", msg.clone())
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        };

        let body = Json(json!({
            "message": message,
            "code": code
        }));

        (status, body).into_response()
    }
}
