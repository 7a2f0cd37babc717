use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use shiftboard_core::error::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for domain errors and adds HTTP-specific variants.
/// Implements [`IntoResponse`] to produce consistent JSON error responses.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `shiftboard_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// The request body could not be decoded into the expected record.
    #[error("Decode error: {0}")]
    Decode(String),

    /// The request body was not sent as JSON.
    #[error("Unsupported media type: {0}")]
    UnsupportedMediaType(String),

    /// A bad request with a human-readable message.
    #[error("Bad request: {0}")]
    BadRequest(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::MissingJsonContentType(_) => {
                AppError::UnsupportedMediaType(rejection.body_text())
            }
            JsonRejection::BytesRejection(_) => AppError::BadRequest(rejection.body_text()),
            _ => AppError::Decode(rejection.body_text()),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = match &self {
            // --- CoreError variants ---
            AppError::Core(core) => match core {
                CoreError::StoreUnavailable(msg) => {
                    tracing::error!(error = %msg, "Store unavailable");
                    (
                        StatusCode::SERVICE_UNAVAILABLE,
                        "STORE_UNAVAILABLE",
                        "The record store is unavailable".to_string(),
                    )
                }
            },

            // --- HTTP-specific errors ---
            AppError::Decode(msg) => {
                tracing::warn!(error = %msg, "Rejected undecodable request body");
                (StatusCode::BAD_REQUEST, "DECODE_ERROR", msg.clone())
            }
            AppError::UnsupportedMediaType(msg) => {
                tracing::warn!(error = %msg, "Rejected request body with non-JSON content type");
                (
                    StatusCode::UNSUPPORTED_MEDIA_TYPE,
                    "UNSUPPORTED_MEDIA_TYPE",
                    msg.clone(),
                )
            }
            AppError::BadRequest(msg) => {
                tracing::warn!(error = %msg, "Rejected unreadable request body");
                (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone())
            }
        };

        let body = json!({
            "error": message,
            "code": code,
        });

        (status, axum::Json(body)).into_response()
    }
}
