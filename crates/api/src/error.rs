use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;
use storefront_core::CoreError;

/// Application-level error type for HTTP handlers.
///
/// Wraps [`CoreError`] for the business error kinds and adds an internal
/// variant for faults whose detail must not leak to the wire. Implements
/// [`IntoResponse`] so `?` in a handler produces the correct JSON error
/// response: `{"errors": ...}` for field-level failures, `{"error": ...}`
/// for everything else, exactly one top-level key either way.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    /// A domain-level error from `storefront_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// An internal fault with a human-readable message (logged, not sent).
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Convenience type alias for handler return values.
pub type AppResult<T> = Result<T, AppError>;

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            AppError::Core(CoreError::Validation(errors)) => {
                (StatusCode::BAD_REQUEST, json!({ "errors": errors }))
            }
            AppError::Core(CoreError::Domain(message)) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            AppError::Core(err @ CoreError::NotFound { .. }) => {
                tracing::debug!(%err, "Lookup failed");
                (StatusCode::NOT_FOUND, json!({ "error": "Not found" }))
            }
            AppError::Core(CoreError::Unauthorized(message)) => {
                (StatusCode::UNAUTHORIZED, json!({ "error": message }))
            }
            AppError::Internal(message) => {
                tracing::error!(error = %message, "Internal error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": "An internal error occurred" }),
                )
            }
        };

        (status, Json(body)).into_response()
    }
}
