//! Shared response envelope for API handlers.
//!
//! All success bodies are wrapped as `{ "data": ... }`. Use [`Enveloped`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get
//! compile-time type safety and consistent serialization.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// A payload paired with the HTTP status it is emitted with.
///
/// Status defaults to 200. A 204 response never carries a body, whatever
/// the handler computed; construct it with [`Enveloped::no_content`].
/// Converting to a response is total over any serializable payload.
#[derive(Debug)]
pub struct Enveloped<T: Serialize> {
    value: T,
    status: StatusCode,
}

impl<T: Serialize> Enveloped<T> {
    /// Wrap a payload with status 200.
    pub fn new(value: T) -> Self {
        Self {
            value,
            status: StatusCode::OK,
        }
    }

    /// Wrap a payload with an explicit status.
    pub fn with_status(value: T, status: StatusCode) -> Self {
        Self { value, status }
    }
}

impl Enveloped<()> {
    /// An empty 204 response.
    pub fn no_content() -> Self {
        Self {
            value: (),
            status: StatusCode::NO_CONTENT,
        }
    }
}

impl<T: Serialize> IntoResponse for Enveloped<T> {
    fn into_response(self) -> Response {
        if self.status == StatusCode::NO_CONTENT {
            return self.status.into_response();
        }
        (self.status, Json(DataResponse { data: self.value })).into_response()
    }
}
