//! Bearer-token authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use storefront_core::{CoreError, DbId};

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from a JWT Bearer token in the
/// `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires
/// authentication. Extractors run before the handler body, so a request
/// with a missing or invalid token is rejected with 401 before any service
/// call happens:
///
/// ```ignore
/// async fn my_handler(user: AuthUser, ...) -> AppResult<impl IntoResponse> {
///     tracing::info!(user_id = user.user_id, "handling request");
///     ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal id (from `claims.sub`).
    pub user_id: DbId,
    /// The user's email address.
    pub email: String,
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized(
                    "Missing Authorization header".into(),
                ))
            })?;

        let token = auth_header.strip_prefix("Bearer ").ok_or_else(|| {
            AppError::Core(CoreError::Unauthorized(
                "Invalid Authorization format. Expected: Bearer <token>".into(),
            ))
        })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|_| {
            AppError::Core(CoreError::Unauthorized("Invalid or expired token".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.sub,
            email: claims.email,
        })
    }
}
