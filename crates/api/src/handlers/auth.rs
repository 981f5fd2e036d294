//! Handlers for the `/auth` resource.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;
use serde::{Deserialize, Serialize};
use storefront_core::{CoreError, DbId};

use crate::auth::jwt::generate_access_token;
use crate::auth::password::verify_password;
use crate::error::{AppError, AppResult};
use crate::response::Enveloped;
use crate::state::AppState;

/// Request body for `POST /auth/login`.
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Successful authentication response.
#[derive(Debug, Serialize)]
pub struct AuthResponse {
    pub token: String,
    /// Access token lifetime in seconds.
    pub expires_in: i64,
    pub user: UserInfo,
}

/// Public user info embedded in [`AuthResponse`].
#[derive(Debug, Serialize)]
pub struct UserInfo {
    pub id: DbId,
    pub email: String,
}

/// POST /api/v1/auth/login
///
/// Authenticate with email + password. Returns a bearer access token.
pub async fn login(
    State(state): State<AppState>,
    Json(input): Json<LoginRequest>,
) -> AppResult<impl IntoResponse> {
    // Unknown email and wrong password are indistinguishable to the caller.
    let invalid = || AppError::Core(CoreError::Unauthorized("Invalid email or password".into()));

    let user = state.users.find_by_email(&input.email).ok_or_else(invalid)?;

    let password_valid = verify_password(&input.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;
    if !password_valid {
        return Err(invalid());
    }

    let token = generate_access_token(user.id, &user.email, &state.config.jwt)
        .map_err(|e| AppError::Internal(format!("Token generation error: {e}")))?;

    tracing::info!(user_id = user.id, "User logged in");

    Ok(Enveloped::new(AuthResponse {
        token,
        expires_in: state.config.jwt.access_token_expiry_mins * 60,
        user: UserInfo {
            id: user.id,
            email: user.email,
        },
    }))
}
