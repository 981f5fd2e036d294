use std::sync::Arc;

use axum::body::Body;
use axum::http::{header, Method, Request, Response, StatusCode};
use http_body_util::BodyExt;
use tower::ServiceExt;

use storefront_api::auth::jwt::JwtConfig;
use storefront_api::auth::password::hash_password;
use storefront_api::config::ServerConfig;
use storefront_api::router::{build_app_router, App};
use storefront_api::state::AppState;
use storefront_services::{ProductsService, StoresService, UsersService};

/// Email of the user seeded into every test app.
pub const TEST_EMAIL: &str = "tester@storefront.local";

/// Password of the user seeded into every test app.
pub const TEST_PASSWORD: &str = "correct-horse-battery-staple";

/// Build a test `ServerConfig` with safe defaults.
///
/// Uses `http://localhost:5173` as CORS origin (matching the dev default)
/// and a 30-second request timeout.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry_mins: 60,
        },
        bootstrap_email: TEST_EMAIL.to_string(),
        bootstrap_password: TEST_PASSWORD.to_string(),
    }
}

/// Build the full application with fresh in-memory services and one seeded
/// user.
///
/// This mirrors the assembly in `main.rs` so integration tests exercise the
/// same middleware stack (method override, slash normalization, CORS,
/// request ID, timeout, tracing, panic recovery) that production uses. The
/// returned state shares the services with the app, so tests can inspect
/// them directly.
pub fn build_test_app() -> (App, AppState) {
    let config = test_config();

    let users = Arc::new(UsersService::new());
    users
        .create(TEST_EMAIL, hash_password(TEST_PASSWORD).unwrap())
        .unwrap();

    let state = AppState {
        products: Arc::new(ProductsService::new()),
        stores: Arc::new(StoresService::new()),
        users,
        config: Arc::new(config.clone()),
    };

    (build_app_router(state.clone(), &config), state)
}

/// A bearer token the test app's auth gate accepts.
pub fn auth_token(state: &AppState) -> String {
    let user = state.users.find_by_email(TEST_EMAIL).unwrap();
    storefront_api::auth::jwt::generate_access_token(user.id, &user.email, &state.config.jwt)
        .unwrap()
}

/// Send a request through the composed app service.
///
/// `token` adds an `Authorization: Bearer` header; `body` is sent as JSON.
pub async fn request(
    app: &App,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(serde_json::to_vec(&json).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    app.clone().oneshot(request).await.unwrap()
}

pub async fn get(app: &App, uri: &str, token: Option<&str>) -> Response<Body> {
    request(app, Method::GET, uri, token, None).await
}

pub async fn post_json(
    app: &App,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, Method::POST, uri, token, Some(body)).await
}

pub async fn put_json(
    app: &App,
    uri: &str,
    token: Option<&str>,
    body: serde_json::Value,
) -> Response<Body> {
    request(app, Method::PUT, uri, token, Some(body)).await
}

pub async fn delete(app: &App, uri: &str, token: Option<&str>) -> Response<Body> {
    request(app, Method::DELETE, uri, token, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Collect a response body as raw bytes.
pub async fn body_bytes(response: Response<Body>) -> axum::body::Bytes {
    response.into_body().collect().await.unwrap().to_bytes()
}

/// Assert a 200 status and return the parsed body.
pub async fn expect_ok(response: Response<Body>) -> serde_json::Value {
    assert_eq!(response.status(), StatusCode::OK);
    body_json(response).await
}
