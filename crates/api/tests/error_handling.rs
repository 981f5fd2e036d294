//! Tests for `AppError` → HTTP response mapping.
//!
//! These tests verify that each error kind produces the exact status code
//! and wire body the envelope contract requires. They do NOT need an HTTP
//! server -- they call `IntoResponse` directly on `AppError` values -- except
//! the fallback test at the bottom, which exercises the composed app.

mod common;

use axum::http::StatusCode;
use axum::response::IntoResponse;
use http_body_util::BodyExt;
use storefront_api::error::AppError;
use storefront_core::{CoreError, FieldErrors};

/// Helper: convert an `AppError` into its status code and parsed JSON body.
async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let json: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    (status, json)
}

// ---------------------------------------------------------------------------
// Test: CoreError::Validation maps to 400 with an `errors` map
// ---------------------------------------------------------------------------

#[tokio::test]
async fn validation_error_returns_400_with_field_map() {
    let mut fields = FieldErrors::new();
    fields.insert("name".to_string(), vec!["required".to_string()]);
    let err = AppError::Core(CoreError::Validation(fields));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json, serde_json::json!({"errors": {"name": ["required"]}}));
}

// ---------------------------------------------------------------------------
// Test: CoreError::Domain maps to 400 with an `error` message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn domain_error_returns_400_with_message() {
    let err = AppError::Core(CoreError::Domain("stock cannot go negative".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        json,
        serde_json::json!({"error": "stock cannot go negative"})
    );
}

// ---------------------------------------------------------------------------
// Test: CoreError::NotFound maps to 404 with the fixed body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn not_found_error_returns_404_with_fixed_body() {
    let err = AppError::Core(CoreError::NotFound {
        entity: "Product",
        id: 42,
    });

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    // Entity and id stay in the logs; the body never varies.
    assert_eq!(json, serde_json::json!({"error": "Not found"}));
}

// ---------------------------------------------------------------------------
// Test: CoreError::Unauthorized maps to 401
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unauthorized_error_returns_401() {
    let err = AppError::Core(CoreError::Unauthorized("no token provided".into()));

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json, serde_json::json!({"error": "no token provided"}));
}

// ---------------------------------------------------------------------------
// Test: AppError::Internal maps to 500 and sanitizes the message
// ---------------------------------------------------------------------------

#[tokio::test]
async fn internal_error_returns_500_and_sanitizes_message() {
    let err = AppError::Internal("secret database credentials leaked".into());

    let (status, json) = error_to_response(err).await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);

    // The response body must NOT contain the original error details.
    let body_text = json.to_string();
    assert!(
        !body_text.contains("secret"),
        "Internal error response must not leak sensitive details"
    );
    assert_eq!(json["error"], "An internal error occurred");
}

// ---------------------------------------------------------------------------
// Test: every error body has exactly one top-level key
// ---------------------------------------------------------------------------

#[tokio::test]
async fn error_bodies_have_exactly_one_top_level_key() {
    let errors = vec![
        AppError::Core(CoreError::Domain("nope".into())),
        AppError::Core(CoreError::Validation(FieldErrors::new())),
        AppError::Core(CoreError::NotFound {
            entity: "Store",
            id: 1,
        }),
        AppError::Core(CoreError::Unauthorized("nope".into())),
        AppError::Internal("nope".into()),
    ];

    for err in errors {
        let (_, json) = error_to_response(err).await;
        assert_eq!(json.as_object().unwrap().len(), 1, "body was {json}");
    }
}

// ---------------------------------------------------------------------------
// Test: unmatched routes produce the enveloped 404 body
// ---------------------------------------------------------------------------

#[tokio::test]
async fn unmatched_route_returns_json_not_found() {
    let (app, _state) = common::build_test_app();

    let response = common::get(&app, "/api/v1/no-such-resource", None).await;

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let json = common::body_json(response).await;
    assert_eq!(json, serde_json::json!({"error": "Not found"}));
}
