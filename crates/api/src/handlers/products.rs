//! Handlers for the `/products` resource.
//!
//! Handlers stay thin: validate the inbound form, then delegate to
//! [`ProductsService`]. All endpoints require authentication via
//! [`AuthUser`].
//!
//! [`ProductsService`]: storefront_services::ProductsService

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use storefront_core::{CoreError, DbId};
use storefront_services::models::product::{CreateProduct, UpdateProduct};
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::Enveloped;
use crate::state::AppState;

/// GET /api/v1/products
///
/// List all products.
pub async fn list_products(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    Ok(Enveloped::new(state.products.list()))
}

/// POST /api/v1/products
///
/// Create a new product. Returns the created product.
pub async fn create_product(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateProduct>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(CoreError::from)?;

    Ok(Enveloped::new(state.products.create(input)))
}

/// GET /api/v1/products/{id}
///
/// Return a single product.
pub async fn show_product(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    Ok(Enveloped::new(state.products.get_or_fail(id)?))
}

/// PUT /api/v1/products/{id}
///
/// Update a product. The existence check runs before body validation, so an
/// unknown id yields 404 even when the body is invalid.
pub async fn update_product(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateProduct>,
) -> AppResult<impl IntoResponse> {
    let existing = state.products.get_or_fail(id)?;
    input.validate().map_err(CoreError::from)?;

    Ok(Enveloped::new(state.products.update(existing.id, input)?))
}

/// DELETE /api/v1/products/{id}
///
/// Delete a product. Returns 204 with no body.
pub async fn delete_product(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.products.delete(id)?;
    // Keep store assortments free of dangling product ids.
    state.stores.purge_product(id);

    Ok(Enveloped::no_content())
}
