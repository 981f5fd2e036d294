//! Handlers for the `/stores` resource.
//!
//! Same shape as the product handlers, plus the store-product association
//! endpoints. All endpoints require authentication via [`AuthUser`].

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;
use storefront_core::{CoreError, DbId};
use storefront_services::models::store::{CreateStore, UpdateStore};
use validator::Validate;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::Enveloped;
use crate::state::AppState;

/// GET /api/v1/stores
///
/// List all stores.
pub async fn list_stores(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    Ok(Enveloped::new(state.stores.list()))
}

/// POST /api/v1/stores
///
/// Create a new store. Returns the created store.
pub async fn create_store(
    _auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateStore>,
) -> AppResult<impl IntoResponse> {
    input.validate().map_err(CoreError::from)?;

    Ok(Enveloped::new(state.stores.create(input)))
}

/// GET /api/v1/stores/{id}
///
/// Return a single store.
pub async fn show_store(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    Ok(Enveloped::new(state.stores.get_or_fail(id)?))
}

/// PUT /api/v1/stores/{id}
///
/// Update a store. The existence check runs before body validation, so an
/// unknown id yields 404 even when the body is invalid.
pub async fn update_store(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStore>,
) -> AppResult<impl IntoResponse> {
    let existing = state.stores.get_or_fail(id)?;
    input.validate().map_err(CoreError::from)?;

    Ok(Enveloped::new(state.stores.update(existing.id, input)?))
}

/// DELETE /api/v1/stores/{id}
///
/// Delete a store. Returns 204 with no body.
pub async fn delete_store(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    state.stores.delete(id)?;

    Ok(Enveloped::no_content())
}

/// PUT /api/v1/stores/{id}/products/{product_id}
///
/// Add a product to a store's assortment. Both the store and the product
/// must exist. Returns the updated store; idempotent.
pub async fn add_store_product(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path((id, product_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let product = state.products.get_or_fail(product_id)?;

    Ok(Enveloped::new(state.stores.add_product(id, product.id)?))
}

/// DELETE /api/v1/stores/{id}/products/{product_id}
///
/// Remove a product from a store's assortment. Returns the updated store.
pub async fn remove_store_product(
    _auth: AuthUser,
    State(state): State<AppState>,
    Path((id, product_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let product = state.products.get_or_fail(product_id)?;

    Ok(Enveloped::new(state.stores.remove_product(id, product.id)?))
}
