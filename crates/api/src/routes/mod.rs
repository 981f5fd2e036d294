pub mod auth;
pub mod health;
pub mod products;
pub mod stores;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login                         login (public)
///
/// /products                           list, create
/// /products/{id}                      get, update, delete
///
/// /stores                             list, create
/// /stores/{id}                        get, update, delete
/// /stores/{id}/products/{product_id}  add, remove association (PUT, DELETE)
/// ```
///
/// Every group is mounted under its prefix here, once, at startup. Axum
/// panics on a duplicate (path, method) registration, so a misconfigured
/// group fails the process before it serves a single request. No routes are
/// added after startup.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Authentication routes (login is the only public endpoint).
        .nest("/auth", auth::router())
        // Product CRUD.
        .nest("/products", products::router())
        // Store CRUD and store-product association.
        .nest("/stores", stores::router())
}
