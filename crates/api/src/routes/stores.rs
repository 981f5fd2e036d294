//! Route definitions for the `/stores` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::stores;
use crate::state::AppState;

/// Routes mounted at `/stores`.
///
/// ```text
/// GET    /                            -> list_stores
/// POST   /                            -> create_store
/// GET    /{id}                        -> show_store
/// PUT    /{id}                        -> update_store
/// DELETE /{id}                        -> delete_store
/// PUT    /{id}/products/{product_id}  -> add_store_product
/// DELETE /{id}/products/{product_id}  -> remove_store_product
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(stores::list_stores).post(stores::create_store))
        .route(
            "/{id}",
            get(stores::show_store)
                .put(stores::update_store)
                .delete(stores::delete_store),
        )
        .route(
            "/{id}/products/{product_id}",
            put(stores::add_store_product).delete(stores::remove_store_product),
        )
}
