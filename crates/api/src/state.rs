use std::sync::Arc;

use storefront_services::{ProductsService, StoresService, UsersService};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via
/// `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc`). The services are
/// the one-instance-per-process collaborators, constructed in `main` and
/// injected here instead of living as globals.
#[derive(Clone)]
pub struct AppState {
    /// Product CRUD service.
    pub products: Arc<ProductsService>,
    /// Store CRUD service (and store-product association).
    pub stores: Arc<StoresService>,
    /// User account storage.
    pub users: Arc<UsersService>,
    /// Server configuration (accessed by the auth gate and handlers).
    pub config: Arc<ServerConfig>,
}
