//! In-memory entity services for the storefront platform.
//!
//! Each service exposes the uniform operation set handlers delegate to
//! (`list`, `create`, `get_or_fail`, `update`, `delete`) and owns its rows
//! for the lifetime of the process. Construct one instance of each at
//! startup and share it behind `Arc`; there is no module-level state.

pub mod models;
pub mod products;
pub mod stores;
pub mod users;

mod table;

pub use products::ProductsService;
pub use stores::StoresService;
pub use users::UsersService;
