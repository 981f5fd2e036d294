//! Store entity model and DTOs.

use serde::{Deserialize, Serialize};
use storefront_core::{DbId, Timestamp};
use validator::Validate;

/// A store row, including its stocked product ids.
#[derive(Debug, Clone, Serialize)]
pub struct Store {
    pub id: DbId,
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
    /// Ids of products stocked by this store.
    pub product_ids: Vec<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new store.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateStore {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
}

/// DTO for updating an existing store. Omitted fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateStore {
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,
    pub address: Option<String>,
    pub city: Option<String>,
    pub zip_code: Option<String>,
}
