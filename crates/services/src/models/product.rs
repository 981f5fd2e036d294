//! Product entity model and DTOs.

use serde::{Deserialize, Serialize};
use storefront_core::{DbId, Timestamp};
use validator::Validate;

/// A product row.
#[derive(Debug, Clone, Serialize)]
pub struct Product {
    pub id: DbId,
    pub name: String,
    pub description: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for creating a new product.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct CreateProduct {
    #[validate(length(min = 1, message = "required"))]
    pub name: String,
    pub description: Option<String>,
}

/// DTO for updating an existing product. Omitted fields are left unchanged.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UpdateProduct {
    #[validate(length(min = 1, message = "required"))]
    pub name: Option<String>,
    pub description: Option<String>,
}
