//! CRUD service for products.

use chrono::Utc;
use storefront_core::{CoreError, DbId};

use crate::models::product::{CreateProduct, Product, UpdateProduct};
use crate::table::Table;

/// Provides CRUD operations over the in-memory product table.
pub struct ProductsService {
    table: Table<Product>,
}

impl ProductsService {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }

    /// List all products in id order.
    pub fn list(&self) -> Vec<Product> {
        self.table.list()
    }

    /// Insert a new product, returning the created row.
    pub fn create(&self, input: CreateProduct) -> Product {
        let now = Utc::now();
        let product = self.table.insert_with(|id| Product {
            id,
            name: input.name,
            description: input.description,
            created_at: now,
            updated_at: now,
        });
        tracing::info!(product_id = product.id, "Product created");
        product
    }

    /// Find a product by id.
    pub fn get_or_fail(&self, id: DbId) -> Result<Product, CoreError> {
        self.table.get(id).ok_or(CoreError::NotFound {
            entity: "Product",
            id,
        })
    }

    /// Update a product. Only fields present in `input` are applied.
    pub fn update(&self, id: DbId, input: UpdateProduct) -> Result<Product, CoreError> {
        let updated = self
            .table
            .update(id, |product| {
                if let Some(name) = input.name {
                    product.name = name;
                }
                if let Some(description) = input.description {
                    product.description = Some(description);
                }
                product.updated_at = Utc::now();
            })
            .ok_or(CoreError::NotFound {
                entity: "Product",
                id,
            })?;
        tracing::info!(product_id = id, "Product updated");
        Ok(updated)
    }

    /// Delete a product.
    pub fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.table.remove(id).ok_or(CoreError::NotFound {
            entity: "Product",
            id,
        })?;
        tracing::info!(product_id = id, "Product deleted");
        Ok(())
    }
}

impl Default for ProductsService {
    fn default() -> Self {
        Self::new()
    }
}
