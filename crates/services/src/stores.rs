//! CRUD service for stores, including the store-product association.

use chrono::Utc;
use storefront_core::{CoreError, DbId};

use crate::models::store::{CreateStore, Store, UpdateStore};
use crate::table::Table;

/// Provides CRUD operations over the in-memory store table.
pub struct StoresService {
    table: Table<Store>,
}

impl StoresService {
    pub fn new() -> Self {
        Self {
            table: Table::new(),
        }
    }

    /// List all stores in id order.
    pub fn list(&self) -> Vec<Store> {
        self.table.list()
    }

    /// Insert a new store, returning the created row.
    pub fn create(&self, input: CreateStore) -> Store {
        let now = Utc::now();
        let store = self.table.insert_with(|id| Store {
            id,
            name: input.name,
            address: input.address,
            city: input.city,
            zip_code: input.zip_code,
            product_ids: Vec::new(),
            created_at: now,
            updated_at: now,
        });
        tracing::info!(store_id = store.id, "Store created");
        store
    }

    /// Find a store by id.
    pub fn get_or_fail(&self, id: DbId) -> Result<Store, CoreError> {
        self.table.get(id).ok_or(CoreError::NotFound {
            entity: "Store",
            id,
        })
    }

    /// Update a store. Only fields present in `input` are applied.
    pub fn update(&self, id: DbId, input: UpdateStore) -> Result<Store, CoreError> {
        let updated = self
            .table
            .update(id, |store| {
                if let Some(name) = input.name {
                    store.name = name;
                }
                if let Some(address) = input.address {
                    store.address = Some(address);
                }
                if let Some(city) = input.city {
                    store.city = Some(city);
                }
                if let Some(zip_code) = input.zip_code {
                    store.zip_code = Some(zip_code);
                }
                store.updated_at = Utc::now();
            })
            .ok_or(CoreError::NotFound {
                entity: "Store",
                id,
            })?;
        tracing::info!(store_id = id, "Store updated");
        Ok(updated)
    }

    /// Delete a store.
    pub fn delete(&self, id: DbId) -> Result<(), CoreError> {
        self.table.remove(id).ok_or(CoreError::NotFound {
            entity: "Store",
            id,
        })?;
        tracing::info!(store_id = id, "Store deleted");
        Ok(())
    }

    /// Add a product to a store's assortment. Adding an already-present id
    /// is a no-op.
    pub fn add_product(&self, store_id: DbId, product_id: DbId) -> Result<Store, CoreError> {
        let updated = self
            .table
            .update(store_id, |store| {
                if !store.product_ids.contains(&product_id) {
                    store.product_ids.push(product_id);
                    store.updated_at = Utc::now();
                }
            })
            .ok_or(CoreError::NotFound {
                entity: "Store",
                id: store_id,
            })?;
        tracing::info!(store_id, product_id, "Product added to store");
        Ok(updated)
    }

    /// Remove a product from a store's assortment. Removing an absent id is
    /// a no-op.
    pub fn remove_product(&self, store_id: DbId, product_id: DbId) -> Result<Store, CoreError> {
        let updated = self
            .table
            .update(store_id, |store| {
                if let Some(pos) = store.product_ids.iter().position(|id| *id == product_id) {
                    store.product_ids.remove(pos);
                    store.updated_at = Utc::now();
                }
            })
            .ok_or(CoreError::NotFound {
                entity: "Store",
                id: store_id,
            })?;
        tracing::info!(store_id, product_id, "Product removed from store");
        Ok(updated)
    }

    /// Strip a deleted product's id from every store's assortment.
    pub fn purge_product(&self, product_id: DbId) {
        self.table.update_all(|store| {
            if let Some(pos) = store.product_ids.iter().position(|id| *id == product_id) {
                store.product_ids.remove(pos);
                store.updated_at = Utc::now();
            }
        });
    }
}

impl Default for StoresService {
    fn default() -> Self {
        Self::new()
    }
}
