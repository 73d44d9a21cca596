use async_trait::async_trait;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};

/// Repository trait for Item persistence
///
/// This trait defines the data access interface for items.
/// Implementations can use different storage backends (JSON file, etc.)
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ItemRepository: Send + Sync {
    /// Return the full collection in storage order
    async fn get_all(&self) -> ItemResult<Vec<Item>>;

    /// Get an item by ID
    async fn get_by_id(&self, id: u64) -> ItemResult<Option<Item>>;

    /// Create a new item with a freshly assigned id
    async fn create(&self, input: CreateItem) -> ItemResult<Item>;

    /// Update an existing item; None when the id is absent
    async fn update(&self, id: u64, input: UpdateItem) -> ItemResult<Option<Item>>;

    /// Delete an item by ID; true when a record was removed
    async fn delete(&self, id: u64) -> ItemResult<bool>;
}
