//! JSON-file implementation of ItemRepository

use async_trait::async_trait;
use tracing::instrument;

use crate::error::ItemResult;
use crate::models::{CreateItem, Item, UpdateItem};
use crate::repository::ItemRepository;
use crate::store::ItemStore;

/// File-backed implementation of the ItemRepository
///
/// Every operation reloads the collection from disk and every mutation
/// writes the whole collection back (read-modify-write over a single
/// file; single logical writer assumed). Callers always receive fresh
/// copies, never a shared cache.
pub struct FileItemRepository {
    store: ItemStore,
}

impl FileItemRepository {
    /// Create a new FileItemRepository over the given store
    ///
    /// # Example
    /// ```ignore
    /// let store = ItemStore::new("data/items.json");
    /// let repo = FileItemRepository::new(store);
    /// ```
    pub fn new(store: ItemStore) -> Self {
        Self { store }
    }

    /// Next id: one past the highest existing id, or 1 for an empty store
    fn next_id(items: &[Item]) -> u64 {
        items.iter().map(|item| item.id).max().map_or(1, |max| max + 1)
    }
}

#[async_trait]
impl ItemRepository for FileItemRepository {
    #[instrument(skip(self))]
    async fn get_all(&self) -> ItemResult<Vec<Item>> {
        Ok(self.store.load_all().await)
    }

    #[instrument(skip(self))]
    async fn get_by_id(&self, id: u64) -> ItemResult<Option<Item>> {
        let items = self.store.load_all().await;
        Ok(items.into_iter().find(|item| item.id == id))
    }

    #[instrument(skip(self, input), fields(item_name = %input.name))]
    async fn create(&self, input: CreateItem) -> ItemResult<Item> {
        let mut items = self.store.load_all().await;
        let item = Item::new(Self::next_id(&items), input);

        items.push(item.clone());
        self.store.save_all(&items).await?;

        tracing::info!(item_id = item.id, "Item created successfully");
        Ok(item)
    }

    #[instrument(skip(self, input))]
    async fn update(&self, id: u64, input: UpdateItem) -> ItemResult<Option<Item>> {
        let mut items = self.store.load_all().await;

        let Some(existing) = items.iter_mut().find(|item| item.id == id) else {
            return Ok(None);
        };

        existing.apply_update(input);
        let updated = existing.clone();
        self.store.save_all(&items).await?;

        tracing::info!(item_id = id, "Item updated successfully");
        Ok(Some(updated))
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: u64) -> ItemResult<bool> {
        let mut items = self.store.load_all().await;
        let original_len = items.len();
        items.retain(|item| item.id != id);

        if items.len() == original_len {
            return Ok(false);
        }

        self.store.save_all(&items).await?;
        tracing::info!(item_id = id, "Item deleted successfully");
        Ok(true)
    }
}
