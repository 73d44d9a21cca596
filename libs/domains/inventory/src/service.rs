//! Item Service - Business logic layer

use std::sync::Arc;
use tracing::instrument;
use validator::Validate;

use crate::error::{ItemError, ItemResult};
use crate::models::{CreateItem, Item, ItemFilter, UpdateItem};
use crate::query;
use crate::repository::ItemRepository;

/// Item service providing business logic operations
///
/// The service layer handles validation, runs the query pipeline over
/// repository snapshots, and maps absent records to not-found errors.
pub struct ItemService<R: ItemRepository> {
    repository: Arc<R>,
}

impl<R: ItemRepository> ItemService<R> {
    /// Create a new ItemService with the given repository
    pub fn new(repository: R) -> Self {
        Self {
            repository: Arc::new(repository),
        }
    }

    /// List items matching the given criteria
    #[instrument(skip(self))]
    pub async fn list_items(&self, filter: ItemFilter) -> ItemResult<Vec<Item>> {
        let items = self.repository.get_all().await?;
        Ok(query::apply(items, &filter))
    }

    /// Get an item by ID
    #[instrument(skip(self))]
    pub async fn get_item(&self, id: u64) -> ItemResult<Item> {
        self.repository
            .get_by_id(id)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Create a new item
    #[instrument(skip(self, input), fields(item_name = %input.name))]
    pub async fn create_item(&self, input: CreateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        self.repository.create(input).await
    }

    /// Update an existing item
    #[instrument(skip(self, input))]
    pub async fn update_item(&self, id: u64, input: UpdateItem) -> ItemResult<Item> {
        input
            .validate()
            .map_err(|e| ItemError::Validation(e.to_string()))?;

        if input.is_empty() {
            return Err(ItemError::Validation(
                "No update data provided".to_string(),
            ));
        }

        self.repository
            .update(id, input)
            .await?
            .ok_or(ItemError::NotFound(id))
    }

    /// Delete an item
    #[instrument(skip(self))]
    pub async fn delete_item(&self, id: u64) -> ItemResult<()> {
        if self.repository.delete(id).await? {
            Ok(())
        } else {
            Err(ItemError::NotFound(id))
        }
    }
}

impl<R: ItemRepository> Clone for ItemService<R> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Category;
    use crate::repository::MockItemRepository;
    use chrono::Utc;

    fn milk_input() -> CreateItem {
        CreateItem {
            name: "Milk".to_string(),
            description: "Fresh whole milk".to_string(),
            price: 6.0,
            category: Category::Dairy,
            in_stock: true,
        }
    }

    fn stored_item(id: u64, name: &str, price: f64, in_stock: bool) -> Item {
        let now = Utc::now();
        Item {
            id,
            name: name.to_string(),
            description: format!("{name} description"),
            price,
            category: Category::Dairy,
            in_stock,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_list_items_applies_filter_to_snapshot() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo.expect_get_all().returning(|| {
            Ok(vec![
                stored_item(1, "Milk", 6.0, true),
                stored_item(2, "Bread", 10.0, false),
            ])
        });

        let service = ItemService::new(mock_repo);
        let filter = ItemFilter {
            in_stock: Some(true),
            ..Default::default()
        };
        let items = service.list_items(filter).await.unwrap();

        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, 1);
    }

    #[tokio::test]
    async fn test_get_item_maps_absent_to_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_get_by_id()
            .with(mockall::predicate::eq(42u64))
            .returning(|_| Ok(None));

        let service = ItemService::new(mock_repo);
        let err = service.get_item(42).await.unwrap_err();

        assert!(matches!(err, ItemError::NotFound(42)));
    }

    #[tokio::test]
    async fn test_create_item_rejects_negative_price_before_touching_storage() {
        // No expectations set: any repository call would panic the test
        let mock_repo = MockItemRepository::new();
        let service = ItemService::new(mock_repo);

        let input = CreateItem {
            price: -1.0,
            ..milk_input()
        };
        let err = service.create_item(input).await.unwrap_err();

        assert!(matches!(err, ItemError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_item_rejects_empty_name() {
        let mock_repo = MockItemRepository::new();
        let service = ItemService::new(mock_repo);

        let input = CreateItem {
            name: String::new(),
            ..milk_input()
        };
        let err = service.create_item(input).await.unwrap_err();

        assert!(matches!(err, ItemError::Validation(_)));
    }

    #[tokio::test]
    async fn test_create_item_passes_valid_input_through() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_create()
            .returning(|input| Ok(Item::new(3, input)));

        let service = ItemService::new(mock_repo);
        let item = service.create_item(milk_input()).await.unwrap();

        assert_eq!(item.id, 3);
        assert_eq!(item.name, "Milk");
    }

    #[tokio::test]
    async fn test_update_item_rejects_empty_update() {
        let mock_repo = MockItemRepository::new();
        let service = ItemService::new(mock_repo);

        let err = service.update_item(1, UpdateItem::default()).await.unwrap_err();
        assert!(matches!(err, ItemError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_item_rejects_negative_price() {
        let mock_repo = MockItemRepository::new();
        let service = ItemService::new(mock_repo);

        let input = UpdateItem {
            price: Some(-0.5),
            ..Default::default()
        };
        let err = service.update_item(1, input).await.unwrap_err();
        assert!(matches!(err, ItemError::Validation(_)));
    }

    #[tokio::test]
    async fn test_update_item_maps_absent_to_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_update()
            .with(
                mockall::predicate::eq(999u64),
                mockall::predicate::always(),
            )
            .returning(|_, _| Ok(None));

        let service = ItemService::new(mock_repo);
        let input = UpdateItem {
            price: Some(1.0),
            ..Default::default()
        };
        let err = service.update_item(999, input).await.unwrap_err();

        assert!(matches!(err, ItemError::NotFound(999)));
    }

    #[tokio::test]
    async fn test_delete_item_maps_false_to_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_delete()
            .with(mockall::predicate::eq(999u64))
            .returning(|_| Ok(false));

        let service = ItemService::new(mock_repo);
        let err = service.delete_item(999).await.unwrap_err();

        assert!(matches!(err, ItemError::NotFound(999)));
    }

    #[tokio::test]
    async fn test_delete_item_succeeds_when_removed() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_delete()
            .with(mockall::predicate::eq(1u64))
            .returning(|_| Ok(true));

        let service = ItemService::new(mock_repo);
        assert!(service.delete_item(1).await.is_ok());
    }

    #[tokio::test]
    async fn test_storage_error_propagates_distinct_from_not_found() {
        let mut mock_repo = MockItemRepository::new();
        mock_repo
            .expect_delete()
            .returning(|_| Err(ItemError::Storage("disk full".to_string())));

        let service = ItemService::new(mock_repo);
        let err = service.delete_item(1).await.unwrap_err();

        assert!(matches!(err, ItemError::Storage(_)));
    }
}
