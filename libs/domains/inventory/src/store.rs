//! JSON file persistence for the item collection

use std::path::{Path, PathBuf};

use tokio::fs;
use tracing::{debug, warn};

use crate::error::ItemResult;
use crate::models::Item;

/// File-backed store owning the canonical item collection.
///
/// The entire database is one pretty-printed JSON array; storage order is
/// insertion order. Reading is deliberately forgiving: a missing,
/// unreadable, or corrupt file yields an empty collection so callers
/// cannot distinguish an empty store from a broken one. Write failures
/// are real errors and propagate.
///
/// No locking is performed; a single logical writer per process is
/// assumed, and concurrent saves race last-write-wins on the whole file.
pub struct ItemStore {
    path: PathBuf,
}

impl ItemStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read the full collection from disk.
    pub async fn load_all(&self) -> Vec<Item> {
        let content = match fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) => {
                debug!(path = %self.path.display(), "Store file not readable, treating as empty: {}", e);
                return Vec::new();
            }
        };

        match serde_json::from_str(&content) {
            Ok(items) => items,
            Err(e) => {
                warn!(path = %self.path.display(), "Store file contains invalid JSON, treating as empty: {}", e);
                Vec::new()
            }
        }
    }

    /// Persist the full collection, replacing the previous contents.
    ///
    /// Serializes to a sibling temp file and renames it over the target,
    /// so a concurrent `load_all` never observes a partial write. Creates
    /// the parent directory if it does not exist yet.
    pub async fn save_all(&self, items: &[Item]) -> ItemResult<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let content = serde_json::to_string_pretty(items)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, content).await?;
        fs::rename(&tmp_path, &self.path).await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, CreateItem};
    use tempfile::tempdir;

    fn sample_items() -> Vec<Item> {
        vec![
            Item::new(
                1,
                CreateItem {
                    name: "Milk".to_string(),
                    description: "Fresh whole milk".to_string(),
                    price: 6.0,
                    category: Category::Dairy,
                    in_stock: true,
                },
            ),
            Item::new(
                2,
                CreateItem {
                    name: "Bread".to_string(),
                    description: "Sourdough loaf".to_string(),
                    price: 10.0,
                    category: Category::Bakery,
                    in_stock: false,
                },
            ),
        ]
    }

    #[tokio::test]
    async fn test_absent_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let store = ItemStore::new(dir.path().join("items.json"));
        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_corrupt_file_loads_as_empty() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        std::fs::write(&path, "{ not json ]").unwrap();

        let store = ItemStore::new(path);
        assert!(store.load_all().await.is_empty());
    }

    #[tokio::test]
    async fn test_save_then_load_round_trips() {
        let dir = tempdir().unwrap();
        let store = ItemStore::new(dir.path().join("items.json"));
        let items = sample_items();

        store.save_all(&items).await.unwrap();
        let loaded = store.load_all().await;

        assert_eq!(loaded.len(), 2);
        assert_eq!(loaded[0].id, 1);
        assert_eq!(loaded[0].name, "Milk");
        assert_eq!(loaded[1].id, 2);
        assert!(!loaded[1].in_stock);
    }

    #[tokio::test]
    async fn test_save_writes_pretty_printed_array() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("items.json");
        let store = ItemStore::new(&path);

        store.save_all(&sample_items()).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with('['));
        assert!(content.contains('\n'), "file must be pretty-printed");
        assert!(content.contains("\"inStock\""));
    }

    #[tokio::test]
    async fn test_save_creates_missing_parent_directory() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("data").join("items.json");
        let store = ItemStore::new(&path);

        store.save_all(&sample_items()).await.unwrap();
        assert!(path.exists());
    }

    #[tokio::test]
    async fn test_save_leaves_no_temp_file_behind() {
        let dir = tempdir().unwrap();
        let store = ItemStore::new(dir.path().join("items.json"));

        store.save_all(&sample_items()).await.unwrap();

        let names: Vec<_> = std::fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name().into_string().unwrap())
            .collect();
        assert_eq!(names, vec!["items.json"]);
    }

    #[tokio::test]
    async fn test_save_empty_collection_overwrites_previous_contents() {
        let dir = tempdir().unwrap();
        let store = ItemStore::new(dir.path().join("items.json"));

        store.save_all(&sample_items()).await.unwrap();
        store.save_all(&[]).await.unwrap();

        assert!(store.load_all().await.is_empty());
    }
}
