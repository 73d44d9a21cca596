//! Inventory Domain
//!
//! This module provides a complete domain implementation for managing inventory
//! items backed by a flat JSON file.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐
//! │  Handlers   │  ← HTTP endpoints
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Service   │  ← Business logic, validation, query pipeline
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │ Repository  │  ← Data access (trait + JSON-file implementation)
//! └──────┬──────┘
//!        │
//! ┌──────▼──────┐
//! │   Models    │  ← Entities, DTOs, filter criteria
//! └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```rust,no_run
//! use domain_inventory::{
//!     handlers,
//!     file::FileItemRepository,
//!     service::ItemService,
//!     store::ItemStore,
//! };
//!
//! // Create a store over the data file and wrap it in a repository
//! let store = ItemStore::new("data/items.json");
//! let repository = FileItemRepository::new(store);
//! let service = ItemService::new(repository);
//!
//! // Create Axum router
//! let router = handlers::router(service);
//! ```

pub mod error;
pub mod file;
pub mod handlers;
pub mod models;
pub mod query;
pub mod repository;
pub mod service;
pub mod store;

// Re-export commonly used types
pub use error::{ItemError, ItemResult};
pub use file::FileItemRepository;
pub use handlers::ApiDoc;
pub use models::{
    Category, CreateItem, Item, ItemFilter, ItemQuery, SortField, SortOrder, UpdateItem,
};
pub use repository::ItemRepository;
pub use service::ItemService;
pub use store::ItemStore;
