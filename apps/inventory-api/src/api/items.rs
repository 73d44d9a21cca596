//! Items API routes
//!
//! This module wires up the inventory domain to HTTP routes.

use axum::Router;
use domain_inventory::{FileItemRepository, ItemService, ItemStore, handlers};

use crate::state::AppState;

/// Create items router backed by the configured data file
pub fn router(state: &AppState) -> Router {
    // Create the file-backed repository
    let store = ItemStore::new(state.config.data_file.clone());
    let repository = FileItemRepository::new(store);

    // Create the service
    let service = ItemService::new(repository);

    // Return the domain's router
    handlers::router(service)
}
