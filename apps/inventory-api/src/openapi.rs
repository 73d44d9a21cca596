//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Inventory API",
        version = "0.1.0",
        description = "REST API for managing inventory items in a JSON-file store",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:3001", description = "Local development server")
    ),
    nest(
        (path = "/items", api = domain_inventory::ApiDoc)
    ),
    tags(
        (name = "Items", description = "Inventory item management endpoints")
    )
)]
pub struct ApiDoc;
