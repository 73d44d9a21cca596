//! API routes module

pub mod items;

use axum::Router;

use crate::state::AppState;

/// Create all API routes
pub fn routes(state: &AppState) -> Router {
    Router::new().nest("/items", items::router(state))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Config, Environment};
    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use core_config::{app_info, server::ServerConfig};
    use tempfile::TempDir;
    use tower::ServiceExt;

    /// Full application router assembled the way `main` does it
    fn test_app() -> (TempDir, Router) {
        let dir = tempfile::tempdir().unwrap();
        let config = Config {
            app: app_info!(),
            server: ServerConfig::default(),
            environment: Environment::Development,
            data_file: dir.path().join("items.json"),
        };
        let state = AppState { config };

        let router =
            axum_helpers::create_router::<crate::openapi::ApiDoc>(routes(&state)).unwrap();
        let app = router.merge(axum_helpers::health_router(state.config.app));
        (dir, app)
    }

    async fn send(app: &Router, uri: &str) -> axum::response::Response {
        app.clone()
            .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
            .await
            .unwrap()
    }

    async fn body_json(response: axum::response::Response) -> serde_json::Value {
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn test_health_endpoint_reports_ok() {
        let (_dir, app) = test_app();

        let response = send(&app, "/health").await;
        assert_eq!(response.status(), StatusCode::OK);

        let body = body_json(response).await;
        assert_eq!(body["status"], "OK");
        assert_eq!(body["service"], "inventory_api");
    }

    #[tokio::test]
    async fn test_items_routes_are_mounted_at_the_root() {
        let (_dir, app) = test_app();

        let response = send(&app, "/items").await;
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, serde_json::json!([]));
    }

    #[tokio::test]
    async fn test_openapi_document_is_served() {
        let (_dir, app) = test_app();

        let response = send(&app, "/api-docs/openapi.json").await;
        assert_eq!(response.status(), StatusCode::OK);

        let doc = body_json(response).await;
        assert!(doc["paths"].get("/items").is_some());
        assert!(doc["paths"].get("/items/{id}").is_some());
    }

    #[tokio::test]
    async fn test_unknown_route_returns_structured_not_found() {
        let (_dir, app) = test_app();

        let response = send(&app, "/nope").await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);

        let body = body_json(response).await;
        assert_eq!(body["error"], "NotFound");
    }
}
