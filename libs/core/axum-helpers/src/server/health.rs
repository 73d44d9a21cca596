use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use core_config::AppInfo;
use serde::Serialize;
use utoipa::ToSchema;

/// Body returned by the `/health` endpoint.
#[derive(Serialize, ToSchema)]
pub struct HealthResponse {
    /// Always "OK" while the process is serving requests
    #[schema(example = "OK")]
    pub status: &'static str,
    /// Service name from the binary's Cargo metadata
    pub service: &'static str,
    /// Service version from the binary's Cargo metadata
    pub version: &'static str,
}

/// Health check endpoint handler.
///
/// Returns a simple health status response with the service name and version.
/// This endpoint should always return 200 if the service is running.
pub async fn health_handler(State(app): State<AppInfo>) -> Response {
    let response = HealthResponse {
        status: "OK",
        service: app.name,
        version: app.version,
    };

    (StatusCode::OK, Json(response)).into_response()
}

/// Creates a router with the /health endpoint.
///
/// Use this to add liveness checks to your app. The handler returns
/// the service name and version from `AppInfo`.
///
/// # Example
/// ```ignore
/// use axum_helpers::server::health_router;
/// use core_config::app_info;
///
/// let app = Router::new().merge(health_router(app_info!()));
/// ```
pub fn health_router(app_info: AppInfo) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .with_state(app_info)
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::Request;
    use tower::ServiceExt;

    #[tokio::test]
    async fn test_health_returns_ok_status() {
        let app = health_router(AppInfo {
            name: "test-service",
            version: "0.1.0",
        });

        let response = app
            .oneshot(Request::get("/health").body(Body::empty()).unwrap())
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);

        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "OK");
        assert_eq!(body["service"], "test-service");
        assert_eq!(body["version"], "0.1.0");
    }
}
