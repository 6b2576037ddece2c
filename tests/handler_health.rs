mod common;

use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use async_trait::async_trait;
use axum::{Router, routing::get};
use axum_test::TestServer;
use linkblog::AppError;
use linkblog::api::handlers::health_handler;
use linkblog::domain::entities::SiteLinkPolicy;
use linkblog::domain::repositories::{LinkItemRepository, PolicyRepository};
use linkblog::infrastructure::memory::InMemoryLinkRepository;
use linkblog::routes::app_router;
use linkblog::state::{AppState, SharedLinkService};
use serde_json::json;
use std::sync::Arc;
use tower::ServiceExt;

#[tokio::test]
async fn test_health_endpoint_success() {
    let state = common::create_test_state(common::full_policy());
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").await;

    response.assert_status_ok();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "healthy");
    assert_eq!(json["checks"]["items"]["status"], "ok");
    assert_eq!(json["checks"]["items"]["count"], 4);
    assert_eq!(json["checks"]["policy"]["status"], "ok");
    assert_eq!(json["checks"]["policy"]["snapshot"]["redirect_singles"], true);
    assert_eq!(json["checks"]["policy"]["snapshot"]["utm_tagging"], true);
    assert_eq!(json["checks"]["policy"]["snapshot"]["glyph_direction"], "internal");
    assert!(json.get("version").is_some());
}

#[tokio::test]
async fn test_app_router_trims_trailing_slash() {
    let state = common::create_test_state(common::full_policy());
    let app = app_router(state);

    let response = app
        .oneshot(Request::builder().uri("/health/").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_app_router_single_view_redirect() {
    let state = common::create_test_state(common::full_policy());
    let app = app_router(state);

    let response = app
        .oneshot(Request::builder().uri("/items/42").body(Body::empty()).unwrap())
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::FOUND);
    assert!(response.headers().contains_key("location"));
}

struct BrokenPolicy;

#[async_trait]
impl PolicyRepository for BrokenPolicy {
    async fn current(&self) -> Result<SiteLinkPolicy, AppError> {
        Err(AppError::internal("policy store unavailable", json!({})))
    }
}

#[tokio::test]
async fn test_health_degraded_when_policy_fails() {
    let items: Arc<dyn LinkItemRepository> =
        Arc::new(InMemoryLinkRepository::with_items(common::default_items()));
    let policy: Arc<dyn PolicyRepository> = Arc::new(BrokenPolicy);
    let state = AppState::new(
        Arc::new(SharedLinkService::new(items, policy)),
        common::BYPASS_PARAM,
    );
    let app = Router::new()
        .route("/health", get(health_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get("/health").expect_failure().await;

    assert_eq!(response.status_code(), 503);
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["status"], "degraded");
    assert_eq!(json["checks"]["items"]["status"], "ok");
    assert_eq!(json["checks"]["policy"]["status"], "error");
    assert_eq!(json["checks"]["policy"]["error"], "policy store unavailable");
    assert!(json["checks"]["policy"].get("snapshot").is_none());
}
