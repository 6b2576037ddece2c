mod common;

use axum::Router;
use axum_test::TestServer;
use linkblog::api::routes::api_routes;
use linkblog::domain::entities::LinkTarget;
use linkblog::state::AppState;
use serde_json::json;

fn server(state: AppState) -> TestServer {
    let app = Router::new().nest("/api", api_routes()).with_state(state);
    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_list_items_defaults_to_listing() {
    let server = server(common::create_test_state(common::full_policy()));

    let response = server.get("/api/items").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["context"], "listing");
    assert_eq!(json["total"], 4);
    assert_eq!(json["items"].as_array().unwrap().len(), 4);
}

#[tokio::test]
async fn test_item_listing_rewrites_title() {
    let server = server(common::create_test_state(common::full_policy()));

    let response = server.get("/api/items/42?context=listing").await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(
        json["title_href"],
        "http://example.com/article?ref=1&utm_source=rss&utm_medium=linked-post"
    );
    assert_eq!(json["title_target"], "external");
    assert_eq!(json["glyph"]["href"], "https://mysite.test/p/42");
    assert_eq!(json["glyph"]["target"], "internal");
    assert!(
        json["glyph_html"]
            .as_str()
            .unwrap()
            .contains("data-linkblog-glyph")
    );
}

#[tokio::test]
async fn test_item_skip_rewrite_only_affects_listing() {
    let server = server(common::create_test_state(common::full_policy()));

    let listing = server.get("/api/items/11?context=listing").await;
    assert_eq!(
        listing.json::<serde_json::Value>()["title_href"],
        "https://mysite.test/p/11"
    );

    let feed = server.get("/api/items/11?context=FEED").await;
    let json = feed.json::<serde_json::Value>();
    assert_eq!(
        json["title_href"],
        "https://other.example/story?utm_source=rss&utm_medium=linked-post"
    );
    assert_eq!(json["glyph"]["target"], "internal");
}

#[tokio::test]
async fn test_item_external_glyph_direction() {
    let mut policy = common::full_policy();
    policy.glyph_direction = LinkTarget::External;
    let server = server(common::create_test_state(policy));

    let response = server.get("/api/items/42").await;

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["glyph"]["target"], "external");
    assert_eq!(json["glyph"]["href"], json["title_href"]);
}

#[tokio::test]
async fn test_item_unknown_context_rejected() {
    let server = server(common::create_test_state(common::full_policy()));

    let response = server.get("/api/items/42?context=sidebar").await;

    response.assert_status_bad_request();
}

#[tokio::test]
async fn test_item_not_found() {
    let server = server(common::create_test_state(common::full_policy()));

    let response = server.get("/api/items/404").await;

    response.assert_status_not_found();
}

#[tokio::test]
async fn test_item_content_appends_glyph_once() {
    let server = server(common::create_test_state(common::full_policy()));

    let first = server
        .post("/api/items/42/content")
        .json(&json!({ "content": "<p>Worth a read.</p>", "context": "feed" }))
        .await;
    first.assert_status_ok();
    let decorated = first.json::<serde_json::Value>()["content"]
        .as_str()
        .unwrap()
        .to_string();
    assert!(decorated.starts_with("<p>Worth a read.</p>"));
    assert!(decorated.contains("https://mysite.test/p/42"));
    assert_eq!(decorated.matches("data-linkblog-glyph").count(), 1);

    let second = server
        .post("/api/items/42/content")
        .json(&json!({ "content": decorated, "context": "feed" }))
        .await;
    assert_eq!(second.json::<serde_json::Value>()["content"], decorated);
}

#[tokio::test]
async fn test_item_content_plain_post_unchanged() {
    let server = server(common::create_test_state(common::full_policy()));

    let response = server
        .post("/api/items/7/content")
        .json(&json!({ "content": "<p>Own words.</p>" }))
        .await;

    response.assert_status_ok();
    let json = response.json::<serde_json::Value>();
    assert_eq!(json["content"], "<p>Own words.</p>");
    assert_eq!(json["context"], "listing");
}
