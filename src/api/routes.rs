//! API route configuration.
//!
//! These endpoints expose the link resolution core as JSON. They are
//! read-only apart from `POST` bodies that are decorated and echoed back.

use crate::api::handlers::{
    decorate_handler, item_content_handler, item_handler, list_items_handler,
};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// All API routes.
///
/// # Endpoints
///
/// - `GET  /items`               - Resolve every item for `?context=`
/// - `GET  /items/{id}`          - Resolve one item for `?context=`
/// - `POST /items/{id}/content`  - Append the item's glyph to a content fragment
/// - `POST /decorate`            - Apply UTM tagging to a URL
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/items", get(list_items_handler))
        .route("/items/{id}", get(item_handler))
        .route("/items/{id}/content", post(item_content_handler))
        .route("/decorate", post(decorate_handler))
}
