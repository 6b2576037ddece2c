//! Handlers for link item resolution endpoints.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use validator::Validate;

use crate::api::dto::items::{
    ContentRequest, ContentResponse, ContextQuery, ItemListResponse,
};
use crate::application::services::ResolvedItem;
use crate::error::AppError;
use crate::state::AppState;

/// Resolves every item for a context.
///
/// # Endpoint
///
/// `GET /api/items?context=listing|single|feed`
///
/// All items are resolved against the same policy snapshot.
pub async fn list_items_handler(
    Query(query): Query<ContextQuery>,
    State(state): State<AppState>,
) -> Result<Json<ItemListResponse>, AppError> {
    let context = query.context();
    let items = state.link_service.list_resolved(context).await?;

    Ok(Json(ItemListResponse {
        context,
        total: items.len(),
        items,
    }))
}

/// Resolves one item for a context.
///
/// # Endpoint
///
/// `GET /api/items/{id}?context=listing|single|feed`
///
/// # Errors
///
/// Returns 404 Not Found if the item doesn't exist.
pub async fn item_handler(
    Path(id): Path<String>,
    Query(query): Query<ContextQuery>,
    State(state): State<AppState>,
) -> Result<Json<ResolvedItem>, AppError> {
    let item = state
        .link_service
        .resolve_item(&id, query.context())
        .await?;

    Ok(Json(item))
}

/// Appends the item's glyph to a content fragment.
///
/// # Endpoint
///
/// `POST /api/items/{id}/content`
///
/// # Request Body
///
/// ```json
/// { "content": "<p>Worth a read.</p>", "context": "feed" }
/// ```
///
/// Repeated calls with already decorated content return it unchanged.
///
/// # Errors
///
/// Returns 400 Bad Request if validation fails, 404 Not Found if the item
/// doesn't exist.
pub async fn item_content_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    Json(payload): Json<ContentRequest>,
) -> Result<Json<ContentResponse>, AppError> {
    payload.validate()?;

    let context = payload.context.unwrap_or_default();
    let content = state
        .link_service
        .decorate_content(&id, &payload.content, context)
        .await?;

    Ok(Json(ContentResponse { context, content }))
}
