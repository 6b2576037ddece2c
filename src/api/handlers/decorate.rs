//! Handler for raw URL decoration.

use axum::{Json, extract::State};
use validator::Validate;

use crate::api::dto::decorate::{DecorateRequest, DecorateResponse};
use crate::error::AppError;
use crate::state::AppState;

/// Applies the site's UTM policy to a URL.
///
/// # Endpoint
///
/// `POST /api/decorate`
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/article?ref=1" }
/// ```
///
/// Non-web URLs and disabled tagging return the input unchanged with
/// `changed: false`.
///
/// # Errors
///
/// Returns 400 Bad Request if the URL is empty or too long.
pub async fn decorate_handler(
    State(state): State<AppState>,
    Json(payload): Json<DecorateRequest>,
) -> Result<Json<DecorateResponse>, AppError> {
    payload.validate()?;

    let decorated = state.link_service.decorate_url(&payload.url).await?;
    let changed = decorated != payload.url;

    Ok(Json(DecorateResponse {
        url: payload.url,
        decorated,
        changed,
    }))
}
