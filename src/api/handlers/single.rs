//! Handler for the single-item view.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde_json::json;
use std::collections::HashMap;
use tracing::{debug, info};

use crate::api::dto::items::SingleViewResponse;
use crate::application::services::SingleView;
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::flags::parse_flag;

/// Serves a single item, redirecting to its external URL when policy says so.
///
/// # Endpoint
///
/// `GET /items/{id}`
///
/// # Request Flow
///
/// 1. Derive the bypass signal from the query string
/// 2. Ask the link service for the single view, decided and resolved
///    against one policy snapshot
/// 3. On redirect, return 302 Found with `Location`
/// 4. Otherwise return the single-context resolution and the reason for staying
///
/// # Bypass
///
/// `?{bypass_param}=1` (default `?stay=1`) or `?preview=true` keeps the
/// visitor on the page.
///
/// # Errors
///
/// Returns 404 Not Found if the item doesn't exist.
pub async fn single_view_handler(
    Path(id): Path<String>,
    Query(params): Query<HashMap<String, String>>,
    State(state): State<AppState>,
) -> Result<Response, AppError> {
    let bypass = is_bypassed(&params, &state.bypass_param);

    match state.link_service.single_view(&id, bypass).await? {
        SingleView::Redirect { target, status } => {
            info!(item_id = %id, %target, "Redirecting single view");

            let location = HeaderValue::from_str(&target).map_err(|e| {
                AppError::internal(
                    "Redirect target is not a valid header value",
                    json!({ "reason": e.to_string() }),
                )
            })?;
            let status = StatusCode::from_u16(status).unwrap_or(StatusCode::FOUND);

            Ok((status, [(header::LOCATION, location)]).into_response())
        }
        SingleView::Stay { reason, item } => {
            debug!(item_id = %id, %reason, "Serving single view");

            Ok(Json(SingleViewResponse {
                stay_reason: reason,
                item,
            })
            .into_response())
        }
    }
}

fn is_bypassed(params: &HashMap<String, String>, bypass_param: &str) -> bool {
    params.get(bypass_param).is_some_and(|v| v.is_empty() || parse_flag(v))
        || params.get("preview").is_some_and(|v| parse_flag(v))
}
