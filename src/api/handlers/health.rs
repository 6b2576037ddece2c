//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{
    CheckState, HealthChecks, HealthResponse, ItemStoreCheck, PolicyCheck, PolicySnapshot,
    ServiceStatus,
};
use crate::state::AppState;

/// Reports whether link items and the site policy can be loaded.
///
/// # Endpoint
///
/// `GET /health`
///
/// Answers 200 when both checks pass and 503 otherwise.
///
/// ```json
/// {
///   "status": "healthy",
///   "version": "0.1.0",
///   "checks": {
///     "items": { "status": "ok", "count": 3 },
///     "policy": {
///       "status": "ok",
///       "snapshot": {
///         "redirect_singles": true,
///         "rewrite_permalinks": true,
///         "utm_tagging": true,
///         "glyph_direction": "internal"
///       }
///     }
///   }
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let checks = HealthChecks {
        items: check_items(&state).await,
        policy: check_policy(&state).await,
    };

    let response = HealthResponse {
        status: checks.status(),
        version: env!("CARGO_PKG_VERSION"),
        checks,
    };

    match response.status {
        ServiceStatus::Healthy => Ok(Json(response)),
        ServiceStatus::Degraded => Err((StatusCode::SERVICE_UNAVAILABLE, Json(response))),
    }
}

async fn check_items(state: &AppState) -> ItemStoreCheck {
    match state.link_service.item_count().await {
        Ok(count) => ItemStoreCheck {
            status: CheckState::Ok,
            count: Some(count),
            error: None,
        },
        Err(e) => ItemStoreCheck {
            status: CheckState::Error,
            count: None,
            error: Some(e.to_string()),
        },
    }
}

async fn check_policy(state: &AppState) -> PolicyCheck {
    match state.link_service.policy().await {
        Ok(policy) => PolicyCheck {
            status: CheckState::Ok,
            snapshot: Some(PolicySnapshot::from(&policy)),
            error: None,
        },
        Err(e) => PolicyCheck {
            status: CheckState::Error,
            snapshot: None,
            error: Some(e.to_string()),
        },
    }
}
