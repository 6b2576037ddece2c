//! DTOs for health check endpoint.

use serde::Serialize;

use crate::domain::entities::{LinkTarget, SiteLinkPolicy};

/// Overall service state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceStatus {
    Healthy,
    Degraded,
}

/// State of one component check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckState {
    Ok,
    Error,
}

/// Health check response with component status.
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: ServiceStatus,
    pub version: &'static str,
    pub checks: HealthChecks,
}

#[derive(Debug, Serialize)]
pub struct HealthChecks {
    pub items: ItemStoreCheck,
    pub policy: PolicyCheck,
}

impl HealthChecks {
    pub fn status(&self) -> ServiceStatus {
        if self.items.status == CheckState::Ok && self.policy.status == CheckState::Ok {
            ServiceStatus::Healthy
        } else {
            ServiceStatus::Degraded
        }
    }
}

/// Link item store check: how many items resolve requests can see.
#[derive(Debug, Serialize)]
pub struct ItemStoreCheck {
    pub status: CheckState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<usize>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Policy source check with the switches of the loaded snapshot.
#[derive(Debug, Serialize)]
pub struct PolicyCheck {
    pub status: CheckState,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub snapshot: Option<PolicySnapshot>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// The parts of a [`SiteLinkPolicy`] that change request behavior.
#[derive(Debug, Serialize)]
pub struct PolicySnapshot {
    pub redirect_singles: bool,
    pub rewrite_permalinks: bool,
    pub utm_tagging: bool,
    pub glyph_direction: LinkTarget,
}

impl From<&SiteLinkPolicy> for PolicySnapshot {
    fn from(policy: &SiteLinkPolicy) -> Self {
        Self {
            redirect_singles: policy.redirect_singles_enabled,
            rewrite_permalinks: policy.rewrite_permalinks_enabled,
            utm_tagging: policy.utm.is_active(),
            glyph_direction: policy.glyph_direction,
        }
    }
}
