//! DTOs for link item endpoints.

use serde::{Deserialize, Serialize};
use serde_with::{DisplayFromStr, serde_as};
use validator::Validate;

use crate::application::services::ResolvedItem;
use crate::domain::entities::RenderContext;
use crate::linking::StayReason;

/// `?context=listing|single|feed` query parameter.
///
/// Parsed with [`RenderContext`]'s `FromStr`, so values are case-insensitive.
#[serde_as]
#[derive(Debug, Default, Deserialize)]
pub struct ContextQuery {
    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub context: Option<RenderContext>,
}

impl ContextQuery {
    /// Requested context, defaulting to listing.
    pub fn context(&self) -> RenderContext {
        self.context.unwrap_or_default()
    }
}

/// List of resolutions for one context.
#[derive(Debug, Serialize)]
pub struct ItemListResponse {
    pub context: RenderContext,
    pub total: usize,
    pub items: Vec<ResolvedItem>,
}

/// Body served on a single view that does not redirect.
#[derive(Debug, Serialize)]
pub struct SingleViewResponse {
    pub stay_reason: StayReason,
    #[serde(flatten)]
    pub item: ResolvedItem,
}

/// Request to decorate a content fragment with the item's glyph.
#[serde_as]
#[derive(Debug, Deserialize, Validate)]
pub struct ContentRequest {
    #[validate(length(max = 1_000_000, message = "Content is too large"))]
    pub content: String,

    #[serde_as(as = "Option<DisplayFromStr>")]
    #[serde(default)]
    pub context: Option<RenderContext>,
}

#[derive(Debug, Serialize)]
pub struct ContentResponse {
    pub context: RenderContext,
    pub content: String,
}
