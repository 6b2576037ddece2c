//! Shared state injected into every handler.

use std::sync::Arc;

use crate::application::services::LinkService;
use crate::domain::repositories::{LinkItemRepository, PolicyRepository};

/// Link service over trait-object repositories, as stored in [`AppState`].
pub type SharedLinkService = LinkService<dyn LinkItemRepository, dyn PolicyRepository>;

#[derive(Clone)]
pub struct AppState {
    pub link_service: Arc<SharedLinkService>,
    /// Query parameter that keeps a single view from redirecting.
    pub bypass_param: Arc<str>,
}

impl AppState {
    pub fn new(link_service: Arc<SharedLinkService>, bypass_param: impl Into<Arc<str>>) -> Self {
        Self {
            link_service,
            bypass_param: bypass_param.into(),
        }
    }
}
