//! Repository trait for the site-wide link policy.

use crate::domain::entities::SiteLinkPolicy;
use crate::error::AppError;
use async_trait::async_trait;

/// Source of [`SiteLinkPolicy`] snapshots.
///
/// Each call returns an owned snapshot; callers load it once per request and
/// pass it down explicitly.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PolicyRepository: Send + Sync {
    /// Returns the current policy.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the settings store cannot be read.
    async fn current(&self) -> Result<SiteLinkPolicy, AppError>;
}
