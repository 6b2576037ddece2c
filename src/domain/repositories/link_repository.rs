//! Repository trait for link item lookups.

use crate::domain::entities::LinkItem;
use crate::error::AppError;
use async_trait::async_trait;

/// Read-only access to the content store's link items.
///
/// The core never writes back: items are fetched per request and dropped.
///
/// # Implementations
///
/// - [`crate::infrastructure::memory::InMemoryLinkRepository`] - In-process store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LinkItemRepository: Send + Sync {
    /// Finds an item by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(LinkItem))` if found
    /// - `Ok(None)` if not found
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    async fn find_by_id(&self, id: &str) -> Result<Option<LinkItem>, AppError>;

    /// Lists every item in a stable order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    async fn list(&self) -> Result<Vec<LinkItem>, AppError>;

    /// Counts stored items.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store cannot be read.
    async fn count(&self) -> Result<usize, AppError>;
}
