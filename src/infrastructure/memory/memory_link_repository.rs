//! In-memory implementation of the link item repository.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::path::Path;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::item_record::ItemRecord;
use crate::domain::entities::LinkItem;
use crate::domain::repositories::LinkItemRepository;
use crate::error::AppError;

/// Link items held in memory, ordered by id.
#[derive(Debug, Default)]
pub struct InMemoryLinkRepository {
    items: RwLock<BTreeMap<String, LinkItem>>,
}

impl InMemoryLinkRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository holding `items`. Later duplicates replace earlier ones.
    pub fn with_items(items: impl IntoIterator<Item = LinkItem>) -> Self {
        let items = items
            .into_iter()
            .map(|item| (item.id.clone(), item))
            .collect();

        Self {
            items: RwLock::new(items),
        }
    }

    /// Parses a JSON array of [`ItemRecord`]s.
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON is malformed.
    pub fn from_json(json: &str) -> Result<Self> {
        let records: Vec<ItemRecord> =
            serde_json::from_str(json).context("Failed to parse link item records")?;
        Ok(Self::with_items(records.into_iter().map(LinkItem::from)))
    }

    /// Loads items from a JSON seed file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub async fn load_from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("Failed to read items file {}", path.display()))?;

        let repository = Self::from_json(&json)?;
        info!(
            "Loaded {} link items from {}",
            repository.items.read().await.len(),
            path.display()
        );
        Ok(repository)
    }

    /// Inserts or replaces an item.
    pub async fn insert(&self, item: LinkItem) {
        debug!(item_id = %item.id, "Storing link item");
        self.items.write().await.insert(item.id.clone(), item);
    }
}

#[async_trait]
impl LinkItemRepository for InMemoryLinkRepository {
    async fn find_by_id(&self, id: &str) -> Result<Option<LinkItem>, AppError> {
        Ok(self.items.read().await.get(id).cloned())
    }

    async fn list(&self) -> Result<Vec<LinkItem>, AppError> {
        Ok(self.items.read().await.values().cloned().collect())
    }

    async fn count(&self) -> Result<usize, AppError> {
        Ok(self.items.read().await.len())
    }
}
