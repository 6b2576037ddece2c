//! On-disk representation of a link item.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{LinkItem, RawLinkMeta};

/// One entry of the seed file.
///
/// ```json
/// [
///   {
///     "id": "42",
///     "permalink": "https://mysite.test/p/42",
///     "meta": { "external_url": "https://example.com/article", "skip_redirect": "0" }
///   }
/// ]
/// ```
///
/// `meta` mirrors what a CMS keeps per post, so every field in it is optional
/// and loosely typed.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ItemRecord {
    pub id: String,
    pub permalink: String,
    #[serde(default)]
    pub meta: RawLinkMeta,
}

impl From<ItemRecord> for LinkItem {
    fn from(record: ItemRecord) -> Self {
        LinkItem::from_raw(record.id, record.permalink, record.meta)
    }
}
