//! Link item entity: one piece of content that may point at an external URL.

use serde::{Deserialize, Serialize};

use crate::utils::flags::deserialize_loose_flag;
use crate::utils::url_normalizer::is_web_url;

/// A content item as seen by the linking core.
///
/// Built once at the storage boundary via [`LinkItem::from_raw`]; the core
/// only reads it. `external_url` is kept verbatim and may hold a relative or
/// otherwise invalid string. Validity is checked at resolution time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkItem {
    pub id: String,
    pub external_url: Option<String>,
    pub skip_redirect: bool,
    pub skip_rewrite: bool,
    pub internal_permalink: String,
}

impl LinkItem {
    /// Creates an item with both overrides unset.
    pub fn new(
        id: impl Into<String>,
        internal_permalink: impl Into<String>,
        external_url: Option<String>,
    ) -> Self {
        Self {
            id: id.into(),
            external_url: external_url
                .map(|u| u.trim().to_string())
                .filter(|u| !u.is_empty()),
            skip_redirect: false,
            skip_rewrite: false,
            internal_permalink: internal_permalink.into(),
        }
    }

    /// Builds an item from loosely typed post metadata.
    ///
    /// The URL is trimmed and an empty URL becomes `None`.
    pub fn from_raw(
        id: impl Into<String>,
        internal_permalink: impl Into<String>,
        raw: RawLinkMeta,
    ) -> Self {
        let external_url = raw
            .external_url
            .map(|u| u.trim().to_string())
            .filter(|u| !u.is_empty());

        Self {
            id: id.into(),
            external_url,
            skip_redirect: raw.skip_redirect,
            skip_rewrite: raw.skip_rewrite,
            internal_permalink: internal_permalink.into(),
        }
    }

    pub fn with_skip_redirect(mut self, skip: bool) -> Self {
        self.skip_redirect = skip;
        self
    }

    pub fn with_skip_rewrite(mut self, skip: bool) -> Self {
        self.skip_rewrite = skip;
        self
    }

    /// Returns the external URL only if it is an absolute `http`/`https` URL.
    pub fn external_web_url(&self) -> Option<&str> {
        self.external_url.as_deref().filter(|u| is_web_url(u))
    }

    /// Returns true if this item links out to a valid web URL.
    pub fn has_external(&self) -> bool {
        self.external_web_url().is_some()
    }
}

/// Per-post link metadata as the content store keeps it.
///
/// Every field may be missing and flags may arrive as `true`, `1`, `"on"`,
/// `"yes"` and so on.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawLinkMeta {
    #[serde(default)]
    pub external_url: Option<String>,
    #[serde(default, deserialize_with = "deserialize_loose_flag")]
    pub skip_redirect: bool,
    #[serde(default, deserialize_with = "deserialize_loose_flag")]
    pub skip_rewrite: bool,
}
