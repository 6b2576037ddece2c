//! Rendering context and glyph direction enums.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Where a link item is being rendered.
///
/// Selects the policy branch used by [`crate::linking::link_resolver::resolve`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RenderContext {
    /// A page showing many items: home, archives, search results.
    #[default]
    Listing,
    /// The item's own page.
    Single,
    /// A syndication feed entry.
    Feed,
}

impl RenderContext {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Listing => "listing",
            Self::Single => "single",
            Self::Feed => "feed",
        }
    }
}

impl fmt::Display for RenderContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown render context '{0}', expected listing, single or feed")]
pub struct ParseRenderContextError(String);

impl FromStr for RenderContext {
    type Err = ParseRenderContextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "listing" | "list" | "archive" => Ok(Self::Listing),
            "single" => Ok(Self::Single),
            "feed" | "rss" => Ok(Self::Feed),
            _ => Err(ParseRenderContextError(s.to_string())),
        }
    }
}

/// Which way a link points: back into the site or out to the external source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LinkTarget {
    /// Back to the item's permalink on this site.
    #[default]
    Internal,
    /// Out to the item's external URL.
    External,
}

impl fmt::Display for LinkTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Internal => f.write_str("internal"),
            Self::External => f.write_str("external"),
        }
    }
}

#[derive(Debug, thiserror::Error)]
#[error("unknown link target '{0}', expected internal or external")]
pub struct ParseLinkTargetError(String);

impl FromStr for LinkTarget {
    type Err = ParseLinkTargetError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "internal" | "permalink" => Ok(Self::Internal),
            "external" => Ok(Self::External),
            _ => Err(ParseLinkTargetError(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_context_from_str() {
        assert_eq!("Listing".parse::<RenderContext>().unwrap(), RenderContext::Listing);
        assert_eq!(" feed ".parse::<RenderContext>().unwrap(), RenderContext::Feed);
        assert_eq!("SINGLE".parse::<RenderContext>().unwrap(), RenderContext::Single);
        assert!("sidebar".parse::<RenderContext>().is_err());
    }

    #[test]
    fn test_context_display_matches_serde() {
        for ctx in [RenderContext::Listing, RenderContext::Single, RenderContext::Feed] {
            let json = serde_json::to_string(&ctx).unwrap();
            assert_eq!(json, format!("\"{ctx}\""));
        }
    }

    #[test]
    fn test_link_target_from_str() {
        assert_eq!("external".parse::<LinkTarget>().unwrap(), LinkTarget::External);
        assert_eq!("Internal".parse::<LinkTarget>().unwrap(), LinkTarget::Internal);
        assert!("sideways".parse::<LinkTarget>().is_err());
    }
}
