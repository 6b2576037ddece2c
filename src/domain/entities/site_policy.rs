//! Site-wide link policy: redirect and rewrite switches, UTM tagging, glyphs.
//!
//! A policy is an immutable snapshot for the duration of one request. Every
//! field has a default so a partially configured site still yields a policy:
//! decoration, redirects, rewrites and glyphs all start disabled.

use serde::{Deserialize, Serialize};

use super::render_context::LinkTarget;

/// The five recognized analytics parameters, in the order they are appended.
pub const UTM_PARAMS: [&str; 5] = [
    "utm_source",
    "utm_medium",
    "utm_campaign",
    "utm_term",
    "utm_content",
];

/// Default glyph text.
pub const DEFAULT_GLYPH: &str = "★";

/// UTM tagging configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UtmPolicy {
    pub enabled: bool,
    /// Keep parameters the URL already carries instead of overwriting them.
    pub preserve_existing: bool,
    pub source: Option<String>,
    pub medium: Option<String>,
    pub campaign: Option<String>,
    pub term: Option<String>,
    pub content: Option<String>,
}

impl UtmPolicy {
    /// Configured parameters with a non-empty value, in [`UTM_PARAMS`] order.
    pub fn configured_params(&self) -> Vec<(&'static str, &str)> {
        let values = [
            &self.source,
            &self.medium,
            &self.campaign,
            &self.term,
            &self.content,
        ];

        UTM_PARAMS
            .iter()
            .zip(values)
            .filter_map(|(name, value)| {
                value
                    .as_deref()
                    .filter(|v| !v.is_empty())
                    .map(|v| (*name, v))
            })
            .collect()
    }

    /// True if tagging is on and at least one parameter would be written.
    pub fn is_active(&self) -> bool {
        self.enabled && !self.configured_params().is_empty()
    }
}

/// Decorative marker configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlyphConfig {
    pub enabled: bool,
    pub text: String,
    /// The text is pre-sanitized markup and must not be escaped.
    pub is_html: bool,
    /// Also expose the glyph on the item's own page.
    pub show_on_single: bool,
}

impl Default for GlyphConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            text: DEFAULT_GLYPH.to_string(),
            is_html: false,
            show_on_single: false,
        }
    }
}

/// Site-wide settings read by the linking core.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteLinkPolicy {
    pub redirect_singles_enabled: bool,
    pub rewrite_permalinks_enabled: bool,
    pub utm: UtmPolicy,
    pub site_glyph: GlyphConfig,
    pub feed_glyph: GlyphConfig,
    /// Where on-site glyphs point. Feed glyphs always return to the site.
    pub glyph_direction: LinkTarget,
}
