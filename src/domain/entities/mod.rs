//! Core domain entities.
//!
//! # Entity Types
//!
//! - [`LinkItem`] - A content item that may point at an external URL
//! - [`RawLinkMeta`] - Loosely typed per-post metadata, converted at the boundary
//! - [`SiteLinkPolicy`] - Site-wide settings snapshot
//! - [`RenderContext`] - Listing, single view or feed
//!
//! Entities are plain data; the behavior lives in [`crate::linking`].

pub mod link_item;
pub mod render_context;
pub mod site_policy;

pub use link_item::{LinkItem, RawLinkMeta};
pub use render_context::{LinkTarget, RenderContext};
pub use site_policy::{DEFAULT_GLYPH, GlyphConfig, SiteLinkPolicy, UTM_PARAMS, UtmPolicy};
