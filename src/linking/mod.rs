//! The link resolution and decoration core.
//!
//! Everything here is synchronous and side-effect free apart from tracing.
//! Inputs are a [`crate::domain::entities::LinkItem`], a
//! [`crate::domain::entities::SiteLinkPolicy`] snapshot and a
//! [`crate::domain::entities::RenderContext`]; outputs are plain values.
//!
//! # Components
//!
//! - [`url_decorator`] - UTM parameter merging
//! - [`link_resolver`] - Title and glyph hrefs per context
//! - [`redirect_policy`] - Single-view redirect decision
//! - [`glyph_renderer`] - Glyph anchor markup
//! - [`transform`] - Optional ordered href post-processing

pub mod glyph_renderer;
pub mod link_resolver;
pub mod redirect_policy;
pub mod transform;
pub mod url_decorator;

pub use glyph_renderer::{GLYPH_SENTINEL, GlyphMarkup};
pub use link_resolver::{GlyphLink, Resolution, resolve};
pub use redirect_policy::{REDIRECT_STATUS, RedirectDecision, StayReason, decide};
pub use transform::{TransformerChain, UrlTransformer};
pub use url_decorator::decorate;
