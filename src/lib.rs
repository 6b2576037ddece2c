//! # Linkblog
//!
//! URL resolution and decoration for link-blog posts: items that point at an
//! external article rather than carrying their own content.
//!
//! ## Architecture
//!
//! - **Linking Core** ([`linking`]) - Pure functions: UTM decoration, link
//!   resolution, redirect decisions and glyph rendering
//! - **Domain Layer** ([`domain`]) - Link items, site policy and repository traits
//! - **Application Layer** ([`application`]) - Service that feeds stored items
//!   and the current policy through the core
//! - **Infrastructure Layer** ([`infrastructure`]) - In-memory item store and
//!   static policy snapshot
//! - **API Layer** ([`api`]) - REST handlers, DTOs and middleware
//!
//! ## Features
//!
//! - Rewrite title links to the external article, per render context
//! - Idempotent UTM tagging that can preserve publisher-supplied values
//! - 302 redirects from single views with a per-request bypass
//! - Permalink glyphs for listings, single views and feeds
//!
//! ## Quick Start
//!
//! ```bash
//! export LINKBLOG_ITEMS_FILE=items.json
//! export LINKBLOG_REDIRECT_SINGLES=1
//! export LINKBLOG_UTM_ENABLED=1
//! export LINKBLOG_UTM_SOURCE=rss
//!
//! cargo run
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod linking;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{LinkService, ResolvedItem};
    pub use crate::domain::entities::{
        LinkItem, LinkTarget, RenderContext, SiteLinkPolicy, UtmPolicy,
    };
    pub use crate::error::AppError;
    pub use crate::linking::{RedirectDecision, StayReason};
    pub use crate::state::AppState;
}
