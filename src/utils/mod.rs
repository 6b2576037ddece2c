//! Utility functions shared across the crate.
//!
//! - [`url_normalizer`] - Web URL validation and comparison keys
//! - [`flags`] - Loose boolean parsing for settings and post metadata

pub mod flags;
pub mod url_normalizer;
