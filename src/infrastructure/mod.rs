//! Infrastructure layer: concrete implementations of the domain repositories.
//!
//! # Modules
//!
//! - [`memory`] - In-memory link item store seeded from JSON
//! - [`policy`] - Site policy providers

pub mod memory;
pub mod policy;
