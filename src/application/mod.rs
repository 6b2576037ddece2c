//! Application layer services.
//!
//! Services load items and the policy snapshot from the repository traits,
//! call into [`crate::linking`], and hand plain values to the HTTP layer.
//!
//! # Available Services
//!
//! - [`services::link_service::LinkService`] - Resolution, redirects and decoration

pub mod services;
