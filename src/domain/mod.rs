//! Domain layer: link items, site policy and the repository contracts.
//!
//! - [`entities`] - Data structures read by the linking core
//! - [`repositories`] - Read-only access traits implemented by infrastructure
//!
//! The domain layer has no dependency on the HTTP shell or on concrete storage.

pub mod entities;
pub mod repositories;
