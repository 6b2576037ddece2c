//! Repository trait definitions for the domain layer.
//!
//! These are the two inputs the linking core consumes from the host: link
//! items and the site policy. Both are read-only.
//!
//! # Available Repositories
//!
//! - [`LinkItemRepository`] - Link item lookups
//! - [`PolicyRepository`] - Site-wide policy snapshots
//!
//! Implementations live in `crate::infrastructure`; mocks are generated with
//! `mockall` for tests.

pub mod link_repository;
pub mod policy_repository;

pub use link_repository::LinkItemRepository;
pub use policy_repository::PolicyRepository;

#[cfg(test)]
pub use link_repository::MockLinkItemRepository;
#[cfg(test)]
pub use policy_repository::MockPolicyRepository;
