//! Policy providers.
//!
//! - [`StaticPolicyRepository`] - Serves the policy loaded from configuration

mod static_policy;

pub use static_policy::StaticPolicyRepository;
