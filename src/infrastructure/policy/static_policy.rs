//! Policy provider backed by a fixed configuration value.

use async_trait::async_trait;

use crate::domain::entities::SiteLinkPolicy;
use crate::domain::repositories::PolicyRepository;
use crate::error::AppError;

/// Hands out clones of a policy loaded at startup.
///
/// Every request gets its own snapshot, so nothing downstream can observe a
/// policy changing mid-request.
#[derive(Debug, Clone, Default)]
pub struct StaticPolicyRepository {
    policy: SiteLinkPolicy,
}

impl StaticPolicyRepository {
    pub fn new(policy: SiteLinkPolicy) -> Self {
        Self { policy }
    }
}

#[async_trait]
impl PolicyRepository for StaticPolicyRepository {
    async fn current(&self) -> Result<SiteLinkPolicy, AppError> {
        Ok(self.policy.clone())
    }
}
