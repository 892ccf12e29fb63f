use async_trait::async_trait;
use fwcheck_domain::RuleCollectionGroupRecord;

use crate::error::LookupError;

/// Read-only lookup of one firewall policy rule collection group.
#[async_trait]
pub trait RuleCollectionGroupLookup: Send + Sync {
    async fn get(
        &self,
        resource_group: &str,
        policy_name: &str,
        group_name: &str,
    ) -> Result<RuleCollectionGroupRecord, LookupError>;
}
