use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::DomainError;

// ── Identifiers ──────────────────────────────────────────────────────────────

/// Azure subscription identifier. Never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct SubscriptionId(String);

impl SubscriptionId {
    pub fn new(s: impl Into<String>) -> Result<Self, DomainError> {
        let s = s.into();
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DomainError::EmptySubscriptionId);
        }
        Ok(SubscriptionId(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for SubscriptionId {
    type Error = DomainError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        SubscriptionId::new(s)
    }
}

impl From<SubscriptionId> for String {
    fn from(id: SubscriptionId) -> Self {
        id.0
    }
}

impl std::fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ── Rule collection groups ───────────────────────────────────────────────────

/// Path parameters that address one rule collection group inside a
/// firewall policy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleCollectionGroupRef {
    pub resource_group: String,
    pub policy_name: String,
    pub group_name: String,
}

impl RuleCollectionGroupRef {
    /// Build a reference, rejecting empty parameters the same way the ARM
    /// SDKs do before issuing a request.
    pub fn new(
        resource_group: impl Into<String>,
        policy_name: impl Into<String>,
        group_name: impl Into<String>,
    ) -> Result<Self, DomainError> {
        let r = RuleCollectionGroupRef {
            resource_group: resource_group.into(),
            policy_name: policy_name.into(),
            group_name: group_name.into(),
        };
        if r.resource_group.is_empty() {
            return Err(DomainError::EmptyParameter("resourceGroupName"));
        }
        if r.policy_name.is_empty() {
            return Err(DomainError::EmptyParameter("firewallPolicyName"));
        }
        if r.group_name.is_empty() {
            return Err(DomainError::EmptyParameter("ruleCollectionGroupName"));
        }
        Ok(r)
    }
}

impl std::fmt::Display for RuleCollectionGroupRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}/{}", self.resource_group, self.policy_name, self.group_name)
    }
}

/// The parts of an ARM `FirewallPolicyRuleCollectionGroup` response this
/// tool cares about.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleCollectionGroupRecord {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub etag: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provisioning_state: Option<String>,
}

impl RuleCollectionGroupRecord {
    /// Extract a record from a raw ARM response body.
    pub fn from_arm(body: &Value) -> Result<Self, DomainError> {
        let name = body["name"]
            .as_str()
            .ok_or_else(|| DomainError::MissingName(body.to_string()))?
            .to_string();
        let props = &body["properties"];
        Ok(RuleCollectionGroupRecord {
            name,
            id: body["id"].as_str().map(str::to_string),
            etag: body["etag"].as_str().map(str::to_string),
            priority: props["priority"].as_u64().and_then(|p| u32::try_from(p).ok()),
            provisioning_state: props["provisioningState"].as_str().map(str::to_string),
        })
    }
}
