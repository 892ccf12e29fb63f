use std::sync::Arc;

use async_trait::async_trait;
use fwcheck_domain::{RuleCollectionGroupRecord, RuleCollectionGroupRef, SubscriptionId};
use reqwest::Url;
use serde_json::Value;
use tracing::debug;

use crate::credential::TokenCredential;
use crate::error::{ClientError, LookupError};
use crate::lookup::RuleCollectionGroupLookup;

// ── Options ───────────────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct ClientOptions {
    pub management_endpoint: String,
    pub api_version: String,
    /// Shared HTTP client; a fresh one is built when `None`.
    pub http: Option<reqwest::Client>,
}

impl Default for ClientOptions {
    fn default() -> Self {
        Self {
            management_endpoint: "https://management.azure.com".into(),
            api_version: "2023-09-01".into(),
            http: None,
        }
    }
}

// ── FirewallPolicyRuleCollectionGroupsClient ──────────────────────────────────

/// Management-plane client for `Microsoft.Network/firewallPolicies/ruleCollectionGroups`,
/// bound to one subscription and one credential.
pub struct FirewallPolicyRuleCollectionGroupsClient {
    subscription: SubscriptionId,
    credential:   Arc<dyn TokenCredential>,
    client:       reqwest::Client,
    endpoint:     Url,
    api_version:  String,
}

impl std::fmt::Debug for FirewallPolicyRuleCollectionGroupsClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FirewallPolicyRuleCollectionGroupsClient")
            .field("subscription", &self.subscription)
            .field("endpoint", &self.endpoint.as_str())
            .field("api_version", &self.api_version)
            .finish_non_exhaustive()
    }
}

impl FirewallPolicyRuleCollectionGroupsClient {
    pub fn new(
        subscription: SubscriptionId,
        credential: Arc<dyn TokenCredential>,
        options: ClientOptions,
    ) -> Result<Self, ClientError> {
        let invalid = |message: String| ClientError::InvalidEndpoint {
            url: options.management_endpoint.clone(),
            message,
        };
        let endpoint = Url::parse(&options.management_endpoint).map_err(|e| invalid(e.to_string()))?;
        if !matches!(endpoint.scheme(), "http" | "https") || endpoint.cannot_be_a_base() {
            return Err(invalid("expected an http(s) base URL".into()));
        }
        if options.api_version.trim().is_empty() {
            return Err(ClientError::EmptyApiVersion);
        }

        let client = match options.http {
            Some(c) => c,
            None => reqwest::Client::builder()
                .user_agent(concat!("fwcheck/", env!("CARGO_PKG_VERSION")))
                .build()
                .map_err(|e| ClientError::Http(e.to_string()))?,
        };

        Ok(Self {
            subscription,
            credential,
            client,
            endpoint,
            api_version: options.api_version,
        })
    }

    /// Resource URL for one rule collection group. Path segments are
    /// percent-encoded.
    pub(crate) fn group_url(&self, group: &RuleCollectionGroupRef) -> Url {
        let mut url = self.endpoint.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments.pop_if_empty().extend([
                "subscriptions",
                self.subscription.as_str(),
                "resourceGroups",
                group.resource_group.as_str(),
                "providers",
                "Microsoft.Network",
                "firewallPolicies",
                group.policy_name.as_str(),
                "ruleCollectionGroups",
                group.group_name.as_str(),
            ]);
        }
        url.query_pairs_mut().append_pair("api-version", &self.api_version);
        url
    }

    // ── ARM error parsing ─────────────────────────────────────────────────────

    pub(crate) fn parse_arm_error(body: &Value) -> String {
        let err = body
            .get("error")
            .or_else(|| body.get("Error"))
            .unwrap_or(body);
        let code    = err["code"].as_str().unwrap_or("Unknown");
        let message = err["message"].as_str().unwrap_or("unknown error");
        format!("{}: {}", code, message)
    }

    // ── ARM HTTP verbs ────────────────────────────────────────────────────────

    async fn arm_get(&self, url: &Url) -> Result<(u16, Value), LookupError> {
        let token = self.credential.token().await?;
        debug!(url = %url, "Azure ARM GET");
        let resp = self
            .client
            .get(url.clone())
            .bearer_auth(&token)
            .send()
            .await
            .map_err(|e| LookupError::Transport {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = resp.status().as_u16();
        let body: Value = resp.json().await.unwrap_or(Value::Null);
        Ok((status, body))
    }
}

#[async_trait]
impl RuleCollectionGroupLookup for FirewallPolicyRuleCollectionGroupsClient {
    async fn get(
        &self,
        resource_group: &str,
        policy_name: &str,
        group_name: &str,
    ) -> Result<RuleCollectionGroupRecord, LookupError> {
        let group = RuleCollectionGroupRef::new(resource_group, policy_name, group_name)?;
        let url = self.group_url(&group);
        let (status, body) = self.arm_get(&url).await?;

        if !(200..300).contains(&status) {
            return Err(LookupError::Status {
                url: url.to_string(),
                status,
                message: Self::parse_arm_error(&body),
            });
        }

        RuleCollectionGroupRecord::from_arm(&body).map_err(|e| LookupError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
