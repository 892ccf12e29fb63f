use std::sync::Arc;

use fwcheck_azure::{
    AmbientEnv, ClientError, ClientOptions, CredentialError, DefaultCredential,
    FirewallPolicyRuleCollectionGroupsClient, RuleCollectionGroupLookup, TokenCredential,
};
use fwcheck_config::AzureSettings;
use fwcheck_domain::SubscriptionId;

/// Builds the credential and management client a check runs against.
///
/// The two steps are separate so each failure maps onto its own abort
/// reason.
pub trait Connector: Send + Sync {
    fn credential(&self) -> Result<Arc<dyn TokenCredential>, CredentialError>;

    fn client(
        &self,
        subscription: &SubscriptionId,
        credential: Arc<dyn TokenCredential>,
    ) -> Result<Arc<dyn RuleCollectionGroupLookup>, ClientError>;
}

/// Connects to Azure Resource Manager through the ambient credential chain.
pub struct AzureConnector {
    env:      AmbientEnv,
    settings: AzureSettings,
    http:     reqwest::Client,
}

impl AzureConnector {
    pub fn new(env: AmbientEnv, settings: AzureSettings) -> Self {
        Self { env, settings, http: reqwest::Client::new() }
    }
}

impl Connector for AzureConnector {
    fn credential(&self) -> Result<Arc<dyn TokenCredential>, CredentialError> {
        let cred = DefaultCredential::from_env(
            &self.env,
            &self.settings.login_endpoint,
            &self.settings.audience,
            self.http.clone(),
        )?;
        Ok(Arc::new(cred))
    }

    fn client(
        &self,
        subscription: &SubscriptionId,
        credential: Arc<dyn TokenCredential>,
    ) -> Result<Arc<dyn RuleCollectionGroupLookup>, ClientError> {
        let client = FirewallPolicyRuleCollectionGroupsClient::new(
            subscription.clone(),
            credential,
            ClientOptions {
                management_endpoint: self.settings.management_endpoint.clone(),
                api_version:         self.settings.api_version.clone(),
                http:                Some(self.http.clone()),
            },
        )?;
        Ok(Arc::new(client))
    }
}
