use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_SUB_TEST_NAME: &str = "doesFwPolicyRuleCollGrpExist";

/// Fully resolved configuration for one check run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckConfig {
    pub terraform: TerraformSettings,
    pub azure: AzureSettings,
    pub outputs: OutputNames,
    /// Name given to every per-firewall sub-test.
    pub sub_test_name: String,
}

impl Default for CheckConfig {
    fn default() -> Self {
        Self {
            terraform: TerraformSettings::default(),
            azure: AzureSettings::default(),
            outputs: OutputNames::default(),
            sub_test_name: DEFAULT_SUB_TEST_NAME.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerraformSettings {
    pub binary: String,
    pub dir: PathBuf,
    pub timeout: Duration,
}

impl Default for TerraformSettings {
    fn default() -> Self {
        Self {
            binary: "terraform".into(),
            dir: PathBuf::from("."),
            timeout: Duration::from_secs(300),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AzureSettings {
    pub management_endpoint: String,
    pub login_endpoint: String,
    /// Resource tokens are requested for. Follows `management_endpoint`
    /// unless set explicitly.
    pub audience: String,
    /// `api-version` query parameter for the Microsoft.Network provider.
    pub api_version: String,
}

impl Default for AzureSettings {
    fn default() -> Self {
        Self {
            management_endpoint: "https://management.azure.com".into(),
            login_endpoint: "https://login.microsoftonline.com".into(),
            audience: "https://management.azure.com".into(),
            api_version: "2023-09-01".into(),
        }
    }
}

/// Names of the Terraform outputs the check reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputNames {
    pub firewall_ids: String,
    pub resource_group_name: String,
    pub policy_name: String,
    pub rule_collection_group_name: String,
}

impl Default for OutputNames {
    fn default() -> Self {
        Self {
            firewall_ids: "firewall_ids".into(),
            resource_group_name: "resource_group_name".into(),
            policy_name: "policy_name".into(),
            rule_collection_group_name: "policy_rule_collection_group_name".into(),
        }
    }
}
