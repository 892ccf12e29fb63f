use serde::Deserialize;

/// Raw YAML representation of `fwcheck.yml`. Every field is optional;
/// absent values fall back to [`crate::CheckConfig::default`].
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawConfig {
    #[serde(default)]
    pub terraform: RawTerraform,
    #[serde(default)]
    pub azure: RawAzure,
    #[serde(default)]
    pub outputs: RawOutputs,
    pub sub_test_name: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTerraform {
    /// "terraform" or "tofu", or an absolute path to either.
    pub binary: Option<String>,
    pub dir: Option<String>,
    pub timeout_secs: Option<u64>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawAzure {
    pub management_endpoint: Option<String>,
    pub login_endpoint: Option<String>,
    pub audience: Option<String>,
    pub api_version: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawOutputs {
    pub firewall_ids: Option<String>,
    pub resource_group_name: Option<String>,
    pub policy_name: Option<String>,
    pub rule_collection_group_name: Option<String>,
}
