use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing::debug;

use crate::config::CheckConfig;
use crate::error::ConfigError;
use crate::raw::RawConfig;

/// Load configuration from `path`, or return defaults when no path is given.
pub fn load_config(path: Option<&Path>) -> Result<CheckConfig, ConfigError> {
    let Some(path) = path else {
        debug!("no config file given, using defaults");
        return Ok(CheckConfig::default());
    };

    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
        path: path.display().to_string(),
        source: e,
    })?;
    debug!("loading config from {}", path.display());
    parse_config(&content, &path.display().to_string())
}

/// Parse YAML `content`; `origin` names the source in error messages.
pub fn parse_config(content: &str, origin: &str) -> Result<CheckConfig, ConfigError> {
    // An empty file deserializes to `null`, which maps onto all defaults.
    let raw: RawConfig = if content.trim().is_empty() {
        RawConfig::default()
    } else {
        serde_yaml::from_str(content).map_err(|e| ConfigError::YamlParse {
            path: origin.to_string(),
            source: e,
        })?
    };
    convert(raw, origin)
}

fn convert(raw: RawConfig, origin: &str) -> Result<CheckConfig, ConfigError> {
    let mut cfg = CheckConfig::default();
    let invalid = |field: &'static str, message: &str| ConfigError::Invalid {
        path: origin.to_string(),
        field,
        message: message.to_string(),
    };

    if let Some(binary) = raw.terraform.binary {
        cfg.terraform.binary = non_empty(binary).ok_or_else(|| invalid("terraform.binary", "must not be empty"))?;
    }
    if let Some(dir) = raw.terraform.dir {
        cfg.terraform.dir = PathBuf::from(
            non_empty(dir).ok_or_else(|| invalid("terraform.dir", "must not be empty"))?,
        );
    }
    if let Some(secs) = raw.terraform.timeout_secs {
        if secs == 0 {
            return Err(invalid("terraform.timeout_secs", "must be greater than zero"));
        }
        cfg.terraform.timeout = Duration::from_secs(secs);
    }

    if let Some(url) = raw.azure.management_endpoint {
        cfg.azure.management_endpoint = endpoint(url).ok_or_else(|| {
            invalid("azure.management_endpoint", "must be an http(s) URL")
        })?;
        cfg.azure.audience = cfg.azure.management_endpoint.clone();
    }
    if let Some(url) = raw.azure.login_endpoint {
        cfg.azure.login_endpoint = endpoint(url).ok_or_else(|| {
            invalid("azure.login_endpoint", "must be an http(s) URL")
        })?;
    }
    if let Some(url) = raw.azure.audience {
        cfg.azure.audience = endpoint(url).ok_or_else(|| invalid("azure.audience", "must be an http(s) URL"))?;
    }
    if let Some(v) = raw.azure.api_version {
        cfg.azure.api_version = non_empty(v).ok_or_else(|| invalid("azure.api_version", "must not be empty"))?;
    }

    let outputs = raw.outputs;
    if let Some(v) = outputs.firewall_ids {
        cfg.outputs.firewall_ids = non_empty(v).ok_or_else(|| invalid("outputs.firewall_ids", "must not be empty"))?;
    }
    if let Some(v) = outputs.resource_group_name {
        cfg.outputs.resource_group_name = non_empty(v)
            .ok_or_else(|| invalid("outputs.resource_group_name", "must not be empty"))?;
    }
    if let Some(v) = outputs.policy_name {
        cfg.outputs.policy_name = non_empty(v).ok_or_else(|| invalid("outputs.policy_name", "must not be empty"))?;
    }
    if let Some(v) = outputs.rule_collection_group_name {
        cfg.outputs.rule_collection_group_name = non_empty(v)
            .ok_or_else(|| invalid("outputs.rule_collection_group_name", "must not be empty"))?;
    }

    if let Some(name) = raw.sub_test_name {
        cfg.sub_test_name = non_empty(name).ok_or_else(|| invalid("sub_test_name", "must not be empty"))?;
    }

    Ok(cfg)
}

fn non_empty(s: String) -> Option<String> {
    let t = s.trim();
    if t.is_empty() { None } else { Some(t.to_string()) }
}

/// Accept `http://` or `https://` URLs with a host, stripping any trailing `/`.
fn endpoint(s: String) -> Option<String> {
    let t = s.trim();
    let rest = t
        .strip_prefix("https://")
        .or_else(|| t.strip_prefix("http://"))?;
    if rest.trim_end_matches('/').is_empty() {
        return None;
    }
    Some(t.trim_end_matches('/').to_string())
}
