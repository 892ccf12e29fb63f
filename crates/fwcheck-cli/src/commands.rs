use std::path::PathBuf;

use anyhow::{Context, Result};
use fwcheck_azure::{AmbientEnv, RuleCollectionGroupLookup};
use fwcheck_check::{run_check, AbortError, AzureConnector, Connector, Outcome};
use fwcheck_config::{load_config, CheckConfig};
use fwcheck_domain::SubscriptionId;
use fwcheck_tf::TerraformOutputs;
use tracing::{info, warn};

use crate::cli::{AzureArgs, ReportFormat, TerraformArgs};
use crate::output;

// ── Check ─────────────────────────────────────────────────────────────────────

pub async fn check(
    config: Option<PathBuf>,
    azure: AzureArgs,
    terraform: TerraformArgs,
    format: ReportFormat,
) -> Result<()> {
    let cfg = resolve_config(config, Some(terraform))?;
    let connector = AzureConnector::new(AmbientEnv::from_process(), cfg.azure.clone());
    let outputs = terraform_outputs(&cfg);

    let report = run_check(&cfg, azure.subscription_id.as_deref(), &connector, &outputs).await?;

    match format {
        ReportFormat::Text => print!("{}", output::render_report(&report)),
        ReportFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }

    if !report.passed() {
        let failing = report.count(Outcome::Failed) + report.count(Outcome::Fatal);
        warn!(run_id = %report.run_id, failing, "check did not pass");
        anyhow::bail!("{} of {} sub-tests did not pass", failing, report.sub_tests.len());
    }
    Ok(())
}

// ── Get ───────────────────────────────────────────────────────────────────────

pub async fn get(
    config: Option<PathBuf>,
    azure: AzureArgs,
    resource_group: String,
    policy_name: String,
    group_name: String,
) -> Result<()> {
    let cfg = resolve_config(config, None)?;
    let subscription = azure
        .subscription_id
        .as_deref()
        .and_then(|s| SubscriptionId::new(s).ok())
        .ok_or(AbortError::MissingSubscription)?;

    let connector = AzureConnector::new(AmbientEnv::from_process(), cfg.azure.clone());
    let credential = connector.credential().map_err(AbortError::Credential)?;
    let client = connector
        .client(&subscription, credential)
        .map_err(AbortError::Client)?;

    info!(%subscription, %resource_group, %policy_name, %group_name, "looking up rule collection group");
    let record = client
        .get(&resource_group, &policy_name, &group_name)
        .await
        .context("Error getting policy rule collection group")?;
    println!("{}", serde_json::to_string_pretty(&record)?);
    Ok(())
}

// ── Outputs ───────────────────────────────────────────────────────────────────

pub async fn outputs(config: Option<PathBuf>, terraform: TerraformArgs) -> Result<()> {
    let cfg = resolve_config(config, Some(terraform))?;
    let tf = terraform_outputs(&cfg);
    let set = tf.load().await.context("Failed to read terraform outputs")?;
    print!("{}", output::render_outputs(set, &cfg.outputs));
    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Load the config file (if any) and apply command-line overrides.
fn resolve_config(path: Option<PathBuf>, terraform: Option<TerraformArgs>) -> Result<CheckConfig> {
    let mut cfg = load_config(path.as_deref()).context("Failed to load configuration")?;
    match &path {
        Some(p) => info!(config = %p.display(), "configuration loaded"),
        None => info!("no configuration file, using defaults"),
    }
    if let Some(tf) = terraform {
        if let Some(dir) = tf.tf_dir {
            cfg.terraform.dir = dir;
        }
        if let Some(binary) = tf.tf_binary {
            cfg.terraform.binary = binary;
        }
        info!(
            binary = %cfg.terraform.binary,
            dir = %cfg.terraform.dir.display(),
            "terraform working directory"
        );
    }
    Ok(cfg)
}

fn terraform_outputs(cfg: &CheckConfig) -> TerraformOutputs {
    TerraformOutputs::new(
        cfg.terraform.binary.clone(),
        cfg.terraform.dir.clone(),
        cfg.terraform.timeout,
    )
}
