use std::time::Instant;

use chrono::Utc;
use fwcheck_azure::RuleCollectionGroupLookup;
use fwcheck_config::CheckConfig;
use fwcheck_domain::SubscriptionId;
use fwcheck_tf::OutputSource;
use tracing::{debug, info, warn};

use crate::connector::Connector;
use crate::error::{AbortError, SubTestFailure};
use crate::report::{CheckReport, Outcome, SubTestReport};

/// Verify that the rule collection group named by the Terraform outputs
/// exists, once per entry of the firewall-id output map.
///
/// Steps run in a fixed order and the first four abort the whole check:
/// subscription id, credential, client, firewall-id map. Each sub-test then
/// reads its scalar outputs, performs one lookup and compares names; its
/// failures land on its own [`SubTestReport`] and the next sub-test still
/// runs.
pub async fn run_check(
    config: &CheckConfig,
    subscription_id: Option<&str>,
    connector: &dyn Connector,
    outputs: &dyn OutputSource,
) -> Result<CheckReport, AbortError> {
    let subscription = subscription_id
        .and_then(|s| SubscriptionId::new(s).ok())
        .ok_or(AbortError::MissingSubscription)?;

    let credential = connector.credential().map_err(AbortError::Credential)?;
    let lookup = connector
        .client(&subscription, credential)
        .map_err(AbortError::Client)?;

    let names = &config.outputs;
    let firewall_ids = outputs
        .output_map(&names.firewall_ids)
        .await
        .map_err(|source| AbortError::Outputs {
            key: names.firewall_ids.clone(),
            source,
        })?;

    info!(
        subscription = %subscription,
        firewalls = firewall_ids.len(),
        "running firewall policy rule collection group check"
    );

    let mut report = CheckReport::new(subscription.as_str());
    for (key, firewall_id) in &firewall_ids {
        debug!(firewall_key = %key, firewall_id = %firewall_id, "starting sub-test");
        let started = Instant::now();
        let result = run_sub_test(config, lookup.as_ref(), outputs).await;
        let elapsed = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        let entry = SubTestReport::from_result(&config.sub_test_name, key, firewall_id, result, elapsed);
        match entry.outcome {
            Outcome::Passed => info!(name = %entry.name, firewall_key = %key, "sub-test passed"),
            outcome => warn!(
                name = %entry.name,
                firewall_key = %key,
                %outcome,
                message = entry.message.as_deref().unwrap_or(""),
                "sub-test did not pass"
            ),
        }
        report.sub_tests.push(entry);
    }
    report.finished_at = Utc::now();

    info!(
        run_id = %report.run_id,
        passed = report.count(Outcome::Passed),
        failed = report.count(Outcome::Failed),
        fatal = report.count(Outcome::Fatal),
        "check finished"
    );
    Ok(report)
}

async fn run_sub_test(
    config: &CheckConfig,
    lookup: &dyn RuleCollectionGroupLookup,
    outputs: &dyn OutputSource,
) -> Result<(), SubTestFailure> {
    let names = &config.outputs;
    let resource_group = read_output(outputs, &names.resource_group_name).await?;
    let policy_name = read_output(outputs, &names.policy_name).await?;
    let expected = read_output(outputs, &names.rule_collection_group_name).await?;

    let record = lookup
        .get(&resource_group, &policy_name, &expected)
        .await
        .map_err(|e| SubTestFailure::Fatal(format!("Error getting policy rule collection group: {}", e)))?;

    if record.name != expected {
        return Err(SubTestFailure::Mismatch { expected, actual: record.name });
    }
    Ok(())
}

async fn read_output(outputs: &dyn OutputSource, key: &str) -> Result<String, SubTestFailure> {
    outputs
        .output(key)
        .await
        .map_err(|e| SubTestFailure::Fatal(format!("Error reading output '{}': {}", key, e)))
}
