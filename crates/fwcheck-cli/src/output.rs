use fwcheck_check::{CheckReport, Outcome};
use fwcheck_config::OutputNames;
use fwcheck_tf::OutputSet;

/// Render a check report in the style of `go test -v`.
pub fn render_report(report: &CheckReport) -> String {
    let mut out = String::new();
    for t in &report.sub_tests {
        out.push_str(&format!(
            "--- {}: {} [{}] ({}ms)\n",
            t.outcome, t.name, t.firewall_key, t.duration_ms
        ));
        if let Some(msg) = &t.message {
            for line in msg.lines() {
                out.push_str(&format!("    {}\n", line));
            }
        }
    }

    let verdict = if report.passed() { "PASS" } else { "FAIL" };
    out.push_str(&format!(
        "{} subscription {}: {} sub-tests, {} passed, {} failed, {} fatal\n",
        verdict,
        report.subscription_id,
        report.sub_tests.len(),
        report.count(Outcome::Passed),
        report.count(Outcome::Failed),
        report.count(Outcome::Fatal),
    ));
    out
}

/// Render the outputs the check consumes, then any others present.
pub fn render_outputs(set: &OutputSet, names: &OutputNames) -> String {
    let mut out = String::new();

    match set.get_map(&names.firewall_ids) {
        Ok(ids) => {
            out.push_str(&format!("{} ({} entries)\n", names.firewall_ids, ids.len()));
            for (key, id) in &ids {
                out.push_str(&format!("  {} = {}\n", key, id));
            }
        }
        Err(e) => out.push_str(&format!("{}: {}\n", names.firewall_ids, e)),
    }

    for key in [
        &names.resource_group_name,
        &names.policy_name,
        &names.rule_collection_group_name,
    ] {
        match set.get_str(key) {
            Ok(v) => out.push_str(&format!("{} = {}\n", key, v)),
            Err(e) => out.push_str(&format!("{}: {}\n", key, e)),
        }
    }

    let consumed = [
        &names.firewall_ids,
        &names.resource_group_name,
        &names.policy_name,
        &names.rule_collection_group_name,
    ];
    let others: Vec<&str> = set
        .names()
        .filter(|n| !consumed.iter().any(|c| c.as_str() == *n))
        .collect();
    if !others.is_empty() {
        out.push_str(&format!("other outputs: {}\n", others.join(", ")));
    }
    out
}
