use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::SubTestFailure;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Outcome {
    Passed,
    /// Assertion failed.
    Failed,
    /// Aborted before reaching the assertion.
    Fatal,
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Passed => write!(f, "PASS"),
            Outcome::Failed => write!(f, "FAIL"),
            Outcome::Fatal => write!(f, "FATAL"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SubTestReport {
    pub name: String,
    /// Key of the `firewall_ids` entry this sub-test was run for.
    pub firewall_key: String,
    pub firewall_id: String,
    pub outcome: Outcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub duration_ms: u64,
}

impl SubTestReport {
    pub(crate) fn from_result(
        name: &str,
        firewall_key: &str,
        firewall_id: &str,
        result: Result<(), SubTestFailure>,
        duration_ms: u64,
    ) -> Self {
        let (outcome, message) = match result {
            Ok(()) => (Outcome::Passed, None),
            Err(e @ SubTestFailure::Mismatch { .. }) => (Outcome::Failed, Some(e.to_string())),
            Err(e @ SubTestFailure::Fatal(_)) => (Outcome::Fatal, Some(e.to_string())),
        };
        Self {
            name: name.to_string(),
            firewall_key: firewall_key.to_string(),
            firewall_id: firewall_id.to_string(),
            outcome,
            message,
            duration_ms,
        }
    }
}

/// Result of one check run: one entry per firewall id, in iteration order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckReport {
    pub run_id: Uuid,
    pub subscription_id: String,
    pub started_at: DateTime<Utc>,
    pub finished_at: DateTime<Utc>,
    pub sub_tests: Vec<SubTestReport>,
}

impl CheckReport {
    pub(crate) fn new(subscription_id: &str) -> Self {
        let now = Utc::now();
        Self {
            run_id: Uuid::new_v4(),
            subscription_id: subscription_id.to_string(),
            started_at: now,
            finished_at: now,
            sub_tests: Vec::new(),
        }
    }

    pub fn passed(&self) -> bool {
        self.sub_tests.iter().all(|t| t.outcome == Outcome::Passed)
    }

    pub fn count(&self, outcome: Outcome) -> usize {
        self.sub_tests.iter().filter(|t| t.outcome == outcome).count()
    }
}
