use fwcheck_azure::{ClientError, CredentialError};
use fwcheck_tf::OutputError;
use thiserror::Error;

/// Failures that abort the whole check before any sub-test runs.
#[derive(Debug, Error)]
pub enum AbortError {
    #[error("ARM_SUBSCRIPTION_ID is not set in the environment variables")]
    MissingSubscription,

    #[error("Unable to get credentials: {0}")]
    Credential(CredentialError),

    #[error("Error getting firewall policy rule collection groups client: {0}")]
    Client(ClientError),

    #[error("Error reading output '{key}': {source}")]
    Outputs { key: String, source: OutputError },
}

/// Failures scoped to one sub-test. Recorded on its report, never propagated.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubTestFailure {
    /// The sub-test could not run to its assertion.
    #[error("{0}")]
    Fatal(String),

    #[error("Not equal: expected: {expected:?} actual: {actual:?}")]
    Mismatch { expected: String, actual: String },
}
