use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("subscription id must not be empty")]
    EmptySubscriptionId,

    #[error("parameter {0} cannot be empty")]
    EmptyParameter(&'static str),

    #[error("rule collection group response has no name: {0}")]
    MissingName(String),
}
