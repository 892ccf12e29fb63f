use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum OutputError {
    #[error("output '{key}' not found")]
    Missing { key: String },

    #[error("output '{key}' is not a map (found {found})")]
    NotAMap { key: String, found: String },

    #[error("parse terraform output: {0}")]
    Parse(String),

    #[error("{0}")]
    Command(String),
}
