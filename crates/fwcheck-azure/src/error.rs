use fwcheck_domain::DomainError;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CredentialError {
    #[error("incomplete credential configuration: {0} is not set")]
    Incomplete(&'static str),

    #[error("token request failed: {0}")]
    Token(String),
}

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("invalid management endpoint {url}: {message}")]
    InvalidEndpoint { url: String, message: String },

    #[error("api version must not be empty")]
    EmptyApiVersion,

    #[error("build http client: {0}")]
    Http(String),
}

#[derive(Debug, Error)]
pub enum LookupError {
    #[error(transparent)]
    InvalidParameter(#[from] DomainError),

    #[error("acquire token: {0}")]
    Credential(#[from] CredentialError),

    #[error("GET {url}: {message}")]
    Transport { url: String, message: String },

    #[error("GET {url}: status {status}: {message}")]
    Status { url: String, status: u16, message: String },

    #[error("decode response from {url}: {message}")]
    Decode { url: String, message: String },
}
