pub mod client;
pub mod credential;
pub mod env;
pub mod error;
pub mod lookup;

pub use client::{ClientOptions, FirewallPolicyRuleCollectionGroupsClient};
pub use credential::{DefaultCredential, StaticToken, TokenCredential};
pub use env::AmbientEnv;
pub use error::{ClientError, CredentialError, LookupError};
pub use lookup::RuleCollectionGroupLookup;
