mod raw;
mod loader;
pub mod config;
pub mod error;

pub use config::{AzureSettings, CheckConfig, OutputNames, TerraformSettings};
pub use error::ConfigError;
pub use loader::{load_config, parse_config};
