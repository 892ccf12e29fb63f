use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "fwcheck",
    about = "Verify Azure firewall policy rule collection groups named by Terraform outputs",
    version
)]
pub struct Cli {
    /// Path to an fwcheck.yml configuration file.
    #[arg(long, env = "FWCHECK_CONFIG", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Check that the rule collection group exists, once per firewall id.
    Check {
        #[command(flatten)]
        azure: AzureArgs,

        #[command(flatten)]
        terraform: TerraformArgs,

        /// Report format.
        #[arg(long, default_value = "text")]
        output: ReportFormat,
    },

    /// Look up a single rule collection group and print it as JSON.
    Get {
        resource_group: String,
        policy_name: String,
        group_name: String,

        #[command(flatten)]
        azure: AzureArgs,
    },

    /// Print the Terraform outputs the check would read.
    Outputs {
        #[command(flatten)]
        terraform: TerraformArgs,
    },
}

#[derive(Debug, Args)]
pub struct AzureArgs {
    /// Subscription that owns the firewall policy.
    #[arg(long, env = "ARM_SUBSCRIPTION_ID")]
    pub subscription_id: Option<String>,
}

#[derive(Debug, Args)]
pub struct TerraformArgs {
    /// Terraform working directory (overrides terraform.dir).
    #[arg(long)]
    pub tf_dir: Option<PathBuf>,

    /// Terraform binary, e.g. `tofu` (overrides terraform.binary).
    #[arg(long)]
    pub tf_binary: Option<String>,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum ReportFormat {
    Text,
    Json,
}
