mod cli;
mod commands;
mod output;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // stdout carries the report; logs go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Command::Check { azure, terraform, output } => {
            commands::check(cli.config, azure, terraform, output).await
        }
        Command::Get { resource_group, policy_name, group_name, azure } => {
            commands::get(cli.config, azure, resource_group, policy_name, group_name).await
        }
        Command::Outputs { terraform } => commands::outputs(cli.config, terraform).await,
    }
}
