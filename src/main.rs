use anyhow::Result;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use bc_depot_cli::cli::{Cli, Command};
use bc_depot_cli::commands;

#[tokio::main]
async fn main() -> Result<()> {
	tracing_subscriber::fmt()
		.with_env_filter(
			EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
		)
		.with_writer(std::io::stderr)
		.init();

	let cli = Cli::parse();

	match &cli.command {
		Command::Depository { command } => commands::depository::run(&cli, command).await,
		Command::Config { command } => commands::config::run(&cli, command),
	}
}
