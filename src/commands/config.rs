use anyhow::Result;

use crate::cli::{Cli, ConfigCommand};
use crate::config::Config;

pub fn run(cli: &Cli, cmd: &ConfigCommand) -> Result<()> {
	match cmd {
		ConfigCommand::Set { wallet, account } => {
			set(cli.host.as_deref(), wallet.as_deref(), account.as_deref())
		}
		ConfigCommand::Show => show(cli),
	}
}

fn set(host: Option<&str>, wallet: Option<&str>, account: Option<&str>) -> Result<()> {
	if host.is_none() && wallet.is_none() && account.is_none() {
		anyhow::bail!("Nothing to set. Pass --host, --wallet or --account.");
	}

	let mut config = Config::load()?;
	if let Some(h) = host {
		config.host = Some(h.to_owned());
	}
	if let Some(w) = wallet {
		config.wallet.dir = Some(w.to_owned());
	}
	if let Some(a) = account {
		config.wallet.account = Some(a.to_owned());
	}
	config.save()?;
	println!("Config saved to {}", Config::path()?.display());
	Ok(())
}

fn show(cli: &Cli) -> Result<()> {
	let config = Config::load()?;
	let default_wallet = Config::default_wallet_dir()?;

	let host = config.host(cli.host.as_deref()).unwrap_or("not set");
	let wallet = config
		.wallet_dir(None)
		.map(str::to_owned)
		.unwrap_or_else(|| default_wallet.display().to_string());
	let account = config.account(None).unwrap_or("not set");

	println!("Config");
	println!("  File:    {}", Config::path()?.display());
	println!("  Host:    {host}");
	println!("  Wallet:  {wallet}");
	println!("  Account: {account}");
	Ok(())
}
