pub mod config;
pub mod depository;

use std::path::PathBuf;

use anyhow::Result;

use crate::cli::{Cli, CreateArgs};
use crate::config::Config;
use crate::error::Error;
use crate::submission::Trust;
use crate::wallet::WalletStore;

/// Resolve the gateway host from CLI flag or config.
pub fn resolve_host(cli: &Cli, config: &Config) -> Result<String> {
	config
		.host(cli.host.as_deref())
		.map(str::to_owned)
		.ok_or_else(|| Error::MissingHost.into())
}

/// Decide how a create request is authorized.  Untrusted submissions never
/// touch the wallet, so nothing is resolved for them.
pub fn resolve_trust(args: &CreateArgs, config: &Config) -> Result<Trust> {
	if args.untrusted {
		return Ok(Trust::Untrusted);
	}

	let account = config.account(args.account.as_deref()).ok_or_else(|| {
		anyhow::anyhow!("No account provided. Pass --account or run: bc-depot config set --account <name>")
	})?;

	let wallet = wallet_store(
		config.wallet_dir(args.wallet.as_deref()),
		Config::default_wallet_dir,
	)?;

	Ok(Trust::Trusted {
		wallet,
		account: account.to_owned(),
	})
}

/// The default directory is only computed when nothing names one, so a
/// missing home directory does not matter when `--wallet` is given.
fn wallet_store(
	configured: Option<&str>,
	default_dir: impl FnOnce() -> Result<PathBuf>,
) -> Result<WalletStore> {
	Ok(match configured {
		Some(dir) => WalletStore::from_dir_str(dir),
		None => WalletStore::new(default_dir()?),
	})
}

#[cfg(test)]
mod tests {
	use super::*;
	use clap::Parser;

	fn create_args(extra: &[&str]) -> CreateArgs {
		let mut argv = vec!["bc-depot", "depository", "create"];
		argv.extend_from_slice(extra);
		match Cli::try_parse_from(argv).unwrap().command {
			crate::cli::Command::Depository {
				command: crate::cli::DepositoryCommand::Create(a),
			} => a,
			_ => unreachable!(),
		}
	}

	#[test]
	fn host_from_flag_or_config() {
		let mut config = Config::default();
		let cli = Cli::try_parse_from(["bc-depot", "depository", "list"]).unwrap();
		let err = resolve_host(&cli, &config).unwrap_err();
		assert!(matches!(err.downcast_ref::<Error>(), Some(Error::MissingHost)));

		config.host = Some("http://cfg".into());
		assert_eq!(resolve_host(&cli, &config).unwrap(), "http://cfg");

		let cli = Cli::try_parse_from(["bc-depot", "-o", "http://flag", "depository", "list"]).unwrap();
		assert_eq!(resolve_host(&cli, &config).unwrap(), "http://flag");
	}

	#[test]
	fn untrusted_skips_wallet() {
		let trust = resolve_trust(&create_args(&[]), &Config::default()).unwrap();
		assert!(matches!(trust, Trust::Untrusted));
	}

	#[test]
	fn trusted_uses_flags_then_config() {
		let mut config = Config::default();
		config.wallet.dir = Some("/cfg/wallet/".into());
		config.wallet.account = Some("bob".into());

		let trust = resolve_trust(&create_args(&["--untrusted=false"]), &config).unwrap();
		let Trust::Trusted { wallet, account } = trust else {
			panic!("expected trusted");
		};
		assert_eq!(account, "bob");
		assert_eq!(wallet.dir(), std::path::Path::new("/cfg/wallet"));

		let trust = resolve_trust(
			&create_args(&["--untrusted=false", "-a", "alice", "-w", "/flag"]),
			&config,
		)
		.unwrap();
		let Trust::Trusted { wallet, account } = trust else {
			panic!("expected trusted");
		};
		assert_eq!(account, "alice");
		assert_eq!(wallet.dir(), std::path::Path::new("/flag"));
	}

	#[test]
	fn default_wallet_dir_only_when_unset() {
		let no_home = || -> Result<PathBuf> { anyhow::bail!("could not determine home directory") };

		let store = wallet_store(Some("/w/"), no_home).unwrap();
		assert_eq!(store.dir(), std::path::Path::new("/w"));

		assert!(wallet_store(None, no_home).is_err());

		let store = wallet_store(None, || Ok(PathBuf::from("/home/u/.bestchains/wallet"))).unwrap();
		assert_eq!(store.dir(), std::path::Path::new("/home/u/.bestchains/wallet"));
	}

	#[test]
	fn trusted_requires_account() {
		assert!(resolve_trust(&create_args(&["--untrusted=false"]), &Config::default()).is_err());
	}
}
