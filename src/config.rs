use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

/// Relative to the home directory.
pub const BESTCHAINS_HOME: &str = ".bestchains";
pub const WALLET_SUBDIR: &str = "wallet";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Config {
	/// Gateway base URL, e.g. `http://localhost:9999`.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub host: Option<String>,
	#[serde(default)]
	pub wallet: WalletConfig,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WalletConfig {
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub dir: Option<String>,
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub account: Option<String>,
}

impl Config {
	/// Directory where CLI state is stored (~/.bestchains/).
	pub fn dir() -> anyhow::Result<PathBuf> {
		let home = dirs::home_dir().context("could not determine home directory")?;
		Ok(home.join(BESTCHAINS_HOME))
	}

	/// Path to the config file.
	pub fn path() -> anyhow::Result<PathBuf> {
		Ok(Self::dir()?.join("config.toml"))
	}

	/// Wallet directory used when neither flag nor config names one.
	pub fn default_wallet_dir() -> anyhow::Result<PathBuf> {
		Ok(Self::dir()?.join(WALLET_SUBDIR))
	}

	/// Load config from the default location.
	pub fn load() -> anyhow::Result<Self> {
		Self::load_from(&Self::path()?)
	}

	/// Load config from `path`, falling back to defaults if no file exists.
	pub fn load_from(path: &Path) -> anyhow::Result<Self> {
		if path.exists() {
			let content = std::fs::read_to_string(path)
				.with_context(|| format!("read {}", path.display()))?;
			toml::from_str(&content).with_context(|| format!("parse {}", path.display()))
		} else {
			Ok(Self::default())
		}
	}

	/// Persist to the default location.
	pub fn save(&self) -> anyhow::Result<()> {
		self.save_to(&Self::path()?)
	}

	/// Persist the current config to `path`, creating the directory if needed.
	pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
		if let Some(parent) = path.parent() {
			std::fs::create_dir_all(parent)?;
		}
		std::fs::write(path, toml::to_string_pretty(self)?)?;
		Ok(())
	}

	/// Flag value wins over config; empty strings count as unset.
	pub fn host<'a>(&'a self, flag: Option<&'a str>) -> Option<&'a str> {
		pick(flag, self.host.as_deref())
	}

	pub fn wallet_dir<'a>(&'a self, flag: Option<&'a str>) -> Option<&'a str> {
		pick(flag, self.wallet.dir.as_deref())
	}

	pub fn account<'a>(&'a self, flag: Option<&'a str>) -> Option<&'a str> {
		pick(flag, self.wallet.account.as_deref())
	}
}

fn pick<'a>(flag: Option<&'a str>, configured: Option<&'a str>) -> Option<&'a str> {
	flag.filter(|s| !s.is_empty())
		.or(configured.filter(|s| !s.is_empty()))
}
