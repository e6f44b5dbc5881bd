use std::path::{Component, Path, PathBuf};

use base64::{engine::general_purpose::STANDARD, Engine as _};
use p256::ecdsa::SigningKey;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// One account as persisted by the wallet tool: `<wallet dir>/<account>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletRecord {
	pub address: String,
	/// PEM text of a SEC1 EC private key.
	#[serde(rename = "privKey", with = "pem_bytes")]
	pub private_key: Vec<u8>,
}

impl WalletRecord {
	/// Parse the stored PEM block as a P-256 signing key.
	pub fn signing_key(&self) -> Result<SigningKey> {
		let pem = std::str::from_utf8(&self.private_key)
			.map_err(|_| Error::InvalidKey("private key is not PEM text".into()))?;
		let secret =
			p256::SecretKey::from_sec1_pem(pem).map_err(|e| Error::InvalidKey(e.to_string()))?;
		Ok(SigningKey::from(secret))
	}
}

/// Read-only view over a directory of wallet files.
#[derive(Debug, Clone)]
pub struct WalletStore {
	dir: PathBuf,
}

impl WalletStore {
	pub fn new(dir: impl Into<PathBuf>) -> Self {
		Self { dir: dir.into() }
	}

	/// Use `dir` unless it is empty, in which case fall back to
	/// `default_dir`.  Trailing slashes are dropped.
	pub fn resolve(dir: Option<&str>, default_dir: &Path) -> Self {
		match dir {
			None | Some("") => Self::new(default_dir),
			Some(d) => Self::from_dir_str(d),
		}
	}

	/// A directory given as text, e.g. on the command line.
	pub fn from_dir_str(dir: &str) -> Self {
		match dir.trim_end_matches('/') {
			"" if dir.starts_with('/') => Self::new("/"),
			trimmed => Self::new(trimmed),
		}
	}

	pub fn dir(&self) -> &Path {
		&self.dir
	}

	/// Load the record stored for `account`.  The file's `address` must
	/// match the account it was looked up by.
	pub fn load(&self, account: &str) -> Result<WalletRecord> {
		if !is_plain_file_name(account) {
			return Err(Error::AccountNotFound(account.to_owned()));
		}

		let meta = std::fs::metadata(&self.dir).map_err(|source| Error::WalletDir {
			path: self.dir.clone(),
			source,
		})?;
		if !meta.is_dir() {
			return Err(Error::WalletDir {
				path: self.dir.clone(),
				source: std::io::Error::other("not a directory"),
			});
		}

		let path = self.dir.join(account);
		tracing::debug!(path = %path.display(), "reading wallet");
		let bytes = std::fs::read(&path).map_err(|source| Error::WalletRead {
			path: path.clone(),
			source,
		})?;
		let record: WalletRecord =
			serde_json::from_slice(&bytes).map_err(|source| Error::WalletParse { path, source })?;

		if record.address != account {
			return Err(Error::AccountNotFound(account.to_owned()));
		}
		Ok(record)
	}
}

/// Accounts name a file directly inside the wallet directory, never a path.
fn is_plain_file_name(account: &str) -> bool {
	let mut components = Path::new(account).components();
	matches!(
		(components.next(), components.next()),
		(Some(Component::Normal(name)), None) if name == account
	)
}

/// The wallet tool writes key bytes the way a JSON byte slice is usually
/// marshalled: as a standard base64 string.  Hand-edited files holding
/// the PEM text directly are accepted too.
mod pem_bytes {
	use super::*;
	use serde::{de, Deserializer, Serializer};

	pub fn serialize<S: Serializer>(bytes: &[u8], s: S) -> std::result::Result<S::Ok, S::Error> {
		s.serialize_str(&STANDARD.encode(bytes))
	}

	pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> std::result::Result<Vec<u8>, D::Error> {
		let s = String::deserialize(d)?;
		if s.trim_start().starts_with("-----BEGIN") {
			return Ok(s.into_bytes());
		}
		STANDARD.decode(s.as_bytes()).map_err(de::Error::custom)
	}
}
