use std::path::PathBuf;

/// Failures of the depository pipeline.  Every variant aborts the
/// current invocation; none of them is retried.
#[derive(Debug, thiserror::Error)]
pub enum Error {
	// -- Configuration --
	#[error("no host provided")]
	MissingHost,

	#[error("wallet directory {}: {source}", path.display())]
	WalletDir {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	#[error("read wallet file {}: {source}", path.display())]
	WalletRead {
		path: PathBuf,
		#[source]
		source: std::io::Error,
	},

	// -- Parsing --
	#[error("parse wallet file {}: {source}", path.display())]
	WalletParse {
		path: PathBuf,
		#[source]
		source: serde_json::Error,
	},

	#[error("account {0} not found")]
	AccountNotFound(String),

	#[error("invalid EC private key: {0}")]
	InvalidKey(String),

	#[error("invalid URL {url}: {source}")]
	InvalidUrl {
		url: String,
		#[source]
		source: url::ParseError,
	},

	// -- Nonce --
	#[error("fetch nonce for {account}: {source}")]
	NonceFetch {
		account: String,
		#[source]
		source: Box<Error>,
	},

	#[error("malformed nonce response: {0}")]
	NonceParse(#[source] serde_json::Error),

	// -- Encoding and signing --
	#[error("encode {what}: {source}")]
	Encode {
		what: &'static str,
		#[source]
		source: serde_json::Error,
	},

	#[error("generate signature: {0}")]
	Sign(String),

	#[error("verify signature: {0}")]
	Verify(String),

	// -- Transport --
	#[error(transparent)]
	Transport(#[from] reqwest::Error),

	#[error("gateway returned {status}: {body}")]
	Status { status: u16, body: String },
}

pub type Result<T> = std::result::Result<T, Error>;
