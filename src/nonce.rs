use serde::Deserialize;

use crate::endpoints;
use crate::error::{Error, Result};
use crate::http::{HttpRequest, Transport};

#[derive(Debug, Deserialize)]
struct NonceResponse {
	nonce: u64,
}

/// `{host}/basic/currentNonce?account=<account>`
pub fn nonce_url(host: &str, account: &str) -> Result<String> {
	let base = endpoints::join(host, endpoints::CURRENT_NONCE);
	let mut url = url::Url::parse(&base).map_err(|source| Error::InvalidUrl {
		url: base.clone(),
		source,
	})?;
	url.query_pairs_mut().append_pair("account", account);
	Ok(url.into())
}

/// Ask the gateway for the account's current nonce.
///
/// Any failure aborts: signing with a made-up nonce only produces a
/// message the gateway rejects.
pub async fn fetch(transport: &dyn Transport, host: &str, account: &str) -> Result<u64> {
	let url = nonce_url(host, account)?;
	let body = transport
		.send(HttpRequest::get(url))
		.await
		.map_err(|e| Error::NonceFetch {
			account: account.to_owned(),
			source: Box::new(e),
		})?;

	let resp: NonceResponse = serde_json::from_slice(&body).map_err(Error::NonceParse)?;
	tracing::debug!(account, nonce = resp.nonce, "fetched nonce");
	Ok(resp.nonce)
}
