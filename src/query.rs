use crate::endpoints;
use crate::error::{Error, Result};
use crate::http::{HttpRequest, Transport};

fn parse(raw: String) -> Result<url::Url> {
	url::Url::parse(&raw).map_err(|source| Error::InvalidUrl { url: raw, source })
}

/// `{host}/basic/depositories/<key>` with `key` escaped as one path segment.
pub fn depository_url(host: &str, key: &str) -> Result<String> {
	let base = endpoints::join(host, endpoints::DEPOSITORIES);
	let mut url = parse(base.clone())?;
	url.path_segments_mut()
		.map_err(|_| Error::InvalidUrl {
			url: base,
			source: url::ParseError::RelativeUrlWithCannotBeABaseBase,
		})?
		.push(key);
	Ok(url.into())
}

/// Raw body of a single depository.
pub async fn get(transport: &dyn Transport, host: &str, key: &str) -> Result<Vec<u8>> {
	let host = endpoints::normalize_host(host)?;
	transport.send(HttpRequest::get(depository_url(host, key)?)).await
}

/// Raw body of the depository listing.
pub async fn list(transport: &dyn Transport, host: &str) -> Result<Vec<u8>> {
	let host = endpoints::normalize_host(host)?;
	let url = parse(endpoints::join(host, endpoints::DEPOSITORIES))?;
	transport.send(HttpRequest::get(url)).await
}
