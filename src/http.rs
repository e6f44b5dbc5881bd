use crate::error::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
	Get,
	Post,
}

/// A fully assembled request.  The pipeline builds these and hands them
/// to a [`Transport`]; nothing below this layer knows about depositories.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
	pub method: Method,
	pub url: String,
	pub headers: Vec<(String, String)>,
	pub body: Vec<u8>,
}

impl HttpRequest {
	pub fn get(url: impl Into<String>) -> Self {
		Self {
			method: Method::Get,
			url: url.into(),
			headers: Vec::new(),
			body: Vec::new(),
		}
	}

	pub fn post(url: impl Into<String>, content_type: &str, body: Vec<u8>) -> Self {
		Self {
			method: Method::Post,
			url: url.into(),
			headers: vec![("Content-Type".into(), content_type.into())],
			body,
		}
	}
}

/// Executes requests and returns the raw response body.  No retries.
#[async_trait::async_trait]
pub trait Transport: Send + Sync {
	async fn send(&self, request: HttpRequest) -> Result<Vec<u8>>;
}

/// [`Transport`] over a shared reqwest client.
#[derive(Default)]
pub struct HttpTransport {
	http: reqwest::Client,
}

impl HttpTransport {
	pub fn new() -> Self {
		Self::default()
	}
}

#[async_trait::async_trait]
impl Transport for HttpTransport {
	async fn send(&self, request: HttpRequest) -> Result<Vec<u8>> {
		tracing::debug!(method = ?request.method, url = %request.url, "sending request");

		let mut builder = match request.method {
			Method::Get => self.http.get(&request.url),
			Method::Post => self.http.post(&request.url),
		};
		for (name, value) in &request.headers {
			builder = builder.header(name, value);
		}
		if !request.body.is_empty() {
			builder = builder.body(request.body);
		}

		let resp = builder.send().await?;
		let status = resp.status();
		let body = resp.bytes().await?.to_vec();

		if !status.is_success() {
			return Err(Error::Status {
				status: status.as_u16(),
				body: String::from_utf8_lossy(&body).into_owned(),
			});
		}
		Ok(body)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn post_carries_content_type() {
		let req = HttpRequest::post("http://gw/x", "text/plain", b"hi".to_vec());
		assert_eq!(req.method, Method::Post);
		assert_eq!(req.headers, vec![("Content-Type".into(), "text/plain".into())]);
		assert_eq!(req.body, b"hi");
	}

	#[test]
	fn get_has_no_body() {
		let req = HttpRequest::get("http://gw/x");
		assert_eq!(req.method, Method::Get);
		assert!(req.headers.is_empty());
		assert!(req.body.is_empty());
	}

	/// Opens a real socket. Run explicitly with:
	///
	///   cargo test unreachable_host -- --ignored
	#[tokio::test]
	#[ignore]
	async fn unreachable_host_is_transport_error() {
		// Port 9 (discard) on loopback is normally closed.
		let err = HttpTransport::new()
			.send(HttpRequest::get("http://127.0.0.1:9/basic/currentNonce"))
			.await
			.unwrap_err();
		assert!(matches!(err, Error::Transport(_)), "{err}");
	}
}
