use crate::depository;
use crate::endpoints;
use crate::error::Result;
use crate::http::{HttpRequest, Transport};
use crate::message;
use crate::nonce;
use crate::wallet::WalletStore;

/// User-supplied fields of a depository record.
#[derive(Debug, Clone, Default)]
pub struct DepositoryParams {
	pub name: String,
	pub content_type: String,
	pub content_id: String,
	pub platform: String,
}

/// How a submission is authorized.
#[derive(Debug, Clone)]
pub enum Trust {
	/// Value only, no signature.
	Untrusted,
	/// Signed with `account`'s key from `wallet`, ordered by its nonce.
	Trusted { wallet: WalletStore, account: String },
}

/// A request body ready to be posted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Submission {
	pub url: String,
	pub message: Option<String>,
	pub value: String,
}

impl Submission {
	/// `message=<b64>&value=<b64>`, or just `value=<b64>` when untrusted.
	pub fn form_body(&self) -> String {
		let mut form = url::form_urlencoded::Serializer::new(String::new());
		if let Some(msg) = &self.message {
			form.append_pair("message", msg);
		}
		form.append_pair("value", &self.value);
		form.finish()
	}

	pub fn to_request(&self) -> HttpRequest {
		HttpRequest::post(
			self.url.clone(),
			endpoints::FORM_CONTENT_TYPE,
			self.form_body().into_bytes(),
		)
	}
}

/// Assembles and posts depository submissions against one gateway.
pub struct SubmissionBuilder<'a> {
	transport: &'a dyn Transport,
	host: String,
}

impl<'a> SubmissionBuilder<'a> {
	/// Fails with [`Error::MissingHost`](crate::error::Error::MissingHost) when `host` is empty, before any
	/// request is made.
	pub fn new(transport: &'a dyn Transport, host: &str) -> Result<Self> {
		let host = endpoints::normalize_host(host)?;
		Ok(Self {
			transport,
			host: host.to_owned(),
		})
	}

	/// Encode the value and, for trusted submissions, sign it with a
	/// freshly fetched nonce.
	pub async fn build(&self, params: &DepositoryParams, trust: &Trust) -> Result<Submission> {
		let value = depository::encode(
			&params.name,
			&params.content_type,
			&params.content_id,
			&params.platform,
		)?;

		match trust {
			Trust::Untrusted => Ok(Submission {
				url: endpoints::join(&self.host, endpoints::PUT_UNTRUSTED_VALUE),
				message: None,
				value,
			}),
			Trust::Trusted { wallet, account } => {
				let record = wallet.load(account)?;
				let key = record.signing_key()?;

				let nonce = nonce::fetch(self.transport, &self.host, &record.address).await?;
				let message = message::sign(nonce, &key, value.as_bytes())?;

				Ok(Submission {
					url: endpoints::join(&self.host, endpoints::PUT_VALUE),
					message: Some(message),
					value,
				})
			}
		}
	}

	/// Build and post, returning the gateway's raw response body.
	pub async fn submit(&self, params: &DepositoryParams, trust: &Trust) -> Result<Vec<u8>> {
		let submission = self.build(params, trust).await?;
		tracing::info!(
			url = %submission.url,
			trusted = submission.message.is_some(),
			"putting depository value"
		);
		self.transport.send(submission.to_request()).await
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Mutex;

	use super::*;
	use crate::error::Error;
	use crate::http::Method;

	#[derive(Default)]
	struct Recorder {
		seen: Mutex<Vec<HttpRequest>>,
	}

	#[async_trait::async_trait]
	impl Transport for Recorder {
		async fn send(&self, request: HttpRequest) -> Result<Vec<u8>> {
			let reply = match request.method {
				Method::Get => br#"{"nonce":3}"#.to_vec(),
				Method::Post => b"ok".to_vec(),
			};
			self.seen.lock().unwrap().push(request);
			Ok(reply)
		}
	}

	fn params() -> DepositoryParams {
		DepositoryParams {
			name: "doc1".into(),
			content_type: "pdf".into(),
			content_id: "abc123".into(),
			platform: "linux".into(),
		}
	}

	#[test]
	fn empty_host_is_rejected() {
		let t = Recorder::default();
		assert!(matches!(SubmissionBuilder::new(&t, ""), Err(Error::MissingHost)));
		assert!(matches!(SubmissionBuilder::new(&t, "/"), Err(Error::MissingHost)));
		assert!(t.seen.lock().unwrap().is_empty());
	}

	#[test]
	fn form_body_field_order() {
		let s = Submission {
			url: "http://gw/basic/putValue".into(),
			message: Some("bWVz+c2c=".into()),
			value: "dmFs/dWU=".into(),
		};
		assert_eq!(s.form_body(), "message=bWVz%2Bc2c%3D&value=dmFs%2FdWU%3D");

		let s = Submission { message: None, ..s };
		assert_eq!(s.form_body(), "value=dmFs%2FdWU%3D");
	}

	#[tokio::test]
	async fn untrusted_posts_value_only() {
		let t = Recorder::default();
		let builder = SubmissionBuilder::new(&t, "http://gw/").unwrap();
		let resp = builder.submit(&params(), &Trust::Untrusted).await.unwrap();
		assert_eq!(resp, b"ok");

		let seen = t.seen.lock().unwrap();
		assert_eq!(seen.len(), 1);
		assert_eq!(seen[0].method, Method::Post);
		assert_eq!(seen[0].url, "http://gw/basic/putUntrustValue");
		let body = String::from_utf8(seen[0].body.clone()).unwrap();
		assert!(body.starts_with("value="), "{body}");
		assert!(!body.contains("message="), "{body}");
	}

	#[tokio::test]
	async fn trusted_with_missing_wallet_makes_no_requests() {
		let tmp = tempfile::tempdir().unwrap();
		let t = Recorder::default();
		let builder = SubmissionBuilder::new(&t, "http://gw").unwrap();
		let trust = Trust::Trusted {
			wallet: WalletStore::new(tmp.path()),
			account: "alice".into(),
		};

		let err = builder.submit(&params(), &trust).await.unwrap_err();
		assert!(matches!(err, Error::WalletRead { .. }), "{err}");
		assert!(t.seen.lock().unwrap().is_empty());
	}
}
