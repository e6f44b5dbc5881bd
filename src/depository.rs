use base64::{engine::general_purpose::STANDARD, Engine as _};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// A content-provenance record as the gateway expects it.
///
/// Field order is part of the wire format: the gateway parses the decoded
/// JSON against a fixed schema.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DepositoryValue {
	pub name: String,
	pub content_type: String,
	#[serde(rename = "contentID")]
	pub content_id: String,
	pub platform: String,
	pub trusted_timestamp: String,
}

impl DepositoryValue {
	/// Build a record stamped with the current Unix time in seconds.
	pub fn new(name: &str, content_type: &str, content_id: &str, platform: &str) -> Self {
		Self::with_timestamp(
			name,
			content_type,
			content_id,
			platform,
			chrono::Utc::now().timestamp(),
		)
	}

	pub fn with_timestamp(
		name: &str,
		content_type: &str,
		content_id: &str,
		platform: &str,
		unix_secs: i64,
	) -> Self {
		Self {
			name: name.to_owned(),
			content_type: content_type.to_owned(),
			content_id: content_id.to_owned(),
			platform: platform.to_owned(),
			trusted_timestamp: unix_secs.to_string(),
		}
	}

	/// Serialize to JSON and base64 (standard alphabet) the bytes.
	pub fn encode(&self) -> Result<String> {
		let raw = serde_json::to_vec(self).map_err(|source| Error::Encode {
			what: "depository value",
			source,
		})?;
		Ok(STANDARD.encode(raw))
	}

	/// Inverse of [`encode`](Self::encode).
	pub fn decode(encoded: &str) -> Option<Self> {
		let raw = STANDARD.decode(encoded).ok()?;
		serde_json::from_slice(&raw).ok()
	}
}

/// Build and encode a fresh record in one step.
pub fn encode(name: &str, content_type: &str, content_id: &str, platform: &str) -> Result<String> {
	DepositoryValue::new(name, content_type, content_id, platform).encode()
}

#[cfg(test)]
mod tests {
	use super::*;
	use proptest::prelude::*;

	#[test]
	fn json_layout_is_fixed() {
		let v = DepositoryValue::with_timestamp("doc1", "pdf", "abc123", "linux", 1_700_000_000);
		let json = String::from_utf8(STANDARD.decode(v.encode().unwrap()).unwrap()).unwrap();
		assert_eq!(
			json,
			r#"{"name":"doc1","contentType":"pdf","contentID":"abc123","platform":"linux","trustedTimestamp":"1700000000"}"#
		);
	}

	#[test]
	fn encode_stamps_current_time() {
		let before = chrono::Utc::now().timestamp();
		let encoded = encode("doc1", "pdf", "abc123", "linux").unwrap();
		let after = chrono::Utc::now().timestamp();

		let v = DepositoryValue::decode(&encoded).unwrap();
		assert_eq!(v.name, "doc1");
		assert_eq!(v.content_type, "pdf");
		assert_eq!(v.content_id, "abc123");
		assert_eq!(v.platform, "linux");

		let ts: i64 = v.trusted_timestamp.parse().unwrap();
		assert!((before..=after).contains(&ts), "{ts} not in [{before}, {after}]");
	}

	#[test]
	fn escapes_awkward_strings() {
		let v = DepositoryValue::with_timestamp("a \"quoted\" name", "", "id/with/slashes", "plat\nform", 0);
		let decoded = DepositoryValue::decode(&v.encode().unwrap()).unwrap();
		assert_eq!(decoded, v);
	}

	#[test]
	fn decode_rejects_garbage() {
		assert!(DepositoryValue::decode("not base64!").is_none());
		assert!(DepositoryValue::decode(&STANDARD.encode(b"{}")).is_none());
	}

	proptest! {
		#[test]
		fn any_record_roundtrips(
			name in any::<String>(),
			content_type in any::<String>(),
			content_id in any::<String>(),
			platform in any::<String>(),
			ts in any::<i64>(),
		) {
			let v = DepositoryValue::with_timestamp(&name, &content_type, &content_id, &platform, ts);
			let decoded = DepositoryValue::decode(&v.encode().unwrap()).unwrap();
			prop_assert_eq!(decoded, v);
		}

		#[test]
		fn encode_keeps_all_fields(
			name in any::<String>(),
			content_type in any::<String>(),
			content_id in any::<String>(),
			platform in any::<String>(),
		) {
			let before = chrono::Utc::now().timestamp();
			let v = DepositoryValue::decode(&encode(&name, &content_type, &content_id, &platform).unwrap()).unwrap();
			let after = chrono::Utc::now().timestamp();

			prop_assert_eq!(&v.name, &name);
			prop_assert_eq!(&v.content_type, &content_type);
			prop_assert_eq!(&v.content_id, &content_id);
			prop_assert_eq!(&v.platform, &platform);
			let ts: i64 = v.trusted_timestamp.parse().unwrap();
			prop_assert!((before..=after).contains(&ts));
		}
	}
}
