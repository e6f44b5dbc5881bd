use base64::{engine::general_purpose::STANDARD, Engine as _};
use p256::ecdsa::signature::hazmat::{PrehashSigner, PrehashVerifier};
use p256::ecdsa::{Signature, SigningKey, VerifyingKey};
use p256::pkcs8::{DecodePublicKey, EncodePublicKey};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::{Error, Result};

/// Authorization envelope accompanying a trusted submission.
///
/// `public_key` is base64 DER (SubjectPublicKeyInfo) and `signature` is
/// base64 ASN.1 DER, both filled in by [`generate_signature`].
///
/// [`generate_signature`]: SignedMessage::generate_signature
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignedMessage {
	pub nonce: u64,
	pub public_key: String,
	pub signature: String,
}

impl SignedMessage {
	pub fn new(nonce: u64) -> Self {
		Self {
			nonce,
			public_key: String::new(),
			signature: String::new(),
		}
	}

	/// SHA-256 over the decimal nonce followed by the payload bytes.
	pub fn digest(&self, payload: &[u8]) -> [u8; 32] {
		let mut h = Sha256::new();
		h.update(self.nonce.to_string().as_bytes());
		h.update(payload);
		h.finalize().into()
	}

	/// Sign `payload` with `key`, recording the signer's public key and
	/// the signature on this message.
	pub fn generate_signature(&mut self, key: &SigningKey, payload: &[u8]) -> Result<()> {
		let public_der = key
			.verifying_key()
			.to_public_key_der()
			.map_err(|e| Error::Sign(format!("encode public key: {e}")))?;

		let digest = self.digest(payload);
		let sig: Signature = key
			.sign_prehash(&digest)
			.map_err(|e| Error::Sign(e.to_string()))?;

		self.public_key = STANDARD.encode(public_der.as_bytes());
		self.signature = STANDARD.encode(sig.to_der().as_bytes());
		tracing::debug!(nonce = self.nonce, digest = %hex::encode(digest), "signed message");
		Ok(())
	}

	/// Check the signature against `payload` using the embedded public key.
	pub fn verify(&self, payload: &[u8]) -> Result<()> {
		let der = STANDARD
			.decode(&self.public_key)
			.map_err(|e| Error::Verify(format!("public key is not base64: {e}")))?;
		let key = VerifyingKey::from_public_key_der(&der)
			.map_err(|e| Error::Verify(format!("public key: {e}")))?;

		let raw = STANDARD
			.decode(&self.signature)
			.map_err(|e| Error::Verify(format!("signature is not base64: {e}")))?;
		let sig = Signature::from_der(&raw).map_err(|e| Error::Verify(format!("signature: {e}")))?;

		key.verify_prehash(&self.digest(payload), &sig)
			.map_err(|e| Error::Verify(e.to_string()))
	}

	/// JSON then base64, the form the gateway takes in the `message` field.
	pub fn encode(&self) -> Result<String> {
		let json = serde_json::to_vec(self).map_err(|source| Error::Encode {
			what: "signed message",
			source,
		})?;
		Ok(STANDARD.encode(json))
	}

	pub fn decode(encoded: &str) -> Option<Self> {
		let raw = STANDARD.decode(encoded).ok()?;
		serde_json::from_slice(&raw).ok()
	}
}

/// Build, sign and encode the message for `payload` in one step.
pub fn sign(nonce: u64, key: &SigningKey, payload: &[u8]) -> Result<String> {
	let mut msg = SignedMessage::new(nonce);
	msg.generate_signature(key, payload)?;
	msg.encode()
}
