//! Gateway routes.  All paths are appended to the configured host.

use crate::error::{Error, Result};

pub const PUT_VALUE: &str = "/basic/putValue";
pub const PUT_UNTRUSTED_VALUE: &str = "/basic/putUntrustValue";
pub const CURRENT_NONCE: &str = "/basic/currentNonce";
pub const DEPOSITORIES: &str = "/basic/depositories";

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Strip trailing slashes; a host that is empty afterwards is missing.
pub fn normalize_host(host: &str) -> Result<&str> {
	match host.trim_end_matches('/') {
		"" => Err(Error::MissingHost),
		trimmed => Ok(trimmed),
	}
}

/// Join a host and a route, tolerating a trailing slash on the host.
pub fn join(host: &str, path: &str) -> String {
	format!("{}{path}", host.trim_end_matches('/'))
}
