use std::fmt;

use md5::{Digest, Md5};
use serde::{Deserialize, Serialize};

use crate::domain::errors::PaymentCheckError;

/// MD5 of a KHQR payload, hex encoded. Bakong indexes transactions by it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fingerprint(String);

impl Fingerprint {
	pub fn of(payload: &str) -> Self {
		Fingerprint(hex::encode(Md5::digest(payload.as_bytes())))
	}

	/// Picks the fingerprint for a status check. A caller-supplied hash is
	/// trusted verbatim and wins over the payload; blank values count as
	/// missing.
	pub fn resolve(
		qr_string: Option<&str>,
		md5_hash: Option<&str>,
	) -> Result<Self, PaymentCheckError> {
		if let Some(hash) = md5_hash.filter(|h| !h.is_empty()) {
			return Ok(Fingerprint(hash.to_string()));
		}

		match qr_string.filter(|qr| !qr.is_empty()) {
			Some(qr) => Ok(Fingerprint::of(qr)),
			None => Err(PaymentCheckError::MissingFingerprint),
		}
	}

	pub fn as_str(&self) -> &str {
		&self.0
	}
}

impl fmt::Display for Fingerprint {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.0)
	}
}
