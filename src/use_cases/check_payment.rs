use std::sync::Arc;

use log::{error, info, warn};
use serde_json::json;

use crate::config::CHECK_TRANSACTION_BY_MD5_PATH;
use crate::domain::errors::PaymentCheckError;
use crate::domain::fingerprint::Fingerprint;
use crate::domain::payment_status::PaymentStatus;
use crate::domain::transport::{BakongTransport, TransportError};
use crate::use_cases::dto::CheckPaymentQuery;
use crate::use_cases::normalize_status::normalize_status;

#[derive(Clone)]
pub struct CheckPaymentUseCase {
	transport: Arc<dyn BakongTransport>,
}

impl CheckPaymentUseCase {
	pub fn new(transport: Arc<dyn BakongTransport>) -> Self {
		Self { transport }
	}

	pub fn transport_mode(&self) -> &'static str {
		self.transport.mode()
	}

	/// Looks up the payment status for a QR payload or its fingerprint.
	///
	/// Makes at most one upstream call and never retries. A missing
	/// fingerprint fails before any network traffic.
	pub async fn execute(
		&self,
		query: CheckPaymentQuery,
	) -> Result<PaymentStatus, PaymentCheckError> {
		let fingerprint = Fingerprint::resolve(
			query.qr_string.as_deref(),
			query.md5_hash.as_deref(),
		)?;

		let payload = json!({ "md5": fingerprint.as_str() });
		let reply = self
			.transport
			.send(CHECK_TRANSACTION_BY_MD5_PATH, &payload)
			.await
			.map_err(|e| {
				match &e {
					TransportError::Timeout { .. } => {
						warn!("Payment check for {fingerprint} timed out: {e}")
					}
					TransportError::Network { .. } => {
						error!("Payment check for {fingerprint} failed: {e}")
					}
				}
				PaymentCheckError::UpstreamUnavailable(e.to_string())
			})?;

		if reply.is_unauthorized() {
			error!(
				"Bakong rejected credentials via {} transport (token expired or \
				 proxy secret mismatch) while checking {fingerprint}: {}",
				self.transport.mode(),
				reply.body
			);
			return Err(PaymentCheckError::UpstreamUnauthorized(
				"Bakong token rejected or expired".to_string(),
			));
		}

		if !reply.is_success() {
			error!(
				"Bakong returned status {} for {fingerprint}: {}",
				reply.status, reply.body
			);
			return Err(PaymentCheckError::UpstreamUnavailable(format!(
				"upstream returned HTTP {}",
				reply.status
			)));
		}

		let status = normalize_status(&reply.body);
		info!(
			"Payment check for {fingerprint}: code {} ({})",
			status.response_code, status.response_message
		);
		Ok(status)
	}
}
