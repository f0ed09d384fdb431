use derive_more::derive::{Display, Error};

/// Failures of a payment status check. Each one still maps to a
/// well-formed status response; none of them is fatal.
#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum PaymentCheckError {
	#[display("QR string or MD5 hash required")]
	MissingFingerprint,
	#[display("Proxy/Bakong Error: {_0}")]
	UpstreamUnavailable(#[error(not(source))] String),
	#[display("Unauthorized: {_0}")]
	UpstreamUnauthorized(#[error(not(source))] String),
}

#[derive(Debug, Display, Error, Clone, PartialEq)]
pub enum QrCreationError {
	#[display("order_id is required")]
	MissingOrderId,
	#[display("amount must be greater than zero")]
	InvalidAmount,
	#[display("Failed to generate KHQR: {_0}")]
	Generation(#[error(not(source))] String),
}

impl QrCreationError {
	pub fn is_validation(&self) -> bool {
		matches!(
			self,
			QrCreationError::MissingOrderId | QrCreationError::InvalidAmount
		)
	}
}
