use serde::Serialize;
use serde_json::Value;

use crate::domain::errors::PaymentCheckError;

pub const PAID: i64 = 0;
pub const PENDING: i64 = 1;
pub const ERROR: i64 = -1;

/// The one response shape callers of `/check-payment` depend on.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PaymentStatus {
	#[serde(rename = "responseCode")]
	pub response_code:    i64,
	#[serde(rename = "responseMessage")]
	pub response_message: String,
	pub data:             Option<Value>,
}

impl PaymentStatus {
	pub fn new(response_code: i64, response_message: impl Into<String>) -> Self {
		Self {
			response_code,
			response_message: response_message.into(),
			data: None,
		}
	}

	pub fn with_data(mut self, data: Option<Value>) -> Self {
		self.data = data;
		self
	}

	pub fn is_paid(&self) -> bool {
		self.response_code == PAID
	}
}

impl From<PaymentCheckError> for PaymentStatus {
	fn from(error: PaymentCheckError) -> Self {
		let code = match error {
			// A rejected credential must never read as paid, and it is not a
			// definitive failure of the payment either.
			PaymentCheckError::UpstreamUnauthorized(_) => PENDING,
			PaymentCheckError::MissingFingerprint |
			PaymentCheckError::UpstreamUnavailable(_) => ERROR,
		};
		PaymentStatus::new(code, error.to_string())
	}
}
