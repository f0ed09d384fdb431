use crate::domain::errors::QrCreationError;
use crate::domain::qr::{MerchantProfile, QrRequest};

/// Produces the KHQR payload string for an order.
pub trait QrGenerator: Send + Sync + 'static {
	fn create_qr(
		&self,
		merchant: &MerchantProfile,
		request: &QrRequest,
	) -> Result<String, QrCreationError>;
}
