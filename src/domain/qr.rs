use serde::Serialize;

/// Merchant details stamped into every generated KHQR payload.
#[derive(Debug, Clone, PartialEq)]
pub struct MerchantProfile {
	pub bank_account:   String,
	pub merchant_name:  String,
	pub merchant_city:  String,
	pub phone_number:   Option<String>,
	pub store_label:    String,
	pub terminal_label: String,
	pub currency:       String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct QrRequest {
	pub order_id: String,
	pub amount:   i64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QrPayload {
	pub qr_string: String,
	pub md5:       String,
}
