use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateQrRequest {
	pub order_id: String,
	pub amount:   i64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CheckPaymentRequest {
	#[serde(default)]
	pub qr_string: Option<String>,
	#[serde(default)]
	pub md5_hash:  Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct StatusResponse {
	pub status: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ProxyCheckResponse {
	pub mode:       String,
	pub proxy_url:  Option<String>,
	pub has_token:  bool,
	pub has_secret: bool,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct TokenCheckResponse {
	pub has_token:    bool,
	pub token_length: usize,
	pub api_base_url: String,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ConfigCheckResponse {
	pub bank_account:         String,
	pub merchant_name:        String,
	pub merchant_city:        String,
	pub currency:             String,
	pub store_label:          String,
	pub terminal_label:       String,
	pub order_service_url:    Option<String>,
	pub request_timeout_secs: u64,
}
