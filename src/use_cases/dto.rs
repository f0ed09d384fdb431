use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CreateQrCommand {
	pub order_id: String,
	pub amount:   i64,
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct CheckPaymentQuery {
	pub qr_string: Option<String>,
	pub md5_hash:  Option<String>,
}
