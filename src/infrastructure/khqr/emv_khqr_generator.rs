use time::OffsetDateTime;

use super::tlv::{crc16, push_field};
use crate::domain::errors::QrCreationError;
use crate::domain::qr::{MerchantProfile, QrRequest};
use crate::domain::qr_generator::QrGenerator;

const PAYLOAD_FORMAT_INDICATOR: &str = "01";
const DYNAMIC_QR: &str = "12";
const MERCHANT_CATEGORY_CODE: &str = "5999";
const COUNTRY_CODE: &str = "KH";

/// Builds dynamic individual-merchant KHQR payloads.
#[derive(Debug, Clone, Default)]
pub struct EmvKhqrGenerator;

impl EmvKhqrGenerator {
	pub fn new() -> Self {
		Self
	}

	/// Encodes the payload with an explicit creation timestamp.
	pub fn encode(
		&self,
		merchant: &MerchantProfile,
		request: &QrRequest,
		created_at_ms: i128,
	) -> Result<String, QrCreationError> {
		let currency = currency_code(&merchant.currency)?;

		let mut account = String::new();
		push_field(&mut account, "00", &merchant.bank_account, 32)?;

		let mut additional = String::new();
		push_field(&mut additional, "01", &request.order_id, 25)?;
		if let Some(phone) = merchant.phone_number.as_deref().filter(|p| !p.is_empty())
		{
			push_field(&mut additional, "02", phone, 25)?;
		}
		push_field(&mut additional, "03", &merchant.store_label, 25)?;
		push_field(&mut additional, "07", &merchant.terminal_label, 25)?;

		let mut timestamp = String::new();
		push_field(&mut timestamp, "00", &created_at_ms.to_string(), 13)?;

		let mut payload = String::new();
		push_field(&mut payload, "00", PAYLOAD_FORMAT_INDICATOR, 2)?;
		push_field(&mut payload, "01", DYNAMIC_QR, 2)?;
		push_field(&mut payload, "29", &account, 99)?;
		push_field(&mut payload, "52", MERCHANT_CATEGORY_CODE, 4)?;
		push_field(&mut payload, "53", currency, 3)?;
		push_field(&mut payload, "54", &request.amount.to_string(), 13)?;
		push_field(&mut payload, "58", COUNTRY_CODE, 2)?;
		push_field(&mut payload, "59", &merchant.merchant_name, 25)?;
		push_field(&mut payload, "60", &merchant.merchant_city, 15)?;
		push_field(&mut payload, "62", &additional, 99)?;
		push_field(&mut payload, "99", &timestamp, 99)?;

		payload.push_str("6304");
		let checksum = crc16(&payload);
		payload.push_str(&checksum);
		Ok(payload)
	}
}

impl QrGenerator for EmvKhqrGenerator {
	fn create_qr(
		&self,
		merchant: &MerchantProfile,
		request: &QrRequest,
	) -> Result<String, QrCreationError> {
		let created_at_ms = OffsetDateTime::now_utc().unix_timestamp_nanos() / 1_000_000;
		self.encode(merchant, request, created_at_ms)
	}
}

fn currency_code(currency: &str) -> Result<&'static str, QrCreationError> {
	match currency.to_ascii_uppercase().as_str() {
		"KHR" => Ok("116"),
		"USD" => Ok("840"),
		other => Err(QrCreationError::Generation(format!(
			"unsupported currency {other}"
		))),
	}
}
