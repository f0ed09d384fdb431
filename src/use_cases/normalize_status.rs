use serde_json::Value;

use crate::domain::payment_status::{ERROR, PAID, PENDING, PaymentStatus};

const CODE_KEYS: [&str; 2] = ["responseCode", "code"];
const MESSAGE_KEYS: [&str; 3] = ["responseMessage", "message", "response_msg"];
const DATA_KEYS: [&str; 2] = ["data", "result"];

/// Coerces a Bakong (or proxy) body into a [`PaymentStatus`].
///
/// The code comes from `responseCode` or `code` and falls back to `-1` when
/// absent or unparseable. The message comes from `responseMessage`,
/// `message` or `response_msg`. The data comes from `data` or `result`,
/// falling back to the whole body.
pub fn normalize_status(body: &Value) -> PaymentStatus {
	let code = first_present(body, &CODE_KEYS)
		.and_then(parse_code)
		.unwrap_or(ERROR);

	let message = first_present(body, &MESSAGE_KEYS)
		.and_then(message_text)
		.unwrap_or_else(|| default_message(code).to_string());

	let data = match DATA_KEYS.iter().find_map(|key| body.get(*key)) {
		Some(Value::Null) => None,
		Some(value) => Some(value.clone()),
		None => Some(body.clone()),
	};

	PaymentStatus::new(code, message).with_data(data)
}

fn first_present<'a>(body: &'a Value, keys: &[&str]) -> Option<&'a Value> {
	keys.iter()
		.filter_map(|key| body.get(*key))
		.find(|value| !value.is_null())
}

fn parse_code(value: &Value) -> Option<i64> {
	match value {
		Value::Number(number) => number
			.as_i64()
			.or_else(|| number.as_f64().filter(|f| f.fract() == 0.0).map(|f| f as i64)),
		Value::String(text) => text.trim().parse().ok(),
		_ => None,
	}
}

fn message_text(value: &Value) -> Option<String> {
	match value {
		Value::String(text) => Some(text.clone()),
		Value::Number(_) | Value::Bool(_) => Some(value.to_string()),
		_ => None,
	}
}

fn default_message(code: i64) -> &'static str {
	match code {
		PAID => "Payment successful",
		PENDING => "Transaction not found or pending",
		_ => "Unexpected response from Bakong",
	}
}
