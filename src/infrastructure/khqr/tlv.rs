//! EMV merchant-presented QR tag-length-value helpers.

use crate::domain::errors::QrCreationError;

/// Appends `id`, the two-digit length and `value`.
pub(crate) fn push_field(
	out: &mut String,
	id: &str,
	value: &str,
	max_len: usize,
) -> Result<(), QrCreationError> {
	let len = value.chars().count();
	if len > max_len.min(99) {
		return Err(QrCreationError::Generation(format!(
			"tag {id} is {len} characters long, limit is {max_len}"
		)));
	}
	out.push_str(id);
	out.push_str(&format!("{len:02}"));
	out.push_str(value);
	Ok(())
}

/// CRC-16/CCITT-FALSE (poly 0x1021, init 0xFFFF) as four uppercase hex digits.
pub(crate) fn crc16(data: &str) -> String {
	let mut crc: u16 = 0xFFFF;
	for byte in data.bytes() {
		crc ^= u16::from(byte) << 8;
		for _ in 0..8 {
			crc = if crc & 0x8000 != 0 {
				(crc << 1) ^ 0x1021
			} else {
				crc << 1
			};
		}
	}
	format!("{crc:04X}")
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn test_crc16_check_value() {
		assert_eq!(crc16("123456789"), "29B1");
	}

	#[test]
	fn test_push_field_pads_length() {
		let mut out = String::new();
		push_field(&mut out, "58", "KH", 2).unwrap();

		assert_eq!(out, "5802KH");
	}

	#[test]
	fn test_push_field_rejects_long_values() {
		let mut out = String::new();

		assert!(push_field(&mut out, "60", "Kampong Chhnang City", 15).is_err());
		assert!(out.is_empty());
	}
}
