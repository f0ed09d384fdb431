use std::sync::Arc;

use log::{error, info};

use crate::domain::errors::QrCreationError;
use crate::domain::fingerprint::Fingerprint;
use crate::domain::qr::{MerchantProfile, QrPayload, QrRequest};
use crate::domain::qr_generator::QrGenerator;
use crate::use_cases::dto::CreateQrCommand;

#[derive(Clone)]
pub struct CreateQrUseCase {
	generator: Arc<dyn QrGenerator>,
	merchant:  MerchantProfile,
}

impl CreateQrUseCase {
	pub fn new(generator: Arc<dyn QrGenerator>, merchant: MerchantProfile) -> Self {
		Self {
			generator,
			merchant,
		}
	}

	pub fn execute(
		&self,
		command: CreateQrCommand,
	) -> Result<QrPayload, QrCreationError> {
		let order_id = command.order_id.trim();
		if order_id.is_empty() {
			return Err(QrCreationError::MissingOrderId);
		}
		if command.amount <= 0 {
			return Err(QrCreationError::InvalidAmount);
		}

		let request = QrRequest {
			order_id: order_id.to_string(),
			amount:   command.amount,
		};

		let qr_string = self
			.generator
			.create_qr(&self.merchant, &request)
			.inspect_err(|e| {
				error!("KHQR generation failed for order {}: {e}", request.order_id)
			})?;
		let md5 = Fingerprint::of(&qr_string).to_string();

		info!("KHQR created for order {} ({md5})", request.order_id);
		Ok(QrPayload { qr_string, md5 })
	}
}
