use actix_web::{HttpResponse, Responder, post, web};
use log::warn;

use crate::adapters::web::schema::CheckPaymentRequest;
use crate::domain::payment_status::PaymentStatus;
use crate::use_cases::check_payment::CheckPaymentUseCase;
use crate::use_cases::dto::CheckPaymentQuery;

/// Always answers 200 with a normalized status; failures are carried in
/// `responseCode`.
#[post("/check-payment")]
pub async fn check_payment(
	body: web::Bytes,
	check_payment_use_case: web::Data<CheckPaymentUseCase>,
) -> impl Responder {
	let request: CheckPaymentRequest = if body.is_empty() {
		CheckPaymentRequest::default()
	} else {
		serde_json::from_slice(&body).unwrap_or_else(|e| {
			warn!("Unreadable check-payment body: {e}");
			CheckPaymentRequest::default()
		})
	};

	let query = CheckPaymentQuery {
		qr_string: request.qr_string,
		md5_hash:  request.md5_hash,
	};

	let status = check_payment_use_case
		.execute(query)
		.await
		.unwrap_or_else(PaymentStatus::from);

	HttpResponse::Ok().json(status)
}
