use actix_web::{HttpResponse, post, web};

use crate::adapters::web::errors::ApiError;
use crate::adapters::web::schema::CreateQrRequest;
use crate::use_cases::create_qr::CreateQrUseCase;
use crate::use_cases::dto::CreateQrCommand;

#[post("/create-qr")]
pub async fn create_qr(
	payload: web::Json<CreateQrRequest>,
	create_qr_use_case: web::Data<CreateQrUseCase>,
) -> Result<HttpResponse, ApiError> {
	let command = CreateQrCommand {
		order_id: payload.order_id.clone(),
		amount:   payload.amount,
	};

	let qr = create_qr_use_case.execute(command)?;
	Ok(HttpResponse::Ok().json(qr))
}
