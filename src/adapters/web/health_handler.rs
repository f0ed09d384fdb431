use actix_web::{HttpResponse, Responder, get};

use crate::adapters::web::schema::StatusResponse;

#[get("/health")]
pub async fn health() -> impl Responder {
	HttpResponse::Ok().json(StatusResponse {
		status: "ok".to_string(),
	})
}

#[get("/")]
pub async fn index() -> impl Responder {
	HttpResponse::Ok().json(StatusResponse {
		status: "Bakong service running".to_string(),
	})
}
