use actix_web::http::StatusCode;
use actix_web::http::header::ContentType;
use actix_web::{HttpResponse, error, web};
use derive_more::derive::{Display, Error};
use log::warn;
use serde::Serialize;

use crate::domain::errors::QrCreationError;

#[derive(Serialize)]
struct ErrorResponse {
	error: String,
}

#[derive(Debug, Display, Error)]
pub enum ApiError {
	#[display("{_0}")]
	BadClientDataError(#[error(not(source))] String),
	#[display("{_0}")]
	QrGenerationError(#[error(not(source))] String),
}

impl error::ResponseError for ApiError {
	fn error_response(&self) -> HttpResponse {
		HttpResponse::build(self.status_code())
			.content_type(ContentType::json())
			.json(ErrorResponse {
				error: self.to_string(),
			})
	}

	fn status_code(&self) -> StatusCode {
		match self {
			ApiError::BadClientDataError(_) => StatusCode::BAD_REQUEST,
			ApiError::QrGenerationError(_) => StatusCode::INTERNAL_SERVER_ERROR,
		}
	}
}

impl From<QrCreationError> for ApiError {
	fn from(error: QrCreationError) -> Self {
		if error.is_validation() {
			ApiError::BadClientDataError(error.to_string())
		} else {
			ApiError::QrGenerationError(error.to_string())
		}
	}
}

/// JSON extractor settings that report malformed bodies as `{error}`.
pub fn json_config() -> web::JsonConfig {
	web::JsonConfig::default().error_handler(|err, _req| {
		warn!("Rejected request body: {err}");
		ApiError::BadClientDataError(err.to_string()).into()
	})
}

#[cfg(test)]
mod tests {
	use actix_web::body::to_bytes;
	use actix_web::error::ResponseError;

	use super::*;

	#[test]
	fn test_bad_client_data_error() {
		let error = ApiError::BadClientDataError("order_id is required".to_string());
		assert_eq!(error.status_code(), StatusCode::BAD_REQUEST);

		let resp = error.error_response();
		assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
	}

	#[test]
	fn test_qr_creation_errors_map_by_kind() {
		let validation: ApiError = QrCreationError::InvalidAmount.into();
		let generation: ApiError =
			QrCreationError::Generation("unsupported currency EUR".to_string()).into();

		assert_eq!(validation.status_code(), StatusCode::BAD_REQUEST);
		assert_eq!(generation.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
	}

	#[actix_web::test]
	async fn test_error_body_is_error_only() {
		let resp = ApiError::QrGenerationError("boom".to_string()).error_response();
		let body = to_bytes(resp.into_body()).await.unwrap();

		let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
		assert_eq!(json, serde_json::json!({ "error": "boom" }));
	}
}
