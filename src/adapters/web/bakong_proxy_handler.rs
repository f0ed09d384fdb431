use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, web};
use log::warn;
use reqwest::Method;
use serde_json::json;

use crate::config::PROXY_AUTH_HEADER;
use crate::use_cases::forward_bakong_request::{
	ForwardBakongRequestUseCase, ForwardError, ForwardRequest,
};

/// Handles `/bakong/{tail:.*}` on the forwarding proxy.
pub async fn forward_to_bakong(
	req: HttpRequest,
	body: web::Bytes,
	forward_use_case: web::Data<ForwardBakongRequestUseCase>,
) -> HttpResponse {
	let Ok(method) = Method::from_bytes(req.method().as_str().as_bytes()) else {
		warn!("Unsupported method {} on proxy", req.method());
		return HttpResponse::MethodNotAllowed().finish();
	};

	let header = |name: &str| {
		req.headers()
			.get(name)
			.and_then(|value| value.to_str().ok())
			.map(str::to_string)
	};

	let request = ForwardRequest {
		method,
		path: format!("/{}", req.match_info().query("tail")),
		query: Some(req.query_string().to_string()),
		authorization: header("Authorization"),
		body: body.to_vec(),
	};

	match forward_use_case
		.execute(header(PROXY_AUTH_HEADER).as_deref(), request)
		.await
	{
		Ok(forwarded) => {
			let status =
				StatusCode::from_u16(forwarded.status).unwrap_or(StatusCode::BAD_GATEWAY);
			let mut response = HttpResponse::build(status);
			if let Some(content_type) = forwarded.content_type {
				response.content_type(content_type);
			}
			response.body(forwarded.body)
		}
		Err(ForwardError::Unauthorized) => HttpResponse::Unauthorized()
			.json(json!({ "error": "Unauthorized Proxy Access" })),
		Err(ForwardError::Connection(details)) => HttpResponse::BadGateway()
			.json(json!({ "error": "Bakong Connection Failed", "details": details })),
	}
}

pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.service(
		web::resource("/bakong/{tail:.*}").route(web::route().to(forward_to_bakong)),
	);
}
