//! Operator troubleshooting endpoints. Secrets are reported by presence and
//! length only.

use actix_web::{HttpResponse, Responder, get, web};
use secrecy::ExposeSecret;

use crate::adapters::web::schema::{
	ConfigCheckResponse, ProxyCheckResponse, TokenCheckResponse,
};
use crate::config::Config;
use crate::use_cases::check_payment::CheckPaymentUseCase;

#[get("/debug/proxy-check")]
pub async fn proxy_check(
	config: web::Data<Config>,
	check_payment_use_case: web::Data<CheckPaymentUseCase>,
) -> impl Responder {
	HttpResponse::Ok().json(ProxyCheckResponse {
		mode:       check_payment_use_case.transport_mode().to_string(),
		proxy_url:  config.proxy_url().map(str::to_string),
		has_token:  !config.bakong_token.expose_secret().is_empty(),
		has_secret: config.proxy_secret().is_some(),
	})
}

#[get("/debug/token")]
pub async fn token_check(config: web::Data<Config>) -> impl Responder {
	let token = config.bakong_token.expose_secret();
	HttpResponse::Ok().json(TokenCheckResponse {
		has_token:    !token.is_empty(),
		token_length: token.len(),
		api_base_url: config.bakong_api_url.clone(),
	})
}

#[get("/debug/config")]
pub async fn config_check(config: web::Data<Config>) -> impl Responder {
	HttpResponse::Ok().json(ConfigCheckResponse {
		bank_account:         config.bank_account.clone(),
		merchant_name:        config.merchant_name.clone(),
		merchant_city:        config.merchant_city.clone(),
		currency:             config.currency.clone(),
		store_label:          config.store_label.clone(),
		terminal_label:       config.terminal_label.clone(),
		order_service_url:    config.order_service_url.clone(),
		request_timeout_secs: config.request_timeout_secs,
	})
}
