use std::sync::Arc;
use std::time::Duration;

use actix_web::web;
use khqr_gateway::config::Config;
use khqr_gateway::infrastructure::http::bakong_transport::{
	build_http_client, transport_from_config,
};
use khqr_gateway::infrastructure::khqr::emv_khqr_generator::EmvKhqrGenerator;
use khqr_gateway::use_cases::check_payment::CheckPaymentUseCase;
use khqr_gateway::use_cases::create_qr::CreateQrUseCase;
use secrecy::Secret;

pub const TEST_TOKEN: &str = "test-bakong-token";
pub const TEST_PROXY_SECRET: &str = "test-proxy-secret";

pub fn test_config(bakong_api_url: &str) -> Config {
	Config {
		bank_account:         "urban_store@aclb".to_string(),
		merchant_name:        "Urban Store".to_string(),
		merchant_city:        "Phnom Penh".to_string(),
		phone_number:         Some("85512345678".to_string()),
		store_label:          "UrbanStore".to_string(),
		terminal_label:       "T1".to_string(),
		currency:             "KHR".to_string(),
		bakong_token:         Secret::new(TEST_TOKEN.to_string()),
		bakong_api_url:       bakong_api_url.to_string(),
		proxy_url:            None,
		proxy_secret:         None,
		order_service_url:    Some("http://orders.test".to_string()),
		request_timeout_secs: 1,
		server_host:          "127.0.0.1".to_string(),
		server_port:          0,
		server_keepalive:     5,
	}
}

pub fn proxied_config(proxy_url: &str) -> Config {
	Config {
		proxy_url: Some(proxy_url.to_string()),
		proxy_secret: Some(Secret::new(TEST_PROXY_SECRET.to_string())),
		..test_config("http://127.0.0.1:1")
	}
}

pub struct GatewayData {
	pub config:        web::Data<Config>,
	pub check_payment: web::Data<CheckPaymentUseCase>,
	pub create_qr:     web::Data<CreateQrUseCase>,
}

/// Wires the use cases the same way `run` does.
pub fn gateway_data(config: Config) -> GatewayData {
	let http_client =
		build_http_client(Duration::from_secs(config.request_timeout_secs)).unwrap();
	let transport = transport_from_config(&config, http_client);
	let create_qr = CreateQrUseCase::new(
		Arc::new(EmvKhqrGenerator::new()),
		config.merchant_profile(),
	);

	GatewayData {
		check_payment: web::Data::new(CheckPaymentUseCase::new(transport)),
		create_qr:     web::Data::new(create_qr),
		config:        web::Data::new(config),
	}
}
