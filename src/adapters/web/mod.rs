pub mod bakong_proxy_handler;
pub mod check_payment_handler;
pub mod debug_handler;
pub mod errors;
pub mod health_handler;
pub mod qr_handler;
pub mod schema;

use actix_web::web;

/// Registers every route of the gateway service.
pub fn configure(cfg: &mut web::ServiceConfig) {
	cfg.app_data(errors::json_config())
		.service(qr_handler::create_qr)
		.service(check_payment_handler::check_payment)
		.service(health_handler::health)
		.service(health_handler::index)
		.service(debug_handler::proxy_check)
		.service(debug_handler::token_check)
		.service(debug_handler::config_check);
}
