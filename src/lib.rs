pub mod adapters;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod use_cases;

use std::sync::Arc;
use std::time::Duration;

use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use log::info;

use crate::config::{Config, ProxyConfig};
use crate::infrastructure::http::bakong_transport::{
	build_http_client, transport_from_config,
};
use crate::infrastructure::khqr::emv_khqr_generator::EmvKhqrGenerator;
use crate::use_cases::check_payment::CheckPaymentUseCase;
use crate::use_cases::create_qr::CreateQrUseCase;
use crate::use_cases::forward_bakong_request::ForwardBakongRequestUseCase;

fn io_error(e: impl std::fmt::Display) -> std::io::Error {
	std::io::Error::other(e.to_string())
}

/// Runs the gateway: QR creation, payment checks, health and debug routes.
pub async fn run(config: Arc<Config>) -> std::io::Result<()> {
	let http_client =
		build_http_client(Duration::from_secs(config.request_timeout_secs))
			.map_err(io_error)?;
	let transport = transport_from_config(&config, http_client);
	info!("Bakong transport: {}", transport.mode());

	let check_payment_use_case = CheckPaymentUseCase::new(transport);
	let create_qr_use_case = CreateQrUseCase::new(
		Arc::new(EmvKhqrGenerator::new()),
		config.merchant_profile(),
	);

	let bind_address = (config.server_host.clone(), config.server_port);
	let keep_alive = Duration::from_secs(config.server_keepalive);
	let app_config = web::Data::from(config);
	let check_payment_data = web::Data::new(check_payment_use_case);
	let create_qr_data = web::Data::new(create_qr_use_case);

	info!(
		"Starting Actix-Web server on {}:{}...",
		bind_address.0, bind_address.1
	);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.app_data(app_config.clone())
			.app_data(check_payment_data.clone())
			.app_data(create_qr_data.clone())
			.configure(adapters::web::configure)
	})
	.keep_alive(keep_alive)
	.bind(bind_address)?
	.run()
	.await
}

/// Runs the shared-secret forwarding proxy in front of the Bakong API.
pub async fn run_proxy(config: ProxyConfig) -> std::io::Result<()> {
	let forward_use_case = ForwardBakongRequestUseCase::with_timeout(
		Duration::from_secs(config.request_timeout_secs),
		config.upstream_url.clone(),
		config.secret.clone(),
		config.user_agent.clone(),
	)
	.map_err(io_error)?;
	let forward_data = web::Data::new(forward_use_case);

	info!(
		"Starting Bakong proxy on {}:{} -> {}",
		config.server_host, config.server_port, config.upstream_url
	);
	HttpServer::new(move || {
		App::new()
			.wrap(Logger::default())
			.app_data(forward_data.clone())
			.service(adapters::web::health_handler::health)
			.configure(adapters::web::bakong_proxy_handler::configure)
	})
	.bind((config.server_host.clone(), config.server_port))?
	.run()
	.await
}
