#![allow(dead_code, unused_macros)]

pub mod gateway;

/// Builds a test service with every gateway route registered.
macro_rules! gateway_app {
	($config:expr) => {{
		let data = $crate::support::gateway::gateway_data($config);
		actix_web::test::init_service(
			actix_web::App::new()
				.app_data(data.config.clone())
				.app_data(data.check_payment.clone())
				.app_data(data.create_qr.clone())
				.configure(khqr_gateway::adapters::web::configure),
		)
		.await
	}};
}
