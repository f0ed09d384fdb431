use std::sync::Arc;

use khqr_gateway::run;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = Arc::new(
		khqr_gateway::config::Config::load().expect("Failed to load configuration"),
	);
	run(config).await
}
