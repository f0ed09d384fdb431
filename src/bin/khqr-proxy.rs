use khqr_gateway::run_proxy;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
	env_logger::init();

	let config = khqr_gateway::config::ProxyConfig::load()
		.expect("Failed to load proxy configuration");
	run_proxy(config).await
}
