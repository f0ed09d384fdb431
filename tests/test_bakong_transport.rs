use std::time::Duration;

use khqr_gateway::domain::transport::{BakongTransport, TransportError};
use khqr_gateway::infrastructure::http::bakong_transport::{
	DirectTransport, ProxyTransport, build_http_client, transport_from_config,
};
use secrecy::Secret;
use serde_json::json;
use wiremock::matchers::{header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

mod support;

use crate::support::gateway::{proxied_config, test_config};

fn client() -> reqwest::Client {
	build_http_client(Duration::from_secs(1)).unwrap()
}

#[tokio::test]
async fn test_direct_transport_returns_json_body_and_status() {
	let bakong = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/v1/check_transaction_by_md5"))
		.and(header("authorization", "Bearer t0ken"))
		.respond_with(
			ResponseTemplate::new(404).set_body_json(json!({ "responseCode": 1 })),
		)
		.mount(&bakong)
		.await;
	let transport =
		DirectTransport::new(client(), &bakong.uri(), Secret::new("t0ken".to_string()));

	let reply = transport
		.send("/v1/check_transaction_by_md5", &json!({ "md5": "abc" }))
		.await
		.unwrap();

	assert_eq!(reply.status, 404);
	assert!(!reply.is_success());
	assert_eq!(reply.body, json!({ "responseCode": 1 }));
}

#[tokio::test]
async fn test_proxy_transport_wraps_plain_text_body() {
	let proxy = MockServer::start().await;
	Mock::given(method("POST"))
		.and(path("/bakong/v1/check_transaction_by_md5"))
		.and(header("x-proxy-auth", "s3cret"))
		.respond_with(ResponseTemplate::new(200).set_body_string("upstream says hi"))
		.mount(&proxy)
		.await;
	let transport = ProxyTransport::new(
		client(),
		&format!("{}/bakong", proxy.uri()),
		Secret::new("t0ken".to_string()),
		Secret::new("s3cret".to_string()),
	);

	let reply = transport
		.send("/v1/check_transaction_by_md5", &json!({ "md5": "abc" }))
		.await
		.unwrap();

	assert!(reply.is_success());
	assert_eq!(reply.body, json!({ "raw": "upstream says hi" }));
}

#[tokio::test]
async fn test_timeout_is_reported_as_timeout() {
	let bakong = MockServer::start().await;
	Mock::given(method("POST"))
		.respond_with(ResponseTemplate::new(200).set_delay(Duration::from_secs(3)))
		.mount(&bakong)
		.await;
	let transport =
		DirectTransport::new(client(), &bakong.uri(), Secret::new("t0ken".to_string()));

	let result = transport
		.send("/v1/check_transaction_by_md5", &json!({ "md5": "abc" }))
		.await;

	assert!(matches!(result, Err(TransportError::Timeout { .. })));
}

#[tokio::test]
async fn test_connection_failure_is_network_error() {
	let transport = DirectTransport::new(
		client(),
		"http://127.0.0.1:1",
		Secret::new("t0ken".to_string()),
	);

	let result = transport
		.send("/v1/check_transaction_by_md5", &json!({ "md5": "abc" }))
		.await;

	assert!(matches!(result, Err(TransportError::Network { .. })));
}

#[test]
fn test_transport_selected_by_configuration() {
	let direct = transport_from_config(&test_config("http://bakong.test"), client());
	let proxied =
		transport_from_config(&proxied_config("https://proxy.test/bakong"), client());

	assert_eq!(direct.mode(), "direct");
	assert_eq!(proxied.mode(), "proxy");
}

#[test]
fn test_blank_proxy_url_falls_back_to_direct() {
	let mut config = proxied_config("https://proxy.test/bakong");
	config.proxy_url = Some("   ".to_string());

	assert_eq!(transport_from_config(&config, client()).mode(), "direct");
}
