use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::Client;
use reqwest::header::AUTHORIZATION;
use secrecy::{ExposeSecret, Secret};
use serde_json::{Value, json};

use crate::config::{Config, PROXY_AUTH_HEADER};
use crate::domain::transport::{BakongTransport, TransportError, UpstreamReply};

pub fn build_http_client(timeout: Duration) -> Result<Client, reqwest::Error> {
	Client::builder().timeout(timeout).build()
}

/// Talks to the Bakong API directly with the merchant's bearer token.
#[derive(Clone)]
pub struct DirectTransport {
	http_client: Client,
	base_url:    String,
	token:       Secret<String>,
}

impl DirectTransport {
	pub fn new(http_client: Client, base_url: &str, token: Secret<String>) -> Self {
		Self {
			http_client,
			base_url: base_url.trim_end_matches('/').to_string(),
			token,
		}
	}
}

#[async_trait]
impl BakongTransport for DirectTransport {
	async fn send(
		&self,
		endpoint: &str,
		payload: &Value,
	) -> Result<UpstreamReply, TransportError> {
		let url = format!("{}{endpoint}", self.base_url);
		let request = self
			.http_client
			.post(&url)
			.header(AUTHORIZATION, bearer(&self.token))
			.json(payload);
		post_json(request, url).await
	}

	fn mode(&self) -> &'static str {
		"direct"
	}
}

/// Routes Bakong calls through a forwarding proxy that additionally
/// requires the shared `X-Proxy-Auth` secret.
#[derive(Clone)]
pub struct ProxyTransport {
	http_client: Client,
	proxy_url:   String,
	token:       Secret<String>,
	secret:      Secret<String>,
}

impl ProxyTransport {
	pub fn new(
		http_client: Client,
		proxy_url: &str,
		token: Secret<String>,
		secret: Secret<String>,
	) -> Self {
		Self {
			http_client,
			proxy_url: proxy_url.trim_end_matches('/').to_string(),
			token,
			secret,
		}
	}
}

#[async_trait]
impl BakongTransport for ProxyTransport {
	async fn send(
		&self,
		endpoint: &str,
		payload: &Value,
	) -> Result<UpstreamReply, TransportError> {
		let url = format!("{}{endpoint}", self.proxy_url);
		debug!("Routing via proxy: {url}");
		let request = self
			.http_client
			.post(&url)
			.header(AUTHORIZATION, bearer(&self.token))
			.header(PROXY_AUTH_HEADER, self.secret.expose_secret().as_str())
			.json(payload);
		post_json(request, url).await
	}

	fn mode(&self) -> &'static str {
		"proxy"
	}
}

/// Picks the transport for this deployment: a configured proxy URL selects
/// the proxy, anything else goes straight to Bakong.
pub fn transport_from_config(
	config: &Config,
	http_client: Client,
) -> Arc<dyn BakongTransport> {
	match (config.proxy_url(), config.proxy_secret()) {
		(Some(proxy_url), Some(secret)) => Arc::new(ProxyTransport::new(
			http_client,
			proxy_url,
			config.bakong_token.clone(),
			Secret::new(secret.to_string()),
		)),
		_ => Arc::new(DirectTransport::new(
			http_client,
			&config.bakong_api_url,
			config.bakong_token.clone(),
		)),
	}
}

fn bearer(token: &Secret<String>) -> String {
	format!("Bearer {}", token.expose_secret())
}

async fn post_json(
	request: reqwest::RequestBuilder,
	url: String,
) -> Result<UpstreamReply, TransportError> {
	let response = request.send().await.map_err(|e| to_transport_error(e, &url))?;
	let status = response.status().as_u16();
	let text = response
		.text()
		.await
		.map_err(|e| to_transport_error(e, &url))?;

	let body = match serde_json::from_str::<Value>(&text) {
		Ok(body) => body,
		Err(e) => {
			warn!("Non-JSON body from {url} (status {status}): {e}");
			json!({ "raw": text })
		}
	};

	Ok(UpstreamReply { status, body })
}

fn to_transport_error(e: reqwest::Error, url: &str) -> TransportError {
	if e.is_timeout() {
		TransportError::Timeout {
			url: url.to_string(),
		}
	} else {
		TransportError::Network {
			url:     url.to_string(),
			message: e.to_string(),
		}
	}
}
