use std::time::Duration;

use derive_more::derive::{Display, Error};
use log::{error, info, warn};
use reqwest::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE, USER_AGENT};
use reqwest::{Client, Method};
use secrecy::{ExposeSecret, Secret};
use subtle::ConstantTimeEq;

#[derive(Debug, Display, Error, PartialEq)]
pub enum ForwardError {
	#[display("Unauthorized Proxy Access")]
	Unauthorized,
	#[display("Bakong Connection Failed: {_0}")]
	Connection(#[error(not(source))] String),
}

#[derive(Debug, Clone)]
pub struct ForwardRequest {
	pub method:        Method,
	/// Path below `/bakong`, starting with `/`.
	pub path:          String,
	pub query:         Option<String>,
	pub authorization: Option<String>,
	pub body:          Vec<u8>,
}

#[derive(Debug, Clone)]
pub struct ForwardedResponse {
	pub status:       u16,
	pub content_type: Option<String>,
	pub body:         Vec<u8>,
}

/// Relays Bakong API calls for hosts that cannot reach the bank directly,
/// gated by a shared secret.
#[derive(Clone)]
pub struct ForwardBakongRequestUseCase {
	http_client:  Client,
	upstream_url: String,
	secret:       Secret<String>,
	user_agent:   String,
}

impl ForwardBakongRequestUseCase {
	pub fn new(
		http_client: Client,
		upstream_url: String,
		secret: Secret<String>,
		user_agent: String,
	) -> Self {
		Self {
			http_client,
			upstream_url: upstream_url.trim_end_matches('/').to_string(),
			secret,
			user_agent,
		}
	}

	pub fn with_timeout(
		timeout: Duration,
		upstream_url: String,
		secret: Secret<String>,
		user_agent: String,
	) -> Result<Self, reqwest::Error> {
		let http_client = Client::builder().timeout(timeout).build()?;
		Ok(Self::new(http_client, upstream_url, secret, user_agent))
	}

	fn is_authorized(&self, proxy_auth: Option<&str>) -> bool {
		proxy_auth.is_some_and(|auth| {
			auth.as_bytes()
				.ct_eq(self.secret.expose_secret().as_bytes())
				.into()
		})
	}

	pub async fn execute(
		&self,
		proxy_auth: Option<&str>,
		request: ForwardRequest,
	) -> Result<ForwardedResponse, ForwardError> {
		if !self.is_authorized(proxy_auth) {
			warn!("Rejected proxy call to {} with bad secret", request.path);
			return Err(ForwardError::Unauthorized);
		}

		let target_url = match &request.query {
			Some(query) if !query.is_empty() => {
				format!("{}{}?{query}", self.upstream_url, request.path)
			}
			_ => format!("{}{}", self.upstream_url, request.path),
		};

		let mut builder = self
			.http_client
			.request(request.method.clone(), &target_url)
			.header(ACCEPT, "application/json")
			.header(CONTENT_TYPE, "application/json")
			.header(USER_AGENT, &self.user_agent);
		if let Some(authorization) = &request.authorization {
			builder = builder.header(AUTHORIZATION, authorization);
		}
		if !matches!(request.method, Method::GET | Method::HEAD) {
			builder = builder.body(request.body);
		}

		let response = builder.send().await.map_err(|e| {
			error!("Forwarding {} {target_url} failed: {e}", request.method);
			ForwardError::Connection(e.to_string())
		})?;

		let status = response.status().as_u16();
		let content_type = response
			.headers()
			.get(CONTENT_TYPE)
			.and_then(|value| value.to_str().ok())
			.map(str::to_string);
		let body = response.bytes().await.map_err(|e| {
			error!("Reading Bakong response for {target_url} failed: {e}");
			ForwardError::Connection(e.to_string())
		})?;

		info!("Forwarded {} {target_url} -> {status}", request.method);
		Ok(ForwardedResponse {
			status,
			content_type,
			body: body.to_vec(),
		})
	}
}
