use async_trait::async_trait;
use derive_more::derive::{Display, Error};
use serde_json::Value;

/// What came back from Bakong (or the proxy in front of it).
#[derive(Debug, Clone, PartialEq)]
pub struct UpstreamReply {
	pub status: u16,
	/// Parsed JSON body, or `{"raw": <text>}` when the body is not JSON.
	pub body:   Value,
}

impl UpstreamReply {
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	pub fn is_unauthorized(&self) -> bool {
		self.status == 401
	}
}

#[derive(Debug, Display, Error)]
pub enum TransportError {
	#[display("request to {url} timed out")]
	Timeout { url: String },
	#[display("request to {url} failed: {message}")]
	Network { url: String, message: String },
}

/// Sends one JSON POST to an upstream Bakong endpoint path.
#[async_trait]
pub trait BakongTransport: Send + Sync + 'static {
	async fn send(
		&self,
		endpoint: &str,
		payload: &Value,
	) -> Result<UpstreamReply, TransportError>;

	/// Short label used in logs and debug output.
	fn mode(&self) -> &'static str;
}
