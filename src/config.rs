use secrecy::{ExposeSecret, Secret};
use serde::Deserialize;

use crate::domain::qr::MerchantProfile;

pub const DEFAULT_BAKONG_API_URL: &str = "https://api-bakong.nbc.gov.kh";
pub const CHECK_TRANSACTION_BY_MD5_PATH: &str = "/v1/check_transaction_by_md5";
pub const PROXY_AUTH_HEADER: &str = "X-Proxy-Auth";

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
	pub bank_account:         String,
	pub merchant_name:        String,
	pub merchant_city:        String,
	pub phone_number:         Option<String>,
	pub store_label:          String,
	pub terminal_label:       String,
	pub currency:             String,
	pub bakong_token:         Secret<String>,
	pub bakong_api_url:       String,
	pub proxy_url:            Option<String>,
	pub proxy_secret:         Option<Secret<String>>,
	pub order_service_url:    Option<String>,
	pub request_timeout_secs: u64,
	pub server_host:          String,
	pub server_port:          u16,
	pub server_keepalive:     u64,
}

impl Config {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("merchant_city", "Phnom Penh")?
			.set_default("store_label", "UrbanStore")?
			.set_default("terminal_label", "T1")?
			.set_default("currency", "KHR")?
			.set_default("bakong_api_url", DEFAULT_BAKONG_API_URL)?
			.set_default("request_timeout_secs", 15)?
			.set_default("server_host", "0.0.0.0")?
			.set_default("server_port", 8000)?
			.set_default("server_keepalive", 75)?
			.add_source(config::Environment::with_prefix("KHQR"))
			.build()?;

		let config: Config = config_builder.try_deserialize()?;
		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<(), config::ConfigError> {
		if self.proxy_url().is_some() && self.proxy_secret().is_none() {
			return Err(config::ConfigError::Message(
				"KHQR_PROXY_URL is set but KHQR_PROXY_SECRET is missing".to_string(),
			));
		}
		Ok(())
	}

	/// Proxy URL with empty values treated as unset.
	pub fn proxy_url(&self) -> Option<&str> {
		self.proxy_url
			.as_deref()
			.map(str::trim)
			.filter(|url| !url.is_empty())
	}

	pub fn merchant_profile(&self) -> MerchantProfile {
		MerchantProfile {
			bank_account:   self.bank_account.clone(),
			merchant_name:  self.merchant_name.clone(),
			merchant_city:  self.merchant_city.clone(),
			phone_number:   self.phone_number.clone(),
			store_label:    self.store_label.clone(),
			terminal_label: self.terminal_label.clone(),
			currency:       self.currency.clone(),
		}
	}

	pub fn proxy_secret(&self) -> Option<&str> {
		self.proxy_secret
			.as_ref()
			.map(|secret| secret.expose_secret().as_str())
			.filter(|secret| !secret.is_empty())
	}
}

/// Settings for the standalone forwarding proxy binary.
#[derive(Debug, Deserialize, Clone)]
pub struct ProxyConfig {
	pub secret:               Secret<String>,
	pub upstream_url:         String,
	pub user_agent:           String,
	pub request_timeout_secs: u64,
	pub server_host:          String,
	pub server_port:          u16,
}

impl ProxyConfig {
	pub fn load() -> Result<Self, config::ConfigError> {
		let config_builder = config::Config::builder()
			.set_default("upstream_url", DEFAULT_BAKONG_API_URL)?
			.set_default(
				"user_agent",
				"Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 \
				 (KHTML, like Gecko) Chrome/121.0.0.0 Safari/537.36",
			)?
			.set_default("request_timeout_secs", 15)?
			.set_default("server_host", "0.0.0.0")?
			.set_default("server_port", 8787)?
			.add_source(config::Environment::with_prefix("KHQR_PROXY"))
			.build()?;

		let config: ProxyConfig = config_builder.try_deserialize()?;
		config.validate()?;
		Ok(config)
	}

	fn validate(&self) -> Result<(), config::ConfigError> {
		if self.secret.expose_secret().trim().is_empty() {
			return Err(config::ConfigError::Message(
				"KHQR_PROXY_SECRET must not be empty".to_string(),
			));
		}
		Ok(())
	}
}
