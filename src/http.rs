//! Shared HTTP transport for token exchanges and vault calls.
//!
//! [`ReqwestHttpClient`] is built once per [`PamClient`](crate::PamClient) from the
//! configured TLS policy and reused for every request, so connections are pooled across
//! calls. Requests are bounded by [`REQUEST_TIMEOUT`] and never follow redirects: the token
//! endpoint and the vault API both answer directly.

// std
use std::{ops::Deref, time::Duration as StdDuration};
// crates.io
use reqwest::redirect::Policy;
// self
use crate::{_prelude::*, config::Config, error::ConfigError};

/// Fixed per-request timeout applied to every outbound call.
pub const REQUEST_TIMEOUT: StdDuration = StdDuration::from_secs(30);
/// `User-Agent` sent with every request.
pub const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Builds a pooled client honoring the TLS policy in `config`.
	///
	/// Certificate validation stays on unless [`Config::tls_skip_verify`] is `true`.
	pub fn from_config(config: &Config) -> Result<Self, ConfigError> {
		let client = ReqwestClient::builder()
			.timeout(REQUEST_TIMEOUT)
			.user_agent(USER_AGENT)
			.redirect(Policy::none())
			.danger_accept_invalid_certs(config.tls_skip_verify())
			.build()?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	///
	/// The caller owns the timeout and TLS settings of a client supplied this way.
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}
