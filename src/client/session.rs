//! Client-credentials session acquisition and refresh.
//!
//! [`PamClient::acquire_session`] posts the service-account credentials to the identity
//! tenant's `oauth2/platformtoken` endpoint and turns the JSON answer into a
//! [`Session`]. [`PamClient::refresh_session`] does the same and then swaps the result
//! into the client. A failed refresh leaves the client without a session, so stale
//! credentials are never attached after the provider has rejected the account.

// self
use crate::{
	_prelude::*,
	auth::Session,
	client::PamClient,
	error::{AuthError, ParseError, RemoteError, TransportError},
	obs::{self, Operation},
};

const GRANT_TYPE: &str = "client_credentials";

/// Token endpoint answer; success and error members share one object.
#[derive(Debug, Deserialize)]
struct TokenEndpointResponse {
	access_token: Option<String>,
	token_type: Option<String>,
	expires_in: Option<i64>,
	error: Option<String>,
	error_description: Option<String>,
}

impl PamClient {
	/// Requests a fresh session without touching the stored one.
	pub async fn acquire_session(&self) -> Result<Session> {
		obs::observe(Operation::AcquireSession, "acquire_session", self.exchange_client_credentials())
			.await
	}

	/// Acquires a session and replaces the stored one with the outcome.
	///
	/// On success the new session replaces the old one wholesale. On any failure the
	/// stored session is cleared and the error is returned. Concurrent refreshes run one
	/// at a time.
	pub async fn refresh_session(&self) -> Result<Session> {
		obs::observe(Operation::RefreshSession, "refresh_session", self.refresh_serialized()).await
	}

	async fn exchange_client_credentials(&self) -> Result<Session> {
		let form = [
			("grant_type", GRANT_TYPE),
			("client_id", self.config.client_id().as_str()),
			("client_secret", self.config.client_secret().secret().as_str()),
		];
		let response = self
			.http_client
			.post(self.config.token_url().clone())
			.form(&form)
			.send()
			.await
			.map_err(TransportError::from)?;
		let status = response.status();
		let body = response.bytes().await.map_err(TransportError::from)?;

		session_from_token_response(status, &body, OffsetDateTime::now_utc())
	}

	async fn refresh_serialized(&self) -> Result<Session> {
		let _serialized = self.refresh_guard.lock().await;

		match self.acquire_session().await {
			Ok(session) => {
				self.session.replace(session.clone());

				Ok(session)
			},
			Err(e) => {
				self.session.clear();

				Err(e)
			},
		}
	}
}

/// Interprets a token endpoint response received at `issued_at`.
pub(crate) fn session_from_token_response(
	status: StatusCode,
	body: &[u8],
	issued_at: OffsetDateTime,
) -> Result<Session> {
	let failed = status.as_u16() >= 300;
	let parsed: TokenEndpointResponse =
		match serde_path_to_error::deserialize(&mut serde_json::Deserializer::from_slice(body)) {
			Ok(parsed) => parsed,
			Err(_) if failed =>
				return Err(RemoteError::from_body(status, String::from_utf8_lossy(body)).into()),
			Err(source) => return Err(ParseError::json(source, status).into()),
		};

	if let Some(code) = parsed.error.filter(|code| !code.is_empty()) {
		return Err(AuthError {
			code,
			description: parsed.error_description.unwrap_or_default(),
			status: status.as_u16(),
		}
		.into());
	}
	if failed {
		return Err(RemoteError::from_body(status, String::from_utf8_lossy(body)).into());
	}

	let access_token = parsed
		.access_token
		.filter(|token| !token.is_empty())
		.ok_or(ParseError::MissingField { field: "access_token" })?;
	let token_type = parsed.token_type.ok_or(ParseError::MissingField { field: "token_type" })?;
	let expires_in = parsed.expires_in.ok_or(ParseError::MissingField { field: "expires_in" })?;
	let expires_at = (expires_in >= 0)
		.then(|| issued_at.checked_add(Duration::seconds(expires_in)))
		.flatten()
		.ok_or(ParseError::ExpiresInOutOfRange { value: expires_in })?;

	Ok(Session::new(access_token, token_type, expires_at))
}
