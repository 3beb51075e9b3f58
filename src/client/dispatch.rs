//! Authenticated request dispatch.

// crates.io
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderValue};
// self
use crate::{
	_prelude::*,
	client::PamClient,
	error::{ParseError, RemoteError, TransportError},
	obs::{self, Operation},
};

impl PamClient {
	/// Starts a request on the shared transport.
	pub fn request(&self, method: Method, url: Url) -> RequestBuilder {
		self.http_client.request(method, url)
	}

	/// Builds `{vault_url}/PasswordVault/API/<segments...>`.
	pub fn api_url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
		self.config.api_url(segments)
	}

	/// Sends `request`, attaching `Authorization: {token_type} {token}` when a non-empty
	/// session is stored.
	///
	/// The response is returned whatever its status; interpreting it is the caller's job.
	/// Transport failures are returned as-is and never retried.
	pub async fn send(&self, request: Request) -> Result<Response> {
		obs::observe(Operation::Send, "send", self.dispatch(request)).await
	}

	/// Sends a `GET` and decodes the JSON answer.
	pub(crate) async fn get_json<T>(&self, stage: &'static str, url: Url) -> Result<T>
	where
		T: DeserializeOwned,
	{
		obs::observe(Operation::Resource, stage, self.exchange_json::<(), T>(Method::GET, url, None))
			.await
	}

	/// Sends `body` as JSON with `POST` and decodes the JSON answer.
	pub(crate) async fn post_json<B, T>(&self, stage: &'static str, url: Url, body: &B) -> Result<T>
	where
		B: ?Sized + Serialize,
		T: DeserializeOwned,
	{
		obs::observe(Operation::Resource, stage, self.exchange_json(Method::POST, url, Some(body)))
			.await
	}

	async fn dispatch(&self, mut request: Request) -> Result<Response> {
		if let Some(value) = self.session.authorization_value() {
			let mut value =
				HeaderValue::from_str(&value).map_err(|source| ParseError::TokenHeader { source })?;

			value.set_sensitive(true);
			request.headers_mut().insert(AUTHORIZATION, value);
		}

		let response = self.http_client.execute(request).await.map_err(TransportError::from)?;

		Ok(response)
	}

	async fn exchange_json<B, T>(&self, method: Method, url: Url, body: Option<&B>) -> Result<T>
	where
		B: ?Sized + Serialize,
		T: DeserializeOwned,
	{
		let mut builder = self.request(method, url).header(CONTENT_TYPE, "application/json");

		if let Some(body) = body {
			builder = builder.json(body);
		}

		let response = self.send(builder.build()?).await?;

		decode_json(response).await
	}
}

/// Maps status ≥300 to [`RemoteError`] and decodes anything else as `T`.
pub(crate) async fn decode_json<T>(response: Response) -> Result<T>
where
	T: DeserializeOwned,
{
	let status = response.status();
	let body = response.bytes().await.map_err(TransportError::from)?;

	if status.as_u16() >= 300 {
		return Err(RemoteError::from_body(status, String::from_utf8_lossy(&body)).into());
	}

	serde_path_to_error::deserialize(&mut serde_json::Deserializer::from_slice(&body))
		.map_err(|source| ParseError::json(source, status).into())
}
