//! Immutable client configuration and its validating builder.
//!
//! A [`Config`] names the identity tenant that issues tokens, the vault that serves
//! resources, the service-account credentials, and the TLS policy. It is built once,
//! validated once, and then shared read-only by every component of a
//! [`PamClient`](crate::PamClient).

// crates.io
use oauth2::{ClientId, ClientSecret, TokenUrl};
// self
use crate::{_prelude::*, error::ConfigError};

const TOKEN_PATH: &str = "oauth2/platformtoken";
const API_ROOT: [&str; 2] = ["PasswordVault", "API"];

/// Validated, read-only client configuration.
#[derive(Clone, Debug)]
pub struct Config {
	identity_url: Url,
	vault_url: Url,
	token_url: TokenUrl,
	client_id: ClientId,
	client_secret: ClientSecret,
	tls_skip_verify: bool,
}
impl Config {
	/// Returns a builder seeded with the required endpoints and credentials.
	pub fn builder(
		identity_url: impl Into<String>,
		vault_url: impl Into<String>,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> ConfigBuilder {
		ConfigBuilder::new(identity_url, vault_url, client_id, client_secret)
	}

	/// Identity tenant base URL.
	pub fn identity_url(&self) -> &Url {
		&self.identity_url
	}

	/// Resource service base URL.
	pub fn vault_url(&self) -> &Url {
		&self.vault_url
	}

	/// Token endpoint, `{identity_url}/oauth2/platformtoken`.
	pub fn token_url(&self) -> &Url {
		self.token_url.url()
	}

	/// Service-account identifier sent as `client_id`.
	pub fn client_id(&self) -> &ClientId {
		&self.client_id
	}

	/// Service-account secret sent as `client_secret`.
	pub fn client_secret(&self) -> &ClientSecret {
		&self.client_secret
	}

	/// Whether certificate validation is disabled for every outbound call.
	pub fn tls_skip_verify(&self) -> bool {
		self.tls_skip_verify
	}

	/// Builds `{vault_url}/PasswordVault/API/<segments...>`, encoding each segment.
	pub fn api_url<'a>(&self, segments: impl IntoIterator<Item = &'a str>) -> Url {
		let mut url = self.vault_url.clone();

		// `build` rejects cannot-be-a-base URLs, so the segment list is always available.
		if let Ok(mut path) = url.path_segments_mut() {
			path.pop_if_empty().extend(API_ROOT).extend(segments);
		}

		url
	}
}

/// Builder for [`Config`] values.
///
/// Every option is listed here once:
///
/// - `identity_url`: identity tenant base, e.g. `https://tenant.id.example.cloud`.
/// - `vault_url`: resource service base, e.g. `https://tenant.vault.example.cloud`.
/// - `client_id` / `client_secret`: service-account credentials for the client-credentials
///   grant; both must be non-empty.
/// - `tls_skip_verify`: disables certificate validation; default `false`.
#[derive(Debug)]
pub struct ConfigBuilder {
	/// Raw identity tenant base URL.
	pub identity_url: String,
	/// Raw resource service base URL.
	pub vault_url: String,
	/// Service-account identifier.
	pub client_id: String,
	/// Service-account secret.
	pub client_secret: ClientSecret,
	/// Disables TLS certificate validation when `true`.
	pub tls_skip_verify: bool,
}
impl ConfigBuilder {
	/// Creates a new builder with TLS verification enabled.
	pub fn new(
		identity_url: impl Into<String>,
		vault_url: impl Into<String>,
		client_id: impl Into<String>,
		client_secret: impl Into<String>,
	) -> Self {
		Self {
			identity_url: identity_url.into(),
			vault_url: vault_url.into(),
			client_id: client_id.into(),
			client_secret: ClientSecret::new(client_secret.into()),
			tls_skip_verify: false,
		}
	}

	/// Disables (or re-enables) TLS certificate validation.
	pub fn tls_skip_verify(mut self, skip: bool) -> Self {
		self.tls_skip_verify = skip;

		self
	}

	/// Validates the inputs and produces an immutable [`Config`].
	pub fn build(self) -> Result<Config, ConfigError> {
		let identity_url = parse_base("identity", &self.identity_url)?;
		let vault_url = parse_base("vault", &self.vault_url)?;

		if self.client_id.trim().is_empty() {
			return Err(ConfigError::EmptyCredential { field: "client_id" });
		}
		if self.client_secret.secret().is_empty() {
			return Err(ConfigError::EmptyCredential { field: "client_secret" });
		}

		let token_url = TokenUrl::new(format!(
			"{}/{TOKEN_PATH}",
			identity_url.as_str().trim_end_matches('/')
		))
		.map_err(|source| ConfigError::InvalidUrl { field: "identity", source })?;

		Ok(Config {
			identity_url,
			vault_url,
			token_url,
			client_id: ClientId::new(self.client_id),
			client_secret: self.client_secret,
			tls_skip_verify: self.tls_skip_verify,
		})
	}
}

fn parse_base(field: &'static str, raw: &str) -> Result<Url, ConfigError> {
	let url = Url::parse(raw.trim()).map_err(|source| ConfigError::InvalidUrl { field, source })?;

	if url.cannot_be_a_base() {
		return Err(ConfigError::CannotBeABase { field, url: url.into() });
	}

	Ok(url)
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn builder() -> ConfigBuilder {
		Config::builder(
			"https://tenant.id.example.cloud/",
			"https://tenant.vault.example.cloud",
			"svc-user",
			"svc-pass",
		)
	}

	#[test]
	fn build_derives_token_endpoint_and_defaults() {
		let config = builder().build().expect("Config fixture should build.");

		assert_eq!(
			config.token_url().as_str(),
			"https://tenant.id.example.cloud/oauth2/platformtoken"
		);
		assert_eq!(config.client_id().as_str(), "svc-user");
		assert_eq!(config.client_secret().secret(), "svc-pass");
		assert!(!config.tls_skip_verify());
	}

	#[test]
	fn tls_skip_verify_is_opt_in() {
		let config = builder().tls_skip_verify(true).build().expect("Config fixture should build.");

		assert!(config.tls_skip_verify());
	}

	#[test]
	fn build_rejects_bad_inputs() {
		let err = Config::builder("not a url", "https://vault.example.cloud", "id", "secret")
			.build()
			.expect_err("Unparseable identity URL should be rejected.");

		assert!(matches!(err, ConfigError::InvalidUrl { field: "identity", .. }));

		let err = Config::builder("https://id.example.cloud", "mailto:ops@example.cloud", "id", "s")
			.build()
			.expect_err("Cannot-be-a-base vault URL should be rejected.");

		assert!(matches!(err, ConfigError::CannotBeABase { field: "vault", .. }));

		let err = Config::builder("https://id.example.cloud", "https://vault.example.cloud", " ", "s")
			.build()
			.expect_err("Blank client id should be rejected.");

		assert!(matches!(err, ConfigError::EmptyCredential { field: "client_id" }));

		let err = Config::builder("https://id.example.cloud", "https://vault.example.cloud", "id", "")
			.build()
			.expect_err("Empty client secret should be rejected.");

		assert!(matches!(err, ConfigError::EmptyCredential { field: "client_secret" }));
	}

	#[test]
	fn api_url_encodes_segments_under_api_root() {
		let config = builder().build().expect("Config fixture should build.");

		assert_eq!(
			config.api_url(["Safes", "my safe/1", "Members"]).as_str(),
			"https://tenant.vault.example.cloud/PasswordVault/API/Safes/my%20safe%2F1/Members"
		);
	}

	#[test]
	fn debug_redacts_client_secret() {
		let config = builder().build().expect("Config fixture should build.");
		let rendered = format!("{config:?}");

		assert!(!rendered.contains("svc-pass"));
	}
}
