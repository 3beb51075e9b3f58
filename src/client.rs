//! The vault client: configuration, pooled transport, and the current session.

mod dispatch;
mod session;

// self
use crate::{
	_prelude::*,
	auth::{Session, SessionSlot, SessionState},
	config::Config,
	http::ReqwestHttpClient,
};

/// Authenticated client for one identity tenant and one vault.
///
/// The client owns the only copy of its [`Session`]. Reads and replacements go through a
/// lock-guarded slot, and [`PamClient::refresh_session`] calls are serialized, so a
/// client may be shared across tasks behind an [`Arc`]. Nothing refreshes automatically:
/// callers decide when to call [`PamClient::refresh_session`].
pub struct PamClient {
	config: Arc<Config>,
	http_client: ReqwestHttpClient,
	session: SessionSlot,
	refresh_guard: AsyncMutex<()>,
}
impl PamClient {
	/// Creates a client with a pooled transport built from the config's TLS policy.
	pub fn new(config: Config) -> Result<Self> {
		let http_client = ReqwestHttpClient::from_config(&config)?;

		Ok(Self::with_http_client(config, http_client))
	}

	/// Creates a client that reuses a caller-provided transport.
	pub fn with_http_client(config: impl Into<Arc<Config>>, http_client: ReqwestHttpClient) -> Self {
		Self {
			config: config.into(),
			http_client,
			session: SessionSlot::default(),
			refresh_guard: AsyncMutex::new(()),
		}
	}

	/// Read-only view of the configuration.
	pub fn config(&self) -> &Config {
		&self.config
	}

	/// Shared transport used for every call.
	pub fn http_client(&self) -> &ReqwestHttpClient {
		&self.http_client
	}

	/// Snapshot of the current session, if any.
	pub fn session(&self) -> Option<Session> {
		self.session.current()
	}

	/// Lifecycle state of the current session.
	pub fn session_state(&self) -> SessionState {
		self.session.state()
	}

	/// Replaces the current session wholesale, returning the previous one.
	pub fn replace_session(&self, session: Session) -> Option<Session> {
		self.session.replace(session)
	}

	/// Drops the current session, returning it.
	pub fn clear_session(&self) -> Option<Session> {
		self.session.clear()
	}
}
impl Debug for PamClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("PamClient")
			.field("config", &self.config)
			.field("session", &self.session.current())
			.finish()
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn client() -> PamClient {
		let config =
			Config::builder("https://id.example.cloud", "https://vault.example.cloud", "id", "secret")
				.build()
				.expect("Config fixture should build.");

		PamClient::new(config).expect("Client should build from a valid config.")
	}

	#[test]
	fn starts_without_session() {
		let client = client();

		assert_eq!(client.session(), None);
		assert_eq!(client.session_state(), SessionState::Unset);
	}

	#[test]
	fn replace_and_clear_swap_whole_sessions() {
		let client = client();
		let session = Session::new("abc", "Bearer", OffsetDateTime::now_utc());

		assert_eq!(client.replace_session(session.clone()), None);
		assert_eq!(client.session(), Some(session.clone()));
		assert_eq!(client.clear_session(), Some(session));
		assert_eq!(client.session(), None);
	}

	#[test]
	fn debug_hides_secrets() {
		let client = client();

		client.replace_session(Session::new("abc-token", "Bearer", OffsetDateTime::now_utc()));

		let rendered = format!("{client:?}");

		assert!(!rendered.contains("abc-token"));
		assert!(!rendered.contains("\"secret\""));
	}
}
