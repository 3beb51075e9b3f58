//! Bearer session model and the synchronized slot a client keeps it in.

// self
use crate::{_prelude::*, auth::TokenSecret};

/// Lifecycle view of a [`SessionSlot`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionState {
	/// No session has been acquired, or the last refresh failed.
	Unset,
	/// A session is stored and will be attached to outbound requests.
	Active(Session),
}

/// A whole bearer credential issued by the identity provider.
///
/// Sessions are never edited in place; a refresh always swaps in a new value.
/// `expires_at` is informational and nothing in this crate acts on it.
#[derive(Clone, PartialEq, Eq)]
pub struct Session {
	/// Bearer token; callers must avoid logging it.
	pub access_token: TokenSecret,
	/// Token type reported by the provider, e.g. `Bearer`.
	pub token_type: String,
	/// Instant computed as acquisition time plus `expires_in`.
	pub expires_at: OffsetDateTime,
}
impl Session {
	/// Creates a session from its three parts.
	pub fn new(
		access_token: impl Into<String>,
		token_type: impl Into<String>,
		expires_at: OffsetDateTime,
	) -> Self {
		Self {
			access_token: TokenSecret::new(access_token),
			token_type: token_type.into(),
			expires_at,
		}
	}

	/// Creates a session expiring `expires_in` after `issued_at`.
	pub fn issued_at(
		access_token: impl Into<String>,
		token_type: impl Into<String>,
		issued_at: OffsetDateTime,
		expires_in: Duration,
	) -> Self {
		Self::new(access_token, token_type, issued_at + expires_in)
	}

	/// Returns `true` when the token is empty and must not be attached.
	pub fn is_empty(&self) -> bool {
		self.access_token.is_empty()
	}

	/// Renders the `Authorization` header value, `"{token_type} {token}"`.
	pub fn authorization_value(&self) -> String {
		format!("{} {}", self.token_type, self.access_token.expose())
	}

	/// Returns `true` if the session has expired at the provided instant.
	pub fn is_expired_at(&self, instant: OffsetDateTime) -> bool {
		instant >= self.expires_at
	}

	/// Returns `true` if the session is expired relative to the current clock.
	pub fn is_expired(&self) -> bool {
		self.is_expired_at(OffsetDateTime::now_utc())
	}
}
impl Debug for Session {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Session")
			.field("access_token", &"<redacted>")
			.field("token_type", &self.token_type)
			.field("expires_at", &self.expires_at)
			.finish()
	}
}

/// Thread-safe slot owning the client's current [`Session`].
///
/// Reads clone the stored value, so a reader never observes a half-written session
/// and never holds the lock across I/O.
#[derive(Debug, Default)]
pub struct SessionSlot(RwLock<Option<Session>>);
impl SessionSlot {
	/// Returns a snapshot of the stored session.
	pub fn current(&self) -> Option<Session> {
		self.0.read().clone()
	}

	/// Returns the lifecycle state of the slot.
	pub fn state(&self) -> SessionState {
		match self.current() {
			Some(session) => SessionState::Active(session),
			None => SessionState::Unset,
		}
	}

	/// Replaces the stored session wholesale, returning the previous one.
	pub fn replace(&self, session: Session) -> Option<Session> {
		self.0.write().replace(session)
	}

	/// Empties the slot, returning the previous session.
	pub fn clear(&self) -> Option<Session> {
		self.0.write().take()
	}

	/// Returns the `Authorization` header value when a non-empty session is stored.
	pub fn authorization_value(&self) -> Option<String> {
		self.0.read().as_ref().filter(|session| !session.is_empty()).map(Session::authorization_value)
	}
}

#[cfg(test)]
mod tests {
	// crates.io
	use time::macros;
	// self
	use super::*;

	#[test]
	fn issued_at_adds_relative_expiry() {
		let session = Session::issued_at(
			"tok123",
			"Bearer",
			macros::datetime!(2025-01-01 00:00 UTC),
			Duration::seconds(3600),
		);

		assert_eq!(session.expires_at, macros::datetime!(2025-01-01 01:00 UTC));
		assert!(!session.is_expired_at(macros::datetime!(2025-01-01 00:59 UTC)));
		assert!(session.is_expired_at(macros::datetime!(2025-01-01 01:00 UTC)));
	}

	#[test]
	fn authorization_value_joins_type_and_token() {
		let session = Session::new("abc", "Bearer", OffsetDateTime::now_utc());

		assert_eq!(session.authorization_value(), "Bearer abc");
		assert!(!format!("{session:?}").contains("abc"));
	}

	#[test]
	fn slot_transitions_between_unset_and_active() {
		let slot = SessionSlot::default();

		assert_eq!(slot.state(), SessionState::Unset);
		assert_eq!(slot.authorization_value(), None);

		let first = Session::new("first", "Bearer", OffsetDateTime::now_utc());
		let second = Session::new("second", "Bearer", OffsetDateTime::now_utc());

		assert_eq!(slot.replace(first.clone()), None);
		assert_eq!(slot.replace(second.clone()), Some(first));
		assert_eq!(slot.state(), SessionState::Active(second.clone()));
		assert_eq!(slot.authorization_value().as_deref(), Some("Bearer second"));
		assert_eq!(slot.clear(), Some(second));
		assert_eq!(slot.state(), SessionState::Unset);
	}

	#[test]
	fn slot_skips_empty_tokens() {
		let slot = SessionSlot::default();

		slot.replace(Session::new("", "Bearer", OffsetDateTime::now_utc()));

		assert_eq!(slot.authorization_value(), None);
	}
}
