//! Access-token string that stays out of logs.

// self
use crate::_prelude::*;

/// Bearer token text. `Debug` and `Display` print `<redacted>`; only [`TokenSecret::expose`]
/// yields the value, for building the `Authorization` header.
#[derive(Clone, PartialEq, Eq)]
pub struct TokenSecret(String);
impl TokenSecret {
	/// Takes ownership of the token text.
	pub fn new(value: impl Into<String>) -> Self {
		Self(value.into())
	}

	/// Raw token text.
	pub fn expose(&self) -> &str {
		&self.0
	}

	/// Whether the provider handed back an empty token.
	pub fn is_empty(&self) -> bool {
		self.0.is_empty()
	}
}
impl AsRef<str> for TokenSecret {
	fn as_ref(&self) -> &str {
		&self.0
	}
}
impl Debug for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("TokenSecret(<redacted>)")
	}
}
impl Display for TokenSecret {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("<redacted>")
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn token_text_only_leaves_through_expose() {
		let token = TokenSecret::new("tok123");

		assert_eq!(format!("{token:?}"), "TokenSecret(<redacted>)");
		assert_eq!(format!("{token}"), "<redacted>");
		assert_eq!(token.as_ref(), "tok123");
		assert!(!token.is_empty());
		assert!(TokenSecret::new("").is_empty());
	}
}
