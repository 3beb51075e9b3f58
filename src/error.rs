//! Client-level error types shared across sessions, dispatch, queries, and resources.

// self
use crate::_prelude::*;

/// Client-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical client error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Identity provider rejected the client-credentials grant.
	#[error(transparent)]
	Auth(#[from] AuthError),
	/// Transport failure (DNS, TCP, TLS, timeout).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// Response body could not be decoded.
	#[error(transparent)]
	Parse(#[from] ParseError),
	/// Caller-supplied query parameter was rejected before any I/O.
	#[error(transparent)]
	Validation(#[from] ValidationError),
	/// Remote endpoint answered with a non-success status.
	#[error(transparent)]
	Remote(#[from] RemoteError),
}
impl From<ReqwestError> for Error {
	fn from(e: ReqwestError) -> Self {
		if e.is_builder() {
			ConfigError::http_request(e).into()
		} else {
			TransportError::from(e).into()
		}
	}
}

/// Configuration failures raised while constructing a client.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// HTTP request could not be assembled.
	#[error("HTTP request could not be assembled.")]
	HttpRequest {
		/// Underlying request builder failure.
		#[source]
		source: BoxError,
	},
	/// A configured URL cannot be parsed.
	#[error("The {field} URL is invalid.")]
	InvalidUrl {
		/// Which configuration field failed validation.
		field: &'static str,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// A configured URL cannot carry path segments.
	#[error("The {field} URL cannot be used as a base: {url}.")]
	CannotBeABase {
		/// Which configuration field failed validation.
		field: &'static str,
		/// Offending URL.
		url: String,
	},
	/// A required credential is empty.
	#[error("The {field} must not be empty.")]
	EmptyCredential {
		/// Which credential was empty.
		field: &'static str,
	},
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}

	/// Wraps a request builder failure inside [`ConfigError`].
	pub fn http_request(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpRequest { source: Box::new(src) }
	}
}

/// Provider-level rejection returned by the identity token endpoint.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
#[error("Identity provider rejected the grant: ({code}) {description}.")]
pub struct AuthError {
	/// OAuth error code, e.g. `invalid_client`.
	pub code: String,
	/// Human-readable description supplied by the provider.
	pub description: String,
	/// HTTP status code of the token response.
	pub status: u16,
}

/// Transport-level failures (network, TLS, timeout).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// The request exceeded the fixed client timeout.
	#[error("Request timed out.")]
	Timeout {
		/// Transport-specific timeout error.
		#[source]
		source: BoxError,
	},
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the remote endpoint.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		if e.is_timeout() { Self::Timeout { source: Box::new(e) } } else { Self::network(e) }
	}
}

/// Failures decoding a response body.
#[derive(Debug, ThisError)]
pub enum ParseError {
	/// Body is not valid JSON for the expected shape.
	#[error("Response body is malformed at `{}`.", .source.path())]
	Json {
		/// Structured parsing failure, including the offending field path.
		#[source]
		source: serde_path_to_error::Error<serde_json::Error>,
		/// HTTP status code of the response.
		status: u16,
	},
	/// Token response parsed but omitted a required field.
	#[error("Token response is missing `{field}`.")]
	MissingField {
		/// Name of the absent field.
		field: &'static str,
	},
	/// Token response carried a negative or unrepresentable `expires_in`.
	#[error("The expires_in value {value} is out of range.")]
	ExpiresInOutOfRange {
		/// Raw value reported by the provider.
		value: i64,
	},
	/// Stored token or token type cannot be sent as an `Authorization` header value.
	#[error("Session token cannot be used as an Authorization header value.")]
	TokenHeader {
		/// Header validation failure.
		#[source]
		source: reqwest::header::InvalidHeaderValue,
	},
}
impl ParseError {
	pub(crate) fn json(
		source: serde_path_to_error::Error<serde_json::Error>,
		status: StatusCode,
	) -> Self {
		Self::Json { source, status: status.as_u16() }
	}
}

/// Query parameter rejected by list-query validation.
#[derive(Clone, Debug, PartialEq, Eq, ThisError)]
pub enum ValidationError {
	/// `searchType` is neither `contains` nor `startswith`.
	#[error("Invalid searchType `{0}`; must be `contains` or `startswith`.")]
	SearchType(String),
	/// `filter` names none of the filterable fields.
	#[error("Invalid filter `{0}`; must reference one of safeName, modificationTime, secretModificationTime.")]
	Filter(String),
	/// `savedFilter` is not one of the named saved filters.
	#[error("Invalid savedFilter `{0}`.")]
	SavedFilter(String),
	/// `offset` is not a non-negative integer.
	#[error("Invalid offset `{0}`; must be a non-negative integer.")]
	Offset(String),
	/// `limit` is not an integer within 0..=1000.
	#[error("Invalid limit `{0}`; must be an integer between 0 and 1000.")]
	Limit(String),
}

/// Non-success response from a remote endpoint, carrying vendor details verbatim.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RemoteError {
	/// HTTP status code.
	pub status: u16,
	/// Vendor error code (e.g. `SFWS0002`), when the body carried one.
	pub code: Option<String>,
	/// Vendor error message, when the body carried one.
	pub message: Option<String>,
	/// Raw response body.
	pub body: String,
}
impl RemoteError {
	/// Builds a remote error from a status and raw body, decoding vendor fields when present.
	pub fn from_body(status: StatusCode, body: impl Into<String>) -> Self {
		#[derive(Deserialize)]
		struct VendorError {
			#[serde(rename = "ErrorCode")]
			code: Option<String>,
			#[serde(rename = "ErrorMessage")]
			message: Option<String>,
		}

		let body = body.into();
		let (code, message) = match serde_json::from_str::<VendorError>(&body) {
			Ok(vendor) => (vendor.code, vendor.message),
			Err(_) => (None, None),
		};

		Self { status: status.as_u16(), code, message, body }
	}

	/// Returns `true` when the vendor error code equals `code`.
	pub fn has_code(&self, code: &str) -> bool {
		self.code.as_deref() == Some(code)
	}
}
impl Display for RemoteError {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "Remote endpoint returned status {}: ", self.status)?;

		match (&self.code, &self.message) {
			(Some(code), Some(message)) => write!(f, "({code}) {message}."),
			(Some(code), None) => write!(f, "({code})."),
			(None, Some(message)) => write!(f, "{message}."),
			(None, None) => write!(f, "{}.", self.body),
		}
	}
}
impl StdError for RemoteError {}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn remote_error_decodes_vendor_fields() {
		let err = RemoteError::from_body(
			StatusCode::CONFLICT,
			"{\"ErrorCode\":\"SFWS0002\",\"ErrorMessage\":\"Safe already exists\"}",
		);

		assert_eq!(err.status, 409);
		assert!(err.has_code("SFWS0002"));
		assert_eq!(err.message.as_deref(), Some("Safe already exists"));
		assert_eq!(
			err.to_string(),
			"Remote endpoint returned status 409: (SFWS0002) Safe already exists."
		);
	}

	#[test]
	fn remote_error_keeps_unstructured_body() {
		let err = RemoteError::from_body(StatusCode::BAD_GATEWAY, "upstream unavailable");

		assert_eq!(err.code, None);
		assert_eq!(err.message, None);
		assert_eq!(err.body, "upstream unavailable");
		assert!(err.to_string().contains("upstream unavailable"));
	}

	#[test]
	fn auth_error_display_carries_code_and_description() {
		let err: Error = AuthError {
			code: "invalid_client".into(),
			description: "bad creds".into(),
			status: 400,
		}
		.into();
		let rendered = err.to_string();

		assert!(rendered.contains("invalid_client"));
		assert!(rendered.contains("bad creds"));
	}
}
