//! Signer-level error types shared across the signing core and the client wrapper.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Canonical error exposed by public APIs.
///
/// Missing credentials, malformed Authorization headers, and malformed token response bodies
/// are deliberately absent: those cases degrade to empty values instead of failing.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration or request-shape problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS) surfaced by the injected HTTP client.
	#[error(transparent)]
	Transport(#[from] TransportError),
}
impl Error {
	/// Returns a stable label describing the failure, suitable for span or metric fields.
	pub const fn reason(&self) -> &'static str {
		match self {
			Self::Config(ConfigError::InvalidUri { .. }) => "invalid_uri",
			Self::Config(ConfigError::InvalidSigningKey) => "invalid_signing_key",
			Self::Config(ConfigError::InvalidHeaderValue(_)) => "invalid_header_value",
			Self::Transport(TransportError::Network { .. }) => "network",
		}
	}
}

/// Request validation failures raised before any bytes are sent.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// Request URI cannot be turned into an absolute base URI.
	#[error("Request URI `{uri}` is not an absolute URI.")]
	InvalidUri {
		/// The URI as it appeared on the request.
		uri: String,
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// The composed signing key was rejected by the MAC implementation.
	#[error("Signing key was rejected by HMAC-SHA1.")]
	InvalidSigningKey,
	/// The rendered Authorization header is not a valid header value.
	#[error("Authorization header value is invalid.")]
	InvalidHeaderValue(#[from] http::header::InvalidHeaderValue),
}

/// Failures surfaced by the injected transport.
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client failed to deliver the request or read the response.
	#[error("Network error occurred while sending the signed request.")]
	Network {
		/// Transport-specific error, kept unchanged.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}

#[cfg(test)]
mod tests {
	// std
	use std::error::Error as StdError;
	// self
	use super::*;

	#[test]
	fn transport_error_keeps_original_source() {
		let io = std::io::Error::new(std::io::ErrorKind::ConnectionReset, "peer reset");
		let error: Error = TransportError::network(io).into();

		assert!(matches!(error, Error::Transport(TransportError::Network { .. })));

		let source = StdError::source(&error)
			.expect("Network error should expose the transport error as its source.");

		assert_eq!(source.to_string(), "peer reset");
	}

	#[test]
	fn invalid_uri_mentions_offending_uri() {
		let source = Url::parse("/relative").expect_err("Relative URIs must not parse.");
		let error: Error = ConfigError::InvalidUri { uri: "/relative".into(), source }.into();

		assert!(error.to_string().contains("/relative"));
		assert_eq!(error.reason(), "invalid_uri");
	}

	#[test]
	fn reasons_are_distinct_per_variant() {
		let header =
			HeaderValue::try_from("line\nbreak").expect_err("Newlines are not header-safe.");
		let io = std::io::Error::other("refused");
		let errors: [Error; 3] = [
			ConfigError::InvalidSigningKey.into(),
			ConfigError::from(header).into(),
			TransportError::network(io).into(),
		];

		assert_eq!(
			errors.iter().map(Error::reason).collect::<Vec<_>>(),
			vec!["invalid_signing_key", "invalid_header_value", "network"]
		);
	}
}
