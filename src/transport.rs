//! Transport primitives for dispatching signed requests.
//!
//! The module exposes [`OAuthHttpClient`] so downstream crates can plug any HTTP stack under
//! [`OAuth1Client`](crate::client::OAuth1Client). The signing core never touches the network;
//! connection handling, retries, and TLS all live behind this trait.

// std
#[cfg(feature = "reqwest")] use std::ops::Deref;
// self
use crate::_prelude::*;

/// Request type handed to transports: an [`http::Request`] with a fully buffered body.
pub type OutgoingRequest = HttpRequest<Vec<u8>>;
/// Response type returned by transports.
pub type IncomingResponse = HttpResponse<Vec<u8>>;
/// Boxed future returned by [`OAuthHttpClient::execute`].
pub type TransportFuture<'a, E> =
	Pin<Box<dyn Future<Output = Result<IncomingResponse, E>> + 'a + Send>>;

/// Abstraction over HTTP transports capable of executing signed requests.
///
/// Implementations must be `Send + Sync + 'static` so one transport can be shared across
/// clients behind an `Arc`, and the futures they return must be `Send` so callers can move
/// in-flight requests across executors. Non-success HTTP statuses are responses, not errors:
/// the client hands them back untouched.
pub trait OAuthHttpClient
where
	Self: 'static + Send + Sync,
{
	/// Concrete error emitted by the underlying transport.
	type TransportError: 'static + Send + Sync + StdError;

	/// Sends `request` and buffers the response body.
	fn execute(&self, request: OutgoingRequest) -> TransportFuture<'_, Self::TransportError>;
}

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
#[cfg(feature = "reqwest")]
#[derive(Clone, Debug, Default)]
pub struct ReqwestHttpClient(pub ReqwestClient);
#[cfg(feature = "reqwest")]
impl ReqwestHttpClient {
	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}
}
#[cfg(feature = "reqwest")]
impl AsRef<ReqwestClient> for ReqwestHttpClient {
	fn as_ref(&self) -> &ReqwestClient {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}
#[cfg(feature = "reqwest")]
impl OAuthHttpClient for ReqwestHttpClient {
	type TransportError = ReqwestError;

	fn execute(&self, request: OutgoingRequest) -> TransportFuture<'_, Self::TransportError> {
		let client = self.0.clone();

		Box::pin(async move {
			let response = client.execute(reqwest::Request::try_from(request)?).await?;
			let status = response.status();
			let version = response.version();
			let headers = response.headers().to_owned();
			let mut response_new = HttpResponse::new(response.bytes().await?.to_vec());

			*response_new.status_mut() = status;
			*response_new.version_mut() = version;
			*response_new.headers_mut() = headers;

			Ok(response_new)
		})
	}
}
