//! Signing client that wraps an injected transport.
//!
//! [`OAuth1Client`] is the interceptor form of the signer: it signs each request right before
//! handing it to the transport and, on request, refreshes its token credentials from the
//! response body afterwards. Credentials sit behind a lock so one client can be shared across
//! tasks; signing takes a read lock, token updates take a write lock, and no lock is ever held
//! across an `.await`.

// self
use crate::{
	_prelude::*,
	auth::{Credentials, Secret},
	error::TransportError,
	obs::{self, OperationKind, OperationSpan, Outcome},
	signer::RequestSigner,
	transport::{IncomingResponse, OAuthHttpClient, OutgoingRequest},
};
#[cfg(feature = "reqwest")] use crate::transport::ReqwestHttpClient;

#[cfg(feature = "reqwest")]
/// Client specialized for the crate's default reqwest transport.
pub type ReqwestOAuth1Client = OAuth1Client<ReqwestHttpClient>;

/// Signs outgoing requests and keeps token credentials current.
pub struct OAuth1Client<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// Transport used for every outbound request.
	pub http_client: Arc<C>,
	/// Signer applied to every outbound request.
	pub signer: RequestSigner,
	credentials: Arc<RwLock<Credentials>>,
}
impl<C> OAuth1Client<C>
where
	C: ?Sized + OAuthHttpClient,
{
	/// Creates a client that dispatches through the caller-provided transport.
	pub fn with_http_client(credentials: Credentials, http_client: impl Into<Arc<C>>) -> Self {
		Self {
			http_client: http_client.into(),
			signer: RequestSigner::default(),
			credentials: Arc::new(RwLock::new(credentials)),
		}
	}

	/// Replaces the signer (nonce source, header parameter selection).
	pub fn with_signer(mut self, signer: RequestSigner) -> Self {
		self.signer = signer;

		self
	}

	/// Returns a snapshot of the current credentials.
	pub fn credentials(&self) -> Credentials {
		self.credentials.read().clone()
	}

	/// Replaces all credentials at once.
	pub fn set_credentials(&self, credentials: Credentials) {
		*self.credentials.write() = credentials;
	}

	/// Current consumer key.
	pub fn consumer_key(&self) -> Option<String> {
		self.credentials.read().consumer_key().map(ToOwned::to_owned)
	}

	/// Current consumer secret.
	pub fn consumer_secret(&self) -> Option<Secret> {
		self.credentials.read().consumer_secret().cloned()
	}

	/// Current token.
	pub fn token(&self) -> Option<String> {
		self.credentials.read().token().map(ToOwned::to_owned)
	}

	/// Current token secret.
	pub fn token_secret(&self) -> Option<Secret> {
		self.credentials.read().token_secret().cloned()
	}

	/// Replaces the consumer key; `None` clears it.
	pub fn set_consumer_key(&self, value: Option<String>) {
		self.credentials.write().set_consumer_key(value);
	}

	/// Replaces the consumer secret; `None` clears it.
	pub fn set_consumer_secret(&self, value: Option<Secret>) {
		self.credentials.write().set_consumer_secret(value);
	}

	/// Replaces the token; `None` clears it.
	pub fn set_token(&self, value: Option<String>) {
		self.credentials.write().set_token(value);
	}

	/// Replaces the token secret; `None` clears it.
	pub fn set_token_secret(&self, value: Option<Secret>) {
		self.credentials.write().set_token_secret(value);
	}

	/// Signs `request` in place with the current credentials.
	pub fn sign(&self, request: &mut OutgoingRequest) -> Result<()> {
		let credentials = self.credentials.read();

		self.signer.sign(&credentials, request)
	}

	/// Signs `request` and dispatches it through the transport.
	///
	/// Transport failures are wrapped in [`TransportError::Network`] with the original error as
	/// the source; HTTP error statuses come back as ordinary responses.
	pub async fn send(&self, request: OutgoingRequest) -> Result<IncomingResponse> {
		const KIND: OperationKind = OperationKind::Send;

		let span = OperationSpan::new(KIND, "send");

		obs::record_outcome(KIND, Outcome::Attempt);

		let result = span
			.instrument(async move {
				let mut request = request;

				self.sign(&mut request)?;

				self.http_client
					.execute(request)
					.await
					.map_err(|e| Error::from(TransportError::network(e)))
			})
			.await;

		obs::record_result(KIND, &span, &result);

		result
	}

	/// Like [`OAuth1Client::send`], then refreshes the token credentials from the response body
	/// when the status is a success.
	pub async fn send_and_update_token(
		&self,
		request: OutgoingRequest,
	) -> Result<IncomingResponse> {
		let response = self.send(request).await?;

		if response.status().is_success() {
			self.update_from_response_body(response.body());
		}

		Ok(response)
	}

	/// Replaces the token and token secret with the values found in a form-encoded body.
	///
	/// See [`Credentials::update_from_response_body`].
	pub fn update_from_response_body(&self, body: &[u8]) {
		const KIND: OperationKind = OperationKind::TokenUpdate;

		let _span = OperationSpan::new(KIND, "update_from_response_body").entered();

		obs::record_outcome(KIND, Outcome::Attempt);
		self.credentials.write().update_from_response_body(body);
		obs::record_outcome(KIND, Outcome::Success);
	}
}
#[cfg(feature = "reqwest")]
impl OAuth1Client<ReqwestHttpClient> {
	/// Creates a client backed by a default reqwest transport.
	pub fn new(credentials: Credentials) -> Self {
		Self::with_http_client(credentials, ReqwestHttpClient::default())
	}
}
impl<C> Clone for OAuth1Client<C>
where
	C: ?Sized + OAuthHttpClient,
{
	fn clone(&self) -> Self {
		Self {
			http_client: Arc::clone(&self.http_client),
			signer: self.signer.clone(),
			credentials: Arc::clone(&self.credentials),
		}
	}
}
impl<C> Debug for OAuth1Client<C>
where
	C: ?Sized + OAuthHttpClient,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("OAuth1Client")
			.field("signer", &self.signer)
			.field("credentials", &*self.credentials.read())
			.finish_non_exhaustive()
	}
}
