//! Consumer and token credentials owned by a signing client.

// self
use crate::{_prelude::*, auth::Secret};

/// The four OAuth 1.0a credential fields.
///
/// Every field is optional and none is validated: empty strings and absent values are both
/// legal, and absent secrets are treated as empty strings when the signing key is composed.
/// The value is plain data with no interior locking; share it across threads behind a lock
/// (as [`OAuth1Client`](crate::client::OAuth1Client) does) so reads during signing and writes
/// from token updates are serialized.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Credentials {
	consumer_key: Option<String>,
	consumer_secret: Option<Secret>,
	token: Option<String>,
	token_secret: Option<Secret>,
}
impl Credentials {
	/// Creates credentials for a consumer without a token.
	pub fn new(consumer_key: impl Into<String>, consumer_secret: impl Into<Secret>) -> Self {
		Self {
			consumer_key: Some(consumer_key.into()),
			consumer_secret: Some(consumer_secret.into()),
			..Default::default()
		}
	}

	/// Attaches a token and its secret.
	pub fn with_token(mut self, token: impl Into<String>, token_secret: impl Into<Secret>) -> Self {
		self.token = Some(token.into());
		self.token_secret = Some(token_secret.into());

		self
	}

	/// Consumer key, if set.
	pub fn consumer_key(&self) -> Option<&str> {
		self.consumer_key.as_deref()
	}

	/// Consumer secret, if set.
	pub fn consumer_secret(&self) -> Option<&Secret> {
		self.consumer_secret.as_ref()
	}

	/// Token, if set.
	pub fn token(&self) -> Option<&str> {
		self.token.as_deref()
	}

	/// Token secret, if set.
	pub fn token_secret(&self) -> Option<&Secret> {
		self.token_secret.as_ref()
	}

	/// Replaces the consumer key; `None` clears it.
	pub fn set_consumer_key(&mut self, value: Option<String>) {
		self.consumer_key = value;
	}

	/// Replaces the consumer secret; `None` clears it.
	pub fn set_consumer_secret(&mut self, value: Option<Secret>) {
		self.consumer_secret = value;
	}

	/// Replaces the token; `None` clears it.
	pub fn set_token(&mut self, value: Option<String>) {
		self.token = value;
	}

	/// Replaces the token secret; `None` clears it.
	pub fn set_token_secret(&mut self, value: Option<Secret>) {
		self.token_secret = value;
	}

	/// Consumer secret exposed as a string, empty when unset.
	pub(crate) fn consumer_secret_or_empty(&self) -> &str {
		self.consumer_secret.as_ref().map(Secret::expose).unwrap_or_default()
	}

	/// Token secret exposed as a string, empty when unset.
	pub(crate) fn token_secret_or_empty(&self) -> &str {
		self.token_secret.as_ref().map(Secret::expose).unwrap_or_default()
	}
}
impl Debug for Credentials {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("Credentials")
			.field("consumer_key", &self.consumer_key)
			.field("consumer_secret_set", &self.consumer_secret.is_some())
			.field("token", &self.token)
			.field("token_secret_set", &self.token_secret.is_some())
			.finish()
	}
}
