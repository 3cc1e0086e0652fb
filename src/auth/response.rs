//! Token refresh from `application/x-www-form-urlencoded` response bodies.

// self
use crate::{
	_prelude::*,
	auth::{Credentials, Secret},
	param::{self, OAUTH_TOKEN, OAUTH_TOKEN_SECRET, Parameter},
};

const OAUTH_CALLBACK_CONFIRMED: &str = "oauth_callback_confirmed";

/// Decoded OAuth token endpoint response.
///
/// Parsing never fails: bodies that are not form-encoded simply yield a response with no token
/// fields. When a key repeats, the first occurrence wins.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TokenResponse {
	/// `oauth_token`, if present.
	pub token: Option<String>,
	/// `oauth_token_secret`, if present.
	pub token_secret: Option<Secret>,
	/// `oauth_callback_confirmed == "true"`, as returned by temporary credential endpoints.
	pub callback_confirmed: bool,
	/// Every other pair in the body, in order.
	pub extra: Vec<Parameter>,
}
impl TokenResponse {
	/// Parses a form-encoded response body.
	pub fn parse(body: &[u8]) -> Self {
		let mut response = Self::default();

		for param in param::parse_form(body) {
			match param.key.as_str() {
				OAUTH_TOKEN if response.token.is_none() => response.token = Some(param.value),
				OAUTH_TOKEN_SECRET if response.token_secret.is_none() =>
					response.token_secret = Some(Secret::new(param.value)),
				OAUTH_CALLBACK_CONFIRMED => response.callback_confirmed = param.value == "true",
				_ => response.extra.push(param),
			}
		}

		response
	}
}
impl Credentials {
	/// Replaces the token and token secret with the values found in a form-encoded body.
	///
	/// Both fields are always assigned: a key missing from the body clears the corresponding
	/// field. Consumer fields are never touched.
	pub fn update_from_response_body(&mut self, body: &[u8]) {
		let response = TokenResponse::parse(body);

		self.apply_token_response(response);
	}

	/// Applies an already parsed [`TokenResponse`] with the same semantics as
	/// [`Credentials::update_from_response_body`].
	pub fn apply_token_response(&mut self, response: TokenResponse) {
		self.set_token(response.token);
		self.set_token_secret(response.token_secret);
	}
}
