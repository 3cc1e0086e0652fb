//! Ordered OAuth parameter pairs.

// self
use crate::{_prelude::*, encoding};

/// Name of the signature parameter, excluded from its own base string.
pub const OAUTH_SIGNATURE: &str = "oauth_signature";
/// Name of the signature method parameter.
pub const OAUTH_SIGNATURE_METHOD: &str = "oauth_signature_method";
/// Name of the consumer key parameter.
pub const OAUTH_CONSUMER_KEY: &str = "oauth_consumer_key";
/// Name of the token parameter.
pub const OAUTH_TOKEN: &str = "oauth_token";
/// Name of the token secret field in token responses.
pub const OAUTH_TOKEN_SECRET: &str = "oauth_token_secret";
/// Name of the nonce parameter.
pub const OAUTH_NONCE: &str = "oauth_nonce";
/// Name of the timestamp parameter.
pub const OAUTH_TIMESTAMP: &str = "oauth_timestamp";
/// Name of the version parameter.
pub const OAUTH_VERSION: &str = "oauth_version";
/// Protection realm; see [`RealmPolicy`](crate::signature::RealmPolicy).
pub const REALM: &str = "realm";

/// A single `(key, value)` pair.
///
/// Collections of parameters are plain `Vec`s because OAuth allows repeated keys. There is no
/// intrinsic ordering; [`sort_encoded`] applies the signature base string order.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Parameter {
	/// Decoded parameter name.
	pub key: String,
	/// Decoded parameter value.
	pub value: String,
}
impl Parameter {
	/// Creates a new pair.
	pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
		Self { key: key.into(), value: value.into() }
	}

	/// Whether the key uses the reserved `oauth_` prefix.
	pub fn is_protocol(&self) -> bool {
		self.key.starts_with("oauth_")
	}

	/// Renders `encode(key)=encode(value)`.
	pub fn encoded(&self) -> String {
		format!("{}={}", encoding::encode(&self.key), encoding::encode(&self.value))
	}
}
impl<K, V> From<(K, V)> for Parameter
where
	K: Into<String>,
	V: Into<String>,
{
	fn from((key, value): (K, V)) -> Self {
		Self::new(key, value)
	}
}

/// Returns `true` when any parameter in `params` uses `key`.
pub fn contains_key(params: &[Parameter], key: &str) -> bool {
	params.iter().any(|param| param.key == key)
}

/// Sorts `params` byte-wise by encoded key, then by encoded value.
///
/// Comparing the encoded forms is what makes `c%40` sort before `c2`.
pub fn sort_encoded(params: &mut [Parameter]) {
	params.sort_by_cached_key(|param| {
		(encoding::encode(&param.key), encoding::encode(&param.value))
	});
}

/// Decodes an `application/x-www-form-urlencoded` payload into ordered pairs.
pub fn parse_form(input: &[u8]) -> Vec<Parameter> {
	url::form_urlencoded::parse(input).map(Parameter::from).collect()
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn sort_encoded_orders_by_encoded_key_then_value() {
		let mut params = vec![
			Parameter::new("c2", ""),
			Parameter::new("a3", "a"),
			Parameter::new("c@", ""),
			Parameter::new("a2", "r b"),
			Parameter::new("a3", "2 q"),
			Parameter::new("A1", "z"),
		];

		sort_encoded(&mut params);

		assert_eq!(
			params,
			vec![
				Parameter::new("A1", "z"),
				Parameter::new("a2", "r b"),
				Parameter::new("a3", "2 q"),
				Parameter::new("a3", "a"),
				Parameter::new("c@", ""),
				Parameter::new("c2", ""),
			]
		);
	}

	#[test]
	fn form_parsing_keeps_duplicates_and_order() {
		let params = parse_form(b"c2&a3=2+q&a3=a%40");

		assert_eq!(
			params,
			vec![Parameter::new("c2", ""), Parameter::new("a3", "2 q"), Parameter::new("a3", "a@")]
		);
	}

	#[test]
	fn encoded_escapes_key_and_value_separately() {
		assert_eq!(Parameter::new("c@", "=%3D").encoded(), "c%40=%3D%253D");
	}
}
