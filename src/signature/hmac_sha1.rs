//! HMAC-SHA1 signature computation.

// crates.io
use base64::{Engine, engine::general_purpose::STANDARD};
use hmac::{Hmac, Mac};
use sha1::Sha1;
// self
use crate::{_prelude::*, auth::Credentials, encoding, error::ConfigError};

/// Value written to `oauth_signature_method`; the only method this crate implements.
pub const SIGNATURE_METHOD: &str = "HMAC-SHA1";

type HmacSha1 = Hmac<Sha1>;

/// Composes `encode(consumer_secret)&encode(token_secret)`, treating unset secrets as empty.
pub fn signing_key(credentials: &Credentials) -> String {
	format!(
		"{}&{}",
		encoding::encode(credentials.consumer_secret_or_empty()),
		encoding::encode(credentials.token_secret_or_empty()),
	)
}

/// Signs `base_string` with `key` and returns the standard base64 digest without line breaks.
pub fn sign(base_string: &str, key: &str) -> Result<String> {
	let mut mac =
		HmacSha1::new_from_slice(key.as_bytes()).map_err(|_| ConfigError::InvalidSigningKey)?;

	mac.update(base_string.as_bytes());

	Ok(STANDARD.encode(mac.finalize().into_bytes()))
}
