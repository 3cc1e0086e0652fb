//! Nonce and timestamp sources used when a request does not carry its own.

// crates.io
use rand::Rng;
use time::OffsetDateTime;
// self
use crate::_prelude::*;

const NONCE_BYTES: usize = 16;

/// Produces the replay-protection values attached to each signed request.
///
/// Implementations are shared across signing calls and must be callable from several threads
/// at once; a nonce that repeats is a security defect.
pub trait NonceSource
where
	Self: Send + Sync,
{
	/// Returns a fresh, unpredictable nonce.
	fn next_nonce(&self) -> String;

	/// Returns the current Unix time in whole seconds, as a decimal string.
	fn current_timestamp(&self) -> String;
}

/// Production source: 16 bytes from the thread-local CSPRNG rendered as 32 hex characters, and
/// the system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemNonceSource;
impl NonceSource for SystemNonceSource {
	fn next_nonce(&self) -> String {
		let mut bytes = [0_u8; NONCE_BYTES];

		rand::rng().fill(&mut bytes);

		hex::encode(bytes)
	}

	fn current_timestamp(&self) -> String {
		OffsetDateTime::now_utc().unix_timestamp().to_string()
	}
}

/// Deterministic source returning the same nonce and timestamp on every call.
///
/// Intended for tests and for reproducing published signature vectors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixedNonceSource {
	nonce: String,
	timestamp: String,
}
impl FixedNonceSource {
	/// Pins both values.
	pub fn new(nonce: impl Into<String>, timestamp: impl Into<String>) -> Self {
		Self { nonce: nonce.into(), timestamp: timestamp.into() }
	}
}
impl NonceSource for FixedNonceSource {
	fn next_nonce(&self) -> String {
		self.nonce.clone()
	}

	fn current_timestamp(&self) -> String {
		self.timestamp.clone()
	}
}

impl<T> NonceSource for Arc<T>
where
	T: ?Sized + NonceSource,
{
	fn next_nonce(&self) -> String {
		(**self).next_nonce()
	}

	fn current_timestamp(&self) -> String {
		(**self).current_timestamp()
	}
}
