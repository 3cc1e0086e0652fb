//! RFC 3986 percent-encoding over UTF-8 bytes.
//!
//! Only the unreserved set (`A-Z a-z 0-9 - . _ ~`) passes through; every other byte becomes an
//! uppercase `%XX` escape. Keys and values must be encoded independently, never as a joined
//! `key=value` pair.

// std
use std::borrow::Cow;
// crates.io
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

/// Bytes escaped by [`encode`]: everything except RFC 3986 unreserved characters.
pub const OAUTH_ENCODE_SET: &AsciiSet =
	&NON_ALPHANUMERIC.remove(b'-').remove(b'.').remove(b'_').remove(b'~');

/// Percent-encodes `value` with the OAuth unreserved set.
pub fn encode(value: &str) -> String {
	utf8_percent_encode(value, OAUTH_ENCODE_SET).to_string()
}

/// Reverses [`encode`].
///
/// Invalid UTF-8 sequences are replaced with U+FFFD rather than rejected, and stray `%` signs
/// that do not start a valid escape are kept as-is.
pub fn decode(value: &str) -> String {
	match percent_decode_str(value).decode_utf8_lossy() {
		Cow::Borrowed(view) => view.to_owned(),
		Cow::Owned(owned) => owned,
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn unreserved_characters_pass_through() {
		let unreserved = "ABCXYZabcxyz0189-._~";

		assert_eq!(encode(unreserved), unreserved);
	}

	#[test]
	fn reserved_and_multibyte_characters_are_escaped_uppercase() {
		assert_eq!(encode("a b&c=d"), "a%20b%26c%3Dd");
		assert_eq!(encode("+/,!*'()"), "%2B%2F%2C%21%2A%27%28%29");
		assert_eq!(encode("%"), "%25");
		assert_eq!(encode("\u{2603}"), "%E2%98%83");
	}

	#[test]
	fn decode_reverses_encode() {
		let samples = ["", "plain", "Hello Ladies + Gentlemen, a signed OAuth request!", "é☃=&\""];

		for sample in samples {
			assert_eq!(decode(&encode(sample)), sample);
		}
	}

	#[test]
	fn decode_accepts_lowercase_hex_and_keeps_plus() {
		assert_eq!(decode("%2b%2C+"), "+,+");
	}

	#[test]
	fn decode_is_lossy_for_invalid_utf8() {
		assert_eq!(decode("%FFok"), "\u{FFFD}ok");
	}
}
