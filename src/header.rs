//! `Authorization: OAuth k="v", ...` header rendering and parsing.
//!
//! Parsing is deliberately lenient. The signer rewrites the header in full after signing, so a
//! malformed pre-existing header only means "no pre-existing OAuth parameters" and never
//! aborts a request.

// self
use crate::{_prelude::*, encoding, param::Parameter};

/// Authentication scheme token.
pub const SCHEME: &str = "OAuth";

/// Renders `OAuth ` followed by `key="value"` pairs, in the given order, joined by `, `.
///
/// Keys and values are percent-encoded individually; the surrounding quotes are literal.
pub fn serialize(params: &[Parameter]) -> String {
	let mut buf = String::from(SCHEME);

	buf.push(' ');

	for (idx, param) in params.iter().enumerate() {
		if idx > 0 {
			buf.push_str(", ");
		}

		buf.push_str(&encoding::encode(&param.key));
		buf.push_str("=\"");
		buf.push_str(&encoding::encode(&param.value));
		buf.push('"');
	}

	buf
}

/// Parses an Authorization header value into ordered, decoded pairs.
///
/// Returns `None` when the value does not start with the case-insensitive `OAuth` scheme
/// followed by whitespace. Entries are split on commas and then on the first `=`; one layer of
/// double quotes is stripped from the value when present. Entries without `=` are skipped
/// rather than failing the whole parse, and duplicates are preserved.
pub fn parse(header: &str) -> Option<Vec<Parameter>> {
	let rest = strip_scheme(header)?;
	let params = rest
		.split(',')
		.filter_map(|part| {
			let (key, value) = part.trim().split_once('=')?;

			Some(Parameter::new(
				encoding::decode(key.trim()),
				encoding::decode(unquote(value.trim())),
			))
		})
		.collect();

	Some(params)
}

/// Reads and parses the `Authorization` header of `headers`, if it is an OAuth header.
pub fn parse_from(headers: &HeaderMap) -> Option<Vec<Parameter>> {
	let value = headers.get(AUTHORIZATION)?.to_str().ok()?;

	parse(value)
}

fn strip_scheme(header: &str) -> Option<&str> {
	let scheme = header.get(..SCHEME.len())?;

	if !scheme.eq_ignore_ascii_case(SCHEME) {
		return None;
	}

	let rest = &header[SCHEME.len()..];

	rest.starts_with(char::is_whitespace).then_some(rest)
}

fn unquote(value: &str) -> &str {
	value
		.strip_prefix('"')
		.and_then(|inner| inner.strip_suffix('"'))
		.unwrap_or(value)
}
