//! Parameter collection, normalization, and signature base string construction.

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	encoding,
	error::ConfigError,
	header,
	nonce::NonceSource,
	param::{
		self, OAUTH_CONSUMER_KEY, OAUTH_NONCE, OAUTH_SIGNATURE, OAUTH_SIGNATURE_METHOD,
		OAUTH_TIMESTAMP, OAUTH_TOKEN, OAUTH_VERSION, Parameter, REALM,
	},
	signature::SIGNATURE_METHOD,
};

/// Protocol version appended when the request does not carry one.
pub const OAUTH_VERSION_1_0: &str = "1.0";
/// The only content type whose body parameters are signed.
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// How a `realm` found in the pre-existing Authorization header is treated.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RealmPolicy {
	/// Signed like any other header parameter.
	#[default]
	Signed,
	/// Left out of the base string (RFC 5849 §3.4.1.3.1) and written first in the new header.
	Excluded,
}

/// Borrowed view of the parts of an outgoing request that take part in signing.
///
/// Keeping the view independent of any HTTP crate lets the same builder serve `http` requests,
/// `reqwest` requests, or a caller's own request type.
#[derive(Clone, Debug)]
pub struct RequestParts<'a> {
	/// HTTP method token, used verbatim.
	pub method: &'a str,
	/// Absolute request URL, query included.
	pub url: Url,
	/// Raw `Content-Type` header value, if any.
	pub content_type: Option<&'a str>,
	/// Request body bytes.
	pub body: &'a [u8],
	/// Raw `Authorization` header value, if any.
	pub authorization: Option<&'a str>,
}
impl<'a> RequestParts<'a> {
	/// Builds a view over an [`http::Request`].
	///
	/// Fails only when the request URI is not absolute.
	pub fn from_http<B>(request: &'a HttpRequest<B>) -> Result<Self>
	where
		B: AsRef<[u8]>,
	{
		let uri = request.uri().to_string();
		let url = Url::parse(&uri).map_err(|source| ConfigError::InvalidUri { uri, source })?;

		Ok(Self {
			method: request.method().as_str(),
			url,
			content_type: header_str(request.headers(), &CONTENT_TYPE),
			body: request.body().as_ref(),
			authorization: header_str(request.headers(), &AUTHORIZATION),
		})
	}

	/// Builds a view over a [`reqwest::Request`].
	///
	/// Streaming bodies cannot be read up front and are treated as empty.
	#[cfg(feature = "reqwest")]
	pub fn from_reqwest(request: &'a reqwest::Request) -> Self {
		Self {
			method: request.method().as_str(),
			url: request.url().clone(),
			content_type: header_str(request.headers(), &CONTENT_TYPE),
			body: request.body().and_then(reqwest::Body::as_bytes).unwrap_or_default(),
			authorization: header_str(request.headers(), &AUTHORIZATION),
		}
	}

	/// Whether body parameters take part in the signature.
	pub fn signs_body(&self) -> bool {
		self.method == Method::POST.as_str()
			&& self.content_type.is_some_and(|value| value.trim() == FORM_CONTENT_TYPE)
	}
}

/// Everything derived while signing one request. Built fresh per call and never persisted.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignatureContext {
	/// HTTP method exactly as it appeared on the request.
	pub method: String,
	/// Request URI without query or fragment, with lowercase scheme/host and no default port.
	pub base_uri: String,
	/// Merged parameters sorted by encoded key then encoded value, without `oauth_signature`.
	pub parameters: Vec<Parameter>,
	/// `realm` set aside from `parameters` under [`RealmPolicy::Excluded`].
	pub realm: Option<String>,
	/// `METHOD&encode(base_uri)&encode(normalized_parameters)`.
	pub base_string: String,
}
impl SignatureContext {
	/// Renders the normalized parameter string (`k=v&k=v`, each side encoded).
	pub fn normalized_parameters(&self) -> String {
		normalize(&self.parameters)
	}
}

/// Merges query, body, and header parameters into a [`SignatureContext`].
pub struct SignatureBaseBuilder<'a> {
	credentials: &'a Credentials,
	nonce_source: &'a dyn NonceSource,
	realm_policy: RealmPolicy,
}
impl<'a> SignatureBaseBuilder<'a> {
	/// Creates a builder reading from `credentials` and minting values from `nonce_source`.
	pub fn new(credentials: &'a Credentials, nonce_source: &'a dyn NonceSource) -> Self {
		Self { credentials, nonce_source, realm_policy: Default::default() }
	}

	/// Selects how a header `realm` takes part in the base string.
	pub fn with_realm_policy(mut self, policy: RealmPolicy) -> Self {
		self.realm_policy = policy;

		self
	}

	/// Collects and normalizes the request's parameters and renders the base string.
	pub fn build(&self, parts: &RequestParts<'_>) -> SignatureContext {
		let (mut parameters, realm) = collect(parts, self.realm_policy);

		self.fill_protocol_parameters(&mut parameters);
		param::sort_encoded(&mut parameters);

		let method = parts.method.to_owned();
		let base_uri = base_uri(&parts.url);
		let base_string = format!(
			"{method}&{}&{}",
			encoding::encode(&base_uri),
			encoding::encode(&normalize(&parameters)),
		);

		SignatureContext { method, base_uri, parameters, realm, base_string }
	}

	fn fill_protocol_parameters(&self, parameters: &mut Vec<Parameter>) {
		if !param::contains_key(parameters, OAUTH_NONCE) {
			parameters.push(Parameter::new(OAUTH_NONCE, self.nonce_source.next_nonce()));
		}
		if !param::contains_key(parameters, OAUTH_TIMESTAMP) {
			let timestamp = self.nonce_source.current_timestamp();

			parameters.push(Parameter::new(OAUTH_TIMESTAMP, timestamp));
		}
		if !param::contains_key(parameters, OAUTH_VERSION) {
			parameters.push(Parameter::new(OAUTH_VERSION, OAUTH_VERSION_1_0));
		}
		if let Some(consumer_key) = self
			.credentials
			.consumer_key()
			.filter(|_| !param::contains_key(parameters.as_slice(), OAUTH_CONSUMER_KEY))
		{
			parameters.push(Parameter::new(OAUTH_CONSUMER_KEY, consumer_key));
		}
		if let Some(token) = self
			.credentials
			.token()
			.filter(|_| !param::contains_key(parameters.as_slice(), OAUTH_TOKEN))
		{
			parameters.push(Parameter::new(OAUTH_TOKEN, token));
		}

		parameters
			.retain(|param| param.key != OAUTH_SIGNATURE && param.key != OAUTH_SIGNATURE_METHOD);
		parameters.push(Parameter::new(OAUTH_SIGNATURE_METHOD, SIGNATURE_METHOD));
	}
}

fn collect(parts: &RequestParts<'_>, policy: RealmPolicy) -> (Vec<Parameter>, Option<String>) {
	let mut parameters = Vec::new();
	let mut realm = None;

	if let Some(query) = parts.url.query() {
		parameters.extend(param::parse_form(query.as_bytes()));
	}
	if parts.signs_body() {
		parameters.extend(param::parse_form(parts.body));
	}

	for param in parts.authorization.and_then(header::parse).unwrap_or_default() {
		if policy == RealmPolicy::Excluded && param.key == REALM {
			realm.get_or_insert(param.value);
		} else {
			parameters.push(param);
		}
	}

	(parameters, realm)
}

fn base_uri(url: &Url) -> String {
	let mut base = url.clone();

	base.set_query(None);
	base.set_fragment(None);
	// Only fails for cannot-be-a-base URLs, which carry no credentials anyway.
	let _ = base.set_username("");
	let _ = base.set_password(None);

	base.into()
}

fn normalize(parameters: &[Parameter]) -> String {
	parameters.iter().map(Parameter::encoded).collect::<Vec<_>>().join("&")
}

fn header_str<'a>(headers: &'a HeaderMap, name: &http::HeaderName) -> Option<&'a str> {
	headers.get(name).and_then(|value| value.to_str().ok())
}
