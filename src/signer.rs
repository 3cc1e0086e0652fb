//! The single entry point that signs outgoing requests.
//!
//! [`RequestSigner`] reads the request, lets [`SignatureBaseBuilder`] merge and normalize its
//! parameters, signs the base string with HMAC-SHA1, and replaces the `Authorization` header
//! with the full serialized parameter set plus `oauth_signature`. Signing never fails on missing
//! credentials; absent fields are simply omitted or treated as empty so the remote server
//! decides whether the request is acceptable.

// self
use crate::{
	_prelude::*,
	auth::Credentials,
	error::ConfigError,
	header,
	nonce::{NonceSource, SystemNonceSource},
	obs::{self, OperationKind, OperationSpan, Outcome},
	param::{OAUTH_SIGNATURE, Parameter, REALM},
	signature::{self, RealmPolicy, RequestParts, SignatureBaseBuilder, SignatureContext},
};

/// Which merged parameters are written back into the `Authorization` header.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum HeaderParameters {
	/// The complete merged, sorted parameter sequence, query and body parameters included.
	#[default]
	All,
	/// Only `oauth_*` parameters (and `realm`). Query and body parameters stay where they are,
	/// for servers that read every source and would otherwise count them twice.
	OAuthOnly,
}

/// Signs requests with OAuth 1.0a HMAC-SHA1.
///
/// The signer holds no credentials; callers pass the [`Credentials`] to use on every call. A
/// fresh nonce and timestamp are minted per call unless the request already carries
/// `oauth_nonce`/`oauth_timestamp`, so repeated calls on one logical request produce
/// different signatures.
#[derive(Clone)]
pub struct RequestSigner {
	nonce_source: Arc<dyn NonceSource>,
	header_parameters: HeaderParameters,
	realm_policy: RealmPolicy,
}
impl RequestSigner {
	/// Creates a signer backed by [`SystemNonceSource`].
	pub fn new() -> Self {
		Self {
			nonce_source: Arc::new(SystemNonceSource),
			header_parameters: Default::default(),
			realm_policy: Default::default(),
		}
	}

	/// Replaces the nonce/timestamp source.
	pub fn with_nonce_source(mut self, source: impl 'static + NonceSource) -> Self {
		self.nonce_source = Arc::new(source);

		self
	}

	/// Selects which parameters end up in the rewritten header.
	pub fn with_header_parameters(mut self, selection: HeaderParameters) -> Self {
		self.header_parameters = selection;

		self
	}

	/// Selects how a `realm` in the pre-existing header takes part in the signature.
	pub fn with_realm_policy(mut self, policy: RealmPolicy) -> Self {
		self.realm_policy = policy;

		self
	}

	/// Computes the [`SignatureContext`] for `parts` without touching any request.
	pub fn signature_context(
		&self,
		credentials: &Credentials,
		parts: &RequestParts<'_>,
	) -> SignatureContext {
		SignatureBaseBuilder::new(credentials, self.nonce_source.as_ref())
			.with_realm_policy(self.realm_policy)
			.build(parts)
	}

	/// Renders the complete `Authorization` header value for `parts`.
	pub fn authorization(
		&self,
		credentials: &Credentials,
		parts: &RequestParts<'_>,
	) -> Result<String> {
		observe_sign("authorization", |span| self.render(credentials, parts, span))
	}

	/// Signs an [`http::Request`] in place, replacing its `Authorization` header.
	pub fn sign<B>(&self, credentials: &Credentials, request: &mut HttpRequest<B>) -> Result<()>
	where
		B: AsRef<[u8]>,
	{
		observe_sign("sign_http", |span| {
			let value = self.render(credentials, &RequestParts::from_http(request)?, span)?;

			request
				.headers_mut()
				.insert(AUTHORIZATION, HeaderValue::try_from(value).map_err(ConfigError::from)?);

			Ok(())
		})
	}

	/// Signs a [`reqwest::Request`] in place, replacing its `Authorization` header.
	///
	/// Streaming bodies are not read, so their form parameters are not signed.
	#[cfg(feature = "reqwest")]
	pub fn sign_reqwest(
		&self,
		credentials: &Credentials,
		request: &mut reqwest::Request,
	) -> Result<()> {
		observe_sign("sign_reqwest", |span| {
			let value = self.render(credentials, &RequestParts::from_reqwest(request), span)?;

			request
				.headers_mut()
				.insert(AUTHORIZATION, HeaderValue::try_from(value).map_err(ConfigError::from)?);

			Ok(())
		})
	}

	fn render(
		&self,
		credentials: &Credentials,
		parts: &RequestParts<'_>,
		span: &OperationSpan,
	) -> Result<String> {
		let context = self.signature_context(credentials, parts);

		span.record_signature(&context);
		obs::record_signed_parameters(context.parameters.len());

		let key = signature::signing_key(credentials);
		let signature = signature::sign(&context.base_string, &key)?;

		Ok(header::serialize(&self.header_parameters(context, signature)))
	}

	fn header_parameters(&self, context: SignatureContext, signature: String) -> Vec<Parameter> {
		let mut params = Vec::with_capacity(context.parameters.len() + 2);

		if let Some(realm) = context.realm {
			params.push(Parameter::new(REALM, realm));
		}

		match self.header_parameters {
			HeaderParameters::All => params.extend(context.parameters),
			HeaderParameters::OAuthOnly => params.extend(
				context
					.parameters
					.into_iter()
					.filter(|param| param.is_protocol() || param.key == REALM),
			),
		}

		params.push(Parameter::new(OAUTH_SIGNATURE, signature));

		params
	}
}
impl Default for RequestSigner {
	fn default() -> Self {
		Self::new()
	}
}
impl Debug for RequestSigner {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RequestSigner")
			.field("header_parameters", &self.header_parameters)
			.field("realm_policy", &self.realm_policy)
			.finish_non_exhaustive()
	}
}

fn observe_sign<T, F>(stage: &'static str, f: F) -> Result<T>
where
	F: FnOnce(&OperationSpan) -> Result<T>,
{
	const KIND: OperationKind = OperationKind::Sign;

	let span = OperationSpan::new(KIND, stage);
	let _guard = span.clone().entered();

	obs::record_outcome(KIND, Outcome::Attempt);

	let result = f(&span);

	obs::record_result(KIND, &span, &result);

	result
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{nonce::FixedNonceSource, signature::FORM_CONTENT_TYPE};

	fn fixed_signer() -> RequestSigner {
		RequestSigner::new().with_nonce_source(FixedNonceSource::new("abc123", "1700000000"))
	}

	fn get(uri: &str) -> HttpRequest<Vec<u8>> {
		HttpRequest::get(uri).body(Vec::new()).expect("Fixture request should build.")
	}

	fn authorization_params(request: &HttpRequest<Vec<u8>>) -> Vec<Parameter> {
		header::parse_from(request.headers())
			.expect("Signed request should carry an OAuth header.")
	}

	fn value_of<'a>(params: &'a [Parameter], key: &str) -> Option<&'a str> {
		params.iter().find(|param| param.key == key).map(|param| param.value.as_str())
	}

	#[test]
	fn consumer_only_get_is_signed_with_consumer_secret_key() {
		let credentials = Credentials::new("ck", "cs");
		let signer = fixed_signer();
		let mut request = get("https://api.example.com/items");

		signer.sign(&credentials, &mut request).expect("Signing should succeed.");

		let params = authorization_params(&request);
		let context = signer.signature_context(
			&credentials,
			&RequestParts::from_http(&get("https://api.example.com/items"))
				.expect("Fixture URI should be absolute."),
		);
		let expected = signature::sign(&context.base_string, "cs&")
			.expect("HMAC-SHA1 accepts keys of any length.");

		assert_eq!(value_of(&params, "oauth_consumer_key"), Some("ck"));
		assert_eq!(value_of(&params, "oauth_signature_method"), Some("HMAC-SHA1"));
		assert_eq!(value_of(&params, "oauth_version"), Some("1.0"));
		assert_eq!(value_of(&params, "oauth_nonce"), Some("abc123"));
		assert_eq!(value_of(&params, "oauth_timestamp"), Some("1700000000"));
		assert_eq!(value_of(&params, "oauth_token"), None);
		assert_eq!(value_of(&params, "oauth_signature"), Some(expected.as_str()));
		assert_eq!(params.last().map(|param| param.key.as_str()), Some("oauth_signature"));
	}

	#[test]
	fn signing_is_deterministic_for_fixed_inputs() {
		let credentials = Credentials::new("ck", "cs").with_token("tok", "ts");
		let signer = fixed_signer();
		let mut first = get("https://api.example.com/items?page=2");
		let mut second = get("https://api.example.com/items?page=2");

		signer.sign(&credentials, &mut first).expect("Signing should succeed.");
		signer.sign(&credentials, &mut second).expect("Signing should succeed.");

		assert_eq!(first.headers().get(AUTHORIZATION), second.headers().get(AUTHORIZATION));
	}

	#[test]
	fn system_source_mints_new_nonce_per_call() {
		let credentials = Credentials::new("ck", "cs");
		let signer = RequestSigner::new();
		let mut request = get("https://api.example.com/items");

		signer.sign(&credentials, &mut request).expect("Signing should succeed.");

		let first = authorization_params(&request);

		request.headers_mut().remove(AUTHORIZATION);
		signer.sign(&credentials, &mut request).expect("Signing should succeed.");

		let second = authorization_params(&request);

		assert_ne!(value_of(&first, "oauth_nonce"), value_of(&second, "oauth_nonce"));
		assert_ne!(value_of(&first, "oauth_signature"), value_of(&second, "oauth_signature"));
	}

	#[test]
	fn resigning_reuses_header_nonce_and_replaces_signature() {
		let credentials = Credentials::new("ck", "cs");
		let signer = RequestSigner::new();
		let mut request = get("https://api.example.com/items");

		signer.sign(&credentials, &mut request).expect("Signing should succeed.");

		let first = request.headers().get(AUTHORIZATION).cloned();

		signer.sign(&credentials, &mut request).expect("Re-signing should succeed.");

		let params = authorization_params(&request);

		assert_eq!(request.headers().get(AUTHORIZATION).cloned(), first);
		assert_eq!(params.iter().filter(|param| param.key == "oauth_signature").count(), 1);
	}

	#[test]
	fn default_header_carries_query_and_body_parameters() {
		let credentials = Credentials::new("ck", "cs");
		let mut request = HttpRequest::post("https://example.com/s?q=1")
			.header(CONTENT_TYPE, FORM_CONTENT_TYPE)
			.body(b"status=hello".to_vec())
			.expect("Fixture request should build.");

		RequestSigner::new()
			.with_nonce_source(FixedNonceSource::new("n", "1"))
			.sign(&credentials, &mut request)
			.expect("Signing should succeed.");

		let params = authorization_params(&request);
		let keys = params.iter().map(|param| param.key.as_str()).collect::<Vec<_>>();

		assert_eq!(value_of(&params, "q"), Some("1"));
		assert_eq!(value_of(&params, "status"), Some("hello"));
		assert_eq!(
			keys,
			vec![
				"oauth_consumer_key",
				"oauth_nonce",
				"oauth_signature_method",
				"oauth_timestamp",
				"oauth_version",
				"q",
				"status",
				"oauth_signature",
			]
		);
	}

	#[test]
	fn header_selection_controls_non_protocol_parameters() {
		let credentials = Credentials::new("ck", "cs");
		let mut everything = HttpRequest::post("https://api.example.com/statuses?trim=1")
			.header(CONTENT_TYPE, FORM_CONTENT_TYPE)
			.header(AUTHORIZATION, "OAuth realm=\"Photos\"")
			.body(b"status=hello".to_vec())
			.expect("Fixture request should build.");
		let mut oauth_only = everything.clone();

		fixed_signer().sign(&credentials, &mut everything).expect("Signing should succeed.");
		fixed_signer()
			.with_header_parameters(HeaderParameters::OAuthOnly)
			.sign(&credentials, &mut oauth_only)
			.expect("Signing should succeed.");

		let everything = authorization_params(&everything);
		let oauth_only = authorization_params(&oauth_only);

		assert_eq!(value_of(&everything, "status"), Some("hello"));
		assert_eq!(value_of(&everything, "trim"), Some("1"));
		assert_eq!(value_of(&everything, "realm"), Some("Photos"));
		assert_eq!(value_of(&oauth_only, "status"), None);
		assert_eq!(value_of(&oauth_only, "trim"), None);
		assert_eq!(value_of(&oauth_only, "realm"), Some("Photos"));
		assert_eq!(
			value_of(&oauth_only, "oauth_signature"),
			value_of(&everything, "oauth_signature")
		);
	}

	#[test]
	fn excluded_realm_leads_the_header_and_changes_the_signature() {
		let credentials = Credentials::new("ck", "cs");
		let mut signed = HttpRequest::get("https://photos.example.net/photos")
			.header(AUTHORIZATION, "OAuth realm=\"Photos\"")
			.body(Vec::new())
			.expect("Fixture request should build.");
		let mut excluded = signed.clone();

		fixed_signer().sign(&credentials, &mut signed).expect("Signing should succeed.");
		fixed_signer()
			.with_realm_policy(RealmPolicy::Excluded)
			.sign(&credentials, &mut excluded)
			.expect("Signing should succeed.");

		let signed = authorization_params(&signed);
		let excluded = authorization_params(&excluded);

		assert_eq!(excluded.first(), Some(&Parameter::new("realm", "Photos")));
		assert_eq!(excluded.iter().filter(|param| param.key == "realm").count(), 1);
		assert_ne!(value_of(&signed, "oauth_signature"), value_of(&excluded, "oauth_signature"));
	}

	#[test]
	fn non_oauth_authorization_header_is_replaced() {
		let credentials = Credentials::new("ck", "cs");
		let mut request = HttpRequest::get("https://api.example.com/items")
			.header(AUTHORIZATION, "Bearer leftover")
			.body(Vec::new())
			.expect("Fixture request should build.");

		fixed_signer().sign(&credentials, &mut request).expect("Signing should succeed.");

		let value = request.headers().get(AUTHORIZATION).and_then(|value| value.to_str().ok());

		assert!(value.is_some_and(|value| value.starts_with("OAuth ")));
	}

	#[test]
	fn missing_credentials_do_not_fail() {
		let mut request = get("https://api.example.com/items");

		fixed_signer()
			.sign(&Credentials::default(), &mut request)
			.expect("Signing should succeed.");

		let params = authorization_params(&request);

		assert_eq!(value_of(&params, "oauth_consumer_key"), None);
		assert!(value_of(&params, "oauth_signature").is_some());
	}

	#[test]
	fn relative_uri_surfaces_config_error() {
		let mut request = get("/items");
		let err = fixed_signer()
			.sign(&Credentials::default(), &mut request)
			.expect_err("Relative URIs cannot be signed.");

		assert!(matches!(err, Error::Config(ConfigError::InvalidUri { .. })));
		assert!(request.headers().get(AUTHORIZATION).is_none());
	}
}
