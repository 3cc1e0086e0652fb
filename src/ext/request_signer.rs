//! Request signing contracts that let downstream crates sign requests built by arbitrary HTTP
//! clients.

// self
use crate::{_prelude::*, auth::Credentials, signer::RequestSigner};

/// Describes how to attach an OAuth 1.0a Authorization header to an outbound request without
/// constraining the HTTP client type.
///
/// The trait is generic over the request type so implementers can integrate with any client
/// builder (`http`, `reqwest`, a bespoke SDK, etc.) while the signing rules stay in
/// [`RequestSigner`].
pub trait RequestSignerExt<Request>
where
	Self: Send + Sync,
{
	/// Consumes the provided request and returns it with a freshly computed Authorization
	/// header derived from `credentials`.
	fn sign_request(&self, request: Request, credentials: &Credentials) -> Result<Request>;
}

impl<B> RequestSignerExt<HttpRequest<B>> for RequestSigner
where
	B: AsRef<[u8]>,
{
	fn sign_request(
		&self,
		mut request: HttpRequest<B>,
		credentials: &Credentials,
	) -> Result<HttpRequest<B>> {
		self.sign(credentials, &mut request)?;

		Ok(request)
	}
}

#[cfg(feature = "reqwest")]
impl RequestSignerExt<reqwest::Request> for RequestSigner {
	fn sign_request(
		&self,
		mut request: reqwest::Request,
		credentials: &Credentials,
	) -> Result<reqwest::Request> {
		self.sign_reqwest(credentials, &mut request)?;

		Ok(request)
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;
	use crate::{header, nonce::FixedNonceSource};

	fn signer() -> RequestSigner {
		RequestSigner::new().with_nonce_source(FixedNonceSource::new("nonce", "1700000000"))
	}

	#[test]
	fn http_and_borrowed_bodies_sign_identically() {
		let credentials = Credentials::new("ck", "cs");
		let owned = HttpRequest::get("https://api.example.com/items")
			.body(Vec::<u8>::new())
			.expect("Fixture request should build.");
		let borrowed = HttpRequest::get("https://api.example.com/items")
			.body("")
			.expect("Fixture request should build.");
		let owned = signer().sign_request(owned, &credentials).expect("Signing should succeed.");
		let borrowed =
			signer().sign_request(borrowed, &credentials).expect("Signing should succeed.");

		assert_eq!(owned.headers().get(AUTHORIZATION), borrowed.headers().get(AUTHORIZATION));
	}

	#[cfg(feature = "reqwest")]
	#[test]
	fn reqwest_requests_are_signed_like_http_requests() {
		let credentials = Credentials::new("ck", "cs").with_token("tok", "ts");
		let url = Url::parse("https://api.example.com/statuses/update.json?include_entities=true")
			.expect("Fixture URL should parse.");
		let mut reqwest_request = reqwest::Request::new(Method::POST, url.clone());

		reqwest_request.headers_mut().insert(
			CONTENT_TYPE,
			HeaderValue::from_static("application/x-www-form-urlencoded"),
		);
		*reqwest_request.body_mut() = Some(reqwest::Body::from("status=hello"));

		let http_request = HttpRequest::post(url.as_str())
			.header(CONTENT_TYPE, "application/x-www-form-urlencoded")
			.body(b"status=hello".to_vec())
			.expect("Fixture request should build.");
		let reqwest_request =
			signer().sign_request(reqwest_request, &credentials).expect("Signing should succeed.");
		let http_request =
			signer().sign_request(http_request, &credentials).expect("Signing should succeed.");
		let reqwest_params = header::parse_from(reqwest_request.headers())
			.expect("Signed reqwest request should carry an OAuth header.");
		let http_params = header::parse_from(http_request.headers())
			.expect("Signed http request should carry an OAuth header.");

		assert_eq!(reqwest_params, http_params);
	}
}
