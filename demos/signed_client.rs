//! Walks through the three-legged token exchange against an in-process transport.
//!
//! 1. Sign a standalone [`http::Request`] with [`RequestSigner`] and print the header.
//! 2. Implement [`OAuthHttpClient`] so a fake provider answers token requests.
//! 3. Let [`OAuth1Client::send_and_update_token`] swap the temporary credentials for access
//!    credentials.
//! 4. Build the default reqwest-backed client that real callers would use.

// std
use std::{
	error::Error as StdError,
	fmt::{Display, Formatter, Result as FmtResult},
};
// crates.io
use color_eyre::Result;
// self
use oauth1_signer::{
	Credentials, OAuth1Client, RequestSigner,
	client::ReqwestOAuth1Client,
	http::{Request, Response, StatusCode, header::CONTENT_TYPE},
	signature::FORM_CONTENT_TYPE,
	transport::{OAuthHttpClient, OutgoingRequest, TransportFuture},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let consumer = Credentials::new("demo-consumer", "demo-consumer-secret");
	let mut timeline =
		Request::get("https://api.example.com/1.1/statuses/home_timeline.json?count=5")
			.body(Vec::new())?;

	RequestSigner::new().sign(&consumer, &mut timeline)?;

	println!("Authorization header for a consumer-only request: {:?}.", timeline.headers());

	let client = OAuth1Client::with_http_client(consumer, FakeProvider);
	let request_token = Request::post("https://api.example.com/oauth/request_token")
		.header(CONTENT_TYPE, FORM_CONTENT_TYPE)
		.body(b"oauth_callback=oob".to_vec())?;

	client.send_and_update_token(request_token).await?;

	println!("Temporary token issued by the fake provider: {:?}.", client.token());

	let access_token = Request::post("https://api.example.com/oauth/access_token")
		.header(CONTENT_TYPE, FORM_CONTENT_TYPE)
		.body(b"oauth_verifier=123456".to_vec())?;

	client.send_and_update_token(access_token).await?;

	println!("Access token issued by the fake provider: {:?}.", client.token());

	let rejected = Request::get("https://api.example.com/unknown").body(Vec::new())?;
	let response = client.send(rejected).await?;

	println!("Non-success statuses come back untouched: {}.", response.status());

	let offline = OAuth1Client::with_http_client(Credentials::default(), FakeProvider);

	match offline.send(Request::get("https://offline.example.com/").body(Vec::new())?).await {
		Ok(_) => println!("The fake provider unexpectedly reached an offline host."),
		Err(e) => println!("Transport failures keep their source: {e}."),
	}

	let real: ReqwestOAuth1Client = OAuth1Client::new(client.credentials());

	println!("A reqwest-backed client is ready: {real:?}.");

	Ok(())
}

#[derive(Debug)]
struct OfflineHost;
impl Display for OfflineHost {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		write!(f, "offline.example.com is unreachable")
	}
}
impl StdError for OfflineHost {}

struct FakeProvider;
impl OAuthHttpClient for FakeProvider {
	type TransportError = OfflineHost;

	fn execute(&self, request: OutgoingRequest) -> TransportFuture<'_, Self::TransportError> {
		Box::pin(async move {
			let (status, body) = match request.uri().path() {
				_ if request.uri().host() == Some("offline.example.com") =>
					return Err(OfflineHost),
				"/oauth/request_token" => (
					StatusCode::OK,
					concat!(
						"oauth_token=temp-token&oauth_token_secret=temp-secret",
						"&oauth_callback_confirmed=true",
					),
				),
				"/oauth/access_token" => (
					StatusCode::OK,
					"oauth_token=access-token&oauth_token_secret=access-secret&user_id=42",
				),
				_ => (StatusCode::NOT_FOUND, "oauth_problem=unknown_resource"),
			};
			let mut response = Response::new(body.as_bytes().to_vec());

			*response.status_mut() = status;

			Ok(response)
		})
	}
}
