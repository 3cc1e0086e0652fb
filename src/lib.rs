//! OAuth 1.0a HMAC-SHA1 request signing for Rust HTTP stacks.
//!
//! Base strings are deterministic for a fixed nonce and timestamp, existing `Authorization`
//! headers are parsed leniently, and [`OAuth1Client`] signs requests for any transport.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod client;
pub mod encoding;
pub mod error;
pub mod ext;
pub mod header;
pub mod nonce;
pub mod obs;
pub mod param;
pub mod signature;
pub mod signer;
pub mod transport;

pub use auth::{Credentials, Secret, TokenResponse};
pub use client::OAuth1Client;
pub use error::{Error, Result};
pub use nonce::{FixedNonceSource, NonceSource, SystemNonceSource};
pub use param::Parameter;
pub use signature::RealmPolicy;
pub use signer::{HeaderParameters, RequestSigner};

mod _prelude {
	pub use std::{
		error::Error as StdError,
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use http::{
		HeaderMap, HeaderValue, Method, Request as HttpRequest, Response as HttpResponse,
		header::{AUTHORIZATION, CONTENT_TYPE},
	};
	pub use parking_lot::RwLock;
	#[cfg(feature = "reqwest")]
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use thiserror::Error as ThisError;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use http;
#[cfg(feature = "reqwest")] pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
