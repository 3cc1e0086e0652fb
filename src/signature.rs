//! Signature base string construction and HMAC-SHA1 signing.

pub mod base;
pub mod hmac_sha1;

pub use base::*;
pub use hmac_sha1::*;
