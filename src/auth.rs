//! Credential storage, secret redaction, and token response handling.

pub mod credentials;
pub mod response;
pub mod secret;

pub use credentials::*;
pub use response::*;
pub use secret::*;
