//! Public extension contracts for signing foreign request types.

pub mod request_signer;

pub use request_signer::*;
