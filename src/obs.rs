//! Optional observability helpers for signing operations.
//!
//! # Feature Flags
//!
//! - Enable `tracing` to emit structured spans named `oauth1_signer.operation` with the
//!   `operation` and `stage` (call site) fields. Signing spans also record the request `method`,
//!   the canonical `base_uri`, and the number of signed `parameters`; failed operations record
//!   the error `reason`.
//! - Enable `metrics` to increment the `oauth1_signer_operation_total` counter for every
//!   attempt/success/failure, labeled by `operation` + `outcome`. Failures also increment
//!   `oauth1_signer_failure_total` labeled by `operation` + `reason`, and every computed
//!   signature feeds the `oauth1_signer_signed_parameters` histogram.

mod metrics;
mod tracing;

pub use metrics::*;
pub use tracing::*;

// self
use crate::_prelude::*;

/// Operations observed by the signer and client.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum OperationKind {
	/// Computing and writing an Authorization header.
	Sign,
	/// Signing and dispatching a request through a transport.
	Send,
	/// Refreshing token credentials from a response body.
	TokenUpdate,
}
impl OperationKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			OperationKind::Sign => "sign",
			OperationKind::Send => "send",
			OperationKind::TokenUpdate => "token_update",
		}
	}
}
impl Display for OperationKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each attempt.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Outcome {
	/// Entry to an operation.
	Attempt,
	/// Successful completion.
	Success,
	/// Failure propagated back to the caller.
	Failure,
}
impl Outcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			Outcome::Attempt => "attempt",
			Outcome::Success => "success",
			Outcome::Failure => "failure",
		}
	}

	/// Maps a result onto [`Outcome::Success`] or [`Outcome::Failure`].
	pub fn of<T, E>(result: &Result<T, E>) -> Self {
		if result.is_ok() { Outcome::Success } else { Outcome::Failure }
	}
}
impl Display for Outcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Records the final outcome of `result` on `span` and the metrics recorder.
///
/// Failures additionally carry [`Error::reason`] so signing rejections (relative URIs, invalid
/// header values) can be told apart from transport failures.
pub fn record_result<T>(kind: OperationKind, span: &OperationSpan, result: &Result<T>) {
	record_outcome(kind, Outcome::of(result));

	if let Err(e) = result {
		span.record_failure(e.reason());
		record_failure(kind, e.reason());
	}
}
