// self
use crate::obs::{OperationKind, Outcome};

/// Records an operation outcome via the global metrics recorder (when enabled).
pub fn record_outcome(kind: OperationKind, outcome: Outcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth1_signer_operation_total",
			"operation" => kind.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, outcome);
	}
}

/// Counts a failed operation by its error reason (when enabled).
pub fn record_failure(kind: OperationKind, reason: &'static str) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"oauth1_signer_failure_total",
			"operation" => kind.as_str(),
			"reason" => reason
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (kind, reason);
	}
}

/// Records how many parameters went into one signature base string (when enabled).
pub fn record_signed_parameters(count: usize) {
	#[cfg(feature = "metrics")]
	{
		metrics::histogram!("oauth1_signer_signed_parameters").record(count as f64);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = count;
	}
}
