// self
use crate::{_prelude::*, obs::OperationKind, signature::SignatureContext};

/// Type alias that resolves to an instrumented future when tracing is enabled.
#[cfg(feature = "tracing")]
pub type InstrumentedOperation<F> = tracing::instrument::Instrumented<F>;
/// Passthrough future type when tracing is disabled.
#[cfg(not(feature = "tracing"))]
pub type InstrumentedOperation<F> = F;

/// A span builder used by signing operations.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Creates a new span tagged with the provided operation kind + stage.
	pub fn new(kind: OperationKind, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!(
				"oauth1_signer.operation",
				operation = kind.as_str(),
				stage,
				method = tracing::field::Empty,
				base_uri = tracing::field::Empty,
				parameters = tracing::field::Empty,
				reason = tracing::field::Empty,
			);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (kind, stage);

			Self {}
		}
	}

	/// Records what was signed. Secrets and parameter values never reach the span.
	pub fn record_signature(&self, context: &SignatureContext) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("method", context.method.as_str());
			self.span.record("base_uri", context.base_uri.as_str());
			self.span.record("parameters", context.parameters.len());
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = context;
		}
	}

	/// Records the error label of a failed operation.
	pub fn record_failure(&self, reason: &'static str) {
		#[cfg(feature = "tracing")]
		{
			self.span.record("reason", reason);
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = reason;
		}
	}

	/// Enters the span for synchronous sections.
	pub fn entered(self) -> OperationSpanGuard {
		#[cfg(feature = "tracing")]
		{
			OperationSpanGuard { guard: self.span.entered() }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = self;

			OperationSpanGuard {}
		}
	}

	/// Instruments an async block without holding a guard across `.await` points.
	pub fn instrument<Fut>(&self, fut: Fut) -> InstrumentedOperation<Fut>
	where
		Fut: Future,
	{
		#[cfg(feature = "tracing")]
		{
			use tracing::Instrument;

			fut.instrument(self.span.clone())
		}
		#[cfg(not(feature = "tracing"))]
		{
			fut
		}
	}
}

/// RAII guard returned by [`OperationSpan::entered`].
pub struct OperationSpanGuard {
	#[cfg(feature = "tracing")]
	#[allow(dead_code)]
	guard: tracing::span::EnteredSpan,
}
impl Debug for OperationSpanGuard {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str("OperationSpanGuard(..)")
	}
}
