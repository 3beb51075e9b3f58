//! Span wiring for client operations; compiles to a passthrough without `tracing`.

// self
use crate::{_prelude::*, obs::Operation};

/// Future returned by [`OperationSpan::instrument`].
#[cfg(feature = "tracing")]
pub type Traced<F> = tracing::instrument::Instrumented<F>;
/// Future returned by [`OperationSpan::instrument`]; the input future itself.
#[cfg(not(feature = "tracing"))]
pub type Traced<F> = F;

/// `pam_sdk.operation` span carrying the operation label and the call site's stage.
#[derive(Clone, Debug)]
pub struct OperationSpan {
	#[cfg(feature = "tracing")]
	span: tracing::Span,
}
impl OperationSpan {
	/// Opens a span for `operation` at `stage`, e.g. `get_accounts`.
	pub fn new(operation: Operation, stage: &'static str) -> Self {
		#[cfg(feature = "tracing")]
		{
			let span = tracing::info_span!("pam_sdk.operation", operation = operation.as_str(), stage);

			Self { span }
		}
		#[cfg(not(feature = "tracing"))]
		{
			let _ = (operation, stage);

			Self {}
		}
	}

	/// Attaches the span to `fut` so every poll runs inside it.
	pub fn instrument<Fut>(&self, fut: Fut) -> Traced<Fut>
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
