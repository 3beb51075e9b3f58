//! `pam_sdk_operation_total` counter; a no-op without the `metrics` feature.

// self
use crate::obs::{Operation, Outcome};

/// Bumps `pam_sdk_operation_total{operation, outcome}` on the installed recorder.
pub fn record_outcome(operation: Operation, outcome: Outcome) {
	#[cfg(feature = "metrics")]
	{
		metrics::counter!(
			"pam_sdk_operation_total",
			"operation" => operation.as_str(),
			"outcome" => outcome.as_str()
		)
		.increment(1);
	}

	#[cfg(not(feature = "metrics"))]
	{
		let _ = (operation, outcome);
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn every_label_pair_records_without_a_recorder() {
		for operation in
			[Operation::AcquireSession, Operation::RefreshSession, Operation::Send, Operation::Resource]
		{
			for outcome in [Outcome::Attempt, Outcome::Success, Outcome::Failure] {
				record_outcome(operation, outcome);
			}
		}
	}
}
