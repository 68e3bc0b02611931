// self
use crate::obs::{CallKind, CallOutcome};

/// Counter incremented once per call attempt and once per terminal outcome.
pub const CALL_COUNTER: &str = "ups_fulfillment_call_total";

/// Label pairs attached to [`CALL_COUNTER`].
pub const fn call_labels(
	kind: CallKind,
	outcome: CallOutcome,
) -> [(&'static str, &'static str); 2] {
	[("call", kind.as_str()), ("outcome", outcome.as_str())]
}

/// Records a call outcome via the global metrics recorder.
///
/// Without the `metrics` feature this only exists so call sites need no `cfg`.
pub fn record_call_outcome(kind: CallKind, outcome: CallOutcome) {
	#[cfg(feature = "metrics")]
	metrics::counter!(CALL_COUNTER, &call_labels(kind, outcome)).increment(1);

	#[cfg(not(feature = "metrics"))]
	let _ = call_labels(kind, outcome);
}
