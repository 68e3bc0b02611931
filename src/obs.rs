//! Observability helpers for carrier calls.
//!
//! # Feature Flags
//!
//! - Spans named `ups_fulfillment.call` carry the `call` kind and `stage` (call site) fields;
//!   they are always emitted through `tracing`.
//! - Enable `metrics` to increment the `ups_fulfillment_call_total` counter for every
//!   attempt/success/failure, labeled by `call` + `outcome`.

mod metrics;
mod tracing;

pub use self::metrics::*;
pub use self::tracing::*;

// self
use crate::_prelude::*;

/// Calls observed by the crate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallKind {
	/// Client-credentials token refresh.
	TokenRefresh,
	/// Rating API lookup.
	Rating,
	/// Host-facing price calculation.
	Quote,
}
impl CallKind {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallKind::TokenRefresh => "token_refresh",
			CallKind::Rating => "rating",
			CallKind::Quote => "quote",
		}
	}
}
impl Display for CallKind {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}

/// Outcome labels recorded for each call.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CallOutcome {
	/// Call started.
	Attempt,
	/// Call completed.
	Success,
	/// Call failed.
	Failure,
}
impl CallOutcome {
	/// Returns a stable label suitable for span or metric fields.
	pub const fn as_str(self) -> &'static str {
		match self {
			CallOutcome::Attempt => "attempt",
			CallOutcome::Success => "success",
			CallOutcome::Failure => "failure",
		}
	}
}
impl Display for CallOutcome {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.write_str(self.as_str())
	}
}
