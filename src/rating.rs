//! Typed Rating API documents.
//!
//! `request` builds the outbound `RateRequest` with the carrier's fixed protocol codes,
//! `response` reads the `RateResponse` down to the first rated shipment's total charge, and
//! `address`/`package` hold the shapes shared by both directions.

pub mod address;
pub mod package;
pub mod request;
pub mod response;

pub use address::*;
pub use package::*;
pub use request::*;
pub use response::*;

// self
use crate::_prelude::*;

/// `{ "Code": ..., "Description": ... }` pair used throughout the carrier documents.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CodeDescription {
	/// Carrier code.
	pub code: String,
	/// Human-readable label; responses may omit it.
	#[serde(default)]
	pub description: String,
}
impl CodeDescription {
	/// Creates a code/description pair.
	pub fn new(code: impl Into<String>, description: impl Into<String>) -> Self {
		Self { code: code.into(), description: description.into() }
	}
}

/// `{ "Code": ... }` wrapper for options that carry no description.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Code {
	/// Carrier code.
	pub code: String,
}
impl Code {
	/// Wraps a code.
	pub fn new(code: impl Into<String>) -> Self {
		Self { code: code.into() }
	}
}

/// Serde helpers for fields that arrive as strings on some paths and numbers on others.
pub(crate) mod wire {
	// crates.io
	use serde::{Deserializer, de::Deserialize};
	use serde_json::Number;

	#[derive(serde::Deserialize)]
	#[serde(untagged)]
	enum StringOrNumber {
		String(String),
		Number(Number),
	}
	impl From<StringOrNumber> for String {
		fn from(value: StringOrNumber) -> Self {
			match value {
				StringOrNumber::String(value) => value,
				StringOrNumber::Number(value) => value.to_string(),
			}
		}
	}

	pub(crate) fn string_or_number<'de, D>(deserializer: D) -> Result<String, D::Error>
	where
		D: Deserializer<'de>,
	{
		StringOrNumber::deserialize(deserializer).map(Into::into)
	}

	pub(crate) fn optional_string_or_number<'de, D>(
		deserializer: D,
	) -> Result<Option<String>, D::Error>
	where
		D: Deserializer<'de>,
	{
		<Option<StringOrNumber>>::deserialize(deserializer).map(|value| value.map(Into::into))
	}
}
