//! Inbound `RateResponse` document.
//!
//! Only the first rated shipment's total charge is consumed; the rest of the document is
//! modelled so it can be logged or inspected. The carrier sends a bare object instead of a
//! one-element array for several list fields, so those fields accept both forms.

// self
use crate::{_prelude::*, error::CarrierError, rating::CodeDescription};

/// `{ "RateResponse": ... }` envelope.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct RateResponseEnvelope {
	/// Wrapped response.
	#[serde(rename = "RateResponse")]
	pub rate_response: RateResponse,
}

/// Rating result.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateResponse {
	/// Status + alerts.
	#[serde(default)]
	pub response: Option<ResponseHeader>,
	/// Rated shipments; the first one is authoritative.
	#[serde(default)]
	pub rated_shipment: OneOrMany<RatedShipment>,
}
impl RateResponse {
	/// First rated shipment, if any.
	pub fn first_rated_shipment(&self) -> Option<&RatedShipment> {
		self.rated_shipment.as_slice().first()
	}

	/// Total charge of the first rated shipment in major currency units.
	///
	/// `body` is the raw response, attached to any error for diagnosis.
	pub fn total_charge(&self, body: &str) -> Result<f64, CarrierError> {
		let shipment = self
			.first_rated_shipment()
			.ok_or_else(|| CarrierError::MissingRatedShipment { body: body.to_owned() })?;

		shipment.total_charges.amount().ok_or_else(|| CarrierError::InvalidMonetaryValue {
			value: shipment.total_charges.monetary_value.clone(),
			body: body.to_owned(),
		})
	}
}

/// `Response` block.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ResponseHeader {
	/// Overall status.
	pub response_status: CodeDescription,
	/// Warnings attached to the response.
	#[serde(default)]
	pub alert: OneOrMany<CodeDescription>,
	/// Echoed transaction reference.
	#[serde(default)]
	pub transaction_reference: Option<Value>,
}

/// Single rated shipment.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct RatedShipment {
	/// Rated service.
	#[serde(default)]
	pub service: Option<CodeDescription>,
	/// Shipment-level warnings.
	#[serde(default)]
	pub rated_shipment_alert: OneOrMany<CodeDescription>,
	/// Billable weight.
	#[serde(default)]
	pub billing_weight: Option<BillingWeight>,
	/// Transportation portion.
	#[serde(default)]
	pub transportation_charges: Option<Charge>,
	/// Base service portion.
	#[serde(default)]
	pub base_service_charge: Option<Charge>,
	/// Accessorial portion.
	#[serde(default)]
	pub service_options_charges: Option<Charge>,
	/// Total for the shipment.
	pub total_charges: Charge,
	/// Per-package breakdown, kept raw.
	#[serde(default)]
	pub rated_package: OneOrMany<Value>,
}

/// Billable weight of a shipment.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillingWeight {
	/// Weight unit.
	pub unit_of_measurement: CodeDescription,
	/// Weight value.
	pub weight: String,
}

/// Monetary amount.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Charge {
	/// ISO currency code.
	#[serde(default)]
	pub currency_code: String,
	/// Decimal amount in major units.
	#[serde(deserialize_with = "crate::rating::wire::string_or_number")]
	pub monetary_value: String,
}
impl Charge {
	/// Parses the amount; `None` for unreadable, negative, or non-finite values.
	pub fn amount(&self) -> Option<f64> {
		self.monetary_value
			.trim()
			.parse::<f64>()
			.ok()
			.filter(|amount| amount.is_finite() && *amount >= 0.0)
	}
}

/// Field the carrier sends either as a single value or as an array.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany<T> {
	/// Array; tried first so raw JSON arrays are not captured as a single value.
	Many(Vec<T>),
	/// Bare value.
	One(T),
}
impl<T> OneOrMany<T> {
	/// Views the values as a slice.
	pub fn as_slice(&self) -> &[T] {
		match self {
			Self::Many(values) => values,
			Self::One(value) => std::slice::from_ref(value),
		}
	}
}
impl<T> Default for OneOrMany<T> {
	fn default() -> Self {
		Self::Many(Vec::new())
	}
}
