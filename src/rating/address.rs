//! Carrier address record shared by the shipper and the recipient.

// self
use crate::_prelude::*;

/// Address as the carrier expects it. Absent optional parts are omitted from the JSON body.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct CarrierAddress {
	/// Free-text street lines.
	#[serde(default)]
	pub address_line: Vec<String>,
	/// City or town.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub city: Option<String>,
	/// State or province code.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub state_province_code: Option<String>,
	/// ISO country code.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub country_code: Option<String>,
	/// Postal code.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub postal_code: Option<String>,
}
impl CarrierAddress {
	/// Starts an address from its street lines.
	pub fn new<I, S>(lines: I) -> Self
	where
		I: IntoIterator<Item = S>,
		S: Into<String>,
	{
		Self { address_line: lines.into_iter().map(Into::into).collect(), ..Default::default() }
	}

	/// Sets the city.
	pub fn with_city(mut self, city: impl Into<String>) -> Self {
		self.city = Some(city.into());

		self
	}

	/// Sets the state or province code.
	pub fn with_state_province_code(mut self, code: impl Into<String>) -> Self {
		self.state_province_code = Some(code.into());

		self
	}

	/// Sets the country code.
	pub fn with_country_code(mut self, code: impl Into<String>) -> Self {
		self.country_code = Some(code.into());

		self
	}

	/// Sets the postal code.
	pub fn with_postal_code(mut self, code: impl Into<String>) -> Self {
		self.postal_code = Some(code.into());

		self
	}
}
