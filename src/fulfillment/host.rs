//! Host domain records consumed by the provider.
//!
//! Only the fields the provider reads are modelled. The host sends snake_case JSON and
//! everything optional may be absent or `null`.

// std
use std::any::Any;
// self
use crate::{_prelude::*, rating::wire};

/// Opaque host service handle.
pub type ServiceHandle = Arc<dyn Any + Send + Sync>;

/// Services the host injects at construction. The provider stores them and never calls them.
#[derive(Clone, Default)]
pub struct HostServices {
	/// Order service.
	pub order_service: Option<ServiceHandle>,
	/// Claim service.
	pub claim_service: Option<ServiceHandle>,
}
impl HostServices {
	/// Sets the order service handle.
	pub fn with_order_service(mut self, service: ServiceHandle) -> Self {
		self.order_service = Some(service);

		self
	}

	/// Sets the claim service handle.
	pub fn with_claim_service(mut self, service: ServiceHandle) -> Self {
		self.claim_service = Some(service);

		self
	}
}
impl Debug for HostServices {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("HostServices")
			.field("order_service", &self.order_service.is_some())
			.field("claim_service", &self.claim_service.is_some())
			.finish()
	}
}

/// Postal address.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Address {
	/// Recipient first name.
	#[serde(default)]
	pub first_name: Option<String>,
	/// Recipient last name.
	#[serde(default)]
	pub last_name: Option<String>,
	/// First street line.
	#[serde(default)]
	pub address_1: Option<String>,
	/// Second street line.
	#[serde(default)]
	pub address_2: Option<String>,
	/// City.
	#[serde(default)]
	pub city: Option<String>,
	/// State or province code.
	#[serde(default)]
	pub province: Option<String>,
	/// Postal code; some hosts store it as a number.
	#[serde(default, deserialize_with = "wire::optional_string_or_number")]
	pub postal_code: Option<String>,
	/// ISO country code, often lowercase.
	#[serde(default)]
	pub country_code: Option<String>,
}

/// Physical measurements of a product variant, in millimeters and grams.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ProductVariant {
	/// Length.
	#[serde(default)]
	pub length: Option<f64>,
	/// Width.
	#[serde(default)]
	pub width: Option<f64>,
	/// Height.
	#[serde(default)]
	pub height: Option<f64>,
	/// Weight.
	#[serde(default)]
	pub weight: Option<f64>,
}

/// Cart line.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
	/// Line identifier.
	#[serde(default)]
	pub id: Option<String>,
	/// Ordered quantity.
	#[serde(default)]
	pub quantity: u32,
	/// Purchased variant.
	#[serde(default)]
	pub variant: ProductVariant,
}

/// Cart being priced.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cart {
	/// Cart identifier.
	#[serde(default)]
	pub id: Option<String>,
	/// Destination.
	#[serde(default)]
	pub shipping_address: Option<Address>,
	/// Lines in the cart.
	#[serde(default)]
	pub items: Vec<LineItem>,
}
