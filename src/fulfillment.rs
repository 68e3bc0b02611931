//! Host-facing fulfillment provider contract and the UPS implementation.
//!
//! Hosts drive checkout through [`FulfillmentProvider`]. Only pricing does real work; the
//! label, return, and document hooks are inert so the provider can be registered without
//! a shipment backend.

pub mod host;
pub mod options;
pub mod service;
pub mod translate;

pub use host::*;
pub use options::*;
pub use service::*;
pub use translate::*;

// self
use crate::_prelude::*;

/// Boxed future returned by asynchronous [`FulfillmentProvider`] hooks.
pub type ProviderFuture<'a, T> = Pin<Box<dyn Future<Output = T> + 'a + Send>>;

/// Fulfillment-provider contract consumed by the commerce host.
pub trait FulfillmentProvider
where
	Self: Send + Sync,
{
	/// Stable provider identifier registered with the host.
	fn identifier(&self) -> &'static str;

	/// Shipping options this provider offers.
	fn fulfillment_options(&self) -> Vec<FulfillmentOption>;

	/// Shallow merge of the option's data with the checkout data; `data` wins on conflicts.
	fn validate_fulfillment_data(
		&self,
		option_data: &Map<String, Value>,
		data: &Map<String, Value>,
	) -> Map<String, Value>;

	/// Returns `true` when `data.id` names one of [`Self::fulfillment_options`].
	fn validate_option(&self, data: &Value) -> bool;

	/// Whether [`Self::calculate_price`] can be attempted for `data`.
	fn can_calculate(&self, data: &Value) -> bool;

	/// Prices `cart` in minor currency units. Never fails; an unquotable cart is
	/// [`PriceQuote::Unavailable`].
	fn calculate_price<'a>(
		&'a self,
		option_data: &'a Value,
		data: &'a Value,
		cart: &'a Cart,
	) -> ProviderFuture<'a, PriceQuote>;

	/// Creates a shipment for an order.
	fn create_fulfillment<'a>(
		&'a self,
		data: &'a Value,
		items: &'a [LineItem],
		order: &'a Value,
		fulfillment: &'a Value,
	) -> ProviderFuture<'a, Option<Value>>;

	/// Documents attached to a created shipment.
	fn get_fulfillment_documents<'a>(&'a self, data: &'a Value) -> ProviderFuture<'a, Vec<Value>>;

	/// Creates a return shipment.
	fn create_return<'a>(
		&'a self,
		return_order: &'a Value,
	) -> ProviderFuture<'a, Map<String, Value>>;

	/// Documents attached to a return.
	fn get_return_documents<'a>(
		&'a self,
		data: &'a Value,
	) -> ProviderFuture<'a, Map<String, Value>>;

	/// Documents attached to a shipment.
	fn get_shipment_documents<'a>(
		&'a self,
		data: &'a Value,
	) -> ProviderFuture<'a, Map<String, Value>>;

	/// Cancels a shipment.
	fn cancel_fulfillment<'a>(&'a self, fulfillment: &'a Value) -> ProviderFuture<'a, ()>;

	/// Fetches documents of the given type.
	fn retrieve_documents<'a>(
		&'a self,
		fulfillment_data: &'a Value,
		document_type: &'a str,
	) -> ProviderFuture<'a, ()>;
}

/// Shipping option advertised to the host.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FulfillmentOption {
	/// Option identifier stored on shipping methods.
	pub id: String,
	/// Display name.
	pub name: String,
}
impl FulfillmentOption {
	/// Creates an option.
	pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
		Self { id: id.into(), name: name.into() }
	}
}

/// Result of a price calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PriceQuote {
	/// Price in minor currency units.
	Priced(i64),
	/// This provider cannot quote the cart; the host should hide the option.
	Unavailable,
}
impl PriceQuote {
	/// Converts a major-unit amount to minor units, rounding to the nearest unit.
	pub fn from_major_units(amount: f64) -> Self {
		let minor = (amount * 100.).round();

		if minor.is_finite() { Self::Priced(minor as i64) } else { Self::Unavailable }
	}

	/// Minor-unit amount, if priced.
	pub fn amount(self) -> Option<i64> {
		match self {
			Self::Priced(amount) => Some(amount),
			Self::Unavailable => None,
		}
	}
}
