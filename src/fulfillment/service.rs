//! UPS implementation of [`FulfillmentProvider`].

// self
use crate::{
	_prelude::*,
	client::{RateClient, RateQuoter},
	fulfillment::{
		Cart, FulfillmentOption, FulfillmentProvider, HostServices, LineItem, PackageMode,
		PluginOptions, PriceQuote, ProviderFuture, translate,
	},
	obs::{self, CallKind, CallOutcome, CallSpan},
};

/// Provider identifier registered with the host.
pub const IDENTIFIER: &str = "ups";
/// Identifier of the single shipping option.
pub const OPTION_ID: &str = "ups-fulfillment";
/// Display name of the single shipping option.
pub const OPTION_NAME: &str = "UPS shipment";

/// Fail-soft UPS fulfillment provider.
///
/// Prices come from a [`RateQuoter`], by default the carrier-backed [`RateClient`]. Any
/// quoting failure is logged with the request payloads and turned into
/// [`PriceQuote::Unavailable`].
pub struct UpsFulfillmentService<Q = RateClient>
where
	Q: ?Sized + RateQuoter,
{
	services: HostServices,
	quoter: Arc<Q>,
	package_mode: PackageMode,
}
impl UpsFulfillmentService {
	/// Builds the provider and its rate client from host options.
	pub fn new(services: HostServices, options: &PluginOptions) -> Result<Self> {
		let client = options.build_rate_client()?;

		Ok(Self::with_quoter(services, client, options.package_mode))
	}
}
impl<Q> UpsFulfillmentService<Q>
where
	Q: ?Sized + RateQuoter,
{
	/// Builds the provider around an existing quoter.
	pub fn with_quoter(
		services: HostServices,
		quoter: impl Into<Arc<Q>>,
		package_mode: PackageMode,
	) -> Self {
		Self { services, quoter: quoter.into(), package_mode }
	}

	/// Host services captured at construction.
	pub fn services(&self) -> &HostServices {
		&self.services
	}

	/// Quoting backend.
	pub fn quoter(&self) -> &Q {
		&self.quoter
	}

	/// Package description strategy.
	pub fn package_mode(&self) -> PackageMode {
		self.package_mode
	}

	/// Prices `cart` in minor currency units.
	pub async fn quote(&self, cart: &Cart) -> PriceQuote {
		const KIND: CallKind = CallKind::Quote;

		let span = CallSpan::new(KIND, "calculate_price");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let quote = span
			.instrument(async move {
				let Some(address) = &cart.shipping_address else {
					tracing::warn!(
						cart_id = cart.id.as_deref().unwrap_or_default(),
						"Cart has no shipping address; UPS price unavailable."
					);

					return PriceQuote::Unavailable;
				};
				let ship_to = translate::ship_to(address);
				let packages = translate::package_description(&cart.items, self.package_mode);

				match self.quoter.get_rates(&ship_to, &packages).await {
					Ok(amount) => PriceQuote::from_major_units(amount),
					Err(e) => {
						tracing::error!(
							error = %e,
							body = e.carrier_body().unwrap_or_default(),
							address = %to_json(&ship_to),
							packages = %to_json(&packages),
							"UPS rate lookup failed."
						);

						PriceQuote::Unavailable
					},
				}
			})
			.await;

		match quote {
			PriceQuote::Priced(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			PriceQuote::Unavailable => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		quote
	}
}
impl<Q> FulfillmentProvider for UpsFulfillmentService<Q>
where
	Q: ?Sized + RateQuoter,
{
	fn identifier(&self) -> &'static str {
		IDENTIFIER
	}

	fn fulfillment_options(&self) -> Vec<FulfillmentOption> {
		vec![FulfillmentOption::new(OPTION_ID, OPTION_NAME)]
	}

	fn validate_fulfillment_data(
		&self,
		option_data: &Map<String, Value>,
		data: &Map<String, Value>,
	) -> Map<String, Value> {
		let mut merged = option_data.clone();

		merged.extend(data.iter().map(|(key, value)| (key.clone(), value.clone())));

		merged
	}

	fn validate_option(&self, data: &Value) -> bool {
		data.get("id")
			.and_then(Value::as_str)
			.is_some_and(|id| self.fulfillment_options().iter().any(|option| option.id == id))
	}

	fn can_calculate(&self, _: &Value) -> bool {
		true
	}

	fn calculate_price<'a>(
		&'a self,
		_: &'a Value,
		_: &'a Value,
		cart: &'a Cart,
	) -> ProviderFuture<'a, PriceQuote> {
		Box::pin(self.quote(cart))
	}

	fn create_fulfillment<'a>(
		&'a self,
		_: &'a Value,
		_: &'a [LineItem],
		_: &'a Value,
		_: &'a Value,
	) -> ProviderFuture<'a, Option<Value>> {
		Box::pin(async { None })
	}

	fn get_fulfillment_documents<'a>(&'a self, _: &'a Value) -> ProviderFuture<'a, Vec<Value>> {
		Box::pin(async { Vec::new() })
	}

	fn create_return<'a>(&'a self, _: &'a Value) -> ProviderFuture<'a, Map<String, Value>> {
		Box::pin(async { Map::new() })
	}

	fn get_return_documents<'a>(&'a self, _: &'a Value) -> ProviderFuture<'a, Map<String, Value>> {
		Box::pin(async { Map::new() })
	}

	fn get_shipment_documents<'a>(&'a self, _: &'a Value) -> ProviderFuture<'a, Map<String, Value>> {
		Box::pin(async { Map::new() })
	}

	fn cancel_fulfillment<'a>(&'a self, _: &'a Value) -> ProviderFuture<'a, ()> {
		Box::pin(async {})
	}

	fn retrieve_documents<'a>(&'a self, _: &'a Value, _: &'a str) -> ProviderFuture<'a, ()> {
		Box::pin(async {})
	}
}
impl<Q> Debug for UpsFulfillmentService<Q>
where
	Q: ?Sized + RateQuoter,
{
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("UpsFulfillmentService")
			.field("services", &self.services)
			.field("package_mode", &self.package_mode)
			.finish_non_exhaustive()
	}
}

fn to_json<T>(value: &T) -> String
where
	T: Serialize,
{
	serde_json::to_string(value).unwrap_or_default()
}

#[cfg(test)]
mod tests {
	// crates.io
	use parking_lot::Mutex;
	// self
	use super::*;
	use crate::{
		client::RateFuture,
		fulfillment::{Address, ProductVariant},
		rating::{PackageDescription, ShipTo},
	};

	#[derive(Default)]
	struct StubQuoter {
		amount: Option<f64>,
		calls: Mutex<Vec<(ShipTo, PackageDescription)>>,
	}
	impl StubQuoter {
		fn quoting(amount: f64) -> Self {
			Self { amount: Some(amount), ..Default::default() }
		}
	}
	impl RateQuoter for StubQuoter {
		fn get_rates<'a>(
			&'a self,
			ship_to: &'a ShipTo,
			packages: &'a PackageDescription,
		) -> RateFuture<'a> {
			self.calls.lock().push((ship_to.clone(), packages.clone()));

			Box::pin(async move { self.amount.ok_or(Error::MissingToken) })
		}
	}

	fn service(quoter: StubQuoter, mode: PackageMode) -> UpsFulfillmentService<StubQuoter> {
		UpsFulfillmentService::with_quoter(HostServices::default(), quoter, mode)
	}

	fn cart() -> Cart {
		Cart {
			id: Some("cart_01".into()),
			shipping_address: Some(Address {
				first_name: Some("Jane".into()),
				last_name: Some("Doe".into()),
				address_1: Some("1 Main St".into()),
				city: Some("Springfield".into()),
				postal_code: Some("62701".into()),
				country_code: Some("us".into()),
				..Default::default()
			}),
			items: vec![LineItem {
				quantity: 1,
				variant: ProductVariant {
					length: Some(25.4),
					width: Some(25.4),
					height: Some(25.4),
					weight: Some(1000.),
				},
				..Default::default()
			}],
		}
	}

	#[tokio::test]
	async fn major_unit_rate_becomes_minor_units() {
		let service = service(StubQuoter::quoting(12.5), PackageMode::PerItem);
		let quote = service.calculate_price(&Value::Null, &Value::Null, &cart()).await;

		assert_eq!(quote, PriceQuote::Priced(1250));

		let calls = service.quoter().calls.lock();
		let (ship_to, packages) = &calls[0];

		assert_eq!(ship_to.name, "Jane Doe");
		assert_eq!(ship_to.address.country_code.as_deref(), Some("US"));
		assert!(matches!(packages, PackageDescription::Packages(packages) if packages.len() == 1));
	}

	#[tokio::test]
	async fn quoter_failures_are_swallowed() {
		let service = service(StubQuoter::default(), PackageMode::PerItem);
		let quote = service.calculate_price(&Value::Null, &Value::Null, &cart()).await;

		assert_eq!(quote, PriceQuote::Unavailable);
		assert_eq!(service.quoter().calls.lock().len(), 1);
	}

	#[tokio::test]
	async fn missing_address_is_unavailable_without_quoting() {
		let service = service(StubQuoter::quoting(1.), PackageMode::PerItem);
		let cart = Cart { shipping_address: None, ..cart() };

		assert_eq!(service.quote(&cart).await, PriceQuote::Unavailable);
		assert!(service.quoter().calls.lock().is_empty());
	}

	#[tokio::test]
	async fn aggregate_mode_sends_cart_weight() {
		let service = service(StubQuoter::quoting(3.), PackageMode::AggregateWeight);
		let mut cart = cart();

		cart.items[0].variant.weight = Some(2.);

		assert_eq!(service.quote(&cart).await, PriceQuote::Priced(300));
		assert_eq!(
			service.quoter().calls.lock()[0].1,
			PackageDescription::Weight(Some("4.40".into()))
		);
	}

	#[test]
	fn option_validation_matches_the_single_option() {
		let service = service(StubQuoter::default(), PackageMode::PerItem);

		assert_eq!(service.identifier(), "ups");
		assert_eq!(
			service.fulfillment_options(),
			vec![FulfillmentOption::new("ups-fulfillment", "UPS shipment")]
		);
		assert!(service.validate_option(&serde_json::json!({ "id": "ups-fulfillment" })));
		assert!(!service.validate_option(&serde_json::json!({ "id": "anything-else" })));
		assert!(!service.validate_option(&serde_json::json!({})));
		assert!(service.can_calculate(&Value::Null));
	}

	#[test]
	fn fulfillment_data_merge_prefers_checkout_data() {
		let service = service(StubQuoter::default(), PackageMode::PerItem);
		let option_data = serde_json::json!({ "id": "ups-fulfillment", "speed": "ground" });
		let data = serde_json::json!({ "speed": "express", "note": "leave at door" });
		let merged = service.validate_fulfillment_data(
			option_data.as_object().expect("Option data should be an object."),
			data.as_object().expect("Data should be an object."),
		);

		assert_eq!(
			Value::Object(merged),
			serde_json::json!({ "id": "ups-fulfillment", "speed": "express", "note": "leave at door" })
		);
	}

	#[tokio::test]
	async fn document_hooks_are_inert() {
		let service = service(StubQuoter::default(), PackageMode::PerItem);
		let value = Value::Null;

		assert_eq!(service.create_fulfillment(&value, &[], &value, &value).await, None);
		assert!(service.get_fulfillment_documents(&value).await.is_empty());
		assert!(service.create_return(&value).await.is_empty());
		assert!(service.get_return_documents(&value).await.is_empty());
		assert!(service.get_shipment_documents(&value).await.is_empty());
		service.cancel_fulfillment(&value).await;
		service.retrieve_documents(&value, "label").await;
		assert!(service.quoter().calls.lock().is_empty());
	}
}
