//! Prices a cart end to end against a mock carrier: plugin options, token grant, rate request,
//! and the minor-unit quote the host receives.

// crates.io
use color_eyre::Result;
use httpmock::prelude::*;
use serde_json::json;
// self
use ups_fulfillment::{
	auth::unix_millis,
	carrier::{RATING_PATH, TOKEN_PATH},
	fulfillment::{Cart, FulfillmentProvider, HostServices, PluginOptions, UpsFulfillmentService},
};

#[tokio::main]
async fn main() -> Result<()> {
	color_eyre::install()?;

	let server = MockServer::start_async().await;
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "application/json").json_body(json!({
				"token_type": "Bearer",
				"issued_at": unix_millis(time::OffsetDateTime::now_utc()).to_string(),
				"access_token": "demo-access",
				"expires_in": "14399",
				"status": "approved"
			}));
		})
		.await;
	let rate_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(RATING_PATH).header("authorization", "Bearer demo-access");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"RateResponse": {
					"RatedShipment": [
						{ "TotalCharges": { "CurrencyCode": "USD", "MonetaryValue": "18.42" } }
					]
				}
			}));
		})
		.await;
	let options = PluginOptions::from_value(json!({
		"client_id": "demo-client",
		"client_secret": "demo-secret",
		"account_number": "A1B2C3",
		"base_url": server.base_url(),
		"ship_from": {
			"address_1": "100 Warehouse Way",
			"city": "Atlanta",
			"province": "GA",
			"postal_code": "30301",
			"country_code": "us"
		}
	}))?;
	let service = UpsFulfillmentService::new(HostServices::default(), &options)?;
	let cart: Cart = serde_json::from_value(json!({
		"shipping_address": {
			"first_name": "Jane",
			"last_name": "Doe",
			"address_1": "1 Main St",
			"city": "Springfield",
			"province": "IL",
			"postal_code": 62701,
			"country_code": "us"
		},
		"items": [
			{ "quantity": 1, "variant": { "length": 300, "width": 200, "height": 100, "weight": 1200 } }
		]
	}))?;

	for option in service.fulfillment_options() {
		println!("Offering `{}` ({}).", option.id, option.name);
	}

	let quote = service.calculate_price(&json!({}), &json!({}), &cart).await;

	println!("Quoted price in minor units: {:?}.", quote.amount());

	token_mock.assert_async().await;
	rate_mock.assert_async().await;

	Ok(())
}
