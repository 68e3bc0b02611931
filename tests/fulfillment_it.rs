// crates.io
use httpmock::prelude::*;
use serde_json::{Value, json};
use time::OffsetDateTime;
// self
use ups_fulfillment::{
	auth::unix_millis,
	carrier::{RATING_PATH, TOKEN_PATH},
	error::{ConfigError, Error},
	fulfillment::{
		Cart, FulfillmentProvider, HostServices, PluginOptions, PriceQuote, UpsFulfillmentService,
	},
};

fn build_service(server: &MockServer, package_mode: &str) -> UpsFulfillmentService {
	let options = PluginOptions::from_value(json!({
		"client_id": "client",
		"client_secret": "secret",
		"account_number": "A1B2C3",
		"base_url": server.base_url(),
		"package_mode": package_mode,
		"shipper_name": "Acme Outfitters",
		"ship_from": {
			"address_1": "100 Warehouse Way",
			"city": "Atlanta",
			"province": "GA",
			"postal_code": 30301,
			"country_code": "us"
		}
	}))
	.expect("Plugin options should parse.");

	UpsFulfillmentService::new(HostServices::default(), &options)
		.expect("Fulfillment service should build.")
}

fn cart() -> Cart {
	serde_json::from_value(json!({
		"id": "cart_01",
		"shipping_address": {
			"first_name": "Jane",
			"last_name": "Doe",
			"address_1": "1 Main St",
			"address_2": "",
			"city": "Springfield",
			"province": "IL",
			"postal_code": "62701",
			"country_code": "us"
		},
		"items": [
			{
				"id": "item_01",
				"quantity": 1,
				"variant": { "length": 254, "width": 127, "height": 50.8, "weight": 1000 }
			},
			{
				"id": "item_02",
				"quantity": 3,
				"variant": { "length": 25.4, "width": 25.4, "height": 25.4, "weight": 450 }
			}
		]
	}))
	.expect("Cart fixture should deserialize.")
}

fn dimensional_package(length: &str, width: &str, height: &str, weight: &str) -> Value {
	json!({
		"SimpleRate": { "Code": "XS", "Description": "SimpleRateDescription" },
		"PackagingType": { "Code": "02", "Description": "Packaging" },
		"Dimensions": {
			"UnitOfMeasurement": { "Code": "IN", "Description": "Inches" },
			"Length": length,
			"Width": width,
			"Height": height
		},
		"PackageWeight": {
			"UnitOfMeasurement": { "Code": "LBS", "Description": "Pounds" },
			"Weight": weight
		}
	})
}

fn expected_request(package: Value) -> Value {
	json!({
		"RateRequest": {
			"Request": { "RequestOption": "01" },
			"PickupType": { "Code": "01" },
			"CustomerClassification": { "Code": "01" },
			"Shipment": {
				"Shipper": {
					"Name": "Acme Outfitters",
					"ShipperNumber": "A1B2C3",
					"Address": {
						"AddressLine": ["100 Warehouse Way"],
						"City": "Atlanta",
						"StateProvinceCode": "GA",
						"CountryCode": "US",
						"PostalCode": "30301"
					}
				},
				"ShipTo": {
					"Name": "Jane Doe",
					"Address": {
						"AddressLine": ["1 Main St"],
						"City": "Springfield",
						"StateProvinceCode": "IL",
						"CountryCode": "US",
						"PostalCode": "62701"
					}
				},
				"PaymentDetails": {
					"ShipmentCharge": [{ "Type": "01", "BillShipper": { "AccountNumber": "A1B2C3" } }]
				},
				"Service": { "Code": "03", "Description": "Ground" },
				"NumOfPieces": "1",
				"Package": package
			}
		}
	})
}

async fn mock_token(server: &MockServer) {
	server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(200).header("content-type", "application/json").json_body(json!({
				"token_type": "Bearer",
				"issued_at": unix_millis(OffsetDateTime::now_utc()).to_string(),
				"access_token": "e2e-token",
				"expires_in": "14399",
				"status": "approved"
			}));
		})
		.await;
}

#[tokio::test]
async fn per_item_cart_is_priced_in_minor_units() {
	let server = MockServer::start_async().await;
	let service = build_service(&server, "per_item");

	mock_token(&server).await;

	let rate_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(RATING_PATH).header("authorization", "Bearer e2e-token");
			then.status(200).header("content-type", "application/json").json_body(json!({
				"RateResponse": {
					"RatedShipment": {
						"TotalCharges": { "CurrencyCode": "USD", "MonetaryValue": "23.17" }
					}
				}
			}));
		})
		.await;
	let quote = service.calculate_price(&Value::Null, &Value::Null, &cart()).await;

	assert_eq!(quote, PriceQuote::Priced(2317));

	rate_mock.assert_async().await;
}

#[tokio::test]
async fn translated_cart_reaches_the_carrier() {
	let server = MockServer::start_async().await;
	let service = build_service(&server, "per_item");

	mock_token(&server).await;

	let packages = json!([
		dimensional_package("10.00", "5.00", "2.00", "2.20"),
		dimensional_package("1.00", "1.00", "1.00", "0.99")
	]);
	let rate_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(RATING_PATH).json_body(expected_request(packages));
			then.status(200).header("content-type", "application/json").json_body(json!({
				"RateResponse": { "RatedShipment": [{ "TotalCharges": { "MonetaryValue": "12.5" } }] }
			}));
		})
		.await;

	assert_eq!(service.quote(&cart()).await, PriceQuote::Priced(1250));

	rate_mock.assert_async().await;
}

#[tokio::test]
async fn aggregate_cart_sends_a_single_weight() {
	let server = MockServer::start_async().await;
	let service = build_service(&server, "aggregate_weight");

	mock_token(&server).await;

	// (1000 + 450) * 2.2
	let package = json!({
		"PackagingType": { "Code": "02", "Description": "Packaging" },
		"PackageWeight": {
			"UnitOfMeasurement": { "Code": "LBS", "Description": "Pounds" },
			"Weight": "3190.00"
		}
	});
	let rate_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(RATING_PATH).json_body(expected_request(package));
			then.status(200).header("content-type", "application/json").json_body(json!({
				"RateResponse": { "RatedShipment": [{ "TotalCharges": { "MonetaryValue": "30.00" } }] }
			}));
		})
		.await;

	assert_eq!(service.quote(&cart()).await, PriceQuote::Priced(3000));

	rate_mock.assert_async().await;
}

#[tokio::test]
async fn carrier_rejection_yields_no_price() {
	let server = MockServer::start_async().await;
	let service = build_service(&server, "per_item");

	mock_token(&server).await;

	let rate_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(RATING_PATH);
			then.status(400)
				.header("content-type", "application/json")
				.body("{\"response\":{\"errors\":[{\"code\":\"111285\",\"message\":\"The postal code is invalid.\"}]}}");
		})
		.await;

	assert_eq!(service.quote(&cart()).await, PriceQuote::Unavailable);

	rate_mock.assert_async().await;
}

#[tokio::test]
async fn unreachable_token_endpoint_yields_no_price() {
	let server = MockServer::start_async().await;
	let service = build_service(&server, "per_item");
	let token_mock = server
		.mock_async(|when, then| {
			when.method(POST).path(TOKEN_PATH);
			then.status(500).body("internal error");
		})
		.await;

	assert_eq!(service.quote(&cart()).await, PriceQuote::Unavailable);

	token_mock.assert_async().await;
}

#[test]
fn remote_plain_http_base_url_is_rejected() {
	let options = PluginOptions::from_value(json!({
		"client_id": "client",
		"client_secret": "secret",
		"base_url": "http://carrier.example.com"
	}))
	.expect("Plugin options should parse.");
	let err = UpsFulfillmentService::new(HostServices::default(), &options)
		.expect_err("Plain HTTP to a remote host should be rejected.");

	assert!(matches!(err, Error::Config(ConfigError::InsecureEndpoint { .. })));
}
