//! Outbound `RateRequest` document.
//!
//! The only way to build a [`RateRequest`] is [`RateRequest::new`], which stamps the
//! carrier's fixed option codes so every call site sends the same protocol constants.

// self
use crate::{
	_prelude::*,
	rating::{CarrierAddress, Code, CodeDescription, Package, PackageDescription},
};

/// `Request.RequestOption`: rate a single service.
pub const REQUEST_OPTION: &str = "01";
/// `PickupType.Code`: daily pickup.
pub const PICKUP_TYPE_CODE: &str = "01";
/// `CustomerClassification.Code`: shipper account rates.
pub const CUSTOMER_CLASSIFICATION_CODE: &str = "01";
/// `ShipmentCharge.Type`: transportation charges.
pub const SHIPMENT_CHARGE_TYPE: &str = "01";
/// `Service.Code` for Ground.
pub const GROUND_SERVICE_CODE: &str = "03";
/// `Shipment.NumOfPieces`: sent as one piece regardless of the package list.
pub const NUM_OF_PIECES: &str = "1";
/// `Service.Description` for Ground.
pub const GROUND_SERVICE_DESCRIPTION: &str = "Ground";
/// Shipper name used when none is configured.
pub const DEFAULT_SHIPPER_NAME: &str = "ShipperName";
/// Recipient name used when the destination carries none.
pub const DEFAULT_SHIP_TO_NAME: &str = "ShipToName";

/// JSON body posted to the rating endpoint: `{ "RateRequest": ... }`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RateRequestEnvelope {
	/// Wrapped request.
	#[serde(rename = "RateRequest")]
	pub rate_request: RateRequest,
}

/// Rate request with fixed request, pickup, and classification codes.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RateRequest {
	/// Request options.
	pub request: RequestOptions,
	/// Pickup type.
	pub pickup_type: Code,
	/// Customer classification.
	pub customer_classification: Code,
	/// Shipment being rated.
	pub shipment: Shipment,
}
impl RateRequest {
	/// Builds a Ground rate request billed to the shipper's account.
	pub fn new(shipper: Shipper, ship_to: ShipTo, packages: PackageDescription) -> Self {
		let payment_details = PaymentDetails {
			shipment_charge: vec![ShipmentCharge {
				charge_type: SHIPMENT_CHARGE_TYPE.into(),
				bill_shipper: BillShipper { account_number: shipper.shipper_number.clone() },
			}],
		};
		let package = match packages {
			PackageDescription::Weight(weight) => ShipmentPackages::Single(Package::weighed(weight)),
			PackageDescription::Packages(packages) => ShipmentPackages::Many(packages),
		};

		Self {
			request: RequestOptions { request_option: REQUEST_OPTION.into() },
			pickup_type: Code::new(PICKUP_TYPE_CODE),
			customer_classification: Code::new(CUSTOMER_CLASSIFICATION_CODE),
			shipment: Shipment {
				shipper,
				ship_to,
				payment_details,
				service: CodeDescription::new(GROUND_SERVICE_CODE, GROUND_SERVICE_DESCRIPTION),
				num_of_pieces: NUM_OF_PIECES.into(),
				package,
			},
		}
	}

	/// Wraps the request in its top-level envelope.
	pub fn into_envelope(self) -> RateRequestEnvelope {
		RateRequestEnvelope { rate_request: self }
	}
}

/// `Request` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct RequestOptions {
	/// Request option code.
	pub request_option: String,
}

/// `Shipment` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shipment {
	/// Origin party.
	pub shipper: Shipper,
	/// Destination party.
	pub ship_to: ShipTo,
	/// Who pays.
	pub payment_details: PaymentDetails,
	/// Requested service.
	pub service: CodeDescription,
	/// Piece count, as a string.
	pub num_of_pieces: String,
	/// Package data.
	pub package: ShipmentPackages,
}

/// Origin party of a shipment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Shipper {
	/// Display name.
	pub name: String,
	/// Carrier account number.
	pub shipper_number: String,
	/// Ship-from address.
	pub address: CarrierAddress,
}
impl Shipper {
	/// Creates a shipper record.
	pub fn new(
		name: impl Into<String>,
		shipper_number: impl Into<String>,
		address: CarrierAddress,
	) -> Self {
		Self { name: name.into(), shipper_number: shipper_number.into(), address }
	}
}

/// Destination party of a shipment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipTo {
	/// Recipient name.
	pub name: String,
	/// Ship-to address.
	pub address: CarrierAddress,
}
impl ShipTo {
	/// Creates a recipient record.
	pub fn new(name: impl Into<String>, address: CarrierAddress) -> Self {
		Self { name: name.into(), address }
	}
}

/// `PaymentDetails` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PaymentDetails {
	/// Charges and who they are billed to.
	pub shipment_charge: Vec<ShipmentCharge>,
}

/// Single charge billed to the shipper.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct ShipmentCharge {
	/// Charge type code.
	#[serde(rename = "Type")]
	pub charge_type: String,
	/// Billed account.
	pub bill_shipper: BillShipper,
}

/// `BillShipper` block.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct BillShipper {
	/// Account number to bill.
	pub account_number: String,
}

/// `Shipment.Package`: one object for a whole-cart weight, an array for per-item packages.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ShipmentPackages {
	/// Whole-cart package.
	Single(Package),
	/// One package per item.
	Many(Vec<Package>),
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	fn shipper() -> Shipper {
		Shipper::new(
			"Acme Outfitters",
			"A1B2C3",
			CarrierAddress::new(["100 Warehouse Way"])
				.with_city("Atlanta")
				.with_state_province_code("GA")
				.with_postal_code("30301")
				.with_country_code("US"),
		)
	}

	fn ship_to() -> ShipTo {
		ShipTo::new(
			"Jane Doe",
			CarrierAddress::new(["1 Main St", "Apt 2"])
				.with_city("Springfield")
				.with_postal_code("62701")
				.with_country_code("US"),
		)
	}

	#[test]
	fn per_item_request_reproduces_fixed_codes_and_nesting() {
		let packages = PackageDescription::Packages(vec![Package::dimensional(
			"1.00", "2.00", "3.00", "2.20",
		)]);
		let envelope = RateRequest::new(shipper(), ship_to(), packages).into_envelope();
		let value = serde_json::to_value(envelope).expect("Rate request should serialize.");

		assert_eq!(
			value,
			serde_json::json!({
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
								"AddressLine": ["1 Main St", "Apt 2"],
								"City": "Springfield",
								"CountryCode": "US",
								"PostalCode": "62701"
							}
						},
						"PaymentDetails": {
							"ShipmentCharge": [
								{ "Type": "01", "BillShipper": { "AccountNumber": "A1B2C3" } }
							]
						},
						"Service": { "Code": "03", "Description": "Ground" },
						"NumOfPieces": "1",
						"Package": [
							{
								"SimpleRate": { "Code": "XS", "Description": "SimpleRateDescription" },
								"PackagingType": { "Code": "02", "Description": "Packaging" },
								"Dimensions": {
									"UnitOfMeasurement": { "Code": "IN", "Description": "Inches" },
									"Length": "1.00",
									"Width": "2.00",
									"Height": "3.00"
								},
								"PackageWeight": {
									"UnitOfMeasurement": { "Code": "LBS", "Description": "Pounds" },
									"Weight": "2.20"
								}
							}
						]
					}
				}
			})
		);
	}

	#[test]
	fn multi_package_request_still_reports_one_piece() {
		let packages = PackageDescription::Packages(vec![
			Package::dimensional("10.00", "5.00", "2.00", "2.20"),
			Package::dimensional("1.00", "1.00", "1.00", "0.99"),
		]);
		let value = serde_json::to_value(RateRequest::new(shipper(), ship_to(), packages))
			.expect("Rate request should serialize.");

		assert_eq!(value["Shipment"]["NumOfPieces"], NUM_OF_PIECES);
		assert_eq!(value["Shipment"]["Package"].as_array().map(Vec::len), Some(2));
	}

	#[test]
	fn weight_request_sends_a_single_package_object() {
		let request = RateRequest::new(
			shipper(),
			ship_to(),
			PackageDescription::Weight(Some("4.40".into())),
		);
		let value = serde_json::to_value(&request).expect("Rate request should serialize.");
		let package = &value["Shipment"]["Package"];

		assert!(package.is_object());
		assert_eq!(package["PackagingType"]["Code"], "02");
		assert_eq!(package["PackageWeight"]["Weight"], "4.40");
		assert_eq!(value["Shipment"]["NumOfPieces"], "1");
		// Shipper identity comes from the caller, never from placeholders.
		assert_eq!(value["Shipment"]["Shipper"]["ShipperNumber"], "A1B2C3");
	}
}
