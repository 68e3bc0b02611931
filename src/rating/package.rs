//! Package descriptors sent with a rate request.

// self
use crate::{_prelude::*, rating::CodeDescription};

/// Packaging type code for a customer-supplied package.
pub const PACKAGING_TYPE_CODE: &str = "02";
/// Simple-rate tier applied to per-item packages.
pub const SIMPLE_RATE_CODE: &str = "XS";
/// Dimension unit code.
pub const INCHES_CODE: &str = "IN";
/// Weight unit code.
pub const POUNDS_CODE: &str = "LBS";

/// Package dimensions in inches, formatted with two decimals.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Dimensions {
	/// Always inches.
	pub unit_of_measurement: CodeDescription,
	/// Length.
	pub length: String,
	/// Width.
	pub width: String,
	/// Height.
	pub height: String,
}

/// Package weight in pounds.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct PackageWeight {
	/// Always pounds.
	pub unit_of_measurement: CodeDescription,
	/// Formatted weight; omitted when the cart weighs nothing.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub weight: Option<String>,
}
impl PackageWeight {
	/// Pound weight with an optional value.
	pub fn pounds(weight: Option<String>) -> Self {
		Self { unit_of_measurement: CodeDescription::new(POUNDS_CODE, "Pounds"), weight }
	}
}

/// Single package entry of a shipment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct Package {
	/// Simple-rate tier, set for per-item packages.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub simple_rate: Option<CodeDescription>,
	/// Packaging type.
	pub packaging_type: CodeDescription,
	/// Dimensions, set for per-item packages.
	#[serde(skip_serializing_if = "Option::is_none")]
	pub dimensions: Option<Dimensions>,
	/// Package weight.
	pub package_weight: PackageWeight,
}
impl Package {
	/// Per-item package with simple-rate tier, dimensions in inches, and weight in pounds.
	pub fn dimensional(
		length: impl Into<String>,
		width: impl Into<String>,
		height: impl Into<String>,
		weight: impl Into<String>,
	) -> Self {
		Self {
			simple_rate: Some(CodeDescription::new(SIMPLE_RATE_CODE, "SimpleRateDescription")),
			packaging_type: packaging(),
			dimensions: Some(Dimensions {
				unit_of_measurement: CodeDescription::new(INCHES_CODE, "Inches"),
				length: length.into(),
				width: width.into(),
				height: height.into(),
			}),
			package_weight: PackageWeight::pounds(Some(weight.into())),
		}
	}

	/// Whole-cart package carrying only a weight.
	pub fn weighed(weight: Option<String>) -> Self {
		Self {
			simple_rate: None,
			packaging_type: packaging(),
			dimensions: None,
			package_weight: PackageWeight::pounds(weight),
		}
	}
}

/// What is being shipped: an aggregate cart weight or one package per item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PackageDescription {
	/// Whole-cart weight in pounds; `None` when the cart weighs nothing.
	Weight(Option<String>),
	/// One dimensional package per line item.
	Packages(Vec<Package>),
}

fn packaging() -> CodeDescription {
	CodeDescription::new(PACKAGING_TYPE_CODE, "Packaging")
}
