//! Host records to carrier documents.

// self
use crate::{
	fulfillment::{Address, LineItem, PackageMode},
	rating::{CarrierAddress, DEFAULT_SHIP_TO_NAME, Package, PackageDescription, ShipTo},
	units,
};

/// Carrier address for a host address.
///
/// Blank street lines are dropped and the country code is uppercased.
pub fn carrier_address(address: &Address) -> CarrierAddress {
	let lines = [&address.address_1, &address.address_2]
		.into_iter()
		.flatten()
		.filter(|line| !line.trim().is_empty())
		.cloned();

	CarrierAddress {
		address_line: lines.collect(),
		city: address.city.clone(),
		state_province_code: address.province.clone(),
		country_code: address.country_code.as_ref().map(|code| code.to_ascii_uppercase()),
		postal_code: address.postal_code.clone(),
	}
}

/// Recipient record for a host address.
pub fn ship_to(address: &Address) -> ShipTo {
	ShipTo::new(recipient_name(address), carrier_address(address))
}

/// `first last`, or the placeholder name when the address carries neither.
pub fn recipient_name(address: &Address) -> String {
	let name = [&address.first_name, &address.last_name]
		.into_iter()
		.flatten()
		.map(|part| part.trim())
		.filter(|part| !part.is_empty())
		.collect::<Vec<_>>()
		.join(" ");

	if name.is_empty() { DEFAULT_SHIP_TO_NAME.into() } else { name }
}

/// Per-item dimensional package; missing measurements count as zero.
pub fn item_package(item: &LineItem) -> Package {
	let variant = &item.variant;

	Package::dimensional(
		units::mm_to_inch(variant.length.unwrap_or_default()),
		units::mm_to_inch(variant.width.unwrap_or_default()),
		units::mm_to_inch(variant.height.unwrap_or_default()),
		units::g_to_lbs(variant.weight.unwrap_or_default()),
	)
}

/// Package description for a cart's items.
pub fn package_description(items: &[LineItem], mode: PackageMode) -> PackageDescription {
	match mode {
		PackageMode::PerItem => PackageDescription::Packages(items.iter().map(item_package).collect()),
		PackageMode::AggregateWeight => PackageDescription::Weight(units::aggregate_weight_lbs(
			items.iter().map(|item| item.variant.weight.unwrap_or_default()),
		)),
	}
}
