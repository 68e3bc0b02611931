//! Unit conversions from the host's metric catalog to the carrier's imperial package fields.
//!
//! All results are two-decimal strings. Formatting matches the host's fixed-point output:
//! exact ties round away from zero and negative zero prints as `0.00`.

/// Inches per millimeter.
pub const INCHES_PER_MILLIMETER: f64 = 0.0393701;
/// Pounds per kilogram.
pub const POUNDS_PER_KILOGRAM: f64 = 2.2;

/// Millimeters to inches.
pub fn mm_to_inch(value: f64) -> String {
	to_fixed_2(value * INCHES_PER_MILLIMETER)
}

/// Grams to pounds.
pub fn g_to_lbs(value: f64) -> String {
	to_fixed_2((value / 1000.) * POUNDS_PER_KILOGRAM)
}

/// Sums kilogram weights and converts the total to pounds.
///
/// A zero (or NaN) total yields `None` rather than `"0.00"`, so an empty cart sends no weight.
pub fn aggregate_weight_lbs<I>(weights: I) -> Option<String>
where
	I: IntoIterator<Item = f64>,
{
	let total = weights.into_iter().sum::<f64>();

	if total == 0. || total.is_nan() {
		return None;
	}

	Some(to_fixed_2(total * POUNDS_PER_KILOGRAM))
}

/// Formats `value` with exactly two decimals.
pub fn to_fixed_2(value: f64) -> String {
	if value.is_nan() {
		return "NaN".into();
	}
	if value.is_infinite() {
		return if value.is_sign_positive() { "Infinity".into() } else { "-Infinity".into() };
	}
	if value == 0. {
		return "0.00".into();
	}

	let magnitude = value.abs();
	// A two-decimal tie is exactly representable only as an odd multiple of 1/8.
	let scaled = magnitude * 8.;
	let is_tie = scaled.fract() == 0. && scaled % 2. == 1.;
	let magnitude = if is_tie { f64::from_bits(magnitude.to_bits() + 1) } else { magnitude };
	let digits = format!("{magnitude:.2}");

	if value.is_sign_negative() { format!("-{digits}") } else { digits }
}
