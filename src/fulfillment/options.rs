//! Plugin options supplied by the host.
//!
//! Options arrive as untyped JSON. Parsing goes through `serde_path_to_error` so a bad value
//! is reported with the key path that produced it, and [`PluginOptions::validate`] enforces
//! the credentials the token grant cannot work without.

// self
use crate::{
	_prelude::*,
	auth::{Credentials, Secret},
	carrier::{CarrierEndpoints, CarrierEnvironment},
	client::RateClient,
	error::ConfigError,
	fulfillment::{Address, translate},
	rating::{CarrierAddress, DEFAULT_SHIPPER_NAME, wire},
};

/// How cart items are described to the carrier.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PackageMode {
	#[default]
	/// One dimensional package per line item.
	PerItem,
	/// One package carrying the summed cart weight.
	AggregateWeight,
}

/// Provider configuration.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct PluginOptions {
	/// OAuth client identifier.
	#[serde(default)]
	pub client_id: Option<String>,
	/// OAuth client secret.
	#[serde(default)]
	pub client_secret: Option<Secret>,
	/// Shipper account billed for rated shipments.
	#[serde(default, deserialize_with = "wire::string_or_number")]
	pub account_number: String,
	/// Origin address.
	#[serde(default)]
	pub ship_from: Option<Address>,
	/// Carrier deployment.
	#[serde(default)]
	pub environment: CarrierEnvironment,
	/// Overrides the environment's base URL.
	#[serde(default)]
	pub base_url: Option<String>,
	/// Package description strategy.
	#[serde(default)]
	pub package_mode: PackageMode,
	/// Shipper name sent with every request.
	#[serde(default)]
	pub shipper_name: Option<String>,
}
impl PluginOptions {
	/// Parses and validates options from a JSON value.
	pub fn from_value(value: Value) -> Result<Self> {
		let options: Self = serde_path_to_error::deserialize(value)
			.map_err(|source| ConfigError::InvalidOptions { source })?;

		options.validate()?;

		Ok(options)
	}

	/// Parses and validates options from JSON text.
	pub fn from_json(json: &str) -> Result<Self> {
		let mut de = serde_json::Deserializer::from_str(json);
		let options: Self = serde_path_to_error::deserialize(&mut de)
			.map_err(|source| ConfigError::InvalidOptions { source })?;

		options.validate()?;

		Ok(options)
	}

	/// Ensures the client id and secret are present and non-blank.
	pub fn validate(&self) -> Result<()> {
		self.credentials().map(drop)
	}

	/// Credentials for the token grant.
	pub fn credentials(&self) -> Result<Credentials> {
		let client_id = self
			.client_id
			.as_deref()
			.filter(|id| !id.trim().is_empty())
			.ok_or(ConfigError::MissingCredential { field: "client_id" })?;
		let client_secret = self
			.client_secret
			.as_ref()
			.filter(|secret| !secret.is_blank())
			.ok_or(ConfigError::MissingCredential { field: "client_secret" })?;

		Ok(Credentials::new(client_id, client_secret.clone(), self.account_number.clone()))
	}

	/// Endpoints for the configured base URL or environment.
	pub fn endpoints(&self) -> Result<CarrierEndpoints> {
		match &self.base_url {
			Some(base) => CarrierEndpoints::from_base(base),
			None => CarrierEndpoints::for_environment(self.environment),
		}
	}

	/// Origin address in carrier form; empty when none is configured.
	pub fn ship_from_address(&self) -> CarrierAddress {
		self.ship_from.as_ref().map(translate::carrier_address).unwrap_or_default()
	}

	/// Builds a rate client from these options.
	pub fn build_rate_client(&self) -> Result<RateClient> {
		let credentials = self.credentials()?;
		let endpoints = self.endpoints()?;
		let shipper_name = self.shipper_name.as_deref().unwrap_or(DEFAULT_SHIPPER_NAME);

		Ok(RateClient::new(credentials, self.ship_from_address(), endpoints)?
			.with_shipper_name(shipper_name))
	}
}
