//! Carrier endpoint descriptor.
//!
//! [`CarrierEndpoints`] holds the validated token and rating URLs. Endpoints must use HTTPS;
//! plain HTTP is tolerated only for loopback hosts so local mock servers keep working.

// crates.io
use url::Host;
// self
use crate::{_prelude::*, error::ConfigError};

/// Base URL of the production API.
pub const PRODUCTION_BASE_URL: &str = "https://onlinetools.ups.com";
/// Base URL of the customer integration environment.
pub const SANDBOX_BASE_URL: &str = "https://wwwcie.ups.com";
/// Path of the OAuth client-credentials endpoint.
pub const TOKEN_PATH: &str = "/security/v1/oauth/token";
/// Path of the Rating API endpoint.
pub const RATING_PATH: &str = "/api/rating/v2409/rate";

/// Carrier deployment targeted by the client.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CarrierEnvironment {
	#[default]
	/// Live rating.
	Production,
	/// Customer integration environment.
	Sandbox,
}
impl CarrierEnvironment {
	/// Base URL for the environment.
	pub const fn base_url(self) -> &'static str {
		match self {
			Self::Production => PRODUCTION_BASE_URL,
			Self::Sandbox => SANDBOX_BASE_URL,
		}
	}
}

/// Token + rating endpoint pair.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarrierEndpoints {
	/// OAuth token endpoint.
	pub token: Url,
	/// Rating endpoint.
	pub rating: Url,
}
impl CarrierEndpoints {
	/// Endpoints for one of the carrier's published environments.
	pub fn for_environment(environment: CarrierEnvironment) -> Result<Self> {
		Self::from_base(environment.base_url())
	}

	/// Joins the fixed endpoint paths onto `base`.
	pub fn from_base(base: &str) -> Result<Self> {
		let base = parse(base)?;

		ensure_secure("base", &base)?;

		let token =
			base.join(TOKEN_PATH).map_err(|source| ConfigError::InvalidEndpoint { source })?;
		let rating =
			base.join(RATING_PATH).map_err(|source| ConfigError::InvalidEndpoint { source })?;

		Ok(Self { token, rating })
	}

	/// Uses explicit endpoint URLs.
	pub fn new(token: Url, rating: Url) -> Result<Self> {
		ensure_secure("token", &token)?;
		ensure_secure("rating", &rating)?;

		Ok(Self { token, rating })
	}
}

fn parse(value: &str) -> Result<Url, ConfigError> {
	Url::parse(value).map_err(|source| ConfigError::InvalidEndpoint { source })
}

fn ensure_secure(endpoint: &'static str, url: &Url) -> Result<(), ConfigError> {
	let loopback = match url.host() {
		Some(Host::Domain(domain)) => domain.eq_ignore_ascii_case("localhost"),
		Some(Host::Ipv4(ip)) => ip.is_loopback(),
		Some(Host::Ipv6(ip)) => ip.is_loopback(),
		None => false,
	};

	match url.scheme() {
		"https" => Ok(()),
		"http" if loopback => Ok(()),
		_ => Err(ConfigError::InsecureEndpoint { endpoint, url: url.to_string() }),
	}
}
