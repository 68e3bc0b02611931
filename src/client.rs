//! Rating API client with a cached, single-flight OAuth token.
//!
//! [`RateClient`] owns the carrier credentials, the ship-from address, and the bearer token
//! issued by the client-credentials grant. Every [`RateClient::get_rates`] call first runs
//! [`RateClient::refresh_token`], which is a local expiry check unless the cached token is
//! missing or stale. Refreshes are serialized per client so concurrent callers holding an
//! expired token hit the token endpoint once.

// crates.io
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
// self
use crate::{
	_prelude::*,
	auth::{AuthToken, Credentials},
	carrier::CarrierEndpoints,
	error::ConfigError,
	http::ReqwestHttpClient,
	obs::{self, CallKind, CallOutcome, CallSpan},
	rating::{
		CarrierAddress, DEFAULT_SHIPPER_NAME, PackageDescription, RateRequest,
		RateResponseEnvelope, ShipTo, Shipper,
	},
};

/// Boxed future returned by [`RateQuoter::get_rates`].
pub type RateFuture<'a> = Pin<Box<dyn Future<Output = Result<f64>> + 'a + Send>>;

/// Anything able to price a shipment in major currency units.
///
/// The fulfillment adapter depends on this seam rather than on [`RateClient`] directly so
/// hosts and tests can substitute their own quoting backend.
pub trait RateQuoter: Send + Sync {
	/// Quotes `packages` shipped to `ship_to`.
	fn get_rates<'a>(
		&'a self,
		ship_to: &'a ShipTo,
		packages: &'a PackageDescription,
	) -> RateFuture<'a>;
}

/// Authenticated client for the carrier's Rating API.
pub struct RateClient {
	http_client: ReqwestHttpClient,
	endpoints: CarrierEndpoints,
	credentials: Credentials,
	shipper_name: String,
	ship_from: CarrierAddress,
	token: RwLock<Option<AuthToken>>,
	refresh_guard: AsyncMutex<()>,
}
impl RateClient {
	/// Creates a client backed by its own redirect-free reqwest transport.
	pub fn new(
		credentials: Credentials,
		ship_from: CarrierAddress,
		endpoints: CarrierEndpoints,
	) -> Result<Self> {
		Ok(Self::with_http_client(credentials, ship_from, endpoints, ReqwestHttpClient::new()?))
	}

	/// Creates a client that reuses the caller-provided transport.
	pub fn with_http_client(
		credentials: Credentials,
		ship_from: CarrierAddress,
		endpoints: CarrierEndpoints,
		http_client: ReqwestHttpClient,
	) -> Self {
		Self {
			http_client,
			endpoints,
			credentials,
			shipper_name: DEFAULT_SHIPPER_NAME.into(),
			ship_from,
			token: RwLock::new(None),
			refresh_guard: AsyncMutex::new(()),
		}
	}

	/// Overrides the shipper name sent with every request.
	pub fn with_shipper_name(mut self, name: impl Into<String>) -> Self {
		self.shipper_name = name.into();

		self
	}

	/// Snapshot of the cached token, fresh or not.
	pub fn cached_token(&self) -> Option<AuthToken> {
		self.token.read().clone()
	}

	/// Credentials used for the token grant and billing.
	pub fn credentials(&self) -> &Credentials {
		&self.credentials
	}

	/// Origin address of every rated shipment.
	pub fn ship_from(&self) -> &CarrierAddress {
		&self.ship_from
	}

	/// Token + rating endpoints.
	pub fn endpoints(&self) -> &CarrierEndpoints {
		&self.endpoints
	}

	/// Ensures a fresh token is cached.
	///
	/// Returns without a network call while the cached token is valid. Otherwise requests a
	/// new token and replaces the cached one wholesale. Failures are logged and the previous
	/// token is kept; a later rating call surfaces the problem.
	pub async fn refresh_token(&self) {
		const KIND: CallKind = CallKind::TokenRefresh;

		if self.has_fresh_token() {
			tracing::debug!("Reusing cached carrier token.");

			return;
		}

		let span = CallSpan::new(KIND, "refresh_token");

		span.instrument(async move {
			let _singleflight = self.refresh_guard.lock().await;

			// Another caller may have refreshed while this one waited.
			if self.has_fresh_token() {
				tracing::debug!("Carrier token refreshed by a concurrent caller.");

				return;
			}

			obs::record_call_outcome(KIND, CallOutcome::Attempt);

			match self.request_token().await {
				Ok(token) => {
					tracing::debug!(expires_in = %token.expires_in, "Replaced cached carrier token.");

					*self.token.write() = Some(token);

					obs::record_call_outcome(KIND, CallOutcome::Success);
				},
				Err(e) => {
					tracing::error!(
						error = %e,
						body = e.carrier_body().unwrap_or_default(),
						"Carrier token refresh failed."
					);

					obs::record_call_outcome(KIND, CallOutcome::Failure);
				},
			}
		})
		.await
	}

	/// Quotes `packages` shipped to `ship_to`, returning the total charge in major units.
	pub async fn get_rates(&self, ship_to: &ShipTo, packages: &PackageDescription) -> Result<f64> {
		const KIND: CallKind = CallKind::Rating;

		self.refresh_token().await;

		let span = CallSpan::new(KIND, "get_rates");

		obs::record_call_outcome(KIND, CallOutcome::Attempt);

		let result = span
			.instrument(async move {
				let token = self.cached_token().ok_or(Error::MissingToken)?;
				let envelope = self.build_rate_request(ship_to, packages).into_envelope();
				let body = serde_json::to_vec(&envelope).map_err(ConfigError::from)?;
				let request = self
					.http_client
					.post(self.endpoints.rating.clone())
					.header(AUTHORIZATION, token.bearer_authorization())
					.header(CONTENT_TYPE, "application/json")
					.body(body);
				let response = self.http_client.send(request).await?.error_for_status("rating")?;
				let rated = response.json::<RateResponseEnvelope>("rating")?;

				Ok(rated.rate_response.total_charge(&response.body)?)
			})
			.await;

		match &result {
			Ok(_) => obs::record_call_outcome(KIND, CallOutcome::Success),
			Err(_) => obs::record_call_outcome(KIND, CallOutcome::Failure),
		}

		result
	}

	/// Builds the rate request billed to this client's account.
	pub fn build_rate_request(&self, ship_to: &ShipTo, packages: &PackageDescription) -> RateRequest {
		let shipper = Shipper::new(
			self.shipper_name.clone(),
			self.credentials.account_number.clone(),
			self.ship_from.clone(),
		);

		RateRequest::new(shipper, ship_to.clone(), packages.clone())
	}

	fn has_fresh_token(&self) -> bool {
		self.token.read().as_ref().is_some_and(AuthToken::is_valid)
	}

	async fn request_token(&self) -> Result<AuthToken> {
		let request = self
			.http_client
			.post(self.endpoints.token.clone())
			.header(AUTHORIZATION, self.credentials.basic_authorization())
			.form(&[("grant_type", "client_credentials")]);
		let response = self.http_client.send(request).await?.error_for_status("token")?;

		Ok(response.json("token")?)
	}
}
impl RateQuoter for RateClient {
	fn get_rates<'a>(
		&'a self,
		ship_to: &'a ShipTo,
		packages: &'a PackageDescription,
	) -> RateFuture<'a> {
		Box::pin(RateClient::get_rates(self, ship_to, packages))
	}
}
impl Debug for RateClient {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("RateClient")
			.field("endpoints", &self.endpoints)
			.field("credentials", &self.credentials)
			.field("shipper_name", &self.shipper_name)
			.field("token_cached", &self.token.read().is_some())
			.finish()
	}
}
