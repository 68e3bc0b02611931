//! Transport primitives for carrier calls.
//!
//! [`ReqwestHttpClient`] is the only dependency the rating client has on an HTTP stack.
//! Every call resolves to a [`CarrierResponse`] that keeps the status and the raw body, so
//! failures can surface the carrier's own error payload instead of a bare status code.

// std
use std::ops::Deref;
// crates.io
use reqwest::{RequestBuilder, redirect::Policy};
use serde::de::DeserializeOwned;
// self
use crate::{
	_prelude::*,
	error::{CarrierError, ConfigError, TransportError},
};

/// Thin wrapper around [`ReqwestClient`] so shared HTTP behavior lives in one place.
///
/// Carrier endpoints answer directly, so the default client never follows redirects.
/// Callers supplying their own [`ReqwestClient`] should configure it the same way.
#[derive(Clone, Debug)]
pub struct ReqwestHttpClient(pub ReqwestClient);
impl ReqwestHttpClient {
	/// Builds a client with redirects disabled.
	pub fn new() -> Result<Self> {
		let client =
			ReqwestClient::builder().redirect(Policy::none()).build().map_err(ConfigError::from)?;

		Ok(Self(client))
	}

	/// Wraps an existing reqwest [`ReqwestClient`].
	pub fn with_client(client: ReqwestClient) -> Self {
		Self(client)
	}

	/// Dispatches a prepared request and captures status + body.
	pub async fn send(&self, request: RequestBuilder) -> Result<CarrierResponse> {
		let response = request.send().await.map_err(TransportError::from)?;
		let status = response.status().as_u16();
		let body = response.text().await.map_err(TransportError::from)?;

		Ok(CarrierResponse { status, body })
	}
}
impl Deref for ReqwestHttpClient {
	type Target = ReqwestClient;

	fn deref(&self) -> &Self::Target {
		&self.0
	}
}

/// Status and body captured from a carrier response.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CarrierResponse {
	/// HTTP status code.
	pub status: u16,
	/// Raw response body.
	pub body: String,
}
impl CarrierResponse {
	/// Returns `true` for 2xx statuses.
	pub fn is_success(&self) -> bool {
		(200..300).contains(&self.status)
	}

	/// Converts non-2xx responses into [`CarrierError::Rejected`].
	pub fn error_for_status(self, endpoint: &'static str) -> Result<Self, CarrierError> {
		if self.is_success() {
			Ok(self)
		} else {
			Err(CarrierError::Rejected { endpoint, status: self.status, body: self.body })
		}
	}

	/// Parses the body as JSON, reporting the failing path on mismatch.
	pub fn json<T>(&self, endpoint: &'static str) -> Result<T, CarrierError>
	where
		T: DeserializeOwned,
	{
		let mut de = serde_json::Deserializer::from_str(&self.body);

		serde_path_to_error::deserialize(&mut de).map_err(|source| {
			CarrierError::MalformedResponse {
				endpoint,
				status: self.status,
				body: self.body.clone(),
				source,
			}
		})
	}
}

#[cfg(test)]
mod tests {
	// self
	use super::*;

	#[test]
	fn non_success_statuses_keep_the_body() {
		let response = CarrierResponse { status: 401, body: "{\"error\":\"denied\"}".into() };
		let err = response
			.error_for_status("rating")
			.expect_err("A 401 response should be rejected.");

		assert!(matches!(err, CarrierError::Rejected { status: 401, .. }));
		assert_eq!(err.body(), "{\"error\":\"denied\"}");
	}

	#[test]
	fn malformed_json_reports_status_and_path() {
		#[derive(Debug, Deserialize)]
		#[allow(dead_code)]
		struct Payload {
			value: u32,
		}

		let response = CarrierResponse { status: 200, body: "{\"value\":\"nope\"}".into() };
		let err = response
			.json::<Payload>("token")
			.expect_err("String value should not parse as an integer.");

		match err {
			CarrierError::MalformedResponse { endpoint, status, source, .. } => {
				assert_eq!(endpoint, "token");
				assert_eq!(status, 200);
				assert_eq!(source.path().to_string(), "value");
			},
			other => panic!("Unexpected error: {other:?}."),
		}
	}
}
