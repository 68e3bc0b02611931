//! OAuth bearer token as issued by the carrier token endpoint.

// self
use crate::{_prelude::*, auth::Secret, rating::wire};

/// Token body returned by the client-credentials grant.
///
/// The record mirrors the endpoint's JSON one-to-one (unknown fields are retained in
/// [`extra`](Self::extra)) and is replaced wholesale on every refresh. `issued_at` is epoch
/// milliseconds and `expires_in` is seconds; the carrier sends both as strings, but numbers
/// are accepted as well.
#[derive(Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthToken {
	/// Bearer credential; callers must avoid logging it.
	pub access_token: Secret,
	/// Token type label (`Bearer`).
	#[serde(default)]
	pub token_type: String,
	/// Issuance instant, epoch milliseconds.
	#[serde(deserialize_with = "wire::string_or_number")]
	pub issued_at: String,
	/// Lifetime in seconds.
	#[serde(deserialize_with = "wire::string_or_number")]
	pub expires_in: String,
	/// Carrier-side token status (`approved`).
	#[serde(default)]
	pub status: String,
	/// Client the token was issued to, when echoed back.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub client_id: Option<String>,
	/// Remaining response fields, kept verbatim.
	#[serde(flatten)]
	pub extra: Map<String, Value>,
}
impl AuthToken {
	/// Expiry instant in epoch milliseconds, or `None` when either timestamp is unreadable.
	pub fn expires_at_millis(&self) -> Option<i128> {
		let issued_at = self.issued_at.trim().parse::<i128>().ok()?;
		let expires_in = self.expires_in.trim().parse::<i128>().ok()?;

		issued_at.checked_add(expires_in.checked_mul(1_000)?)
	}

	/// Local freshness check: `issued_at + expires_in * 1000 > now`.
	///
	/// This does not guarantee the carrier still accepts the token.
	pub fn is_valid_at(&self, instant: OffsetDateTime) -> bool {
		self.expires_at_millis().is_some_and(|expires_at| expires_at > unix_millis(instant))
	}

	/// Freshness check against the current UTC clock.
	pub fn is_valid(&self) -> bool {
		self.is_valid_at(OffsetDateTime::now_utc())
	}

	/// `Authorization` header value for rating calls.
	pub fn bearer_authorization(&self) -> String {
		format!("Bearer {}", self.access_token.expose())
	}
}
impl Debug for AuthToken {
	fn fmt(&self, f: &mut Formatter) -> FmtResult {
		f.debug_struct("AuthToken")
			.field("access_token", &self.access_token)
			.field("token_type", &self.token_type)
			.field("issued_at", &self.issued_at)
			.field("expires_in", &self.expires_in)
			.field("status", &self.status)
			.field("client_id", &self.client_id)
			.finish_non_exhaustive()
	}
}

/// Milliseconds since the Unix epoch.
pub fn unix_millis(instant: OffsetDateTime) -> i128 {
	instant.unix_timestamp_nanos() / 1_000_000
}
