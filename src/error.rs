//! Error types shared by the rating client, the carrier transport, and plugin configuration.

// self
use crate::_prelude::*;

/// Crate-wide result type alias returning [`Error`] by default.
pub type Result<T, E = Error> = std::result::Result<T, E>;

type BoxError = Box<dyn std::error::Error + Send + Sync>;
type JsonPathError = serde_path_to_error::Error<serde_json::Error>;

/// Canonical error exposed by public APIs.
#[derive(Debug, ThisError)]
pub enum Error {
	/// Local configuration problem.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Transport failure (DNS, TCP, TLS).
	#[error(transparent)]
	Transport(#[from] TransportError),
	/// The carrier answered, but not with something usable.
	#[error(transparent)]
	Carrier(#[from] CarrierError),

	/// No bearer token has been issued yet, so the rating call cannot be authorized.
	#[error("No carrier access token is cached; the token endpoint has not issued one.")]
	MissingToken,
}
impl Error {
	/// Returns the carrier's raw response body, when the failure carried one.
	pub fn carrier_body(&self) -> Option<&str> {
		match self {
			Self::Carrier(e) => Some(e.body()),
			_ => None,
		}
	}
}

/// Configuration and validation failures.
#[derive(Debug, ThisError)]
pub enum ConfigError {
	/// HTTP client could not be constructed.
	#[error("HTTP client could not be constructed.")]
	HttpClientBuild {
		/// Underlying transport builder failure.
		#[source]
		source: BoxError,
	},
	/// An endpoint or base URL cannot be parsed.
	#[error("Carrier endpoint URL is invalid.")]
	InvalidEndpoint {
		/// Underlying parsing failure.
		#[source]
		source: url::ParseError,
	},
	/// An endpoint uses plain HTTP against a non-loopback host.
	#[error("Carrier {endpoint} endpoint `{url}` must use HTTPS.")]
	InsecureEndpoint {
		/// Endpoint label.
		endpoint: &'static str,
		/// Offending URL.
		url: String,
	},
	/// Plugin options do not match the expected shape.
	#[error("Plugin options are invalid at `{}`.", .source.path())]
	InvalidOptions {
		/// Structured parsing failure carrying the offending key path.
		#[source]
		source: JsonPathError,
	},
	/// A required credential is missing or blank.
	#[error("Plugin option `{field}` is required.")]
	MissingCredential {
		/// Option key.
		field: &'static str,
	},
	/// Rate request could not be encoded as JSON.
	#[error("Rate request could not be encoded.")]
	RequestEncode(#[from] serde_json::Error),
}
impl ConfigError {
	/// Wraps a transport's builder failure inside [`ConfigError`].
	pub fn http_client_build(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::HttpClientBuild { source: Box::new(src) }
	}
}
impl From<ReqwestError> for ConfigError {
	fn from(e: ReqwestError) -> Self {
		Self::http_client_build(e)
	}
}

/// Transport-level failures (network, IO).
#[derive(Debug, ThisError)]
pub enum TransportError {
	/// Underlying HTTP client reported a network failure.
	#[error("Network error occurred while calling the carrier.")]
	Network {
		/// Transport-specific network error.
		#[source]
		source: BoxError,
	},
}
impl TransportError {
	/// Wraps a transport-specific network error.
	pub fn network(src: impl 'static + Send + Sync + std::error::Error) -> Self {
		Self::Network { source: Box::new(src) }
	}
}
impl From<ReqwestError> for TransportError {
	fn from(e: ReqwestError) -> Self {
		Self::network(e)
	}
}

/// Failures reported by (or parsed from) a carrier response.
#[derive(Debug, ThisError)]
pub enum CarrierError {
	/// Carrier returned a non-2xx status.
	#[error("Carrier {endpoint} endpoint rejected the request with HTTP {status}.")]
	Rejected {
		/// Endpoint label.
		endpoint: &'static str,
		/// HTTP status code.
		status: u16,
		/// Raw response body.
		body: String,
	},
	/// Response body is not the expected JSON document.
	#[error("Carrier {endpoint} endpoint returned malformed JSON.")]
	MalformedResponse {
		/// Endpoint label.
		endpoint: &'static str,
		/// HTTP status code.
		status: u16,
		/// Raw response body.
		body: String,
		/// Structured parsing failure.
		#[source]
		source: JsonPathError,
	},
	/// Rate response did not contain any rated shipment.
	#[error("Rate response contains no rated shipment.")]
	MissingRatedShipment {
		/// Raw response body.
		body: String,
	},
	/// Total charge cannot be read as a non-negative amount.
	#[error("Rate response total charge `{value}` is not a valid amount.")]
	InvalidMonetaryValue {
		/// Monetary value as sent by the carrier.
		value: String,
		/// Raw response body.
		body: String,
	},
}
impl CarrierError {
	/// Raw carrier response body attached to the failure.
	pub fn body(&self) -> &str {
		match self {
			Self::Rejected { body, .. }
			| Self::MalformedResponse { body, .. }
			| Self::MissingRatedShipment { body }
			| Self::InvalidMonetaryValue { body, .. } => body,
		}
	}
}
