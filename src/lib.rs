//! UPS shipping rates for commerce hosts: an OAuth-aware Rating API client with a
//! single-flight token cache, plus a fail-soft fulfillment provider that quotes carts in
//! minor currency units.

#![deny(clippy::all, missing_docs, unused_crate_dependencies)]

pub mod auth;
pub mod carrier;
pub mod client;
pub mod error;
pub mod fulfillment;
pub mod http;
pub mod obs;
pub mod rating;
pub mod units;

mod _prelude {
	pub use std::{
		fmt::{Debug, Display, Formatter, Result as FmtResult},
		future::Future,
		pin::Pin,
		sync::Arc,
	};

	pub use async_lock::Mutex as AsyncMutex;
	pub use parking_lot::RwLock;
	pub use reqwest::{Client as ReqwestClient, Error as ReqwestError};
	pub use serde::{Deserialize, Serialize};
	pub use serde_json::{Map, Value};
	pub use thiserror::Error as ThisError;
	pub use time::OffsetDateTime;
	pub use url::Url;

	pub use crate::error::{Error, Result};
}

pub use reqwest;
pub use url;
#[cfg(test)] use {color_eyre as _, httpmock as _};
