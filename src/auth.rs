//! Carrier credentials, redacted secrets, and the cached OAuth bearer token.

pub mod credentials;
pub mod secret;
pub mod token;

pub use credentials::*;
pub use secret::*;
pub use token::*;
