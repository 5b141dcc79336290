//! # Ahrefs Client
//!
//! Async client for the Ahrefs REST API. Every operation flows through one
//! dispatch path that rate limits, injects the credential, retries
//! transient transport failures and maps HTTP statuses onto [`ApiError`].
//!
//! ## Layout
//!
//! - [`client`]: the dispatcher ([`Client`])
//! - [`application`]: configuration, auth strategy, rate limiter, category services
//! - [`model`]: request/response values, retry policy, HTTP transport
//! - [`error`]: the error taxonomy
//! - [`utils`]: environment helpers and logger setup
//!
//! ## Example
//!
//! ```ignore
//! use ahrefs_client::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), ApiError> {
//!     setup_logger();
//!     let client = Client::new(ClientConfig::from_env())?;
//!     let rating = client.get_domain_rating("ahrefs.com", Params::new()).await?;
//!     println!("{rating}");
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

/// Configuration, auth, rate limiting and category services
pub mod application;
/// Request dispatcher
pub mod client;
/// Default values and fixed protocol constants
pub mod constants;
/// Error taxonomy
pub mod error;
/// Request, response and transport models
pub mod model;
/// Commonly used re-exports
pub mod prelude;
/// Utility helpers
pub mod utils;

pub use client::Client;
pub use error::ApiError;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Returns the library version
#[must_use]
pub fn version() -> &'static str {
    VERSION
}
