/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! # Ahrefs Client Prelude
//!
//! ```rust
//! use ahrefs_client::prelude::*;
//!
//! let config = ClientConfig::new().with_credential("key");
//! let client = Client::new(config);
//! assert!(client.is_ok());
//! ```

// ============================================================================
// CORE CONFIGURATION AND SETUP
// ============================================================================

pub use crate::application::config::{AuthMode, ClientConfig, RateLimiterConfig};
pub use crate::{VERSION, version};

// ============================================================================
// ERROR HANDLING
// ============================================================================

pub use crate::error::ApiError;

// ============================================================================
// DISPATCH
// ============================================================================

pub use crate::application::auth::AuthInjection;
pub use crate::application::rate_limiter::RateLimiter;
pub use crate::client::Client;
pub use crate::model::category::Category;
pub use crate::model::requests::{BatchRequest, Params, RequestSpec};
pub use crate::model::retry::RetryConfig;

// ============================================================================
// CATEGORY SERVICES (TRAITS)
// ============================================================================

pub use crate::application::services::{ExplorerService, ManagementService};

// ============================================================================
// UTILITIES
// ============================================================================

pub use crate::utils::logger::setup_logger;

// ============================================================================
// EXTERNAL DEPENDENCIES
// ============================================================================

pub use async_trait::async_trait;
pub use reqwest::Method;
pub use serde_json::{Value, json};
