use crate::constants::{
    DEFAULT_API_KEY_HEADER, DEFAULT_API_KEY_PREFIX, DEFAULT_API_KEY_QUERY_PARAM,
    DEFAULT_BACKOFF_FACTOR, DEFAULT_BASE_URL, DEFAULT_MAX_RETRIES, DEFAULT_RATE_LIMIT_PER_MIN,
    DEFAULT_RATE_LIMIT_PERIOD_SECS, DEFAULT_TIMEOUT_SECS,
};
use crate::model::retry::RetryConfig;
use crate::utils::config::{get_env_flag, get_env_or_default, get_env_or_none};
use dotenv::dotenv;
use pretty_simple_display::{DebugPretty, DisplaySimple};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::time::Duration;
use tracing::{debug, warn};

/// Where the credential travels on outgoing requests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AuthMode {
    /// `{header_name}: {prefix}{credential}`
    #[default]
    Header,
    /// `?{query_param_name}={credential}`
    #[serde(rename = "query")]
    QueryParam,
}

impl FromStr for AuthMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "header" | "1" | "true" => Ok(AuthMode::Header),
            "query" | "query_param" | "0" | "false" => Ok(AuthMode::QueryParam),
            other => Err(format!("unknown auth mode: {other}")),
        }
    }
}

impl From<bool> for AuthMode {
    /// `true` selects header auth, `false` the query parameter
    fn from(in_header: bool) -> Self {
        if in_header {
            AuthMode::Header
        } else {
            AuthMode::QueryParam
        }
    }
}

impl fmt::Display for AuthMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthMode::Header => write!(f, "header"),
            AuthMode::QueryParam => write!(f, "query"),
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Configuration for rate limiting API requests
pub struct RateLimiterConfig {
    /// Maximum number of requests allowed per period; values below 1 are clamped to 1
    pub max_requests: i64,
    /// Time period in seconds over which `max_requests` tokens refill
    pub period_seconds: u64,
}

impl Default for RateLimiterConfig {
    fn default() -> Self {
        Self {
            max_requests: DEFAULT_RATE_LIMIT_PER_MIN,
            period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECS,
        }
    }
}

#[derive(DebugPretty, DisplaySimple, Serialize, Deserialize, Clone)]
/// Immutable configuration for one Ahrefs client instance
///
/// The credential is optional so a client can be built before it is known;
/// its absence is reported as an auth error on the first call. It is never
/// serialized, so neither `Debug` nor `Display` output leaks it.
pub struct ClientConfig {
    /// API key
    #[serde(skip_serializing, default)]
    pub credential: Option<String>,
    /// Base URL of the REST API, without trailing slash
    pub base_url: String,
    /// Per-attempt timeout in seconds
    pub timeout_secs: u64,
    /// Rate limiter configuration
    pub rate_limiter: RateLimiterConfig,
    /// Header or query parameter auth
    pub auth_mode: AuthMode,
    /// Header name used in header mode
    pub api_key_header: String,
    /// Prefix placed before the credential in header mode (may be empty)
    pub api_key_prefix: String,
    /// Query parameter name used in query mode
    pub api_key_query_param: String,
    /// Transport retry budget
    pub max_retries: u32,
    /// Exponential backoff factor in seconds
    pub backoff_factor: f64,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            credential: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            rate_limiter: RateLimiterConfig::default(),
            auth_mode: AuthMode::Header,
            api_key_header: DEFAULT_API_KEY_HEADER.to_string(),
            api_key_prefix: DEFAULT_API_KEY_PREFIX.to_string(),
            api_key_query_param: DEFAULT_API_KEY_QUERY_PARAM.to_string(),
            max_retries: DEFAULT_MAX_RETRIES,
            backoff_factor: DEFAULT_BACKOFF_FACTOR,
        }
    }
}

impl ClientConfig {
    /// Creates a configuration with every option at its default
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a configuration from `AHREFS_*` environment variables
    ///
    /// Loads a `.env` file first when present. Unset or unparsable variables
    /// fall back to the defaults.
    pub fn from_env() -> Self {
        match dotenv() {
            Ok(_) => debug!("Successfully loaded .env file"),
            Err(e) => debug!("Failed to load .env file: {e}"),
        }

        let credential: Option<String> =
            get_env_or_none::<String>("AHREFS_API_KEY").filter(|key| !key.is_empty());
        if credential.is_none() {
            warn!("AHREFS_API_KEY not found in environment variables or .env file");
        }

        Self {
            credential,
            base_url: get_env_or_default("AHREFS_BASE_URL", DEFAULT_BASE_URL.to_string()),
            timeout_secs: get_env_or_default("AHREFS_TIMEOUT_S", DEFAULT_TIMEOUT_SECS),
            rate_limiter: RateLimiterConfig {
                max_requests: get_env_or_default(
                    "AHREFS_RATE_LIMIT_PER_MIN",
                    DEFAULT_RATE_LIMIT_PER_MIN,
                ),
                period_seconds: DEFAULT_RATE_LIMIT_PERIOD_SECS,
            },
            auth_mode: get_env_flag("AHREFS_AUTH_IN_HEADER")
                .map(AuthMode::from)
                .unwrap_or_default(),
            api_key_header: get_env_or_default(
                "AHREFS_API_KEY_HEADER",
                DEFAULT_API_KEY_HEADER.to_string(),
            ),
            api_key_prefix: get_env_or_default(
                "AHREFS_API_KEY_PREFIX",
                DEFAULT_API_KEY_PREFIX.to_string(),
            ),
            api_key_query_param: get_env_or_default(
                "AHREFS_API_KEY_QUERY_PARAM",
                DEFAULT_API_KEY_QUERY_PARAM.to_string(),
            ),
            max_retries: get_env_or_default("AHREFS_MAX_RETRIES", DEFAULT_MAX_RETRIES),
            backoff_factor: get_env_or_default("AHREFS_BACKOFF_FACTOR", DEFAULT_BACKOFF_FACTOR),
        }
    }

    /// Sets the credential
    #[must_use]
    pub fn with_credential(mut self, credential: impl Into<String>) -> Self {
        self.credential = Some(credential.into());
        self
    }

    /// Sets the base URL
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Sets the per-attempt timeout in seconds
    #[must_use]
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// Sets the number of calls admitted per minute
    #[must_use]
    pub fn with_rate_limit_per_min(mut self, max_requests: i64) -> Self {
        self.rate_limiter.max_requests = max_requests;
        self
    }

    /// Sets the full rate limiter configuration
    #[must_use]
    pub fn with_rate_limiter(mut self, rate_limiter: RateLimiterConfig) -> Self {
        self.rate_limiter = rate_limiter;
        self
    }

    /// Switches to header auth with the given header name and value prefix
    #[must_use]
    pub fn with_header_auth(
        mut self,
        header: impl Into<String>,
        prefix: impl Into<String>,
    ) -> Self {
        self.auth_mode = AuthMode::Header;
        self.api_key_header = header.into();
        self.api_key_prefix = prefix.into();
        self
    }

    /// Switches to query parameter auth with the given parameter name
    #[must_use]
    pub fn with_query_auth(mut self, param: impl Into<String>) -> Self {
        self.auth_mode = AuthMode::QueryParam;
        self.api_key_query_param = param.into();
        self
    }

    /// Sets the retry budget and backoff factor
    #[must_use]
    pub fn with_retry(mut self, max_retries: u32, backoff_factor: f64) -> Self {
        self.max_retries = max_retries;
        self.backoff_factor = backoff_factor;
        self
    }

    /// Base URL with any trailing slash removed
    #[must_use]
    pub fn normalized_base_url(&self) -> &str {
        self.base_url.trim_end_matches('/')
    }

    /// Per-attempt timeout
    #[must_use]
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// Retry policy derived from this configuration
    #[must_use]
    pub fn retry_config(&self) -> RetryConfig {
        RetryConfig::new(self.max_retries, self.backoff_factor)
    }
}
