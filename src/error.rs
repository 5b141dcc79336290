/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Error taxonomy for the Ahrefs client
//!
//! Every call made through the dispatcher either yields a decoded payload or
//! one of these variants. `Auth`, `RateLimit` and `Api` are the domain kinds
//! produced by the response classifier; `Connection` and `Timeout` come from
//! the transport once its retry budget is spent.

use crate::model::requests::Params;
use serde_json::{Value, json};
use std::fmt;

/// Main error type for the library
#[derive(Debug)]
pub enum ApiError {
    /// Missing credential at dispatch time, or HTTP 401/403
    Auth {
        /// Human-readable reason
        message: String,
        /// HTTP status when the error came from a response
        status_code: Option<u16>,
        /// Raw response body, when there was a response
        response_text: Option<String>,
    },
    /// Final HTTP 429 after transport retries were exhausted
    RateLimit {
        /// Always 429
        status_code: u16,
        /// Raw response body
        response_text: String,
    },
    /// Any other non-2xx status
    Api {
        /// HTTP status code
        status_code: u16,
        /// Raw response body
        response_text: String,
        /// Decoded body, or an empty mapping when it was not a JSON object
        payload: Params,
    },
    /// The connection could not be established
    Connection(String),
    /// The request timed out on every attempt
    Timeout(String),
    /// The request could not be built (bad method, bad URL, bad header)
    InvalidRequest(String),
}

impl ApiError {
    /// Builds the error raised when no credential is configured
    pub(crate) fn missing_credential() -> Self {
        ApiError::Auth {
            message: "API key missing. Set AHREFS_API_KEY or pass a credential".to_string(),
            status_code: None,
            response_text: None,
        }
    }

    /// HTTP status carried by the error, if any
    #[must_use]
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Auth { status_code, .. } => *status_code,
            ApiError::RateLimit { status_code, .. } | ApiError::Api { status_code, .. } => {
                Some(*status_code)
            }
            _ => None,
        }
    }

    /// Raw response text, if the error came from a response
    #[must_use]
    pub fn response_text(&self) -> Option<&str> {
        match self {
            ApiError::Auth { response_text, .. } => response_text.as_deref(),
            ApiError::RateLimit { response_text, .. } | ApiError::Api { response_text, .. } => {
                Some(response_text.as_str())
            }
            _ => None,
        }
    }

    /// Decoded payload of a generic API error
    #[must_use]
    pub fn payload(&self) -> Option<&Params> {
        match self {
            ApiError::Api { payload, .. } => Some(payload),
            _ => None,
        }
    }

    /// Stable machine-readable code for the error kind
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            ApiError::Auth { .. } => "ahrefs_auth_error",
            ApiError::RateLimit { .. } => "ahrefs_rate_limited",
            ApiError::Api { .. } => "ahrefs_api_error",
            ApiError::Connection(_) => "ahrefs_connection_error",
            ApiError::Timeout(_) => "ahrefs_timeout",
            ApiError::InvalidRequest(_) => "ahrefs_invalid_request",
        }
    }

    /// Status a facade should answer with when surfacing this error
    #[must_use]
    pub fn http_status(&self) -> u16 {
        match self {
            ApiError::Auth { status_code, .. } => status_code.unwrap_or(401),
            ApiError::RateLimit { .. } => 429,
            ApiError::Api { status_code, .. } if *status_code >= 400 => *status_code,
            ApiError::Api { .. } => 500,
            ApiError::Connection(_) => 502,
            ApiError::Timeout(_) => 504,
            ApiError::InvalidRequest(_) => 400,
        }
    }

    /// JSON body a facade can return for this error
    #[must_use]
    pub fn to_error_body(&self) -> Value {
        let details = match self {
            ApiError::Api { payload, .. } => Value::Object(payload.clone()),
            _ => Value::Null,
        };
        json!({
            "error": self.error_code(),
            "message": self.to_string(),
            "details": details,
        })
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Auth { message, .. } => write!(f, "unauthorized: {message}"),
            ApiError::RateLimit { status_code, .. } => {
                write!(f, "rate limit exceeded (HTTP {status_code})")
            }
            ApiError::Api { status_code, .. } => write!(f, "HTTP {status_code}"),
            ApiError::Connection(msg) => write!(f, "connection error: {msg}"),
            ApiError::Timeout(msg) => write!(f, "timeout: {msg}"),
            ApiError::InvalidRequest(msg) => write!(f, "invalid request: {msg}"),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            ApiError::Timeout(err.to_string())
        } else if err.is_builder() {
            ApiError::InvalidRequest(err.to_string())
        } else {
            ApiError::Connection(err.to_string())
        }
    }
}
