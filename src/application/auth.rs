/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Credential injection
//!
//! The dispatcher asks for an [`AuthInjection`] and applies it without
//! knowing which mode is configured. The credential is checked on every
//! call, not at construction, so a client may exist before its key does.

use crate::application::config::{AuthMode, ClientConfig};
use crate::error::ApiError;
use reqwest::header::{HeaderName, HeaderValue};

/// How the credential is attached to one outgoing request
#[derive(Clone, PartialEq, Eq)]
pub enum AuthInjection {
    /// Set `name: value` on the request
    Header {
        /// Header name
        name: String,
        /// Full header value including any prefix
        value: String,
    },
    /// Add `name=value` to the query string
    Query {
        /// Query parameter name
        name: String,
        /// The credential
        value: String,
    },
}

impl AuthInjection {
    /// Computes the injection for the configured auth mode
    ///
    /// # Returns
    /// * `Ok(AuthInjection)` - exactly one header or one query parameter
    /// * `Err(ApiError::Auth)` - if no credential is configured
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let credential = config
            .credential
            .as_deref()
            .filter(|key| !key.is_empty())
            .ok_or_else(ApiError::missing_credential)?;

        Ok(match config.auth_mode {
            AuthMode::Header => AuthInjection::Header {
                name: config.api_key_header.clone(),
                value: format!("{}{}", config.api_key_prefix, credential),
            },
            AuthMode::QueryParam => AuthInjection::Query {
                name: config.api_key_query_param.clone(),
                value: credential.to_string(),
            },
        })
    }

    /// Header pair ready for `reqwest`, if this is a header injection
    pub(crate) fn header(&self) -> Result<Option<(HeaderName, HeaderValue)>, ApiError> {
        match self {
            AuthInjection::Header { name, value } => {
                let name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                    ApiError::Auth {
                        message: format!("invalid auth header name: {e}"),
                        status_code: None,
                        response_text: None,
                    }
                })?;
                let mut value = HeaderValue::from_str(value).map_err(|e| ApiError::Auth {
                    message: format!("invalid auth header value: {e}"),
                    status_code: None,
                    response_text: None,
                })?;
                value.set_sensitive(true);
                Ok(Some((name, value)))
            }
            AuthInjection::Query { .. } => Ok(None),
        }
    }
}

impl std::fmt::Debug for AuthInjection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AuthInjection::Header { name, .. } => f
                .debug_struct("Header")
                .field("name", name)
                .field("value", &"<redacted>")
                .finish(),
            AuthInjection::Query { name, .. } => f
                .debug_struct("Query")
                .field("name", name)
                .field("value", &"<redacted>")
                .finish(),
        }
    }
}
