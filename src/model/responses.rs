/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Response decoding and status classification
//!
//! Classification is status-first: a 429 is a rate-limit error whatever the
//! body holds, and a 2xx is a success even when the body does not decode.

use crate::error::ApiError;
use crate::model::requests::Params;
use reqwest::StatusCode;
use serde_json::Value;
use tracing::{debug, error};

/// Status and body of a completed HTTP exchange
#[derive(Debug, Clone)]
pub struct RawResponse {
    /// HTTP status
    pub status: StatusCode,
    /// Body text, possibly empty
    pub body: String,
}

impl RawResponse {
    /// Creates a raw response
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// Decodes a body, absorbing failures as an empty mapping
#[must_use]
pub fn decode_body(body: &str) -> Value {
    if body.trim().is_empty() {
        return Value::Object(Params::new());
    }
    match serde_json::from_str::<Value>(body) {
        Ok(value) => value,
        Err(e) => {
            debug!("Response body is not JSON ({e}), treating as empty");
            Value::Object(Params::new())
        }
    }
}

/// Turns a raw response into the decoded payload or a typed error
///
/// # Returns
/// * `Ok(Value)` - decoded body for any 2xx, `{}` when empty or undecodable
/// * `Err(ApiError::RateLimit)` - for 429
/// * `Err(ApiError::Auth)` - for 401 and 403
/// * `Err(ApiError::Api)` - for any other non-2xx status
pub fn handle_response(response: RawResponse) -> Result<Value, ApiError> {
    let status = response.status;

    if status == StatusCode::TOO_MANY_REQUESTS {
        error!("Rate limit exceeded: {}", response.body);
        return Err(ApiError::RateLimit {
            status_code: status.as_u16(),
            response_text: response.body,
        });
    }

    let data = decode_body(&response.body);

    if status.is_success() {
        return Ok(data);
    }

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        error!("Unauthorized or forbidden ({}): {}", status, response.body);
        return Err(ApiError::Auth {
            message: "Unauthorized or forbidden".to_string(),
            status_code: Some(status.as_u16()),
            response_text: Some(response.body),
        });
    }

    error!("Request failed with status {}: {}", status, response.body);
    let payload = match data {
        Value::Object(map) => map,
        _ => Params::new(),
    };
    Err(ApiError::Api {
        status_code: status.as_u16(),
        response_text: response.body,
        payload,
    })
}
