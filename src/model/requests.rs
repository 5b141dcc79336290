/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/
use crate::constants::PATH_OVERRIDE_KEY;
use crate::error::ApiError;
use reqwest::Method;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Loosely-typed parameter or payload mapping
pub type Params = Map<String, Value>;

/// One outgoing call, built by an operation and consumed by the dispatcher
#[derive(Debug, Clone)]
pub struct RequestSpec {
    /// HTTP method
    pub method: Method,
    /// Path relative to the base URL, e.g. `/site-explorer/domain-rating`
    pub path: String,
    /// Query parameters supplied by the caller
    pub query: Params,
    /// Optional JSON body
    pub body: Option<Value>,
}

impl RequestSpec {
    /// Creates a request with no parameters and no body
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Params::new(),
            body: None,
        }
    }

    /// GET request for `path`
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// POST request for `path`
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// PUT request for `path`
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Set the query parameters
    pub fn with_query(mut self, query: Params) -> Self {
        self.query = query;
        self
    }

    /// Set the JSON body
    pub fn with_body(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }
}

/// One entry of a sequential batch
///
/// Deserializes from `{"method": "get", "path": "/x", "params": {...}, "json": {...}}`
/// where every field but `path` is optional.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct BatchRequest {
    /// HTTP method, case-insensitive (default: GET)
    #[serde(default)]
    pub method: Option<String>,
    /// Path relative to the base URL
    #[serde(default)]
    pub path: String,
    /// Query parameters
    #[serde(default)]
    pub params: Option<Params>,
    /// JSON body
    #[serde(default)]
    pub json: Option<Value>,
}

impl BatchRequest {
    /// Create a GET batch entry for `path`
    pub fn new(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            ..Default::default()
        }
    }

    /// Set the method
    pub fn with_method(mut self, method: impl Into<String>) -> Self {
        self.method = Some(method.into());
        self
    }

    /// Set the query parameters
    pub fn with_params(mut self, params: Params) -> Self {
        self.params = Some(params);
        self
    }

    /// Set the JSON body
    pub fn with_json(mut self, json: Value) -> Self {
        self.json = Some(json);
        self
    }
}

impl TryFrom<BatchRequest> for RequestSpec {
    type Error = ApiError;

    fn try_from(value: BatchRequest) -> Result<Self, Self::Error> {
        let method_name = value
            .method
            .as_deref()
            .unwrap_or("GET")
            .trim()
            .to_ascii_uppercase();
        let method = Method::from_bytes(method_name.as_bytes())
            .map_err(|e| ApiError::InvalidRequest(format!("method {method_name}: {e}")))?;

        Ok(RequestSpec {
            method,
            path: value.path,
            query: value.params.unwrap_or_default(),
            body: value.json,
        })
    }
}

/// Merges `extra` over `base`; keys in `extra` win
pub fn merge_params(mut base: Params, extra: Params) -> Params {
    base.extend(extra);
    base
}

/// Removes the path override key and returns the path to call
///
/// Falls back to `default_path` when the key is absent, empty or not a string.
pub fn take_path_override(params: &mut Params, default_path: String) -> String {
    match params.remove(PATH_OVERRIDE_KEY) {
        Some(Value::String(path)) if path.is_empty() => {
            debug!("Empty path override, using {}", default_path);
            default_path
        }
        Some(Value::String(path)) => path,
        Some(other) => {
            warn!("Ignoring non-string path override: {}", other);
            default_path
        }
        None => default_path,
    }
}

/// Flattens a parameter mapping into query pairs
///
/// Strings are sent verbatim, other scalars as their JSON text, arrays as
/// one pair per element and `null` values are dropped.
pub fn to_query_pairs(params: &Params) -> Vec<(String, String)> {
    let mut pairs = Vec::with_capacity(params.len());
    for (key, value) in params {
        match value {
            Value::Null => {}
            Value::Array(items) => {
                for item in items {
                    if let Some(text) = scalar_text(item) {
                        pairs.push((key.clone(), text));
                    }
                }
            }
            other => {
                if let Some(text) = scalar_text(other) {
                    pairs.push((key.clone(), text));
                }
            }
        }
    }
    pairs
}

fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}
