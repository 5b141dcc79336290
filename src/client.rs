/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! Request dispatcher for the Ahrefs API
//!
//! Every operation in this crate ends in [`Client::execute`], which:
//! 1. takes a token from the instance's rate limiter (may wait),
//! 2. computes the auth header or query parameter,
//! 3. merges caller query parameters with the auth ones (auth wins),
//! 4. sends through the retrying transport with the configured timeout,
//! 5. classifies the final response.
//!
//! # Example
//! ```ignore
//! use ahrefs_client::prelude::*;
//!
//! let config = ClientConfig::from_env();
//! let client = Client::new(config)?;
//!
//! let rating = client
//!     .get_category(Category::SiteExplorer, "domain-rating", params)
//!     .await?;
//! ```

use crate::application::auth::AuthInjection;
use crate::application::config::ClientConfig;
use crate::application::rate_limiter::RateLimiter;
use crate::constants::USER_AGENT;
use crate::error::ApiError;
use crate::model::category::Category;
use crate::model::http::{OutgoingRequest, make_http_request, merge_query};
use crate::model::requests::{BatchRequest, Params, RequestSpec, merge_params, take_path_override};
use crate::model::responses::handle_response;
use crate::model::retry::RetryConfig;
use reqwest::header::HeaderMap;
use reqwest::{Client as HttpClient, Method};
use serde_json::Value;
use std::sync::Arc;
use tracing::{debug, info};

/// Rate-limited, retrying client for the Ahrefs API
///
/// Cheap to clone; clones share the configuration, the connection pool and
/// the rate limiter. Separately constructed clients share nothing.
#[derive(Clone, Debug)]
pub struct Client {
    config: Arc<ClientConfig>,
    http_client: HttpClient,
    rate_limiter: RateLimiter,
    retry: RetryConfig,
}

impl Client {
    /// Creates a new client
    ///
    /// No credential check happens here; a missing key surfaces as
    /// `ApiError::Auth` on the first call.
    ///
    /// # Returns
    /// * `Ok(Client)` - client ready to use
    /// * `Err(ApiError)` - if the HTTP client cannot be built
    pub fn new(config: ClientConfig) -> Result<Self, ApiError> {
        let http_client = HttpClient::builder()
            .user_agent(USER_AGENT)
            .timeout(config.timeout())
            .build()?;
        let rate_limiter = RateLimiter::new(&config.rate_limiter);
        let retry = config.retry_config();

        Ok(Self {
            config: Arc::new(config),
            http_client,
            rate_limiter,
            retry,
        })
    }

    /// Builds an independent client using `credential` instead of the configured one
    ///
    /// The new client has its own rate limiter and connection pool.
    pub fn with_credential(&self, credential: impl Into<String>) -> Result<Self, ApiError> {
        Self::new(self.config.as_ref().clone().with_credential(credential))
    }

    /// Configuration this client was built with
    #[must_use]
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Rate limiter shared by every call of this instance
    #[must_use]
    pub fn rate_limiter(&self) -> &RateLimiter {
        &self.rate_limiter
    }

    /// Sends one request through the dispatch path
    ///
    /// Exactly one logical round trip (plus transport retries); never paginates.
    pub async fn execute(&self, spec: RequestSpec) -> Result<Value, ApiError> {
        self.rate_limiter.acquire().await;

        let auth = AuthInjection::from_config(&self.config)?;

        let mut headers = HeaderMap::new();
        if let Some((name, value)) = auth.header()? {
            headers.insert(name, value);
        }
        let auth_query = match &auth {
            AuthInjection::Query { name, value } => Some((name.as_str(), value.as_str())),
            AuthInjection::Header { .. } => None,
        };

        let request = OutgoingRequest {
            method: spec.method,
            url: self.build_url(&spec.path),
            headers,
            query: merge_query(&spec.query, auth_query),
            body: spec.body.as_ref(),
            timeout: self.config.timeout(),
        };

        let response = make_http_request(&self.http_client, &request, &self.retry).await?;
        handle_response(response)
    }

    /// Makes a request with an explicit method, path, query and body
    pub async fn request(
        &self,
        method: Method,
        path: &str,
        params: Option<Params>,
        body: Option<Value>,
    ) -> Result<Value, ApiError> {
        let spec = RequestSpec {
            method,
            path: path.to_string(),
            query: params.unwrap_or_default(),
            body,
        };
        self.execute(spec).await
    }

    /// Makes a GET request
    pub async fn get(&self, path: &str, params: Params) -> Result<Value, ApiError> {
        self.execute(RequestSpec::get(path).with_query(params)).await
    }

    /// Makes a POST request with a JSON body
    pub async fn post(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.execute(RequestSpec::post(path).with_body(body)).await
    }

    /// Makes a PUT request with a JSON body
    ///
    /// PUT is never retried by the transport.
    pub async fn put(&self, path: &str, body: Value) -> Result<Value, ApiError> {
        self.execute(RequestSpec::put(path).with_body(body)).await
    }

    /// GET `/{category}/{operation}`, unless `params` carries a `path` override
    ///
    /// The override key is removed before the query string is built.
    pub async fn get_category(
        &self,
        category: Category,
        operation: &str,
        mut params: Params,
    ) -> Result<Value, ApiError> {
        let path = take_path_override(&mut params, category.path(operation));
        debug!("Category call {}/{} -> {}", category, operation, path);
        self.get(&path, params).await
    }

    /// POST `/batch-analysis` with `items`; extra keys join the JSON body
    ///
    /// A `path` key in `extra` overrides the endpoint and is not sent.
    pub async fn post_batch_analysis(
        &self,
        items: Vec<String>,
        mut extra: Params,
    ) -> Result<Value, ApiError> {
        let path = take_path_override(&mut extra, "/batch-analysis".to_string());
        let mut body = Params::new();
        body.insert(
            "items".to_string(),
            Value::Array(items.into_iter().map(Value::String).collect()),
        );
        let body = merge_params(body, extra);
        self.post(&path, Value::Object(body)).await
    }

    /// Runs independent requests one after another
    ///
    /// Results come back in input order. The first failure is returned
    /// immediately and the remaining requests are not sent.
    pub async fn batch(&self, requests: Vec<BatchRequest>) -> Result<Vec<Value>, ApiError> {
        let total = requests.len();
        let mut results = Vec::with_capacity(total);
        for (index, request) in requests.into_iter().enumerate() {
            let spec = RequestSpec::try_from(request)?;
            debug!("Batch item {}/{}: {} {}", index + 1, total, spec.method, spec.path);
            results.push(self.execute(spec).await?);
        }
        info!("Batch of {} requests completed", total);
        Ok(results)
    }

    fn build_url(&self, path: &str) -> String {
        let base = self.config.normalized_base_url();
        if path.starts_with('/') {
            format!("{base}{path}")
        } else {
            format!("{base}/{path}")
        }
    }
}
