/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 14/10/26
******************************************************************************/

//! HTTP transport with transport-level retry
//!
//! The transport knows nothing about auth or rate limiting; the dispatcher
//! hands it a fully built request description and gets back the final
//! response, or a connection/timeout error when the network never answered.

use crate::error::ApiError;
use crate::model::requests::Params;
use crate::model::responses::RawResponse;
use crate::model::retry::{BACKOFF_MAX, RetryConfig};
use reqwest::header::{HeaderMap, RETRY_AFTER};
use reqwest::{Client, Method, Response};
use serde_json::Value;
use std::time::Duration;
use tracing::{debug, error, warn};

/// Everything needed to (re)issue one request
#[derive(Debug, Clone)]
pub struct OutgoingRequest<'a> {
    /// HTTP method
    pub method: Method,
    /// Absolute URL without query string
    pub url: String,
    /// Extra headers, auth included
    pub headers: HeaderMap,
    /// Query pairs, auth included
    pub query: Vec<(String, String)>,
    /// Optional JSON body
    pub body: Option<&'a Value>,
    /// Per-attempt timeout
    pub timeout: Duration,
}

/// Reason an attempt is being retried
enum RetryCause {
    Status(u16),
    Transport(ApiError),
}

/// Makes an HTTP request, retrying transient failures
///
/// Connection failures, timeouts, body read failures and the statuses
/// {429, 500, 502, 503, 504} share one budget of `retry.max_retries`
/// retries, and only GET and POST are retried at all. A retryable status
/// that outlives the budget is returned as a normal response; a transport
/// failure that outlives it is returned as `ApiError::Connection` or
/// `ApiError::Timeout`.
///
/// # Arguments
///
/// * `client` - Pooled HTTP client
/// * `request` - Request description, rebuilt for every attempt
/// * `retry` - Retry budget and backoff
pub async fn make_http_request(
    client: &Client,
    request: &OutgoingRequest<'_>,
    retry: &RetryConfig,
) -> Result<RawResponse, ApiError> {
    let retryable_method = RetryConfig::is_retryable_method(&request.method);
    let mut retries_used: u32 = 0;

    loop {
        debug!("{} {}", request.method, request.url);

        let (cause, retry_after) = match send_once(client, request).await {
            Ok((raw, retry_after)) => {
                debug!("Response status: {}", raw.status);
                if !(retryable_method && RetryConfig::is_retryable_status(raw.status))
                    || retries_used >= retry.max_retries
                {
                    return Ok(raw);
                }
                (RetryCause::Status(raw.status.as_u16()), retry_after)
            }
            Err(err) => {
                let transient = is_transient(&err);
                if !(retryable_method && transient) || retries_used >= retry.max_retries {
                    let err = ApiError::from(err);
                    error!(
                        "{} {} failed after {} retries: {}",
                        request.method, request.url, retries_used, err
                    );
                    return Err(err);
                }
                (RetryCause::Transport(ApiError::from(err)), None)
            }
        };

        retries_used += 1;
        let delay = retry_after.unwrap_or_else(|| retry.backoff(retries_used));
        match cause {
            RetryCause::Status(code) => warn!(
                "{} {} returned {} (retry {}/{}), waiting {:?}",
                request.method, request.url, code, retries_used, retry.max_retries, delay
            ),
            RetryCause::Transport(err) => warn!(
                "{} {} failed: {} (retry {}/{}), waiting {:?}",
                request.method, request.url, err, retries_used, retry.max_retries, delay
            ),
        }
        if !delay.is_zero() {
            tokio::time::sleep(delay).await;
        }
    }
}

/// One attempt: send and read the whole body
async fn send_once(
    client: &Client,
    request: &OutgoingRequest<'_>,
) -> Result<(RawResponse, Option<Duration>), reqwest::Error> {
    let mut builder = client
        .request(request.method.clone(), &request.url)
        .headers(request.headers.clone())
        .timeout(request.timeout);

    if !request.query.is_empty() {
        builder = builder.query(&request.query);
    }
    if let Some(body) = request.body {
        builder = builder.json(body);
    }

    let response = builder.send().await?;
    let status = response.status();
    let retry_after = parse_retry_after(&response);
    let body = response.text().await?;
    Ok((RawResponse::new(status, body), retry_after))
}

/// Connection failures, timeouts and interrupted bodies are worth retrying
fn is_transient(err: &reqwest::Error) -> bool {
    err.is_connect() || err.is_timeout() || err.is_body() || err.is_decode() || err.is_request()
}

/// `Retry-After` in whole seconds on 429 and 503, capped at [`BACKOFF_MAX`]
fn parse_retry_after(response: &Response) -> Option<Duration> {
    if !RetryConfig::honours_retry_after(response.status()) {
        return None;
    }
    response
        .headers()
        .get(RETRY_AFTER)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.trim().parse::<u64>().ok())
        .map(|secs| Duration::from_secs(secs).min(BACKOFF_MAX))
}

/// Query pairs for a request, auth pairs taking precedence over the caller's
pub fn merge_query(caller: &Params, auth: Option<(&str, &str)>) -> Vec<(String, String)> {
    let mut merged = caller.clone();
    if let Some((name, value)) = auth {
        merged.insert(name.to_string(), Value::String(value.to_string()));
    }
    crate::model::requests::to_query_pairs(&merged)
}
