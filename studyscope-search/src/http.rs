//! Shared HTTP client and response helpers for the source clients.
//!
//! One [`reqwest::Client`] is built per fan-out and shared by every
//! source, so connection pools are reused across concurrent requests.

use std::time::Duration;

use serde::de::DeserializeOwned;

use crate::config::SearchConfig;
use crate::error::SearchError;

/// User-Agent sent when the config does not override it.
pub const DEFAULT_USER_AGENT: &str = concat!("studyscope/", env!("CARGO_PKG_VERSION"));

/// Build a [`reqwest::Client`] configured for the source APIs.
///
/// The client has:
/// - Timeout from config (per request; there is no overall deadline)
/// - The configured User-Agent, or [`DEFAULT_USER_AGENT`]
/// - Brotli and gzip decompression
///
/// # Errors
///
/// Returns [`SearchError::Http`] if the client cannot be constructed.
pub fn build_client(config: &SearchConfig) -> Result<reqwest::Client, SearchError> {
    let ua = config
        .user_agent
        .clone()
        .unwrap_or_else(|| DEFAULT_USER_AGENT.to_owned());

    reqwest::Client::builder()
        .timeout(Duration::from_secs(config.timeout_seconds))
        .user_agent(ua)
        .redirect(reqwest::redirect::Policy::limited(10))
        .build()
        .map_err(|e| SearchError::Http(format!("failed to build HTTP client: {e}")))
}

/// Join a base URL and an absolute API path without doubling slashes.
pub fn endpoint(base: &str, path: &str) -> String {
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

/// Send a request and decode a 2xx JSON body.
///
/// Non-2xx answers become [`SearchError::Status`]; their body is logged at
/// debug level only. `label` names the API in log lines.
///
/// # Errors
///
/// [`SearchError::Http`] on transport failure, [`SearchError::Status`] on
/// non-2xx, [`SearchError::Parse`] when the body is not the expected JSON.
pub async fn send_json<T: DeserializeOwned>(
    request: reqwest::RequestBuilder,
    label: &str,
) -> Result<T, SearchError> {
    let response = request.send().await.map_err(SearchError::from)?;
    let status = response.status();
    tracing::debug!(api = label, status = status.as_u16(), "response received");

    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        tracing::debug!(api = label, %body, "error body");
        return Err(SearchError::Status {
            status: status.as_u16(),
            message: status.canonical_reason().unwrap_or("unknown").to_owned(),
        });
    }

    let bytes = response.bytes().await.map_err(SearchError::from)?;
    serde_json::from_slice(&bytes)
        .map_err(|e| SearchError::Parse(format!("{label} returned malformed JSON: {e}")))
}
