//! HTTP clients for the upstream movie-metadata and ratings providers.

pub mod omdb;
pub mod tmdb;

use crate::types::config::HttpConfig;
use serde::de::DeserializeOwned;
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("api error {0}: {1}")]
    Status(u16, String),

    #[error("parse error: {0}")]
    Parse(String),
}

pub(crate) fn build_http_client(http: &HttpConfig) -> Result<reqwest::Client, ApiError> {
    reqwest::Client::builder()
        .user_agent(http.user_agent.clone())
        .timeout(Duration::from_secs(http.timeout_secs))
        .build()
        .map_err(|e| ApiError::Network(e.to_string()))
}

/// Shared GET-and-decode path for both providers. 404 and 429 are
/// mapped to their dedicated variants so callers can degrade.
pub(crate) async fn get_json<T: DeserializeOwned>(
    client: &reqwest::Client,
    url: &str,
    query: &[(&str, String)],
    resource: &str,
) -> Result<T, ApiError> {
    tracing::debug!(url = %url, resource = %resource, "querying provider");

    let response = client
        .get(url)
        .query(query)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    let status = response.status();

    if status == reqwest::StatusCode::NOT_FOUND {
        return Err(ApiError::NotFound(resource.to_string()));
    }
    if status == reqwest::StatusCode::TOO_MANY_REQUESTS {
        return Err(ApiError::RateLimited);
    }
    if !status.is_success() {
        let error_text = response.text().await.unwrap_or_default();
        return Err(ApiError::Status(status.as_u16(), error_text));
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_client_builds_from_default_config() {
        let client = build_http_client(&HttpConfig::default());
        assert!(client.is_ok());
    }
}
