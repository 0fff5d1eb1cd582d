//! HTTP gateway client for the DABS statistics API.
//!
//! [`ApiClient`] is the production [`Gateway`]: it issues one GET per call,
//! never retries and never caches. Any failure (transport, non-2xx status or
//! an undecodable body) comes back as a single [`DabsError::Api`] carrying the
//! requested path and, when the server answered, its status code.

use std::time::{Duration, Instant};

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use reqwest::Client;
use serde_json::Value;

use crate::config::{self, Settings};
use crate::error::{DabsError, Result};
use crate::query_params::QueryParams;

/// Something that can answer `GET path?params` with a JSON document.
///
/// Views only ever talk to a `Gateway`, which keeps them independent of the
/// transport.
#[async_trait]
pub trait Gateway: Send + Sync {
    async fn call(&self, path: &str, params: &QueryParams) -> Result<Value>;
}

/// reqwest-backed [`Gateway`].
#[derive(Clone)]
pub struct ApiClient {
    client: Client,
    base_url: String,
    api_key: Option<String>,
}

impl ApiClient {
    /// Build a client for `base_url`, with an optional API key and request timeout.
    pub fn new(base_url: &str, api_key: Option<String>, timeout: Duration) -> Result<Self> {
        if timeout.is_zero() {
            return Err(DabsError::InvalidArgument(
                "Request timeout must be greater than zero".into(),
            ));
        }
        let client = Client::builder()
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.filter(|k| !k.is_empty()),
        })
    }

    /// Build a client from resolved [`Settings`].
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        settings.validate()?;
        Self::new(&settings.api_url, settings.api_key.clone(), settings.timeout())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Full request URL for `path` and `params`.
    pub fn url_for(&self, path: &str, params: &QueryParams) -> String {
        params.append_to(&format!("{}{}", self.base_url, path))
    }

    fn headers(&self, path: &str) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        if let Some(key) = &self.api_key {
            let value = HeaderValue::from_str(key).map_err(|_| DabsError::Api {
                path: path.to_string(),
                status: None,
                reason: "API key is not a valid header value".to_string(),
            })?;
            headers.insert(config::API_KEY_HEADER, value);
        }
        Ok(headers)
    }
}

#[async_trait]
impl Gateway for ApiClient {
    #[tracing::instrument(skip(self, params), fields(query = %params.to_query_string()))]
    async fn call(&self, path: &str, params: &QueryParams) -> Result<Value> {
        let start = Instant::now();
        let url = self.url_for(path, params);
        let headers = self.headers(path)?;

        tracing::debug!(%url, "sending request");

        let response = self
            .client
            .get(&url)
            .headers(headers)
            .send()
            .await
            .map_err(|e| {
                tracing::error!(error = %e, "request failed");
                DabsError::Api {
                    path: path.to_string(),
                    status: e.status().map(|s| s.as_u16()),
                    reason: e.to_string(),
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(
                status = status.as_u16(),
                duration_ms = start.elapsed().as_millis() as u64,
                "non-success response"
            );
            return Err(DabsError::Api {
                path: path.to_string(),
                status: Some(status.as_u16()),
                reason: format!("API error: {}", status.as_u16()),
            });
        }

        let body = response.json::<Value>().await.map_err(|e| {
            tracing::error!(error = %e, "response body is not valid JSON");
            DabsError::Api {
                path: path.to_string(),
                status: Some(status.as_u16()),
                reason: format!("invalid JSON body: {}", e),
            }
        })?;

        tracing::debug!(
            duration_ms = start.elapsed().as_millis() as u64,
            "request succeeded"
        );
        Ok(body)
    }
}
