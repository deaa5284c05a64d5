//! Pluggable request transports.

use crate::{FetchError, Method, Request, Response};
use async_trait::async_trait;
use std::collections::BTreeMap;
use std::time::Duration;

/// Sends a built [`Request`] and returns the raw [`Response`].
///
/// Non-2xx statuses are returned as responses, not errors; only failures
/// before a response arrives map to [`FetchError`].
#[async_trait(?Send)]
pub trait Transport {
    async fn send(&self, request: Request) -> Result<Response, FetchError>;
}

/// Transport backed by `reqwest`. Works natively and on `wasm32` (browser fetch).
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl Default for ReqwestTransport {
    fn default() -> Self {
        Self {
            client: reqwest::Client::new(),
        }
    }
}

impl ReqwestTransport {
    /// Create a transport with the default client.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a transport whose requests give up after `timeout`.
    ///
    /// The browser fetch API has no client-side timeout, so on `wasm32` this
    /// is the same as [`ReqwestTransport::new`].
    pub fn with_timeout(timeout: Duration) -> Result<Self, FetchError> {
        #[cfg(not(target_arch = "wasm32"))]
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::RequestError(e.to_string()))?;

        #[cfg(target_arch = "wasm32")]
        let client = {
            let _ = timeout;
            reqwest::Client::new()
        };

        Ok(Self { client })
    }
}

#[async_trait(?Send)]
impl Transport for ReqwestTransport {
    async fn send(&self, request: Request) -> Result<Response, FetchError> {
        let method = match request.method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Delete => reqwest::Method::DELETE,
        };

        let mut builder = self.client.request(method, &request.url);
        for (key, value) in &request.headers {
            builder = builder.header(key.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(map_reqwest_error)?;

        let status = response.status().as_u16();
        let headers: BTreeMap<String, String> = response
            .headers()
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_str().unwrap_or("").to_string()))
            .collect();
        let body = response.bytes().await.map_err(map_reqwest_error)?.to_vec();

        Ok(Response::new(status, headers, body))
    }
}

fn map_reqwest_error(e: reqwest::Error) -> FetchError {
    if e.is_timeout() {
        FetchError::Timeout
    } else if e.is_builder() {
        FetchError::InvalidRequest(e.to_string())
    } else {
        FetchError::RequestError(e.to_string())
    }
}
