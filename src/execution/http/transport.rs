//! HTTP transport abstraction.
//!
//! The client never talks to `reqwest` directly: every round trip goes
//! through an [`HttpTransport`]. [`ReqwestTransport`] is the default; tests
//! and embedders can inject their own implementation to observe the final
//! URL/headers/body and return a synthetic response without any network I/O.

use async_trait::async_trait;
use reqwest::header::HeaderMap;

use crate::config::HttpConfig;
use crate::error::{AkismetError, Result};
use crate::execution::http::interceptor::HttpRequestContext;

/// Transport-level request data for form POST requests.
#[derive(Debug, Clone)]
pub struct HttpTransportRequest {
    pub ctx: HttpRequestContext,
    pub url: String,
    pub headers: HeaderMap,
    /// Already form-encoded body.
    pub body: String,
}

/// Transport-level response data. `body` holds the whole, fully read body.
#[derive(Debug, Clone, Default)]
pub struct HttpTransportResponse {
    pub status: u16,
    pub headers: HeaderMap,
    pub body: Vec<u8>,
}

impl HttpTransportResponse {
    pub fn new<B: Into<Vec<u8>>>(status: u16, body: B) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: body.into(),
        }
    }

    /// Body as text with surrounding whitespace removed.
    pub fn trimmed_text(&self) -> String {
        String::from_utf8_lossy(&self.body).trim().to_string()
    }

    /// A header value, if present and valid visible ASCII.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }
}

/// Custom HTTP transport for form POST requests.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    async fn execute_form(&self, request: HttpTransportRequest) -> Result<HttpTransportResponse>;
}

/// Default transport backed by a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct ReqwestTransport {
    client: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// Build the underlying client from an [`HttpConfig`].
    pub fn from_config(cfg: &HttpConfig) -> Result<Self> {
        let mut builder = reqwest::Client::builder();

        if let Some(timeout) = cfg.timeout {
            builder = builder.timeout(timeout);
        }
        if let Some(connect_timeout) = cfg.connect_timeout {
            builder = builder.connect_timeout(connect_timeout);
        }
        if let Some(proxy_url) = &cfg.proxy {
            let proxy = reqwest::Proxy::all(proxy_url).map_err(|e| {
                AkismetError::ConfigurationError(format!("Invalid proxy URL: {e}"))
            })?;
            builder = builder.proxy(proxy);
        }

        let client = builder.build().map_err(|e| {
            AkismetError::ConfigurationError(format!("Failed to build HTTP client: {e}"))
        })?;
        Ok(Self::new(client))
    }

    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn execute_form(&self, request: HttpTransportRequest) -> Result<HttpTransportResponse> {
        let resp = self
            .client
            .post(&request.url)
            .headers(request.headers)
            .body(request.body)
            .send()
            .await?;

        let status = resp.status().as_u16();
        let headers = resp.headers().clone();
        // Read to the end on every status so the connection can go back to the pool.
        let body = resp.bytes().await?.to_vec();

        Ok(HttpTransportResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn trimmed_text_strips_whitespace() {
        let resp = HttpTransportResponse::new(200, " \r\nvalid\n\t");
        assert_eq!(resp.trimmed_text(), "valid");
    }

    #[test]
    fn trimmed_text_is_lossy() {
        let resp = HttpTransportResponse::new(200, vec![b'o', b'k', 0xff]);
        assert_eq!(resp.trimmed_text(), "ok\u{fffd}");
    }

    #[test]
    fn invalid_proxy_is_configuration_error() {
        let cfg = HttpConfig {
            proxy: Some("http://[::1".to_string()),
            ..Default::default()
        };
        let err = ReqwestTransport::from_config(&cfg).unwrap_err();
        assert!(matches!(err, AkismetError::ConfigurationError(_)));
    }

    #[test]
    fn builds_with_timeouts() {
        let cfg = HttpConfig {
            timeout: Some(Duration::from_secs(5)),
            connect_timeout: Some(Duration::from_secs(1)),
            ..Default::default()
        };
        assert!(ReqwestTransport::from_config(&cfg).is_ok());
    }
}
