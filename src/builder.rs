//! Akismet Builder Implementation
//!
//! Provides a builder pattern for creating Akismet clients.

use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::client::AkismetClient;
use crate::config::{API_KEY_ENV, AkismetConfig, BASE_URL_ENV};
use crate::error::Result;
use crate::execution::http::interceptor::{HttpInterceptor, LoggingInterceptor};
use crate::execution::http::transport::HttpTransport;

/// Akismet Client Builder
#[derive(Clone, Default)]
pub struct AkismetBuilder {
    config: AkismetConfig,
    http_client: Option<reqwest::Client>,
    http_interceptors: Vec<Arc<dyn HttpInterceptor>>,
    http_debug: bool,
}

impl AkismetBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the API key
    pub fn api_key<S: Into<String>>(mut self, api_key: S) -> Self {
        self.config.api_key = SecretString::from(api_key.into());
        self
    }

    /// Set the base URL (default `https://rest.akismet.com/1.1/`)
    pub fn base_url<S: Into<String>>(mut self, base_url: S) -> Self {
        self.config.base_url = Some(base_url.into());
        self
    }

    /// Set the `User-Agent` sent with every request
    pub fn user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.config.user_agent = Some(user_agent.into());
        self
    }

    // === HTTP Basic Configuration ===

    /// Set request timeout
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.timeout = Some(timeout);
        self
    }

    /// Set connection timeout
    pub fn connect_timeout(mut self, timeout: Duration) -> Self {
        self.config.http_config.connect_timeout = Some(timeout);
        self
    }

    /// Route all requests through a proxy
    pub fn proxy<S: Into<String>>(mut self, proxy: S) -> Self {
        self.config.http_config.proxy = Some(proxy.into());
        self
    }

    /// Add a header sent with every request
    pub fn header<K: Into<String>, V: Into<String>>(mut self, name: K, value: V) -> Self {
        self.config
            .http_config
            .headers
            .insert(name.into(), value.into());
        self
    }

    /// Set custom HTTP client. Timeouts and proxy set on this builder are
    /// ignored in favour of the client's own settings.
    pub fn with_http_client(mut self, client: reqwest::Client) -> Self {
        self.http_client = Some(client);
        self
    }

    // === HTTP Advanced Configuration ===

    /// Replace the transport entirely (takes precedence over any HTTP client).
    pub fn with_http_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.config.http_transport = Some(transport);
        self
    }

    /// Add a custom HTTP interceptor.
    pub fn with_http_interceptor(mut self, interceptor: Arc<dyn HttpInterceptor>) -> Self {
        self.http_interceptors.push(interceptor);
        self
    }

    /// Enable a built-in logging interceptor for HTTP debugging (no sensitive data).
    pub fn http_debug(mut self, enabled: bool) -> Self {
        self.http_debug = enabled;
        self
    }

    /// Build the client.
    ///
    /// Falls back to `AKISMET_KEY` / `AKISMET_BASE_URL` for anything not set
    /// explicitly, then validates the configuration.
    pub fn build(self) -> Result<AkismetClient> {
        let mut config = self.config;
        if config.api_key.expose_secret().is_empty()
            && let Ok(k) = std::env::var(API_KEY_ENV)
        {
            config.api_key = SecretString::from(k);
        }
        if config.base_url.as_deref().is_none_or(str::is_empty)
            && let Ok(url) = std::env::var(BASE_URL_ENV)
            && !url.is_empty()
        {
            config.base_url = Some(url);
        }

        config.validate()?;

        let client = match self.http_client {
            Some(http_client) => AkismetClient::with_http_client(config, http_client),
            None => AkismetClient::new(config)?,
        };

        let mut interceptors = self.http_interceptors;
        if self.http_debug {
            interceptors.push(Arc::new(LoggingInterceptor));
        }
        Ok(if interceptors.is_empty() {
            client
        } else {
            client.with_http_interceptors(interceptors)
        })
    }
}
