//! Akismet Configuration
//!
//! Everything a client needs to talk to the service: the API key, where the
//! service lives, how to identify ourselves, and how to reach it.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use secrecy::{ExposeSecret, SecretString};

use crate::endpoint::{self, DEFAULT_BASE_URL};
use crate::error::{AkismetError, Result};
use crate::execution::http::transport::HttpTransport;

/// `User-Agent` sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Environment variable read for the API key by [`crate::AkismetBuilder`].
pub const API_KEY_ENV: &str = "AKISMET_KEY";

/// Environment variable read for the base URL by [`crate::AkismetBuilder`].
pub const BASE_URL_ENV: &str = "AKISMET_BASE_URL";

/// Settings for the default reqwest transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HttpConfig {
    /// Request timeout
    pub timeout: Option<Duration>,
    /// Connection timeout
    pub connect_timeout: Option<Duration>,
    /// Proxy URL applied to all requests
    pub proxy: Option<String>,
    /// Extra headers sent with every request
    pub headers: HashMap<String, String>,
}

/// Akismet client configuration.
///
/// # Example
/// ```rust,ignore
/// use akismet::AkismetConfig;
///
/// let config = AkismetConfig::new("your-api-key")
///     .with_user_agent("my-blog/2.1 | akismet/0.1.0");
/// ```
#[derive(Clone)]
pub struct AkismetConfig {
    /// Akismet API key (securely stored)
    pub api_key: SecretString,

    /// Base URL override; `None` or empty means [`DEFAULT_BASE_URL`]
    pub base_url: Option<String>,

    /// `User-Agent` override; `None` or empty means [`DEFAULT_USER_AGENT`]
    pub user_agent: Option<String>,

    /// Custom transport; `None` means a reqwest client built from `http_config`
    pub http_transport: Option<Arc<dyn HttpTransport>>,

    /// HTTP configuration for the default transport
    pub http_config: HttpConfig,
}

impl AkismetConfig {
    pub fn new<S: Into<String>>(api_key: S) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            ..Default::default()
        }
    }

    pub fn with_base_url<S: Into<String>>(mut self, url: S) -> Self {
        self.base_url = Some(url.into());
        self
    }

    pub fn with_user_agent<S: Into<String>>(mut self, user_agent: S) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn with_http_transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.http_transport = Some(transport);
        self
    }

    pub fn with_http_config(mut self, http_config: HttpConfig) -> Self {
        self.http_config = http_config;
        self
    }

    /// The base URL requests are resolved against.
    pub fn base_url(&self) -> &str {
        self.base_url
            .as_deref()
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_BASE_URL)
    }

    /// The `User-Agent` header value.
    pub fn user_agent(&self) -> &str {
        self.user_agent
            .as_deref()
            .filter(|ua| !ua.is_empty())
            .unwrap_or(DEFAULT_USER_AGENT)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.api_key.expose_secret().is_empty() {
            return Err(AkismetError::ConfigurationError(
                "API key cannot be empty".to_string(),
            ));
        }

        endpoint::parse_base_url(self.base_url())?;

        if self.user_agent().trim().is_empty() {
            return Err(AkismetError::ConfigurationError(
                "User agent cannot be blank".to_string(),
            ));
        }

        Ok(())
    }
}

impl Default for AkismetConfig {
    fn default() -> Self {
        Self {
            api_key: SecretString::from(String::new()),
            base_url: None,
            user_agent: None,
            http_transport: None,
            http_config: HttpConfig::default(),
        }
    }
}

impl std::fmt::Debug for AkismetConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AkismetConfig")
            .field("api_key", &"[REDACTED]")
            .field("base_url", &self.base_url())
            .field("user_agent", &self.user_agent())
            .field("has_custom_transport", &self.http_transport.is_some())
            .field("http_config", &self.http_config)
            .finish()
    }
}
