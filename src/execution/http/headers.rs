//! HTTP Headers Utility
//!
//! Builds the header set sent with every Akismet request.

use std::collections::HashMap;

use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue, USER_AGENT};

use crate::error::{AkismetError, Result};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// HTTP header builder for API requests
pub struct HttpHeaderBuilder {
    headers: HeaderMap,
}

impl HttpHeaderBuilder {
    pub fn new() -> Self {
        Self {
            headers: HeaderMap::new(),
        }
    }

    /// Add the form content type
    pub fn with_form_content_type(mut self) -> Self {
        self.headers
            .insert(CONTENT_TYPE, HeaderValue::from_static(FORM_CONTENT_TYPE));
        self
    }

    /// Add user agent
    pub fn with_user_agent(mut self, user_agent: &str) -> Result<Self> {
        self.headers.insert(
            USER_AGENT,
            HeaderValue::from_str(user_agent).map_err(|e| {
                AkismetError::ConfigurationError(format!("Invalid user agent: {e}"))
            })?,
        );
        Ok(self)
    }

    /// Add extra headers. Names already present (content type, user agent)
    /// are left untouched.
    pub fn with_extra_headers(mut self, extra: &HashMap<String, String>) -> Result<Self> {
        for (key, value) in extra {
            let name = HeaderName::from_bytes(key.as_bytes()).map_err(|e| {
                AkismetError::ConfigurationError(format!("Invalid header name '{key}': {e}"))
            })?;
            let value = HeaderValue::from_str(value).map_err(|e| {
                AkismetError::ConfigurationError(format!("Invalid header value for '{key}': {e}"))
            })?;
            if !self.headers.contains_key(&name) {
                self.headers.insert(name, value);
            }
        }
        Ok(self)
    }

    pub fn build(self) -> HeaderMap {
        self.headers
    }
}

impl Default for HttpHeaderBuilder {
    fn default() -> Self {
        Self::new()
    }
}
