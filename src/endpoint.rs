//! Endpoint resolution.
//!
//! Joins an operation path onto the configured (or default) base URL.

use url::Url;

use crate::error::{AkismetError, Result};

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "https://rest.akismet.com/1.1/";

/// The remote operations exposed by the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Endpoint {
    VerifyKey,
    CommentCheck,
    SubmitHam,
    SubmitSpam,
}

impl Endpoint {
    /// Path relative to the versioned base URL.
    pub const fn path(&self) -> &'static str {
        match self {
            Self::VerifyKey => "verify-key",
            Self::CommentCheck => "comment-check",
            Self::SubmitHam => "submit-ham",
            Self::SubmitSpam => "submit-spam",
        }
    }

    /// Name used in logs and interceptor contexts.
    pub const fn operation(&self) -> &'static str {
        match self {
            Self::VerifyKey => "verify_key",
            Self::CommentCheck => "comment_check",
            Self::SubmitHam => "submit_ham",
            Self::SubmitSpam => "submit_spam",
        }
    }
}

/// Parse a base URL, rejecting anything that cannot carry a path.
pub fn parse_base_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| {
        AkismetError::ConfigurationError(format!("Invalid base URL '{raw}': {e}"))
    })?;
    if url.cannot_be_a_base() {
        return Err(AkismetError::ConfigurationError(format!(
            "Base URL '{raw}' cannot be used as a base"
        )));
    }
    Ok(url)
}

/// Resolve `endpoint` against `base_url` (or [`DEFAULT_BASE_URL`] when it is
/// `None` or empty).
///
/// Exactly one `/` separates the base path from the operation path; the base
/// query string, if any, is kept.
pub fn resolve(base_url: Option<&str>, endpoint: Endpoint) -> Result<Url> {
    let base = base_url
        .filter(|url| !url.is_empty())
        .unwrap_or(DEFAULT_BASE_URL);
    let mut url = parse_base_url(base)?;
    let path = format!("{}/{}", url.path().trim_end_matches('/'), endpoint.path());
    url.set_path(&path);
    Ok(url)
}
