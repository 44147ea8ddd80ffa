//! Error Handling Module
//!
//! Every failure an Akismet round trip can produce is a variant of
//! [`AkismetError`], so callers can branch on the kind instead of the message.
//!
//! # Example
//!
//! ```rust,ignore
//! use akismet::error::{AkismetError, ErrorCategory};
//!
//! let error = AkismetError::UnexpectedStatus { status: 503 };
//! assert_eq!(error.category(), ErrorCategory::Status);
//! assert!(error.is_retryable());
//! ```

use thiserror::Error;

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, AkismetError>;

/// Coarse classification of an [`AkismetError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCategory {
    /// Local problem detected before any network I/O.
    Configuration,
    /// The round trip did not complete (network, timeout, cancellation).
    Transport,
    /// The service answered with a non-200 status.
    Status,
    /// The service answered 200 but the body reports a failure.
    Api,
}

/// Errors returned by the Akismet client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AkismetError {
    /// Malformed base URL, empty API key, invalid header or proxy.
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    /// Connection refused, DNS failure, TLS failure, broken body stream.
    #[error("HTTP transport error: {0}")]
    TransportError(String),

    /// The request deadline elapsed before a response arrived.
    #[error("Request timed out: {0}")]
    TimeoutError(String),

    /// The caller cancelled the request while it was in flight.
    #[error("Request cancelled")]
    Cancelled,

    /// Any HTTP status other than 200.
    #[error("Unexpected status code: {status}")]
    UnexpectedStatus { status: u16 },

    /// `verify-key` answered 200 with something other than `valid`.
    #[error("Invalid API key: {message}")]
    InvalidKey {
        message: String,
        debug_help: Option<String>,
    },

    /// `comment-check` answered 200 with neither `true` nor `false`.
    #[error("Server error: {message}")]
    ServerError {
        message: String,
        debug_help: Option<String>,
    },
}

impl AkismetError {
    /// The coarse category of this error.
    pub const fn category(&self) -> ErrorCategory {
        match self {
            Self::ConfigurationError(_) => ErrorCategory::Configuration,
            Self::TransportError(_) | Self::TimeoutError(_) | Self::Cancelled => {
                ErrorCategory::Transport
            }
            Self::UnexpectedStatus { .. } => ErrorCategory::Status,
            Self::InvalidKey { .. } | Self::ServerError { .. } => ErrorCategory::Api,
        }
    }

    /// HTTP status code, for [`AkismetError::UnexpectedStatus`].
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::UnexpectedStatus { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether a caller-side retry could plausibly succeed.
    ///
    /// This is a hint only; the client never retries on its own.
    pub const fn is_retryable(&self) -> bool {
        match self {
            Self::TransportError(_) | Self::TimeoutError(_) => true,
            Self::UnexpectedStatus { status } => *status == 429 || *status >= 500,
            _ => false,
        }
    }

    /// The literal server message for body-level failures.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Self::InvalidKey { message, .. } | Self::ServerError { message, .. } => Some(message),
            _ => None,
        }
    }

    /// The `X-akismet-debug-help` header sent alongside a body-level failure.
    pub fn debug_help(&self) -> Option<&str> {
        match self {
            Self::InvalidKey { debug_help, .. } | Self::ServerError { debug_help, .. } => {
                debug_help.as_deref()
            }
            _ => None,
        }
    }
}

/// Render `err` followed by every `source()` below it, joined with `": "`.
///
/// Levels whose text already appears in the message are skipped.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> String {
    let mut message = err.to_string();
    let mut source = err.source();
    while let Some(cause) = source {
        let text = cause.to_string();
        if !text.is_empty() && !message.contains(&text) {
            message.push_str(": ");
            message.push_str(&text);
        }
        source = cause.source();
    }
    message
}

impl From<reqwest::Error> for AkismetError {
    fn from(err: reqwest::Error) -> Self {
        let message = error_chain(&err);
        if err.is_timeout() {
            Self::TimeoutError(message)
        } else if err.is_builder() {
            Self::ConfigurationError(message)
        } else {
            Self::TransportError(message)
        }
    }
}

impl From<url::ParseError> for AkismetError {
    fn from(err: url::ParseError) -> Self {
        Self::ConfigurationError(format!("Invalid URL: {err}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("{message}")]
    struct Layer {
        message: &'static str,
        #[source]
        source: Option<Box<Layer>>,
    }

    fn layer(message: &'static str, source: Option<Layer>) -> Layer {
        Layer {
            message,
            source: source.map(Box::new),
        }
    }

    #[test]
    fn error_chain_includes_every_cause() {
        let io = layer("Connection refused (os error 111)", None);
        let connect = layer("tcp connect error", Some(io));
        let client = layer("client error (Connect)", Some(connect));
        let top = layer(
            "error sending request for url (http://127.0.0.1:9/verify-key)",
            Some(client),
        );
        assert_eq!(
            error_chain(&top),
            "error sending request for url (http://127.0.0.1:9/verify-key): \
             client error (Connect): tcp connect error: Connection refused (os error 111)"
        );
    }

    #[test]
    fn error_chain_skips_repeated_text() {
        let inner = layer("timed out", None);
        let outer = layer("operation timed out", Some(inner));
        assert_eq!(error_chain(&outer), "operation timed out");
        assert_eq!(error_chain(&layer("alone", None)), "alone");
    }

    #[test]
    fn categories_cover_every_kind() {
        assert_eq!(
            AkismetError::ConfigurationError("x".into()).category(),
            ErrorCategory::Configuration
        );
        assert_eq!(AkismetError::Cancelled.category(), ErrorCategory::Transport);
        assert_eq!(
            AkismetError::TimeoutError("slow".into()).category(),
            ErrorCategory::Transport
        );
        assert_eq!(
            AkismetError::UnexpectedStatus { status: 500 }.category(),
            ErrorCategory::Status
        );
        assert_eq!(
            AkismetError::ServerError {
                message: "boom".into(),
                debug_help: None
            }
            .category(),
            ErrorCategory::Api
        );
    }

    #[test]
    fn retry_hint() {
        assert!(AkismetError::TransportError("refused".into()).is_retryable());
        assert!(AkismetError::UnexpectedStatus { status: 503 }.is_retryable());
        assert!(AkismetError::UnexpectedStatus { status: 429 }.is_retryable());
        assert!(!AkismetError::UnexpectedStatus { status: 404 }.is_retryable());
        assert!(!AkismetError::Cancelled.is_retryable());
        assert!(
            !AkismetError::InvalidKey {
                message: "invalid".into(),
                debug_help: None
            }
            .is_retryable()
        );
    }

    #[test]
    fn accessors() {
        let err = AkismetError::InvalidKey {
            message: "invalid".into(),
            debug_help: Some("We were unable to parse your blog URI".into()),
        };
        assert_eq!(err.server_message(), Some("invalid"));
        assert_eq!(err.debug_help(), Some("We were unable to parse your blog URI"));
        assert_eq!(err.status_code(), None);
        assert_eq!(
            AkismetError::UnexpectedStatus { status: 500 }.status_code(),
            Some(500)
        );
        assert_eq!(err.to_string(), "Invalid API key: invalid");
    }
}
