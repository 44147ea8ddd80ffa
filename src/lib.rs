//! # akismet - An async client for the Akismet spam detection API
//!
//! The service offers four operations, each a single form-encoded `POST`
//! answered with a short plaintext body:
//!
//! - `verify-key`: check that an API key is valid for a site
//! - `comment-check`: classify a piece of content as spam or ham
//! - `submit-ham`: report content that was wrongly flagged as spam
//! - `submit-spam`: report spam that slipped through
//!
#![deny(unsafe_code)]

//! ## Quick Start
//!
//! ```rust,no_run
//! use akismet::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), AkismetError> {
//!     let client = AkismetClient::builder()
//!         .api_key("your-api-key")
//!         .build()?;
//!
//!     client.verify_key("https://example.com").await?;
//!
//!     let comment = Comment::new("https://example.com", "192.0.2.1")
//!         .with_comment_type(CommentType::Comment)
//!         .with_comment_author("viagra-test-123")
//!         .with_comment_content("Buy now!");
//!     let result = client.check_comment(&comment).await?;
//!     if result.spam {
//!         client.submit_ham(&comment).await?; // if a moderator disagrees
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Cancellation
//!
//! Every operation has a `*_with_options` variant taking [`RequestOptions`]:
//! a [`CancelHandle`] and/or a deadline. A cancelled call returns
//! [`AkismetError::Cancelled`] immediately and drops the in-flight request.
//!
//! ## Custom transports
//!
//! Requests go through the [`HttpTransport`] trait. The default is backed by
//! `reqwest`; inject your own with
//! [`AkismetBuilder::with_http_transport`] to add instrumentation or to run
//! without network access in tests.

pub mod builder;
pub mod client;
pub mod config;
pub mod endpoint;
pub mod error;
pub mod execution;
pub mod form;
pub mod response;
pub mod types;
pub mod utils;

pub use builder::AkismetBuilder;
pub use client::{AkismetClient, RequestOptions};
pub use config::{AkismetConfig, DEFAULT_USER_AGENT, HttpConfig};
pub use endpoint::{DEFAULT_BASE_URL, Endpoint};
pub use error::{AkismetError, ErrorCategory, Result};
pub use execution::http::interceptor::{HttpInterceptor, HttpRequestContext, LoggingInterceptor};
pub use execution::http::transport::{
    HttpTransport, HttpTransportRequest, HttpTransportResponse, ReqwestTransport,
};
pub use types::{CheckResult, Comment, CommentType, ParseCommentTypeError};
pub use utils::cancel::{CancelHandle, new_cancel_handle};

/// Convenient imports for typical usage.
pub mod prelude {
    pub use crate::{
        AkismetBuilder, AkismetClient, AkismetConfig, AkismetError, CancelHandle, CheckResult,
        Comment, CommentType, ErrorCategory, RequestOptions,
    };
}
