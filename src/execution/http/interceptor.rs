//! HTTP Interceptor interfaces
//!
//! Interceptors observe every round trip: they may tweak the outgoing request,
//! see the response, and are told about failures. Hooks run inline on the
//! calling task and should stay cheap.

use crate::error::{AkismetError, Result};
use crate::execution::http::transport::{HttpTransportRequest, HttpTransportResponse};

/// Context passed to interceptors describing the request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HttpRequestContext {
    /// Unique per round trip, for log correlation.
    pub request_id: String,
    /// `verify_key`, `comment_check`, `submit_ham` or `submit_spam`.
    pub operation: String,
    pub url: String,
}

impl HttpRequestContext {
    pub fn new<O: Into<String>, U: Into<String>>(operation: O, url: U) -> Self {
        Self {
            request_id: generate_request_id(),
            operation: operation.into(),
            url: url.into(),
        }
    }
}

pub fn generate_request_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// HTTP interceptor trait
pub trait HttpInterceptor: Send + Sync {
    /// Called before sending. Return the (possibly modified) request, or an
    /// error to short-circuit the round trip.
    fn on_before_send(
        &self,
        _ctx: &HttpRequestContext,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportRequest> {
        Ok(request)
    }

    /// Called once a response arrived, whatever its status.
    fn on_response(
        &self,
        _ctx: &HttpRequestContext,
        _response: &HttpTransportResponse,
    ) -> Result<()> {
        Ok(())
    }

    /// Called when sending fails or the response is classified as an error.
    fn on_error(&self, _ctx: &HttpRequestContext, _error: &AkismetError) {}
}

/// A simple logging interceptor backed by `tracing`.
///
/// Never logs the request body: it carries the API key.
#[derive(Clone, Default)]
pub struct LoggingInterceptor;

impl HttpInterceptor for LoggingInterceptor {
    fn on_before_send(
        &self,
        ctx: &HttpRequestContext,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportRequest> {
        tracing::debug!(target: "akismet::http", request_id=%ctx.request_id, operation=%ctx.operation, url=%ctx.url, "sending request");
        Ok(request)
    }

    fn on_response(&self, ctx: &HttpRequestContext, response: &HttpTransportResponse) -> Result<()> {
        tracing::debug!(target: "akismet::http", request_id=%ctx.request_id, operation=%ctx.operation, status=%response.status, bytes=response.body.len(), "response received");
        Ok(())
    }

    fn on_error(&self, ctx: &HttpRequestContext, error: &AkismetError) {
        tracing::debug!(target: "akismet::http", request_id=%ctx.request_id, operation=%ctx.operation, err=%error, "request error");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderMap;
    use tracing_test::traced_test;

    fn request(ctx: &HttpRequestContext) -> HttpTransportRequest {
        HttpTransportRequest {
            ctx: ctx.clone(),
            url: ctx.url.clone(),
            headers: HeaderMap::new(),
            body: "api_key=secret-key&blog=b".to_string(),
        }
    }

    #[test]
    fn request_ids_are_unique() {
        let a = HttpRequestContext::new("verify_key", "http://localhost/verify-key");
        let b = HttpRequestContext::new("verify_key", "http://localhost/verify-key");
        assert_ne!(a.request_id, b.request_id);
    }

    #[traced_test]
    #[test]
    fn logging_interceptor_logs_without_body() {
        let ctx = HttpRequestContext::new("comment_check", "http://localhost/comment-check");
        let interceptor = LoggingInterceptor;

        let req = interceptor.on_before_send(&ctx, request(&ctx)).unwrap();
        assert_eq!(req.body, "api_key=secret-key&blog=b");
        interceptor
            .on_response(&ctx, &HttpTransportResponse::new(200, "false"))
            .unwrap();
        interceptor.on_error(&ctx, &AkismetError::UnexpectedStatus { status: 502 });

        assert!(logs_contain("sending request"));
        assert!(logs_contain("response received"));
        assert!(logs_contain("Unexpected status code: 502"));
        assert!(logs_contain(&ctx.request_id));
        assert!(!logs_contain("secret-key"));
    }
}
