//! Akismet Client Implementation
//!
//! One method per remote operation. Every call is a single round trip:
//! resolve the endpoint, encode the form, send it through the transport,
//! interpret the response. Nothing is retried.

use std::sync::Arc;
use std::time::Duration;

use crate::builder::AkismetBuilder;
use crate::config::AkismetConfig;
use crate::endpoint::{self, Endpoint};
use crate::error::{AkismetError, Result};
use crate::execution::http::headers::HttpHeaderBuilder;
use crate::execution::http::interceptor::{HttpInterceptor, HttpRequestContext};
use crate::execution::http::transport::{
    HttpTransport, HttpTransportRequest, HttpTransportResponse, ReqwestTransport,
};
use crate::form::{self, FormBody};
use crate::response;
use crate::types::{CheckResult, Comment};
use crate::utils::cancel::{CancelHandle, run_cancellable};

/// Per-call cancellation and deadline.
#[derive(Debug, Clone, Default)]
pub struct RequestOptions {
    /// Aborts the call when cancelled.
    pub cancel: Option<CancelHandle>,
    /// Upper bound for the whole round trip.
    pub timeout: Option<Duration>,
}

impl RequestOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_cancel(mut self, cancel: CancelHandle) -> Self {
        self.cancel = Some(cancel);
        self
    }

    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Akismet Client
///
/// Cheap to clone; clones share the transport and interceptors and can be
/// used from any number of tasks at once.
#[derive(Clone)]
pub struct AkismetClient {
    config: AkismetConfig,
    transport: Arc<dyn HttpTransport>,
    http_interceptors: Vec<Arc<dyn HttpInterceptor>>,
}

impl std::fmt::Debug for AkismetClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AkismetClient")
            .field("base_url", &self.config.base_url())
            .field("user_agent", &self.config.user_agent())
            .field("has_custom_transport", &self.config.http_transport.is_some())
            .field("interceptors", &self.http_interceptors.len())
            .finish()
    }
}

impl AkismetClient {
    /// Create a client from a configuration.
    ///
    /// The configuration is not validated here; a bad base URL surfaces as a
    /// [`AkismetError::ConfigurationError`] from the first call. Use
    /// [`AkismetClient::builder`] for up-front validation.
    pub fn new(config: AkismetConfig) -> Result<Self> {
        let transport: Arc<dyn HttpTransport> = match &config.http_transport {
            Some(transport) => transport.clone(),
            None => Arc::new(ReqwestTransport::from_config(&config.http_config)?),
        };
        Ok(Self {
            config,
            transport,
            http_interceptors: Vec::new(),
        })
    }

    /// Create a client that sends through an existing `reqwest::Client`.
    pub fn with_http_client(config: AkismetConfig, http_client: reqwest::Client) -> Self {
        let transport: Arc<dyn HttpTransport> = match &config.http_transport {
            Some(transport) => transport.clone(),
            None => Arc::new(ReqwestTransport::new(http_client)),
        };
        Self {
            config,
            transport,
            http_interceptors: Vec::new(),
        }
    }

    pub fn builder() -> AkismetBuilder {
        AkismetBuilder::new()
    }

    /// Install HTTP interceptors for all requests.
    pub fn with_http_interceptors(mut self, interceptors: Vec<Arc<dyn HttpInterceptor>>) -> Self {
        self.http_interceptors = interceptors;
        self
    }

    pub fn config(&self) -> &AkismetConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        self.config.base_url()
    }

    /// Check that the API key is valid for `blog`.
    pub async fn verify_key(&self, blog: &str) -> Result<()> {
        self.verify_key_with_options(blog, &RequestOptions::default())
            .await
    }

    pub async fn verify_key_with_options(&self, blog: &str, options: &RequestOptions) -> Result<()> {
        let form = form::verify_key_form(&self.config.api_key, blog);
        self.round_trip(Endpoint::VerifyKey, form, options, response::interpret_verify_key)
            .await
    }

    /// Ask whether `comment` is spam.
    pub async fn check_comment(&self, comment: &Comment) -> Result<CheckResult> {
        self.check_comment_with_options(comment, &RequestOptions::default())
            .await
    }

    pub async fn check_comment_with_options(
        &self,
        comment: &Comment,
        options: &RequestOptions,
    ) -> Result<CheckResult> {
        let form = form::comment_form(&self.config.api_key, comment);
        self.round_trip(
            Endpoint::CommentCheck,
            form,
            options,
            response::interpret_comment_check,
        )
        .await
    }

    /// Report a false positive: content that was wrongly classified as spam.
    pub async fn submit_ham(&self, comment: &Comment) -> Result<()> {
        self.submit_ham_with_options(comment, &RequestOptions::default())
            .await
    }

    pub async fn submit_ham_with_options(
        &self,
        comment: &Comment,
        options: &RequestOptions,
    ) -> Result<()> {
        let form = form::comment_form(&self.config.api_key, comment);
        self.round_trip(Endpoint::SubmitHam, form, options, response::interpret_submission)
            .await
    }

    /// Report a false negative: spam that was not caught.
    pub async fn submit_spam(&self, comment: &Comment) -> Result<()> {
        self.submit_spam_with_options(comment, &RequestOptions::default())
            .await
    }

    pub async fn submit_spam_with_options(
        &self,
        comment: &Comment,
        options: &RequestOptions,
    ) -> Result<()> {
        let form = form::comment_form(&self.config.api_key, comment);
        self.round_trip(Endpoint::SubmitSpam, form, options, response::interpret_submission)
            .await
    }

    /// Build the transport request for `endpoint`. Fails before any I/O.
    fn prepare(&self, endpoint: Endpoint, form: &FormBody) -> Result<HttpTransportRequest> {
        let url = endpoint::resolve(Some(self.config.base_url()), endpoint)?;
        let headers = HttpHeaderBuilder::new()
            .with_form_content_type()
            .with_user_agent(self.config.user_agent())?
            .with_extra_headers(&self.config.http_config.headers)?
            .build();
        let ctx = HttpRequestContext::new(endpoint.operation(), url.as_str());
        Ok(HttpTransportRequest {
            ctx,
            url: url.into(),
            headers,
            body: form.encode(),
        })
    }

    async fn round_trip<T>(
        &self,
        endpoint: Endpoint,
        form: FormBody,
        options: &RequestOptions,
        interpret: fn(&HttpTransportResponse) -> Result<T>,
    ) -> Result<T> {
        let mut request = self.prepare(endpoint, &form)?;
        let ctx = request.ctx.clone();

        for interceptor in &self.http_interceptors {
            request = match interceptor.on_before_send(&ctx, request) {
                Ok(request) => request,
                Err(e) => return Err(self.notify_error(&ctx, e)),
            };
        }

        let sent = run_cancellable(
            self.transport.execute_form(request),
            options.cancel.as_ref(),
            options.timeout,
        )
        .await;
        let resp = match sent {
            Ok(resp) => resp,
            Err(e) => return Err(self.notify_error(&ctx, e)),
        };

        for interceptor in &self.http_interceptors {
            if let Err(e) = interceptor.on_response(&ctx, &resp) {
                return Err(self.notify_error(&ctx, e));
            }
        }

        interpret(&resp).map_err(|e| self.notify_error(&ctx, e))
    }

    fn notify_error(&self, ctx: &HttpRequestContext, error: AkismetError) -> AkismetError {
        for interceptor in &self.http_interceptors {
            interceptor.on_error(ctx, &error);
        }
        error
    }
}
