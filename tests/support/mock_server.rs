//! Stub server utilities
//!
//! Goals:
//! - One place that knows how to stand up a wiremock or mockito server
//! - Plaintext response helpers matching what the service returns

#![allow(dead_code)]

use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Start a wiremock server
pub async fn start() -> MockServer {
    MockServer::start().await
}

/// Start an async mockito server
pub async fn start_mockito() -> mockito::ServerGuard {
    mockito::Server::new_async().await
}

/// Plaintext response, the way the service answers every call.
pub fn text(status: u16, body: &str) -> ResponseTemplate {
    ResponseTemplate::new(status).set_body_raw(body.as_bytes().to_vec(), "text/plain; charset=utf-8")
}

/// Mount a form POST stub for `route` answering `status` / `body`.
pub async fn mount_text(server: &MockServer, route: &str, status: u16, body: &str) {
    Mock::given(method("POST"))
        .and(path(route))
        .and(header("content-type", FORM_CONTENT_TYPE))
        .respond_with(text(status, body))
        .expect(1)
        .mount(server)
        .await;
}

/// Like [`mount_text`] but also requires an exact request body.
pub async fn mount_text_for_body(
    server: &MockServer,
    route: &str,
    expected_body: &str,
    status: u16,
    body: &str,
) {
    Mock::given(method("POST"))
        .and(path(route))
        .and(header("content-type", FORM_CONTENT_TYPE))
        .and(body_string(expected_body))
        .respond_with(text(status, body))
        .expect(1)
        .mount(server)
        .await;
}
