//! verify-key against a stub server.

mod support;

use akismet::{AkismetClient, AkismetError, DEFAULT_USER_AGENT};
use support::mock_server::{self, FORM_CONTENT_TYPE};
use support::{API_KEY, BLOG, client_for};
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

#[tokio::test]
async fn valid_key() {
    let server = mock_server::start().await;
    mock_server::mount_text_for_body(
        &server,
        "/verify-key",
        "api_key=very-secret&blog=http%3A%2F%2Fexample.com",
        200,
        "valid",
    )
    .await;

    client_for(&server.uri()).verify_key(BLOG).await.unwrap();
}

#[tokio::test]
async fn invalid_key_carries_server_message() {
    let server = mock_server::start().await;
    Mock::given(method("POST"))
        .and(path("/verify-key"))
        .respond_with(
            mock_server::text(200, "invalid\n")
                .insert_header("X-akismet-debug-help", "We were unable to parse your blog URI"),
        )
        .expect(1)
        .mount(&server)
        .await;

    let err = client_for(&server.uri()).verify_key(BLOG).await.unwrap_err();
    assert_eq!(
        err,
        AkismetError::InvalidKey {
            message: "invalid".into(),
            debug_help: Some("We were unable to parse your blog URI".into()),
        }
    );
}

#[tokio::test]
async fn server_failure_is_unexpected_status() {
    let server = mock_server::start().await;
    mock_server::mount_text(&server, "/verify-key", 500, "valid").await;

    let err = client_for(&server.uri()).verify_key(BLOG).await.unwrap_err();
    assert_eq!(err, AkismetError::UnexpectedStatus { status: 500 });
    assert_eq!(err.status_code(), Some(500));
}

#[tokio::test]
async fn sends_default_user_agent_and_content_type() {
    let server = mock_server::start().await;
    Mock::given(method("POST"))
        .and(path("/verify-key"))
        .and(header("content-type", FORM_CONTENT_TYPE))
        .and(header("user-agent", DEFAULT_USER_AGENT))
        .respond_with(mock_server::text(200, "valid"))
        .expect(1)
        .mount(&server)
        .await;

    client_for(&server.uri()).verify_key(BLOG).await.unwrap();
}

#[tokio::test]
async fn custom_user_agent_and_versioned_base() {
    let server = mock_server::start().await;
    Mock::given(method("POST"))
        .and(path("/1.1/verify-key"))
        .and(header("user-agent", "my-blog/2.1 | akismet/0.1.0"))
        .and(header("x-tenant", "blog-42"))
        .and(body_string("api_key=very-secret&blog=https%3A%2F%2Fblog.example%2F"))
        .respond_with(ResponseTemplate::new(200).set_body_string("valid"))
        .expect(1)
        .mount(&server)
        .await;

    let client = AkismetClient::builder()
        .api_key(API_KEY)
        .base_url(format!("{}/1.1/", server.uri()))
        .user_agent("my-blog/2.1 | akismet/0.1.0")
        .header("X-Tenant", "blog-42")
        .build()
        .unwrap();
    client.verify_key("https://blog.example/").await.unwrap();
}
