//! Unified entry for test support modules
//!
//! - Stub server helpers (wiremock and mockito)
//! - A recording in-memory transport for tests that need no sockets

#![allow(dead_code)]

pub mod mock_server;

use akismet::{
    AkismetClient, AkismetError, HttpTransport, HttpTransportRequest, HttpTransportResponse,
};
use async_trait::async_trait;
use std::sync::Mutex;

pub const API_KEY: &str = "very-secret";
pub const BLOG: &str = "http://example.com";
pub const USER_IP: &str = "192.0.2.1";

/// Build a client pointed at a stub server.
pub fn client_for(base_url: &str) -> AkismetClient {
    AkismetClient::builder()
        .api_key(API_KEY)
        .base_url(base_url)
        .build()
        .expect("client")
}

/// A transport that records requests and replays canned responses in order.
pub struct RecordingTransport {
    responses: Mutex<Vec<HttpTransportResponse>>,
    pub requests: Mutex<Vec<HttpTransportRequest>>,
}

impl RecordingTransport {
    pub fn new(responses: Vec<HttpTransportResponse>) -> Self {
        Self {
            responses: Mutex::new(responses.into_iter().rev().collect()),
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn always(status: u16, body: &str) -> Self {
        Self::new(vec![HttpTransportResponse::new(status, body); 64])
    }

    pub fn request_bodies(&self) -> Vec<String> {
        self.requests
            .lock()
            .unwrap()
            .iter()
            .map(|r| r.body.clone())
            .collect()
    }
}

#[async_trait]
impl HttpTransport for RecordingTransport {
    async fn execute_form(
        &self,
        request: HttpTransportRequest,
    ) -> Result<HttpTransportResponse, AkismetError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop()
            .ok_or_else(|| AkismetError::TransportError("no canned response left".into()))
    }
}
