//! Mock transport for testing: canned responses, recorded requests.
//!
//! Use this to drive a [`Client`](crate::Client) without network access.
//!
//! ```
//! use stockfighter::Client;
//! use stockfighter::mock::MockTransport;
//!
//! let transport = MockTransport::builder()
//!     .respond(200, r#"{"ok": true, "error": ""}"#)
//!     .build();
//! let client = Client::with_transport("api-key", &transport);
//!
//! client.heartbeat().unwrap();
//! assert_eq!(transport.requests().len(), 1);
//! ```

use std::collections::VecDeque;
use std::sync::Mutex;

use crate::error::{Error, Result};
use crate::transport::{Method, Request, Response, Transport};

/// A request as seen by the mock, including the key it was sent with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecordedRequest {
    pub method: Method,
    pub path: String,
    pub body: Option<String>,
    /// The API key header value, `None` when the request was unauthenticated.
    pub api_key: Option<String>,
}

impl RecordedRequest {
    /// Parse the recorded body as JSON.
    pub fn json_body(&self) -> Option<serde_json::Value> {
        self.body
            .as_deref()
            .and_then(|b| serde_json::from_str(b).ok())
    }
}

#[derive(Clone, Debug)]
enum Reply {
    Respond(Response),
    Fail(String),
}

/// Builder for `MockTransport`.
pub struct MockTransportBuilder {
    queued: VecDeque<Reply>,
    fallback: Option<Reply>,
}

impl MockTransportBuilder {
    /// Queue a response; queued replies are used in order, one per request.
    pub fn respond(mut self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.queued
            .push_back(Reply::Respond(Response::new(status, body)));
        self
    }

    /// Queue a JSON value as a response body.
    pub fn respond_json(self, status: u16, body: &serde_json::Value) -> Self {
        self.respond(status, body.to_string())
    }

    /// Queue a transport-level failure.
    pub fn fail(mut self, message: impl Into<String>) -> Self {
        self.queued.push_back(Reply::Fail(message.into()));
        self
    }

    /// Response used once the queue is exhausted.
    pub fn fallback(mut self, status: u16, body: impl Into<Vec<u8>>) -> Self {
        self.fallback = Some(Reply::Respond(Response::new(status, body)));
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            queued: Mutex::new(self.queued),
            fallback: self.fallback,
            requests: Mutex::new(Vec::new()),
        }
    }
}

/// A transport that answers from a script and records what it was asked.
///
/// With the script and fallback both exhausted, requests fail as a transport
/// error.
pub struct MockTransport {
    queued: Mutex<VecDeque<Reply>>,
    fallback: Option<Reply>,
    requests: Mutex<Vec<RecordedRequest>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            queued: VecDeque::new(),
            fallback: None,
        }
    }

    /// A transport that answers every request with the same response.
    pub fn always(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self::builder().fallback(status, body).build()
    }

    /// All requests received so far (for assertion in tests).
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .clone()
    }

    /// The most recent request, if any.
    pub fn last_request(&self) -> Option<RecordedRequest> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .last()
            .cloned()
    }

    /// Number of requests received so far.
    pub fn request_count(&self) -> usize {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .len()
    }
}

impl Transport for MockTransport {
    fn send(&self, request: &Request, api_key: &str) -> Result<Response> {
        self.requests
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .push(RecordedRequest {
                method: request.method,
                path: request.path.clone(),
                body: request.body.clone(),
                api_key: request.authenticated.then(|| api_key.to_string()),
            });

        let reply = self
            .queued
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .pop_front()
            .or_else(|| self.fallback.clone());

        match reply {
            Some(Reply::Respond(resp)) => Ok(resp),
            Some(Reply::Fail(message)) => Err(Error::transport(message)),
            None => Err(Error::transport("mock: no response scripted")),
        }
    }
}
