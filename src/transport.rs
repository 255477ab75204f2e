//! The network seam: plain request/response values and the `Transport` trait.
//!
//! Implementations:
//!
//! - [`HttpTransport`](crate::http::HttpTransport) (feature `http`): blocking reqwest
//! - [`MockTransport`](crate::mock::MockTransport): canned responses for tests

use std::fmt;

use crate::error::Result;

/// Header carrying the API key on authenticated requests.
pub const AUTH_HEADER: &str = "X-Starfighter-Authorization";

/// HTTP methods used by the API.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Method {
    Get,
    Post,
    Delete,
}

impl Method {
    pub fn as_str(self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Delete => "DELETE",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An outbound API call, relative to the configured base URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    /// Path below the base URL, starting with `/`.
    pub path: String,
    /// JSON body, if any.
    pub body: Option<String>,
    /// Whether the API key header must be attached.
    pub authenticated: bool,
}

impl Request {
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            method: Method::Get,
            path: path.into(),
            body: None,
            authenticated: true,
        }
    }

    pub fn post(path: impl Into<String>, body: String) -> Self {
        Self {
            method: Method::Post,
            path: path.into(),
            body: Some(body),
            authenticated: true,
        }
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self {
            method: Method::Delete,
            path: path.into(),
            body: None,
            authenticated: true,
        }
    }

    /// Send without the API key header.
    pub fn unauthenticated(mut self) -> Self {
        self.authenticated = false;
        self
    }
}

/// Status code and raw body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Something that can carry a [`Request`] to the API and bring back a [`Response`].
///
/// Any status code is a successful send. Only failures to obtain a response
/// at all (connection refused, timeouts, unreadable body) are errors, and
/// they must be reported as [`Error::Transport`](crate::Error::Transport).
pub trait Transport: Send + Sync {
    fn send(&self, request: &Request, api_key: &str) -> Result<Response>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &Request, api_key: &str) -> Result<Response> {
        (**self).send(request, api_key)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &Request, api_key: &str) -> Result<Response> {
        (**self).send(request, api_key)
    }
}

impl<T: Transport + ?Sized> Transport for std::sync::Arc<T> {
    fn send(&self, request: &Request, api_key: &str) -> Result<Response> {
        (**self).send(request, api_key)
    }
}
