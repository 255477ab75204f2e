//! Blocking HTTP transport backed by reqwest.

use log::debug;
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;

use crate::client::ClientConfig;
use crate::error::{Error, Result};
use crate::transport::{AUTH_HEADER, Method, Request, Response, Transport};

/// Sends requests to `base_url` over HTTPS.
///
/// The underlying reqwest client pools connections and is safe to share
/// across threads.
#[derive(Debug, Clone)]
pub struct HttpTransport {
    client: Client,
    base_url: String,
}

impl HttpTransport {
    /// Build a transport from the client configuration.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(Error::transport)?;

        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Transport for HttpTransport {
    fn send(&self, request: &Request, api_key: &str) -> Result<Response> {
        let url = self.url(&request.path);
        let mut builder = match request.method {
            Method::Get => self.client.get(&url),
            Method::Post => self.client.post(&url),
            Method::Delete => self.client.delete(&url),
        };

        builder = builder.header(CONTENT_TYPE, "application/json");
        if request.authenticated {
            builder = builder.header(AUTH_HEADER, api_key);
        }
        if let Some(body) = &request.body {
            builder = builder.body(body.clone());
        }

        debug!("{} {url}", request.method);

        let resp = builder.send().map_err(Error::transport)?;
        let status = resp.status().as_u16();
        let body = resp.bytes().map_err(Error::transport)?;

        debug!("{} {url} -> {status} ({} bytes)", request.method, body.len());

        Ok(Response {
            status,
            body: body.to_vec(),
        })
    }
}
