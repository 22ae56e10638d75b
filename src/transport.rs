// ABOUTME: Pluggable HTTP transport abstraction and the reqwest-backed default
// ABOUTME: One blocking send per call; no retries, no response interpretation

use crate::{Error, Result};
use reqwest::blocking::Client;
use reqwest::header::CONTENT_TYPE;
use std::time::Duration;
use url::Url;

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
        }
    }
}

impl From<Method> for reqwest::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::Get => reqwest::Method::GET,
            Method::Post => reqwest::Method::POST,
            Method::Put => reqwest::Method::PUT,
        }
    }
}

/// An outgoing request. `body` is already-serialized JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Request {
    pub method: Method,
    pub url: Url,
    pub body: Option<Vec<u8>>,
}

impl Request {
    pub fn new(method: Method, url: Url) -> Self {
        Request {
            method,
            url,
            body: None,
        }
    }

    pub fn with_body(mut self, body: Vec<u8>) -> Self {
        self.body = Some(body);
        self
    }

    pub fn body_str(&self) -> Option<&str> {
        self.body
            .as_deref()
            .and_then(|b| std::str::from_utf8(b).ok())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    pub status: u16,
    pub body: Vec<u8>,
}

impl Response {
    pub fn new(status: u16) -> Self {
        Response {
            status,
            body: Vec::new(),
        }
    }

    pub fn with_body(mut self, body: impl Into<Vec<u8>>) -> Self {
        self.body = body.into();
        self
    }
}

/// Sends a single request and hands back whatever came back.
///
/// `Ok(None)` means the transport produced neither a response nor an error;
/// callers treat that as a failure of its own kind. Status codes are not
/// interpreted here.
pub trait HttpTransport: Send + Sync {
    fn send(&self, request: &Request) -> Result<Option<Response>>;
}

impl<F> HttpTransport for F
where
    F: Fn(&Request) -> Result<Option<Response>> + Send + Sync,
{
    fn send(&self, request: &Request) -> Result<Option<Response>> {
        self(request)
    }
}

pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(format!("notekeep/{} (Rust)", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| Error::Transport(Box::new(e)))?;

        Ok(ReqwestTransport { client })
    }
}

impl HttpTransport for ReqwestTransport {
    fn send(&self, request: &Request) -> Result<Option<Response>> {
        let mut builder = self
            .client
            .request(request.method.into(), request.url.clone())
            .header("Accept", "application/json");

        // GET /read carries a body too; reqwest sends it as-is.
        if let Some(body) = &request.body {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.clone());
        }

        let response = builder.send().map_err(|e| Error::Transport(Box::new(e)))?;
        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|e| Error::Transport(Box::new(e)))?
            .to_vec();

        Ok(Some(Response { status, body }))
    }
}
