//! Request configuration and the verb-level API.
//!
//! # Design
//! `Request` is a bag of optional fields the caller fills in before sending.
//! Setters never validate; a URL that does not parse, for example, is only
//! reported when the request is dispatched. The timeout rule lives in
//! `effective_timeout` so the substitution is visible and testable rather
//! than buried in the dispatcher.

use std::collections::HashMap;
use std::fmt;
use std::time::Duration;

use crate::dispatch;
use crate::error::Error;
use crate::response::Response;

/// Timeout applied when a request has none configured (or a zero value).
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// HTTP method for a round trip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Patch => "PATCH",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Configuration for one HTTP round trip.
///
/// Owned entirely by the caller and mutable until sent. Sending borrows the
/// configuration, so the same `Request` can be dispatched again afterwards.
#[derive(Debug, Clone, Default)]
pub struct Request {
    url: Option<String>,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
}

impl Request {
    /// An empty request. Every field must be set before it is useful.
    pub fn new() -> Self {
        Self::default()
    }

    /// A request with URL, headers, and body filled in, using the default
    /// timeout.
    pub fn from_parts(
        url: impl Into<String>,
        headers: HashMap<String, String>,
        body: Option<Vec<u8>>,
    ) -> Self {
        Self {
            url: Some(url.into()),
            headers,
            body,
            timeout: None,
        }
    }

    /// Like [`Request::from_parts`] but with an explicit timeout in seconds.
    /// Zero seconds means "use the default".
    pub fn with_timeout(
        url: impl Into<String>,
        headers: HashMap<String, String>,
        body: Option<Vec<u8>>,
        timeout_secs: u64,
    ) -> Self {
        Self {
            url: Some(url.into()),
            headers,
            body,
            timeout: Some(Duration::from_secs(timeout_secs)),
        }
    }

    pub fn set_url(&mut self, url: impl Into<String>) {
        self.url = Some(url.into());
    }

    /// Replace the whole header map.
    pub fn set_headers(&mut self, headers: HashMap<String, String>) {
        self.headers = headers;
    }

    /// Insert or overwrite a single header entry.
    pub fn set_header(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.headers.insert(key.into(), value.into());
    }

    pub fn set_body(&mut self, body: impl Into<Vec<u8>>) {
        self.body = Some(body.into());
    }

    pub fn set_timeout(&mut self, timeout: Duration) {
        self.timeout = Some(timeout);
    }

    /// Set the timeout in whole seconds. Zero means "use the default".
    pub fn set_timeout_secs(&mut self, secs: u64) {
        self.timeout = Some(Duration::from_secs(secs));
    }

    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    pub fn headers(&self) -> &HashMap<String, String> {
        &self.headers
    }

    pub fn body(&self) -> Option<&[u8]> {
        self.body.as_deref()
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// The timeout the dispatcher will actually apply: the configured value,
    /// or [`DEFAULT_TIMEOUT`] when none is set or the value is zero.
    pub fn effective_timeout(&self) -> Duration {
        match self.timeout {
            Some(t) if !t.is_zero() => t,
            _ => DEFAULT_TIMEOUT,
        }
    }

    /// Perform one round trip with the given method.
    ///
    /// The URL must be set and parse as an absolute URL, otherwise this
    /// fails with [`Error::Construction`] before any I/O happens. A
    /// configured body is sent with POST, PUT, and PATCH; GET dispatches
    /// without one. A completed round trip is `Ok` regardless of the status
    /// code; 4xx/5xx interpretation is left to the caller.
    pub fn send(&self, method: Method) -> Result<Response, Error> {
        dispatch::execute(self, method, None)
    }

    /// Like [`Request::send`], but when `expected` is `Some`, fail with
    /// [`Error::UnexpectedStatus`] unless the final status matches it.
    pub fn send_expecting(
        &self,
        method: Method,
        expected: Option<u16>,
    ) -> Result<Response, Error> {
        dispatch::execute(self, method, expected)
    }

    pub fn get(&self) -> Result<Response, Error> {
        self.send(Method::Get)
    }

    pub fn post(&self) -> Result<Response, Error> {
        self.send(Method::Post)
    }

    pub fn put(&self) -> Result<Response, Error> {
        self.send(Method::Put)
    }

    pub fn patch(&self) -> Result<Response, Error> {
        self.send(Method::Patch)
    }
}
