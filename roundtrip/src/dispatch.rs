//! The dispatcher: one blocking, timeout-bounded round trip.
//!
//! # Design
//! The URL is validated first so construction failures never touch the
//! network. A fresh agent is built per call (connection reuse is out of
//! scope) with the effective timeout installed as the global timeout, which
//! bounds DNS resolution, connect, TLS handshake, and body transfer in one
//! budget. Status-as-error is disabled on the agent: a completed exchange is
//! data, whatever the code, and the two failure sites that remain (sending,
//! draining the body) are classified by site rather than by error type.

use std::collections::HashMap;

use log::debug;
use url::Url;

use crate::error::Error;
use crate::request::{Method, Request};
use crate::response::Response;

/// Run one round trip for `req`. `expected` is the optional status
/// comparison from `send_expecting`; `None` accepts any status.
pub(crate) fn execute(
    req: &Request,
    method: Method,
    expected: Option<u16>,
) -> Result<Response, Error> {
    let raw = req
        .url()
        .ok_or_else(|| Error::Construction("request URL is not set".to_string()))?;
    let url = Url::parse(raw)
        .map_err(|e| Error::Construction(format!("invalid URL {raw:?}: {e}")))?;

    let timeout = req.effective_timeout();
    let agent = ureq::Agent::config_builder()
        .http_status_as_error(false)
        .timeout_global(Some(timeout))
        .build()
        .new_agent();

    debug!("dispatching {method} {url} (timeout {timeout:?})");

    let result = match (method, req.body()) {
        (Method::Get, _) => with_headers(agent.get(url.as_str()), req.headers()).call(),
        (Method::Post, Some(body)) => {
            with_headers(agent.post(url.as_str()), req.headers()).send(body)
        }
        (Method::Post, None) => {
            with_headers(agent.post(url.as_str()), req.headers()).send_empty()
        }
        (Method::Put, Some(body)) => {
            with_headers(agent.put(url.as_str()), req.headers()).send(body)
        }
        (Method::Put, None) => with_headers(agent.put(url.as_str()), req.headers()).send_empty(),
        (Method::Patch, Some(body)) => {
            with_headers(agent.patch(url.as_str()), req.headers()).send(body)
        }
        (Method::Patch, None) => {
            with_headers(agent.patch(url.as_str()), req.headers()).send_empty()
        }
    };

    let mut response = result.map_err(Error::Transport)?;

    let status = response.status().as_u16();
    let headers = collect_headers(&response);
    let body = response
        .body_mut()
        .read_to_vec()
        .map_err(|source| Error::BodyRead { status, source })?;

    if let Some(expected) = expected {
        if status != expected {
            return Err(Error::UnexpectedStatus {
                expected,
                actual: status,
                body,
            });
        }
    }

    Ok(Response {
        status,
        headers,
        body,
    })
}

/// Copy every configured header onto the outgoing request builder.
fn with_headers<B>(
    builder: ureq::RequestBuilder<B>,
    headers: &HashMap<String, String>,
) -> ureq::RequestBuilder<B> {
    headers
        .iter()
        .fold(builder, |b, (k, v)| b.header(k.as_str(), v.as_str()))
}

/// Capture response headers into a plain map, skipping values that are not
/// valid UTF-8.
fn collect_headers(response: &ureq::http::Response<ureq::Body>) -> HashMap<String, String> {
    let mut headers = HashMap::new();
    for (name, value) in response.headers() {
        if let Ok(v) = value.to_str() {
            headers.insert(name.as_str().to_string(), v.to_string());
        }
    }
    headers
}
