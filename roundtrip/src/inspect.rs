//! Best-effort payload inspection over HTTP.
//!
//! # Design
//! For dropping ad-hoc JSON payloads onto a request-collecting endpoint
//! (a posthere.io-style bin, or this workspace's mock server inbox) while
//! debugging. The endpoint is injected at construction, nothing is
//! hardcoded, and `submit` is fire-and-forget: inspection must never make
//! the surrounding code path fail, so problems are logged and swallowed.

use std::collections::HashMap;

use log::{debug, warn};
use serde::Serialize;

use crate::request::Request;

/// Posts JSON payloads to a fixed inspection endpoint.
#[derive(Debug, Clone)]
pub struct Inspector {
    endpoint: String,
    timeout_secs: Option<u64>,
}

impl Inspector {
    /// An inspector posting to `endpoint` with the default request timeout.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: None,
        }
    }

    /// An inspector with an explicit per-post timeout in seconds.
    pub fn with_timeout(endpoint: impl Into<String>, timeout_secs: u64) -> Self {
        Self {
            endpoint: endpoint.into(),
            timeout_secs: Some(timeout_secs),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Serialize `payload` as JSON and POST it to the configured endpoint.
    ///
    /// Best-effort: serialization and dispatch failures are logged at `warn`
    /// and otherwise ignored, as is the response status.
    pub fn submit<T: Serialize>(&self, payload: &T) {
        let body = match serde_json::to_vec(payload) {
            Ok(b) => b,
            Err(e) => {
                warn!(
                    "inspection payload for {} did not serialize: {e}",
                    self.endpoint
                );
                return;
            }
        };

        let mut headers = HashMap::new();
        headers.insert("content-type".to_string(), "application/json".to_string());

        let request = match self.timeout_secs {
            Some(secs) => {
                Request::with_timeout(self.endpoint.as_str(), headers, Some(body), secs)
            }
            None => Request::from_parts(self.endpoint.as_str(), headers, Some(body)),
        };

        match request.post() {
            Ok(resp) => debug!(
                "inspection endpoint {} answered {}",
                self.endpoint, resp.status
            ),
            Err(e) => warn!("inspection post to {} failed: {e}", self.endpoint),
        }
    }
}
