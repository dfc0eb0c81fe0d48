//! Response data for a completed round trip.
//!
//! # Design
//! Plain owned data (status, headers, body bytes) with small read-only
//! helpers on top. The dispatcher never consults the status predicates;
//! whether a 404 is an error is strictly the caller's call.

use std::collections::HashMap;

use serde::de::DeserializeOwned;

/// The result of one completed round trip.
#[derive(Debug, Clone)]
pub struct Response {
    /// HTTP status code as received.
    pub status: u16,
    /// Response headers; names as sent by the server.
    pub headers: HashMap<String, String>,
    /// The entire response body.
    pub body: Vec<u8>,
}

impl Response {
    /// Status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Status is in the 4xx range.
    pub fn is_client_error(&self) -> bool {
        (400..500).contains(&self.status)
    }

    /// Status is in the 5xx range.
    pub fn is_server_error(&self) -> bool {
        (500..600).contains(&self.status)
    }

    /// Look up a header by name, case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(k, _)| k.eq_ignore_ascii_case(name))
            .map(|(_, v)| v.as_str())
    }

    /// The body as text. Invalid UTF-8 is replaced, not reported.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }

    /// Deserialize the body as JSON into `T`.
    pub fn json_as<T: DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }
}
