//! Minimal blocking HTTP round-trip helper.
//!
//! # Overview
//! A [`Request`] holds configuration (URL, headers, body, timeout) and
//! `send` performs exactly one timeout-bounded round trip, returning the
//! response status and body. There is no retry policy and no connection
//! reuse: one call, one round trip.
//!
//! # Design
//! - `Request` is plain owned data; setters mutate it freely until it is
//!   sent. Nothing is validated at set time, so a malformed URL only
//!   surfaces when `send` runs.
//! - The configured timeout bounds the whole round trip (DNS, connect, TLS
//!   handshake, body transfer). Unset or zero means [`DEFAULT_TIMEOUT`].
//! - A completed round trip is `Ok` no matter the status code; interpreting
//!   4xx/5xx is the caller's business. `send_expecting` opts into a status
//!   comparison when the caller wants one.
//! - Failures are values: construction, transport, and body-read problems
//!   each get their own [`Error`] variant.

mod dispatch;
pub mod error;
pub mod inspect;
pub mod request;
pub mod response;

pub use error::Error;
pub use inspect::Inspector;
pub use request::{Method, Request, DEFAULT_TIMEOUT};
pub use response::Response;
