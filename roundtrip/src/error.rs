//! Error types for the round-trip dispatcher.
//!
//! # Design
//! One variant per failure site, in the order they can occur: the request
//! could not be built, the transport failed before a complete response
//! arrived, or the body could not be drained after status and headers were
//! already in hand. `BodyRead` and `UnexpectedStatus` keep the status (and,
//! for the latter, the body) because callers debugging a failed exchange
//! want whatever the server managed to say.

/// Errors returned by [`Request::send`](crate::Request::send) and friends.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The request could not be assembled: the URL is unset or is not an
    /// absolute, parseable URL. Raised before any I/O.
    #[error("request construction failed: {0}")]
    Construction(String),

    /// The round trip failed before a complete response arrived: DNS
    /// resolution, connect, TLS handshake, or the timeout elapsing.
    #[error("transport failure: {0}")]
    Transport(#[source] ureq::Error),

    /// Status and headers were received but reading the body failed. The
    /// already-known status code is preserved.
    #[error("reading response body failed (status {status}): {source}")]
    BodyRead {
        status: u16,
        #[source]
        source: ureq::Error,
    },

    /// The round trip completed but the status differed from the value the
    /// caller passed to
    /// [`Request::send_expecting`](crate::Request::send_expecting).
    #[error("unexpected status {actual} (expected {expected})")]
    UnexpectedStatus {
        expected: u16,
        actual: u16,
        body: Vec<u8>,
    },
}

impl Error {
    /// The HTTP status tied to this failure, where one is known.
    ///
    /// Construction and transport failures happen before any status exists,
    /// so they return `None`.
    pub fn status(&self) -> Option<u16> {
        match self {
            Error::BodyRead { status, .. } => Some(*status),
            Error::UnexpectedStatus { actual, .. } => Some(*actual),
            Error::Construction(_) | Error::Transport(_) => None,
        }
    }
}
