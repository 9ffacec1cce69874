//! Error taxonomy for the client.
//!
//! Services never handle failures locally; every variant here propagates to
//! the caller. Cancellation of a streaming decode is not an error and does
//! not appear in this enum.

use reqwest::StatusCode;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure: connect, TLS, or a body read that died
    /// mid-stream.
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-2xx status.
    #[error("API error ({status}): {body}")]
    Api { status: StatusCode, body: String },

    /// A response payload did not decode as the expected JSON shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// A completed NDJSON line in a streaming response was not a valid
    /// event. Carries the raw offending line; terminal for that stream.
    #[error("malformed stream line {line:?}: {source}")]
    Parse {
        line: String,
        source: serde_json::Error,
    },

    /// A completed stream line was not valid UTF-8.
    #[error("invalid UTF-8 in response stream: {0}")]
    Utf8(#[from] std::str::Utf8Error),

    /// Local failure reading configuration or resolving credentials.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A path could not be joined onto the configured base URL.
    #[error("invalid URL: {0}")]
    Url(String),
}
