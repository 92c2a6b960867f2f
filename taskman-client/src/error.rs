/// Client error types
///
/// The containers collapse these to a boolean error flag or a log line;
/// the distinction between transport and server failure exists for
/// logging and for direct users of [`crate::http::TasksClient`].

use reqwest::StatusCode;

/// Client result type alias
pub type ClientResult<T> = Result<T, ClientError>;

/// Errors produced by the API transport
#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// The configured base URL does not parse
    #[error("invalid API base url: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The request never produced a response (connect, timeout, body
    /// decode)
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// The server answered with a non-success status
    #[error("server returned {status}: {body}")]
    Api { status: StatusCode, body: String },
}
