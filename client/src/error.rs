use bytes::Bytes;
use reqwest::StatusCode;
use serde::Deserialize;
use std::time::Duration;
use thiserror::Error;

/// Outcome of every dispatched call.
///
/// Singular endpoints succeed with exactly one element, collection endpoints
/// with as many elements as the node returned (possibly none).
pub type RestResult<T> = Result<Vec<T>, RestError>;

/// A custom error type for the Gaia REST client.
///
/// Every failure of a dispatched call lands in exactly one variant. The
/// client never retries: callers wanting resilience wrap individual calls.
#[derive(Error, Debug)]
pub enum RestError {
    /// The request never produced a response.
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),
    /// The exchange did not finish within the per-call timeout.
    #[error("request timed out after {0:?}")]
    Timeout(Duration),
    /// The node answered with a status outside 200..=299.
    ///
    /// `body` holds the raw response bytes, `None` only when reading them
    /// failed.
    #[error("node returned HTTP {status}")]
    HttpStatus {
        status: StatusCode,
        body: Option<Bytes>,
    },
    /// A JSON body could not be produced or understood.
    ///
    /// For responses `body` is the raw payload that failed to decode. For
    /// request bodies that failed to serialize it is empty and no network
    /// I/O took place.
    #[error("serialization error: {source}")]
    Decoding {
        #[source]
        source: serde_json::Error,
        body: Bytes,
    },
    /// The caller cancelled the call before it completed.
    #[error("request cancelled")]
    Cancelled,
}

/// Failures that happen before an HTTP status is available.
#[derive(Error, Debug)]
pub enum TransportError {
    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },
    #[error("request error: {0}")]
    Request(#[from] reqwest::Error),
}

/// Error document returned by the REST server on failure.
#[derive(Debug, Deserialize)]
struct NodeErrorBody {
    error: String,
}

impl RestError {
    /// HTTP status of the failed call, if the node answered at all.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            RestError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Raw body preserved with the error, if any.
    pub fn body(&self) -> Option<&Bytes> {
        match self {
            RestError::HttpStatus { body, .. } => body.as_ref(),
            RestError::Decoding { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Message from the node's `{"error": "..."}` document, when the body of
    /// a failed call carries one.
    pub fn api_message(&self) -> Option<String> {
        let RestError::HttpStatus {
            body: Some(body), ..
        } = self
        else {
            return None;
        };
        serde_json::from_slice::<NodeErrorBody>(body)
            .ok()
            .map(|doc| doc.error)
    }

    pub fn is_timeout(&self) -> bool {
        matches!(self, RestError::Timeout(_))
    }

    /// Maps a reqwest failure, keeping timeouts reported by reqwest itself in
    /// the `Timeout` variant.
    pub(crate) fn from_reqwest(error: reqwest::Error, timeout: Duration) -> Self {
        if error.is_timeout() {
            RestError::Timeout(timeout)
        } else {
            RestError::Transport(TransportError::Request(error))
        }
    }
}
