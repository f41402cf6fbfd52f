use reqwest::Method;
use serde::Serialize;
use std::time::Duration;

/// Marker for requests that carry no payload.
///
/// Encodes to nothing: passing it as a body sends no bytes and no
/// `Content-Type`, same as leaving the body out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EmptyBody;

/// A request payload the dispatcher knows how to encode.
///
/// Implemented for every `Serialize` type (encoded as JSON) and for
/// [`EmptyBody`] (encoded as no payload at all).
pub trait RequestBody {
    /// JSON bytes to send, or `None` when there is no payload.
    fn to_json(&self) -> Result<Option<Vec<u8>>, serde_json::Error>;
}

impl<T: Serialize + ?Sized> RequestBody for T {
    fn to_json(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        serde_json::to_vec(self).map(Some)
    }
}

impl RequestBody for EmptyBody {
    fn to_json(&self) -> Result<Option<Vec<u8>>, serde_json::Error> {
        Ok(None)
    }
}

/// How a successful response body is decoded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeMode {
    /// The body is one JSON value, returned as a one-element sequence.
    Single,
    /// The body is a JSON array, returned element for element.
    #[default]
    Collection,
}

/// Everything the dispatcher needs for one call.
///
/// Built fresh for every call and consumed by
/// [`GaiaClient::request`](crate::GaiaClient::request).
#[derive(Debug, Clone)]
pub struct RestRequest<'a, B: ?Sized = EmptyBody> {
    pub method: Method,
    /// Appended to the connection's base URL. Expected to start with `/`.
    pub path: String,
    /// Escaped and appended in order as `?name=value&...`.
    pub query: Vec<(String, String)>,
    pub body: Option<&'a B>,
    /// Per-call timeout; `None` uses the client's default.
    pub timeout: Option<Duration>,
    pub mode: DecodeMode,
}

impl RestRequest<'_, EmptyBody> {
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    pub fn new(method: Method, path: impl Into<String>) -> Self {
        RestRequest {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            timeout: None,
            mode: DecodeMode::default(),
        }
    }
}

impl<'a, B: RequestBody + ?Sized> RestRequest<'a, B> {
    pub fn post(path: impl Into<String>, body: &'a B) -> Self {
        Self::with_body(Method::POST, path, body)
    }

    pub fn put(path: impl Into<String>, body: &'a B) -> Self {
        Self::with_body(Method::PUT, path, body)
    }

    pub fn with_body(method: Method, path: impl Into<String>, body: &'a B) -> Self {
        RestRequest {
            method,
            path: path.into(),
            query: Vec::new(),
            body: Some(body),
            timeout: None,
            mode: DecodeMode::default(),
        }
    }
}

impl<B: ?Sized> RestRequest<'_, B> {
    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn mode(mut self, mode: DecodeMode) -> Self {
        self.mode = mode;
        self
    }

    pub fn single(self) -> Self {
        self.mode(DecodeMode::Single)
    }
}
