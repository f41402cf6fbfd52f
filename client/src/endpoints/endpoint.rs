use reqwest::Method;
use serde::{de::DeserializeOwned, Serialize};
use std::{marker::PhantomData, time::Duration};

use crate::request::{DecodeMode, EmptyBody, RequestBody};

/// A trait representing a Gaia REST endpoint.
///
/// This trait defines the necessary components for an API endpoint, including the request
/// and response types, the HTTP method, and the URL path. By implementing this trait,
/// a type can be used with the generic [`send`](crate::GaiaClient::send) method of the
/// `GaiaClient`.
pub trait Endpoint {
    /// The type of the request body.
    type Request: RequestBody;
    /// The type of one response item. Must be deserializable.
    type Response: DeserializeOwned;

    /// Returns the HTTP method for this endpoint.
    fn method(&self) -> Method;

    /// Returns the URL path for this endpoint, parameters already substituted.
    fn path(&self) -> String;

    /// Whether the node answers with one object or with an array.
    fn mode(&self) -> DecodeMode;

    /// Query parameters, in order.
    fn query(&self) -> Vec<(String, String)> {
        Vec::new()
    }

    /// Returns the request body, if the endpoint sends one.
    fn request_body(&self) -> Option<&Self::Request> {
        None
    }

    /// Per-endpoint timeout overriding the client default.
    fn timeout(&self) -> Option<Duration> {
        None
    }
}

/// An endpoint without request body.
#[derive(Debug, Clone)]
pub struct Route<T> {
    method: Method,
    path: String,
    query: Vec<(String, String)>,
    mode: DecodeMode,
    timeout: Option<Duration>,
    _response: PhantomData<fn() -> T>,
}

impl<T> Route<T> {
    /// `GET` answered by a single object.
    pub fn single(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, DecodeMode::Single)
    }

    /// `GET` answered by an array.
    pub fn collection(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path, DecodeMode::Collection)
    }

    pub fn new(method: Method, path: impl Into<String>, mode: DecodeMode) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            mode,
            timeout: None,
            _response: PhantomData,
        }
    }

    pub fn query(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((name.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

impl<T: DeserializeOwned> Endpoint for Route<T> {
    type Request = EmptyBody;
    type Response = T;

    fn method(&self) -> Method {
        self.method.clone()
    }

    fn path(&self) -> String {
        self.path.clone()
    }

    fn mode(&self) -> DecodeMode {
        self.mode
    }

    fn query(&self) -> Vec<(String, String)> {
        self.query.clone()
    }

    fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

/// An endpoint sending a JSON body and answered by a single object.
#[derive(Debug)]
pub struct Submit<'a, B, T> {
    method: Method,
    path: String,
    body: &'a B,
    _response: PhantomData<fn() -> T>,
}

impl<'a, B, T> Submit<'a, B, T> {
    pub fn post(path: impl Into<String>, body: &'a B) -> Self {
        Self::new(Method::POST, path, body)
    }

    pub fn put(path: impl Into<String>, body: &'a B) -> Self {
        Self::new(Method::PUT, path, body)
    }

    pub fn delete(path: impl Into<String>, body: &'a B) -> Self {
        Self::new(Method::DELETE, path, body)
    }

    pub fn new(method: Method, path: impl Into<String>, body: &'a B) -> Self {
        Self {
            method,
            path: path.into(),
            body,
            _response: PhantomData,
        }
    }
}

impl<B: Serialize, T: DeserializeOwned> Endpoint for Submit<'_, B, T> {
    type Request = B;
    type Response = T;

    fn method(&self) -> Method {
        self.method.clone()
    }

    fn path(&self) -> String {
        self.path.clone()
    }

    fn mode(&self) -> DecodeMode {
        DecodeMode::Single
    }

    fn request_body(&self) -> Option<&Self::Request> {
        Some(self.body)
    }
}
