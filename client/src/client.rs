//! The dispatcher every endpoint goes through.
//!
//! A call is URL construction, optional JSON serialization of the body, one
//! HTTP exchange bounded by its own timeout, status interpretation and
//! decoding in the requested [`DecodeMode`]. All failures come back as
//! [`RestError`] values.

use bytes::Bytes;
use log::{debug, trace, warn};
use reqwest::{header::CONTENT_TYPE, Client};
use serde::de::DeserializeOwned;
use std::{sync::Arc, time::Duration};
use tokio_util::sync::CancellationToken;
use url::Url;

use crate::{
    connection::Connection,
    endpoints::Endpoint,
    error::{RestError, RestResult, TransportError},
    request::{DecodeMode, RequestBody, RestRequest},
};

/// Timeout applied to calls that do not set their own.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

/// A client for a Gaia Lite REST node.
///
/// Cheap to clone: clones share the connection pool and the immutable
/// [`Connection`]. Calls are independent and may run concurrently.
#[derive(Clone, Debug)]
pub struct GaiaClient {
    http: Client,
    connection: Arc<Connection>,
    default_timeout: Duration,
}

/// Builder for [`GaiaClient`].
#[derive(Debug)]
pub struct GaiaClientBuilder {
    connection: Connection,
    timeout: Duration,
    accept_invalid_certs: bool,
    user_agent: Option<String>,
}

impl GaiaClientBuilder {
    /// Default timeout for calls that do not carry their own.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Trust any certificate the node presents.
    ///
    /// Meant for local nodes running `rest-server` with a self-signed
    /// certificate. Off unless asked for.
    pub fn danger_accept_invalid_certs(mut self, accept: bool) -> Self {
        self.accept_invalid_certs = accept;
        self
    }

    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = Some(user_agent.into());
        self
    }

    pub fn build(self) -> Result<GaiaClient, RestError> {
        let mut builder = Client::builder();
        if self.accept_invalid_certs {
            warn!(
                "TLS certificate validation disabled for {}",
                self.connection
            );
            builder = builder.danger_accept_invalid_certs(true);
        }
        if let Some(user_agent) = self.user_agent {
            builder = builder.user_agent(user_agent);
        }
        let http = builder.build().map_err(TransportError::from)?;

        Ok(GaiaClient {
            http,
            connection: Arc::new(self.connection),
            default_timeout: self.timeout,
        })
    }
}

impl GaiaClient {
    /// Client with default settings: 10 s timeout, certificates validated.
    pub fn new(connection: Connection) -> Result<Self, RestError> {
        Self::builder(connection).build()
    }

    pub fn builder(connection: Connection) -> GaiaClientBuilder {
        GaiaClientBuilder {
            connection,
            timeout: DEFAULT_TIMEOUT,
            accept_invalid_certs: false,
            user_agent: None,
        }
    }

    pub fn connection(&self) -> &Connection {
        &self.connection
    }

    pub fn default_timeout(&self) -> Duration {
        self.default_timeout
    }

    /// Dispatches a routing table entry.
    pub async fn send<E: Endpoint>(&self, endpoint: &E) -> RestResult<E::Response> {
        self.request(endpoint_request(endpoint)).await
    }

    /// Like [`send`](Self::send), aborting with [`RestError::Cancelled`] once
    /// `cancel` fires.
    pub async fn send_with_cancel<E: Endpoint>(
        &self,
        endpoint: &E,
        cancel: &CancellationToken,
    ) -> RestResult<E::Response> {
        self.request_with_cancel(endpoint_request(endpoint), cancel)
            .await
    }

    /// Performs one call and decodes its response.
    pub async fn request<B, T>(&self, request: RestRequest<'_, B>) -> RestResult<T>
    where
        B: RequestBody + ?Sized,
        T: DeserializeOwned,
    {
        self.request_with_cancel(request, &CancellationToken::new())
            .await
    }

    pub async fn request_with_cancel<B, T>(
        &self,
        request: RestRequest<'_, B>,
        cancel: &CancellationToken,
    ) -> RestResult<T>
    where
        B: RequestBody + ?Sized,
        T: DeserializeOwned,
    {
        let url = build_url(&self.connection, &request.path, &request.query)?;
        let payload = match request.body {
            Some(body) => body.to_json().map_err(|source| RestError::Decoding {
                source,
                body: Bytes::new(),
            })?,
            None => None,
        };
        let timeout = request.timeout.unwrap_or(self.default_timeout);

        debug!("{} {}", request.method, url);
        let mut builder = self.http.request(request.method, url);
        if let Some(payload) = payload {
            builder = builder
                .header(CONTENT_TYPE, "application/json")
                .body(payload);
        }

        let exchange = async {
            let response = builder
                .send()
                .await
                .map_err(|e| RestError::from_reqwest(e, timeout))?;
            let status = response.status();
            let body = response.bytes().await;
            Ok::<_, RestError>((status, body))
        };

        let (status, body) = tokio::select! {
            biased;
            _ = cancel.cancelled() => return Err(RestError::Cancelled),
            outcome = tokio::time::timeout(timeout, exchange) => {
                outcome.map_err(|_| RestError::Timeout(timeout))??
            }
        };

        if !status.is_success() {
            warn!("node returned {status} for {}", request.path);
            return Err(RestError::HttpStatus {
                status,
                body: body.ok(),
            });
        }

        let body = body.map_err(|e| RestError::from_reqwest(e, timeout))?;
        trace!("response body: {}", String::from_utf8_lossy(&body));
        decode(request.mode, body)
    }
}

fn endpoint_request<E: Endpoint>(endpoint: &E) -> RestRequest<'_, E::Request> {
    RestRequest {
        method: endpoint.method(),
        path: endpoint.path(),
        query: endpoint.query(),
        body: endpoint.request_body(),
        timeout: endpoint.timeout(),
        mode: endpoint.mode(),
    }
}

/// Joins base URL, path and escaped query pairs.
///
/// The path is assigned as a whole, so a `?` or `#` coming from a
/// substituted parameter is percent-encoded instead of opening a query or
/// fragment.
pub(crate) fn build_url(
    connection: &Connection,
    path: &str,
    query: &[(String, String)],
) -> Result<Url, TransportError> {
    let base = connection.base_url();
    let mut url = Url::parse(base).map_err(|source| TransportError::InvalidUrl {
        url: base.to_string(),
        source,
    })?;
    if path.starts_with('/') {
        url.set_path(path);
    } else {
        url.set_path(&format!("/{path}"));
    }
    if !query.is_empty() {
        url.query_pairs_mut()
            .extend_pairs(query.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    }
    Ok(url)
}

/// Decodes a successful body. Never yields a partial result.
pub(crate) fn decode<T: DeserializeOwned>(mode: DecodeMode, body: Bytes) -> RestResult<T> {
    let decoded = match mode {
        DecodeMode::Single => serde_json::from_slice::<T>(&body).map(|item| vec![item]),
        DecodeMode::Collection => serde_json::from_slice::<Vec<T>>(&body),
    };
    decoded.map_err(|source| RestError::Decoding { source, body })
}
