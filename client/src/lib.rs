//! Typed async client for the Cosmos Gaia Lite REST API.
//!
//! Every route goes through one dispatcher, [`GaiaClient::request`], which
//! builds the URL from a [`Connection`], serializes an optional JSON body,
//! performs the exchange under a per-call timeout and decodes the answer
//! into a [`RestResult`]: a sequence of items or a [`RestError`].
//!
//! ```rust,no_run
//! use gaia_client::{Connection, GaiaClient, Scheme};
//!
//! # async fn example() -> Result<(), gaia_client::RestError> {
//! let client = GaiaClient::builder(Connection::new(Scheme::Https, "localhost", 1317))
//!     .danger_accept_invalid_certs(true)
//!     .build()?;
//! let blocks = client.block(100).await?;
//! println!("chain {}", blocks[0].block_meta.header.chain_id);
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod compat;
pub mod connection;
pub mod endpoints;
pub mod error;
pub mod request;

// Re-export commonly used types
pub use client::{GaiaClient, GaiaClientBuilder, DEFAULT_TIMEOUT};
pub use compat::{is_supported_version, NodeVersion, MIN_NODE_VERSION};
pub use connection::{Connection, Scheme, DEFAULT_HOST, DEFAULT_PORT};
pub use endpoints::{Endpoint, Route, Submit};
pub use error::{RestError, RestResult, TransportError};
pub use request::{DecodeMode, EmptyBody, RequestBody, RestRequest};
pub use tokio_util::sync::CancellationToken;
