//! REST server and node versions, and the minimum-version check.

use log::warn;

use crate::{
    client::GaiaClient,
    compat::{is_supported_version, MIN_NODE_VERSION},
    endpoints::Route,
    error::{RestError, RestResult},
};

impl GaiaClient {
    /// Version of the REST server (`gaiacli`).
    pub async fn gaia_version(&self) -> RestResult<String> {
        self.send(&Route::single("/version")).await
    }

    /// Version of the connected full node (`gaiad`).
    pub async fn node_version(&self) -> RestResult<String> {
        self.send(&Route::single("/node_version")).await
    }

    /// Queries the node version and compares it with [`MIN_NODE_VERSION`].
    ///
    /// Returns the reported version together with the verdict. An
    /// unparseable version counts as unsupported.
    pub async fn check_node_version(&self) -> Result<(String, bool), RestError> {
        let version = self.node_version().await?.into_iter().next().unwrap_or_default();
        let supported = is_supported_version(&version);
        if !supported {
            warn!("node version {version:?} is older than {MIN_NODE_VERSION}");
        }
        Ok((version, supported))
    }
}
