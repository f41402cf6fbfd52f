//! Node, block, validator set and transaction queries (ICS0).

pub mod response_types;
pub use response_types::*;

use std::time::Duration;

use crate::{client::GaiaClient, endpoints::Route, error::RestResult};

/// Status probes are expected to answer fast.
const STATUS_TIMEOUT: Duration = Duration::from_secs(3);

impl GaiaClient {
    pub async fn node_info(&self) -> RestResult<NodeInfo> {
        self.send(&Route::single("/node_info").timeout(STATUS_TIMEOUT))
            .await
    }

    pub async fn syncing(&self) -> RestResult<SyncingStatus> {
        self.send(&Route::single("/syncing").timeout(STATUS_TIMEOUT))
            .await
    }

    pub async fn latest_block(&self) -> RestResult<BlockRoot> {
        self.send(&Route::single("/blocks/latest")).await
    }

    pub async fn block(&self, height: u64) -> RestResult<BlockRoot> {
        self.send(&Route::single(format!("/blocks/{height}"))).await
    }

    pub async fn latest_validator_set(&self) -> RestResult<ValidatorSet> {
        self.send(&Route::single("/validatorsets/latest")).await
    }

    pub async fn validator_set(&self, height: u64) -> RestResult<ValidatorSet> {
        self.send(&Route::single(format!("/validatorsets/{height}")))
            .await
    }

    pub async fn transaction(&self, hash: &str) -> RestResult<Transaction> {
        self.send(&Route::single(format!("/txs/{hash}"))).await
    }

    /// Transactions signed by `address`.
    pub async fn sent_transactions(&self, address: &str) -> RestResult<Transaction> {
        self.send(&Route::collection("/txs").query("sender", address))
            .await
    }

    /// Transactions paying `address`.
    pub async fn received_transactions(&self, address: &str) -> RestResult<Transaction> {
        self.send(&Route::collection("/txs").query("recipient", address))
            .await
    }
}
