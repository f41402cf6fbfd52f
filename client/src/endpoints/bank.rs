//! Accounts and token transfers (ICS20).

pub mod request_types;
pub mod response_types;

pub use request_types::*;
pub use response_types::*;

use crate::{
    client::GaiaClient,
    endpoints::{
        common_types::{Coin, TransferResponse},
        Route, Submit,
    },
    error::RestResult,
};

impl GaiaClient {
    pub async fn account(&self, address: &str) -> RestResult<Account> {
        self.send(&Route::single(format!("/auth/accounts/{address}")))
            .await
    }

    /// Same route as [`account`](Self::account), decoded with the vesting
    /// account layout.
    pub async fn vesting_account(&self, address: &str) -> RestResult<VestingAccount> {
        self.send(&Route::single(format!("/auth/accounts/{address}")))
            .await
    }

    pub async fn bank_transfer(
        &self,
        address: &str,
        transfer: &TransferPostData,
    ) -> RestResult<TransferResponse> {
        self.send(&Submit::post(
            format!("/bank/accounts/{address}/transfers"),
            transfer,
        ))
        .await
    }

    /// One entry per denomination held; empty for unknown accounts.
    pub async fn balance(&self, address: &str) -> RestResult<Coin> {
        self.send(&Route::collection(format!("/bank/balances/{address}")))
            .await
    }
}
