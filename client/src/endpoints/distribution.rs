//! Fee distribution (ICS24).

use crate::{
    client::GaiaClient,
    endpoints::{bank::TransferPostData, common_types::TransferResponse, Submit},
    error::RestResult,
};

impl GaiaClient {
    /// Withdraws the rewards `delegator` earned from `validator`.
    pub async fn withdraw_reward(
        &self,
        delegator: &str,
        validator: &str,
        request: &TransferPostData,
    ) -> RestResult<TransferResponse> {
        self.send(&Submit::post(
            format!("/distribution/delegators/{delegator}/rewards/{validator}"),
            request,
        ))
        .await
    }
}
