//! Validator signing info and unjailing (ICS23).

pub mod request_types;
pub mod response_types;

pub use request_types::*;
pub use response_types::*;

use crate::{
    client::GaiaClient,
    endpoints::{common_types::TransferResponse, Route, Submit},
    error::RestResult,
};

impl GaiaClient {
    pub async fn signing_info(&self, validator_pubkey: &str) -> RestResult<SigningInfo> {
        self.send(&Route::single(format!(
            "/slashing/validators/{validator_pubkey}/signing_info"
        )))
        .await
    }

    pub async fn unjail(
        &self,
        validator: &str,
        unjail: &UnjailPostData,
    ) -> RestResult<TransferResponse> {
        self.send(&Submit::post(
            format!("/slashing/validators/{validator}/unjail"),
            unjail,
        ))
        .await
    }

    pub async fn slashing_parameters(&self) -> RestResult<SlashingParameters> {
        self.send(&Route::single("/slashing/parameters")).await
    }
}
