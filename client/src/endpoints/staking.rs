//! Delegations, validators and pool state (ICS21).

pub mod request_types;
pub mod response_types;

pub use request_types::*;
pub use response_types::*;

use crate::{
    client::GaiaClient,
    endpoints::{common_types::TransferResponse, tendermint::Transaction, Route, Submit},
    error::RestResult,
};

impl GaiaClient {
    pub async fn delegations(&self, delegator: &str) -> RestResult<Delegation> {
        self.send(&Route::collection(format!(
            "/staking/delegators/{delegator}/delegations"
        )))
        .await
    }

    pub async fn delegate(
        &self,
        delegator: &str,
        delegation: &DelegationPostData,
    ) -> RestResult<TransferResponse> {
        self.send(&Submit::post(
            format!("/staking/delegators/{delegator}/delegations"),
            delegation,
        ))
        .await
    }

    pub async fn delegation(&self, delegator: &str, validator: &str) -> RestResult<Delegation> {
        self.send(&Route::single(format!(
            "/staking/delegators/{delegator}/delegations/{validator}"
        )))
        .await
    }

    pub async fn unbonding_delegations(
        &self,
        delegator: &str,
    ) -> RestResult<UnbondingDelegation> {
        self.send(&Route::collection(format!(
            "/staking/delegators/{delegator}/unbonding_delegations"
        )))
        .await
    }

    pub async fn unbond(
        &self,
        delegator: &str,
        unbonding: &UnbondingDelegationPostData,
    ) -> RestResult<TransferResponse> {
        self.send(&Submit::post(
            format!("/staking/delegators/{delegator}/unbonding_delegations"),
            unbonding,
        ))
        .await
    }

    pub async fn unbonding_delegation(
        &self,
        delegator: &str,
        validator: &str,
    ) -> RestResult<UnbondingDelegation> {
        self.send(&Route::single(format!(
            "/staking/delegators/{delegator}/unbonding_delegations/{validator}"
        )))
        .await
    }

    pub async fn redelegations(&self, delegator: &str) -> RestResult<Redelegation> {
        self.send(&Route::collection(format!(
            "/staking/delegators/{delegator}/redelegations"
        )))
        .await
    }

    pub async fn redelegate(
        &self,
        delegator: &str,
        redelegation: &RedelegationPostData,
    ) -> RestResult<TransferResponse> {
        self.send(&Submit::post(
            format!("/staking/delegators/{delegator}/redelegations"),
            redelegation,
        ))
        .await
    }

    /// Validators `delegator` is bonded to.
    pub async fn delegator_validators(&self, delegator: &str) -> RestResult<Validator> {
        self.send(&Route::collection(format!(
            "/staking/delegators/{delegator}/validators"
        )))
        .await
    }

    pub async fn delegator_validator(
        &self,
        delegator: &str,
        validator: &str,
    ) -> RestResult<Validator> {
        self.send(&Route::single(format!(
            "/staking/delegators/{delegator}/validators/{validator}"
        )))
        .await
    }

    pub async fn staking_transactions(&self, delegator: &str) -> RestResult<Transaction> {
        self.send(&Route::collection(format!(
            "/staking/delegators/{delegator}/txs"
        )))
        .await
    }

    pub async fn validators(&self) -> RestResult<Validator> {
        self.send(&Route::collection("/staking/validators")).await
    }

    pub async fn validator(&self, operator: &str) -> RestResult<Validator> {
        self.send(&Route::single(format!("/staking/validators/{operator}")))
            .await
    }

    pub async fn validator_delegations(&self, operator: &str) -> RestResult<Delegation> {
        self.send(&Route::collection(format!(
            "/staking/validators/{operator}/delegations"
        )))
        .await
    }

    pub async fn validator_unbonding_delegations(
        &self,
        operator: &str,
    ) -> RestResult<UnbondingDelegation> {
        self.send(&Route::collection(format!(
            "/staking/validators/{operator}/unbonding_delegations"
        )))
        .await
    }

    pub async fn validator_redelegations(&self, operator: &str) -> RestResult<Redelegation> {
        self.send(&Route::collection(format!(
            "/staking/validators/{operator}/redelegations"
        )))
        .await
    }

    pub async fn staking_pool(&self) -> RestResult<StakingPool> {
        self.send(&Route::single("/staking/pool")).await
    }

    pub async fn staking_parameters(&self) -> RestResult<StakingParameters> {
        self.send(&Route::single("/staking/parameters")).await
    }
}
