//! Governance proposals, deposits and votes (ICS22).

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
    pub async fn submit_proposal(
        &self,
        proposal: &ProposalPostData,
    ) -> RestResult<TransferResponse> {
        self.send(&Submit::post("/gov/proposals", proposal)).await
    }

    pub async fn proposals(&self) -> RestResult<Proposal> {
        self.send(&Route::collection("/gov/proposals")).await
    }

    pub async fn proposal(&self, id: &str) -> RestResult<Proposal> {
        self.send(&Route::single(format!("/gov/proposals/{id}"))).await
    }

    pub async fn proposal_deposits(&self, id: &str) -> RestResult<ProposalDeposit> {
        self.send(&Route::collection(format!("/gov/proposals/{id}/deposits")))
            .await
    }

    pub async fn proposal_deposit(
        &self,
        id: &str,
        depositor: &str,
    ) -> RestResult<ProposalDeposit> {
        self.send(&Route::single(format!(
            "/gov/proposals/{id}/deposits/{depositor}"
        )))
        .await
    }

    pub async fn proposal_votes(&self, id: &str) -> RestResult<ProposalVote> {
        self.send(&Route::collection(format!("/gov/proposals/{id}/votes")))
            .await
    }

    pub async fn proposal_vote(&self, id: &str, voter: &str) -> RestResult<ProposalVote> {
        self.send(&Route::single(format!("/gov/proposals/{id}/votes/{voter}")))
            .await
    }

    pub async fn proposal_tally(&self, id: &str) -> RestResult<TallyResult> {
        self.send(&Route::single(format!("/gov/proposals/{id}/tally")))
            .await
    }

    pub async fn deposit_to_proposal(
        &self,
        id: &str,
        deposit: &ProposalDepositPostData,
    ) -> RestResult<TransferResponse> {
        self.send(&Submit::post(format!("/gov/proposals/{id}/deposits"), deposit))
            .await
    }

    pub async fn vote_on_proposal(
        &self,
        id: &str,
        vote: &ProposalVotePostData,
    ) -> RestResult<TransferResponse> {
        self.send(&Submit::post(format!("/gov/proposals/{id}/votes"), vote))
            .await
    }

    pub async fn gov_deposit_parameters(&self) -> RestResult<DepositParameters> {
        self.send(&Route::single("/gov/parameters/deposit")).await
    }

    pub async fn gov_tallying_parameters(&self) -> RestResult<TallyingParameters> {
        self.send(&Route::single("/gov/parameters/tallying")).await
    }

    pub async fn gov_voting_parameters(&self) -> RestResult<VotingParameters> {
        self.send(&Route::single("/gov/parameters/voting")).await
    }
}
