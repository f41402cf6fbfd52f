use serde::{Deserialize, Serialize};

use crate::endpoints::common_types::{BaseReq, Coin};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProposalPostData {
    pub base_req: BaseReq,
    pub title: String,
    pub description: String,
    /// `Text`, `ParameterChange` or `SoftwareUpgrade`.
    pub proposal_type: String,
    pub proposer: String,
    #[serde(default)]
    pub initial_deposit: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProposalDepositPostData {
    pub base_req: BaseReq,
    pub depositor: String,
    pub amount: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct ProposalVotePostData {
    pub base_req: BaseReq,
    pub voter: String,
    /// `Yes`, `No`, `NoWithVeto` or `Abstain`.
    pub option: String,
}
