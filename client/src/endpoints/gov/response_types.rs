use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::endpoints::common_types::Coin;

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Proposal {
    /// Typed amino content; its `value` holds at least `title` and
    /// `description`.
    #[serde(default)]
    pub proposal_content: JsonValue,
    pub proposal_id: String,
    pub proposal_status: String,
    #[serde(default)]
    pub final_tally_result: Option<TallyResult>,
    #[serde(default)]
    pub submit_time: String,
    #[serde(default)]
    pub deposit_end_time: String,
    #[serde(default)]
    pub total_deposit: Vec<Coin>,
    #[serde(default)]
    pub voting_start_time: String,
    #[serde(default)]
    pub voting_end_time: String,
}

impl Proposal {
    pub fn title(&self) -> Option<&str> {
        self.proposal_content
            .pointer("/value/title")
            .and_then(JsonValue::as_str)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TallyResult {
    pub yes: String,
    pub abstain: String,
    pub no: String,
    pub no_with_veto: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProposalDeposit {
    pub depositor: String,
    pub proposal_id: String,
    #[serde(default)]
    pub amount: Vec<Coin>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ProposalVote {
    pub voter: String,
    pub proposal_id: String,
    pub option: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct DepositParameters {
    pub min_deposit: Vec<Coin>,
    pub max_deposit_period: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct TallyingParameters {
    pub quorum: String,
    pub threshold: String,
    pub veto: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct VotingParameters {
    pub voting_period: String,
}
