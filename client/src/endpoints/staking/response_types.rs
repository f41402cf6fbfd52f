use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Delegation {
    pub delegator_address: String,
    pub validator_address: String,
    pub shares: String,
    /// Token value of the shares, reported by newer nodes only.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub balance: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnbondingDelegation {
    pub delegator_address: String,
    pub validator_address: String,
    #[serde(default)]
    pub entries: Vec<UnbondingEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct UnbondingEntry {
    pub creation_height: String,
    pub completion_time: String,
    pub initial_balance: String,
    pub balance: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Redelegation {
    pub delegator_address: String,
    pub validator_src_address: String,
    pub validator_dst_address: String,
    #[serde(default)]
    pub entries: Vec<RedelegationEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct RedelegationEntry {
    pub creation_height: String,
    pub completion_time: String,
    pub initial_balance: String,
    #[serde(default)]
    pub shares_dst: String,
}

/// A staking validator, as listed globally or per delegator.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Validator {
    pub operator_address: String,
    #[serde(default)]
    pub consensus_pubkey: String,
    #[serde(default)]
    pub jailed: bool,
    #[serde(default)]
    pub status: u8,
    #[serde(default)]
    pub tokens: String,
    #[serde(default)]
    pub delegator_shares: String,
    #[serde(default)]
    pub description: ValidatorDescription,
    #[serde(default)]
    pub unbonding_height: String,
    #[serde(default)]
    pub unbonding_time: String,
    #[serde(default)]
    pub commission: Option<Commission>,
    #[serde(default)]
    pub min_self_delegation: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct ValidatorDescription {
    #[serde(default)]
    pub moniker: String,
    #[serde(default)]
    pub identity: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub details: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Commission {
    pub rate: String,
    pub max_rate: String,
    pub max_change_rate: String,
    pub update_time: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StakingPool {
    pub not_bonded_tokens: String,
    pub bonded_tokens: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StakingParameters {
    /// Nanoseconds, as a decimal string.
    pub unbonding_time: String,
    pub max_validators: u32,
    #[serde(default)]
    pub max_entries: u32,
    pub bond_denom: String,
}
