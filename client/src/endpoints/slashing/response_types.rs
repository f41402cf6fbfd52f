use serde::{Deserialize, Serialize};

/// Liveness record of a validator's consensus key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SigningInfo {
    pub start_height: String,
    pub index_offset: String,
    pub jailed_until: String,
    #[serde(default)]
    pub tombstoned: bool,
    pub missed_blocks_counter: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SlashingParameters {
    pub max_evidence_age: String,
    pub signed_blocks_window: String,
    pub min_signed_per_window: String,
    #[serde(default)]
    pub double_sign_unbond_duration: String,
    pub downtime_jail_duration: String,
    pub slash_fraction_double_sign: String,
    pub slash_fraction_downtime: String,
}
