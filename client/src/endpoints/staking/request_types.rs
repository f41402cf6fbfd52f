use serde::{Deserialize, Serialize};

use crate::endpoints::common_types::{BaseReq, Coin};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DelegationPostData {
    pub base_req: BaseReq,
    pub delegator_address: String,
    pub validator_address: String,
    pub delegation: Coin,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UnbondingDelegationPostData {
    pub base_req: BaseReq,
    pub delegator_address: String,
    pub validator_address: String,
    /// Decimal share amount to undelegate.
    pub shares: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct RedelegationPostData {
    pub base_req: BaseReq,
    pub delegator_address: String,
    pub validator_src_address: String,
    pub validator_dst_address: String,
    pub shares: String,
}
