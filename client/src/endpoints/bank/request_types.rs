use serde::{Deserialize, Serialize};

use crate::endpoints::common_types::{BaseReq, Coin};

/// Body for bank transfers and reward withdrawals.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct TransferPostData {
    pub base_req: BaseReq,
    #[serde(default)]
    pub amount: Vec<Coin>,
}
