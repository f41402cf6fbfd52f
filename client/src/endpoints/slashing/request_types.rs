use serde::{Deserialize, Serialize};

use crate::endpoints::common_types::BaseReq;

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct UnjailPostData {
    pub base_req: BaseReq,
}
