use serde::{Deserialize, Serialize};

use crate::endpoints::common_types::{Coin, PubKey};

/// Response of `GET /auth/accounts/{address}` for plain accounts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Account {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: BaseAccount,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BaseAccount {
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub coins: Vec<Coin>,
    #[serde(default)]
    pub public_key: Option<PubKey>,
    #[serde(default)]
    pub account_number: String,
    #[serde(default)]
    pub sequence: String,
}

/// Response of `GET /auth/accounts/{address}` for vesting accounts.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VestingAccount {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: VestingAccountValue,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VestingAccountValue {
    #[serde(rename = "BaseVestingAccount")]
    pub base_vesting_account: BaseVestingAccount,
    /// Absent for delayed vesting accounts.
    #[serde(default)]
    pub start_time: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BaseVestingAccount {
    #[serde(rename = "BaseAccount")]
    pub base_account: BaseAccount,
    #[serde(default)]
    pub original_vesting: Vec<Coin>,
    #[serde(default)]
    pub delegated_free: Vec<Coin>,
    #[serde(default)]
    pub delegated_vesting: Vec<Coin>,
    #[serde(default)]
    pub end_time: String,
}
