use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// An amount of a single denomination. Amounts are decimal strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Coin {
    pub denom: String,
    pub amount: String,
}

impl Coin {
    pub fn new(denom: impl Into<String>, amount: impl Into<String>) -> Self {
        Self {
            denom: denom.into(),
            amount: amount.into(),
        }
    }
}

/// Decimal coin amount, used for fees and gas prices.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DecCoin {
    pub denom: String,
    pub amount: String,
}

/// Fields shared by every transaction-building POST.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct BaseReq {
    pub from: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
    #[serde(default)]
    pub memo: String,
    pub chain_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub account_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gas_adjustment: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub fees: Vec<Coin>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gas_prices: Vec<DecCoin>,
    #[serde(default)]
    pub simulate: bool,
}

impl BaseReq {
    pub fn new(from: impl Into<String>, chain_id: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            chain_id: chain_id.into(),
            ..Default::default()
        }
    }
}

/// Result of broadcasting (or building) a transaction.
///
/// Nodes that only build the transaction return the unsigned `StdTx`
/// instead; it lands in `value` and `type`.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct TransferResponse {
    #[serde(default)]
    pub height: Option<String>,
    #[serde(default)]
    pub txhash: Option<String>,
    #[serde(default)]
    pub raw_log: Option<String>,
    #[serde(default)]
    pub logs: Option<JsonValue>,
    #[serde(default)]
    pub gas_wanted: Option<String>,
    #[serde(default)]
    pub gas_used: Option<String>,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
    #[serde(default, rename = "type")]
    pub kind: Option<String>,
    #[serde(default)]
    pub value: Option<JsonValue>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Tag {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

/// A typed amino public key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct PubKey {
    #[serde(rename = "type")]
    pub kind: String,
    pub value: String,
}
