use serde::{Deserialize, Serialize};

/// A key stored in the node's keybase.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Key {
    pub name: String,
    #[serde(rename = "type", default)]
    pub kind: String,
    pub address: String,
    #[serde(default)]
    pub pub_key: String,
    /// Only present in the answer to a key creation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mnemonic: Option<String>,
}
