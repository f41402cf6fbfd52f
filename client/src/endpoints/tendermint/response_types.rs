use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

use crate::endpoints::common_types::Tag;

/// Response of `GET /node_info`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NodeInfo {
    #[serde(default)]
    pub protocol_version: Option<ProtocolVersion>,
    pub id: String,
    #[serde(default)]
    pub listen_addr: String,
    pub network: String,
    pub version: String,
    #[serde(default)]
    pub channels: String,
    #[serde(default)]
    pub moniker: String,
    #[serde(default)]
    pub other: Option<NodeInfoOther>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProtocolVersion {
    pub p2p: String,
    pub block: String,
    pub app: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct NodeInfoOther {
    #[serde(default)]
    pub tx_index: String,
    #[serde(default)]
    pub rpc_address: String,
}

/// Response of `GET /syncing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct SyncingStatus {
    pub syncing: bool,
}

/// Response of `GET /blocks/{height}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockRoot {
    pub block_meta: BlockMeta,
    #[serde(default)]
    pub block: Option<Block>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockMeta {
    pub block_id: BlockId,
    pub header: BlockHeader,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BlockId {
    #[serde(default)]
    pub hash: String,
    #[serde(default)]
    pub parts: Option<PartSetHeader>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PartSetHeader {
    pub total: String,
    pub hash: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct BlockHeader {
    pub chain_id: String,
    pub height: String,
    pub time: String,
    #[serde(default)]
    pub num_txs: String,
    #[serde(default)]
    pub total_txs: String,
    #[serde(default)]
    pub last_block_id: Option<BlockId>,
    #[serde(default)]
    pub last_commit_hash: String,
    #[serde(default)]
    pub data_hash: String,
    #[serde(default)]
    pub validators_hash: String,
    #[serde(default)]
    pub next_validators_hash: String,
    #[serde(default)]
    pub consensus_hash: String,
    #[serde(default)]
    pub app_hash: String,
    #[serde(default)]
    pub last_results_hash: String,
    #[serde(default)]
    pub evidence_hash: String,
    #[serde(default)]
    pub proposer_address: String,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Block {
    pub header: BlockHeader,
    #[serde(default)]
    pub data: BlockData,
    /// Evidence and commit signatures are passed through untyped.
    #[serde(default)]
    pub evidence: JsonValue,
    #[serde(default)]
    pub last_commit: JsonValue,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct BlockData {
    /// Base64 encoded transactions; `null` for empty blocks.
    #[serde(default)]
    pub txs: Option<Vec<String>>,
}

/// Response of `GET /validatorsets/{height}`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidatorSet {
    pub block_height: String,
    pub validators: Vec<ValidatorSetEntry>,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ValidatorSetEntry {
    pub address: String,
    pub pub_key: String,
    pub voting_power: String,
    #[serde(default)]
    pub proposer_priority: String,
}

/// A transaction as indexed by the node.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Transaction {
    pub height: String,
    pub txhash: String,
    #[serde(default)]
    pub raw_log: String,
    #[serde(default)]
    pub logs: Option<JsonValue>,
    #[serde(default)]
    pub gas_wanted: String,
    #[serde(default)]
    pub gas_used: String,
    #[serde(default)]
    pub tags: Option<Vec<Tag>>,
    /// The amino JSON `StdTx`; message shapes vary per module.
    #[serde(default)]
    pub tx: JsonValue,
    #[serde(default)]
    pub timestamp: Option<String>,
}
