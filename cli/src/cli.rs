use clap::{ArgGroup, Parser, Subcommand};
use gaia_client::Scheme;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "gaia",
    about = "Query a Cosmos Gaia Lite REST node from the command line",
    version
)]
pub struct Cli {
    /// Configuration file (TOML, or JSON when the name ends in .json)
    #[arg(long, default_value = "gaia.toml")]
    pub config: String,

    /// Write a default configuration file to --config and exit
    #[arg(long)]
    pub create_config: bool,

    /// Scheme used to reach the node (http or https)
    #[arg(long)]
    pub scheme: Option<Scheme>,

    /// Node host
    #[arg(long, env = "GAIA_NODE_HOST")]
    pub host: Option<String>,

    /// Node REST port
    #[arg(long, env = "GAIA_NODE_PORT")]
    pub port: Option<u16>,

    /// Default request timeout in seconds
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Accept self-signed or otherwise invalid TLS certificates
    #[arg(long)]
    pub insecure: bool,

    /// Set log level (trace, debug, info, warn, error)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Write logs to a file instead of stderr
    #[arg(long)]
    pub log_to_file: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Node identity and network
    NodeInfo,
    /// Whether the node is catching up
    Syncing,
    /// Block at HEIGHT, or the latest block
    Block { height: Option<u64> },
    /// Tendermint validator set at HEIGHT, or the latest one
    ValidatorSet { height: Option<u64> },
    /// Transaction by hash
    Tx { hash: String },
    /// Transactions sent or received by an address
    #[command(group(ArgGroup::new("party").required(true).args(["sender", "recipient"])))]
    Txs {
        #[arg(long)]
        sender: Option<String>,
        #[arg(long)]
        recipient: Option<String>,
    },
    /// Keys stored by the REST server
    Keys,
    Account { address: String },
    Balance { address: String },
    Delegations { delegator: String },
    /// All staking validators
    Validators,
    Validator { operator: String },
    StakingPool,
    Proposals,
    Proposal { id: String },
    Tally { id: String },
    SigningInfo { pubkey: String },
    /// REST server version
    Version,
    /// Full node version
    NodeVersion,
    /// Compare the node version with the minimum supported one
    CheckVersion,
    /// GET an arbitrary path
    Get {
        path: String,
        /// The route answers with one object instead of an array
        #[arg(long)]
        single: bool,
        /// Query parameter as name=value, repeatable
        #[arg(long = "query", value_parser = parse_query_pair)]
        query: Vec<(String, String)>,
    },
}

/// Parses `name=value`. The value may itself contain `=`.
pub fn parse_query_pair(s: &str) -> Result<(String, String), String> {
    let (name, value) = s
        .split_once('=')
        .ok_or_else(|| format!("invalid query parameter {s:?}: expected name=value"))?;
    if name.is_empty() {
        return Err(format!("invalid query parameter {s:?}: empty name"));
    }
    Ok((name.to_string(), value.to_string()))
}
