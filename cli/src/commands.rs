use gaia_client::{DecodeMode, GaiaClient, RestRequest, RestResult, MIN_NODE_VERSION};
use serde::Serialize;
use serde_json::{json, Value};

use crate::cli::Command;

/// Runs one subcommand and returns what should be printed.
///
/// Routes answered by a single object print that object; collections print
/// an array.
pub async fn execute(client: &GaiaClient, command: &Command) -> anyhow::Result<Value> {
    let output = match command {
        Command::NodeInfo => single(client.node_info().await)?,
        Command::Syncing => single(client.syncing().await)?,
        Command::Block { height: Some(height) } => single(client.block(*height).await)?,
        Command::Block { height: None } => single(client.latest_block().await)?,
        Command::ValidatorSet { height: Some(height) } => {
            single(client.validator_set(*height).await)?
        }
        Command::ValidatorSet { height: None } => single(client.latest_validator_set().await)?,
        Command::Tx { hash } => single(client.transaction(hash).await)?,
        Command::Txs {
            sender: Some(sender),
            ..
        } => many(client.sent_transactions(sender).await)?,
        Command::Txs {
            recipient: Some(recipient),
            ..
        } => many(client.received_transactions(recipient).await)?,
        Command::Txs { .. } => anyhow::bail!("either --sender or --recipient is required"),
        Command::Keys => many(client.keys().await)?,
        Command::Account { address } => single(client.account(address).await)?,
        Command::Balance { address } => many(client.balance(address).await)?,
        Command::Delegations { delegator } => many(client.delegations(delegator).await)?,
        Command::Validators => many(client.validators().await)?,
        Command::Validator { operator } => single(client.validator(operator).await)?,
        Command::StakingPool => single(client.staking_pool().await)?,
        Command::Proposals => many(client.proposals().await)?,
        Command::Proposal { id } => single(client.proposal(id).await)?,
        Command::Tally { id } => single(client.proposal_tally(id).await)?,
        Command::SigningInfo { pubkey } => single(client.signing_info(pubkey).await)?,
        Command::Version => single(client.gaia_version().await)?,
        Command::NodeVersion => single(client.node_version().await)?,
        Command::CheckVersion => {
            let (version, supported) = client.check_node_version().await?;
            json!({
                "node_version": version,
                "minimum_version": MIN_NODE_VERSION,
                "supported": supported,
            })
        }
        Command::Get {
            path,
            single: is_single,
            query,
        } => {
            let mode = if *is_single {
                DecodeMode::Single
            } else {
                DecodeMode::Collection
            };
            let request = query
                .iter()
                .fold(RestRequest::get(path.as_str()).mode(mode), |request, (name, value)| {
                    request.query(name.as_str(), value.as_str())
                });
            let items: Vec<Value> = client.request(request).await?;
            match mode {
                DecodeMode::Single => single(Ok(items))?,
                DecodeMode::Collection => many(Ok(items))?,
            }
        }
    };
    Ok(output)
}

fn single<T: Serialize>(result: RestResult<T>) -> anyhow::Result<Value> {
    let item = result?.into_iter().next();
    Ok(serde_json::to_value(item)?)
}

fn many<T: Serialize>(result: RestResult<T>) -> anyhow::Result<Value> {
    Ok(serde_json::to_value(result?)?)
}
