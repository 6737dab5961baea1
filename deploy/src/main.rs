//! VotingSystem deployer
//!
//! Sends the compiled contract to a node that holds an unlocked account
//! (a local dev node or a signing proxy) and prints where it landed.

mod artifact;
mod error;
mod rpc;

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

use error::DeployError;
use rpc::RpcClient;

#[derive(clap::Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// JSON-RPC endpoint of the node
    #[clap(long, default_value = "http://127.0.0.1:8545")]
    rpc_url: String,

    /// Compiled contract artifact (JSON) or a raw hex bytecode file
    #[clap(long)]
    artifact: PathBuf,

    /// Deployer account; defaults to the node's first account
    #[clap(long)]
    from: Option<String>,

    /// Delay between receipt polls in milliseconds
    #[clap(long, default_value_t = 1500)]
    poll_ms: u64,

    /// Receipt polls before giving up
    #[clap(long, default_value_t = 120)]
    max_polls: u32,
}

async fn pick_account(client: &RpcClient, from: Option<String>) -> Result<String, DeployError> {
    if let Some(from) = from {
        return Ok(from);
    }
    client.accounts().await?.into_iter().next().ok_or(DeployError::NoAccount)
}

async fn wait_for_address(
    client: &RpcClient,
    tx_hash: &str,
    poll: Duration,
    max_polls: u32,
) -> Result<String, DeployError> {
    for attempt in 0..max_polls {
        if attempt > 0 {
            tokio::time::sleep(poll).await;
        }
        if let Some(receipt) = client.receipt(tx_hash).await? {
            return rpc::contract_address(tx_hash, &receipt);
        }
        log::debug!("Receipt for {} pending (poll {})", tx_hash, attempt + 1);
    }
    Err(DeployError::Timeout(tx_hash.to_string()))
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let args = Args::parse();
    let bytecode = artifact::load_bytecode(&args.artifact)?;
    log::info!(
        "Loaded {} bytes of bytecode from {:?}",
        (bytecode.len() - 2) / 2,
        args.artifact
    );

    let client = RpcClient::new(&args.rpc_url);
    let from = pick_account(&client, args.from).await?;
    log::info!("Deploying VotingSystem from {} via {}", from, args.rpc_url);

    let tx_hash = client.send_creation(&from, &bytecode).await?;
    log::info!("Sent deployment transaction {}", tx_hash);

    let address = wait_for_address(
        &client,
        &tx_hash,
        Duration::from_millis(args.poll_ms),
        args.max_polls,
    )
    .await?;

    println!("VotingSystem deployed to: {}", address);
    Ok(())
}
