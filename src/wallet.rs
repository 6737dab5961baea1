//! Wallet Connection Flow
//!
//! Request accounts, move the wallet onto the target chain, read back the
//! chain it ended up on.

use serde_json::{json, Value};

use crate::chain::{chain_name, parse_quantity, JsonRpc};
use crate::config::ChainConfig;
use crate::error::{AppError, AppResult};

/// Outcome of a successful connect
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub address: String,
    pub chain_id: u64,
}

pub async fn request_accounts<R: JsonRpc + ?Sized>(rpc: &R) -> AppResult<Vec<String>> {
    let accounts = rpc.request("eth_requestAccounts", json!([])).await?;
    serde_json::from_value(accounts).map_err(|e| AppError::Decode(e.to_string()))
}

pub async fn current_chain_id<R: JsonRpc + ?Sized>(rpc: &R) -> AppResult<u64> {
    let chain_id = rpc.request("eth_chainId", json!([])).await?;
    let raw = chain_id
        .as_str()
        .ok_or_else(|| AppError::Decode(format!("expected chain id, got {}", chain_id)))?;
    parse_quantity(raw)
}

/// Ask the wallet to switch chains, registering the chain first if unknown
///
/// Failures are logged only; the page-level network check reports a wrong chain.
pub async fn switch_to_chain<R: JsonRpc + ?Sized>(rpc: &R, chain: &ChainConfig) {
    let params = json!([{ "chainId": chain.hex_chain_id() }]);
    let Err(switch_error) = rpc.request("wallet_switchEthereumChain", params).await else {
        return;
    };

    if switch_error.code() != Some(eip1193::UNRECOGNIZED_CHAIN) {
        log::error!("[WALLET] Error switching to {}: {}", chain.chain_name, switch_error);
        return;
    }

    log::info!("[WALLET] Wallet does not know {}, adding it", chain.chain_name);
    let add_params = match serde_json::to_value(chain.add_chain_params()) {
        Ok(value) => Value::Array(vec![value]),
        Err(e) => {
            log::error!("[WALLET] Could not encode chain parameters: {}", e);
            return;
        }
    };
    if let Err(add_error) = rpc.request("wallet_addEthereumChain", add_params).await {
        log::error!("[WALLET] Error adding {}: {}", chain.chain_name, add_error);
    }
}

/// Full connect sequence
pub async fn establish_session<R: JsonRpc + ?Sized>(rpc: &R, chain: &ChainConfig) -> AppResult<Session> {
    let accounts = request_accounts(rpc).await?;
    switch_to_chain(rpc, chain).await;

    let address = accounts.into_iter().next().ok_or(AppError::NotConnected)?;
    let chain_id = current_chain_id(rpc).await?;
    log::info!("[WALLET] Connected {} on chain {}", address, chain_id);
    Ok(Session { address, chain_id })
}

/// Message shown while the wallet sits on another chain
pub fn network_error(chain_id: Option<u64>, expected: &ChainConfig) -> Option<AppError> {
    let chain_id = chain_id?;
    if chain_id == expected.chain_id {
        return None;
    }
    let current = chain_name(chain_id)
        .map(str::to_string)
        .unwrap_or_else(|| chain_id.to_string());
    Some(AppError::WrongNetwork(current))
}
