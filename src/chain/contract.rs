//! VotingSystem Contract Client
//!
//! Encodes calls with the `sol!` bindings, sends them through any `JsonRpc`
//! transport and decodes the answers into frontend models.

use alloy_primitives::{hex, Address, U256};
use alloy_sol_types::SolCall;
use async_trait::async_trait;
use serde_json::{json, Value};

use super::abi;
use super::rpc::JsonRpc;
use crate::ballots::{BallotReader, BallotWriter};
use crate::config::ReceiptPolling;
use crate::error::{AppError, AppResult};
use crate::models::{BallotRecord, NewBallot};

/// Typed handle on the deployed contract
pub struct VotingContract<R> {
    rpc: R,
    address: Address,
    /// Account transactions are sent from
    sender: Option<Address>,
    polling: ReceiptPolling,
}

impl<R: JsonRpc> VotingContract<R> {
    pub fn new(rpc: R, address: Address) -> Self {
        Self {
            rpc,
            address,
            sender: None,
            polling: ReceiptPolling::default(),
        }
    }

    pub fn with_sender(mut self, sender: Address) -> Self {
        self.sender = Some(sender);
        self
    }

    pub fn with_polling(mut self, polling: ReceiptPolling) -> Self {
        self.polling = polling;
        self
    }

    pub fn address(&self) -> Address {
        self.address
    }

    /// `eth_call` against the latest block
    async fn call<C: SolCall>(&self, call: &C) -> AppResult<C::Return> {
        let params = json!([
            { "to": self.address.to_string(), "data": hex::encode_prefixed(call.abi_encode()) },
            "latest"
        ]);
        let result = self.rpc.request("eth_call", params).await?;
        let bytes = decode_hex_value(&result)?;
        C::abi_decode_returns(&bytes, true).map_err(|e| AppError::Decode(e.to_string()))
    }

    /// Send a transaction and wait until it is mined
    async fn transact<C: SolCall>(&self, call: &C) -> AppResult<String> {
        let from = self.sender.ok_or(AppError::NotConnected)?;
        let params = json!([{
            "from": from.to_string(),
            "to": self.address.to_string(),
            "data": hex::encode_prefixed(call.abi_encode()),
        }]);
        let result = self.rpc.request("eth_sendTransaction", params).await?;
        let tx_hash = result
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| AppError::Decode(format!("expected transaction hash, got {}", result)))?;
        log::info!("[CONTRACT] Sent {} as {}", C::SIGNATURE, tx_hash);

        self.wait_for_receipt(&tx_hash).await?;
        Ok(tx_hash)
    }

    async fn wait_for_receipt(&self, tx_hash: &str) -> AppResult<()> {
        for attempt in 0..self.polling.max_polls {
            if attempt > 0 && self.polling.interval_ms > 0 {
                gloo_timers::future::TimeoutFuture::new(self.polling.interval_ms).await;
            }
            let receipt = self
                .rpc
                .request("eth_getTransactionReceipt", json!([tx_hash]))
                .await?;
            if receipt.is_null() {
                continue;
            }
            return match receipt.get("status").and_then(Value::as_str) {
                Some("0x0") => Err(AppError::Reverted(tx_hash.to_string())),
                _ => {
                    log::info!("[CONTRACT] {} mined", tx_hash);
                    Ok(())
                }
            };
        }
        Err(AppError::Timeout(tx_hash.to_string()))
    }
}

fn decode_hex_value(value: &Value) -> AppResult<Vec<u8>> {
    let raw = value
        .as_str()
        .ok_or_else(|| AppError::Decode(format!("expected hex string, got {}", value)))?;
    hex::decode(raw).map_err(|e| AppError::Decode(e.to_string()))
}

/// Clamp a uint256 into the u64 range the UI works with
fn to_u64(value: U256) -> u64 {
    u64::try_from(value).unwrap_or(u64::MAX)
}

impl From<abi::getBallotReturn> for BallotRecord {
    fn from(ret: abi::getBallotReturn) -> Self {
        Self {
            title: ret.title,
            description: ret.description,
            options: ret.options,
            votes: ret.votes.into_iter().map(to_u64).collect(),
            start_time: to_u64(ret.startTime),
            end_time: to_u64(ret.endTime),
            creator: ret.creator,
            is_active: ret.isActive,
        }
    }
}

#[async_trait(?Send)]
impl<R: JsonRpc> BallotReader for VotingContract<R> {
    fn contract_address(&self) -> Address {
        self.address
    }

    async fn is_deployed(&self) -> AppResult<bool> {
        let code = self
            .rpc
            .request("eth_getCode", json!([self.address.to_string(), "latest"]))
            .await?;
        Ok(!decode_hex_value(&code)?.is_empty())
    }

    async fn active_ballot_ids(&self) -> AppResult<Vec<u64>> {
        let ret = self.call(&abi::getActiveBallotsCall {}).await?;
        Ok(ret.ids.into_iter().map(to_u64).collect())
    }

    async fn ballot(&self, id: u64) -> AppResult<BallotRecord> {
        let ret = self.call(&abi::getBallotCall { ballotId: U256::from(id) }).await?;
        Ok(ret.into())
    }

    async fn ballot_count(&self) -> AppResult<u64> {
        let ret = self.call(&abi::getBallotCountCall {}).await?;
        Ok(to_u64(ret.count))
    }

    async fn has_voted(&self, id: u64, voter: Address) -> AppResult<bool> {
        let ret = self
            .call(&abi::hasVotedCall { ballotId: U256::from(id), voter })
            .await?;
        Ok(ret.voted)
    }
}

#[async_trait(?Send)]
impl<R: JsonRpc> BallotWriter for VotingContract<R> {
    async fn create_ballot(&self, ballot: &NewBallot) -> AppResult<String> {
        let call = abi::createBallotCall {
            title: ballot.title.clone(),
            description: ballot.description.clone(),
            options: ballot.options.clone(),
            duration: U256::from(ballot.duration_secs),
        };
        self.transact(&call).await
    }

    async fn vote(&self, id: u64, option_index: u64) -> AppResult<String> {
        let call = abi::voteCall {
            ballotId: U256::from(id),
            optionIndex: U256::from(option_index),
        };
        self.transact(&call).await
    }
}
