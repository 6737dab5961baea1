//! JSON-RPC over HTTP
//!
//! Minimal client for the handful of node calls a deployment needs.

use std::sync::atomic::{AtomicU64, Ordering};

use serde_json::{json, Value};

use crate::error::DeployError;

pub struct RpcClient {
    http: reqwest::Client,
    url: String,
    next_id: AtomicU64,
}

impl RpcClient {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            url: url.into(),
            next_id: AtomicU64::new(1),
        }
    }

    pub async fn request(&self, method: &str, params: Value) -> Result<Value, DeployError> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        log::debug!("[RPC] -> {} #{}", method, id);

        let response: Value = self.http.post(&self.url).json(&body).send().await?.json().await?;
        parse_response(response)
    }

    pub async fn accounts(&self) -> Result<Vec<String>, DeployError> {
        let value = self.request("eth_accounts", json!([])).await?;
        serde_json::from_value(value).map_err(|e| DeployError::InvalidResponse(e.to_string()))
    }

    /// Sends a contract creation and returns the transaction hash
    pub async fn send_creation(&self, from: &str, data: &str) -> Result<String, DeployError> {
        let value = self
            .request("eth_sendTransaction", json!([{ "from": from, "data": data }]))
            .await?;
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| DeployError::InvalidResponse(format!("transaction hash was {}", value)))
    }

    /// `None` while the transaction is pending
    pub async fn receipt(&self, tx_hash: &str) -> Result<Option<Value>, DeployError> {
        let value = self.request("eth_getTransactionReceipt", json!([tx_hash])).await?;
        Ok(if value.is_null() { None } else { Some(value) })
    }
}

/// Unwrap a JSON-RPC 2.0 envelope
pub fn parse_response(response: Value) -> Result<Value, DeployError> {
    if let Some(error) = response.get("error") {
        return Err(DeployError::Rpc {
            code: error.get("code").and_then(Value::as_i64).unwrap_or_default(),
            message: error
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error")
                .to_string(),
        });
    }
    match response {
        Value::Object(mut obj) => obj
            .remove("result")
            .ok_or_else(|| DeployError::InvalidResponse("missing \"result\"".to_string())),
        other => Err(DeployError::InvalidResponse(other.to_string())),
    }
}

/// Deployed address from a mined receipt
pub fn contract_address(tx_hash: &str, receipt: &Value) -> Result<String, DeployError> {
    if receipt.get("status").and_then(Value::as_str) == Some("0x0") {
        return Err(DeployError::Reverted(tx_hash.to_string()));
    }
    receipt
        .get("contractAddress")
        .and_then(Value::as_str)
        .map(str::to_string)
        .ok_or_else(|| DeployError::InvalidResponse("receipt has no contractAddress".to_string()))
}
