//! JSON-RPC Transport
//!
//! The contract client only needs `request(method, params)`; the injected
//! wallet provides it in the browser, tests provide a scripted node.

use async_trait::async_trait;
use eip1193::Provider;
use serde_json::Value;

use crate::error::{AppError, AppResult};

#[async_trait(?Send)]
pub trait JsonRpc {
    async fn request(&self, method: &str, params: Value) -> AppResult<Value>;
}

#[async_trait(?Send)]
impl JsonRpc for Provider {
    async fn request(&self, method: &str, params: Value) -> AppResult<Value> {
        // Empty param lists are omitted, some wallets choke on `[]` for no-arg methods
        let params = match &params {
            Value::Array(items) if items.is_empty() => None,
            Value::Null => None,
            _ => Some(params),
        };
        Provider::request::<Value, Value>(self, method, params)
            .await
            .map_err(AppError::from)
    }
}

#[async_trait(?Send)]
impl<T: JsonRpc + ?Sized> JsonRpc for &T {
    async fn request(&self, method: &str, params: Value) -> AppResult<Value> {
        (**self).request(method, params).await
    }
}

/// Parse a hex quantity (`"0xaa36a7"`) into a number
pub fn parse_quantity(raw: &str) -> AppResult<u64> {
    let digits = raw.trim().trim_start_matches("0x").trim_start_matches("0X");
    if digits.is_empty() {
        return Ok(0);
    }
    u64::from_str_radix(digits, 16)
        .map_err(|e| AppError::Decode(format!("invalid quantity {:?}: {}", raw, e)))
}

/// Human name for well-known chains
pub fn chain_name(chain_id: u64) -> Option<&'static str> {
    match chain_id {
        1 => Some("mainnet"),
        5 => Some("goerli"),
        10 => Some("optimism"),
        56 => Some("bnb"),
        137 => Some("matic"),
        8453 => Some("base"),
        17000 => Some("holesky"),
        42161 => Some("arbitrum"),
        80002 => Some("matic-amoy"),
        11_155_111 => Some("sepolia"),
        _ => None,
    }
}
