//! Build-time Configuration
//!
//! Target chain and contract location. The contract address can be set at
//! build time with `DEVOTE_CONTRACT_ADDRESS=0x... trunk build`.

use alloy_primitives::Address;
use serde::Serialize;

/// Sepolia chain id
pub const SEPOLIA_CHAIN_ID: u64 = 11_155_111;

/// Used when no address is provided at build time
const DEFAULT_CONTRACT_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Ballot ids probed when `getActiveBallots` is unavailable
pub const MAX_SCANNED_BALLOTS: u64 = 10;

/// Local storage key for the last connected account
pub const WALLET_ADDRESS_KEY: &str = "walletAddress";
/// Local storage key for the colour theme
pub const THEME_KEY: &str = "theme";

/// How transaction receipts are awaited
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReceiptPolling {
    pub interval_ms: u32,
    pub max_polls: u32,
}

impl Default for ReceiptPolling {
    fn default() -> Self {
        Self { interval_ms: 1_500, max_polls: 120 }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NativeCurrency {
    pub name: &'static str,
    pub symbol: &'static str,
    pub decimals: u8,
}

/// `wallet_addEthereumChain` parameter object
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainParams {
    pub chain_id: String,
    pub chain_name: &'static str,
    pub native_currency: NativeCurrency,
    pub rpc_urls: Vec<&'static str>,
    pub block_explorer_urls: Vec<&'static str>,
}

/// Chain the application expects the wallet to be on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainConfig {
    pub chain_id: u64,
    pub chain_name: &'static str,
    pub currency_name: &'static str,
    pub currency_symbol: &'static str,
    pub rpc_url: &'static str,
    pub explorer_url: &'static str,
}

impl ChainConfig {
    pub const fn sepolia() -> Self {
        Self {
            chain_id: SEPOLIA_CHAIN_ID,
            chain_name: "Sepolia Test Network",
            currency_name: "Sepolia ETH",
            currency_symbol: "ETH",
            rpc_url: "https://sepolia.infura.io/v3/",
            explorer_url: "https://sepolia.etherscan.io",
        }
    }

    /// Chain id as the hex quantity wallets expect
    pub fn hex_chain_id(&self) -> String {
        format!("{:#x}", self.chain_id)
    }

    pub fn add_chain_params(&self) -> ChainParams {
        ChainParams {
            chain_id: self.hex_chain_id(),
            chain_name: self.chain_name,
            native_currency: NativeCurrency {
                name: self.currency_name,
                symbol: self.currency_symbol,
                decimals: 18,
            },
            rpc_urls: vec![self.rpc_url],
            block_explorer_urls: vec![self.explorer_url],
        }
    }
}

/// Resolved application settings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AppConfig {
    pub chain: ChainConfig,
    pub contract_address: Address,
    pub receipt_polling: ReceiptPolling,
}

impl AppConfig {
    pub fn load() -> Self {
        let raw = option_env!("DEVOTE_CONTRACT_ADDRESS").unwrap_or(DEFAULT_CONTRACT_ADDRESS);
        Self {
            chain: ChainConfig::sepolia(),
            contract_address: parse_contract_address(raw),
            receipt_polling: ReceiptPolling::default(),
        }
    }
}

fn parse_contract_address(raw: &str) -> Address {
    match raw.trim().parse::<Address>() {
        Ok(address) => address,
        Err(e) => {
            log::error!("[CONFIG] Invalid contract address {:?}: {}", raw, e);
            Address::ZERO
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sepolia_hex_chain_id() {
        assert_eq!(ChainConfig::sepolia().hex_chain_id(), "0xaa36a7");
    }

    #[test]
    fn test_add_chain_params_shape() {
        let params = serde_json::to_value(ChainConfig::sepolia().add_chain_params()).unwrap();
        assert_eq!(params["chainId"], "0xaa36a7");
        assert_eq!(params["chainName"], "Sepolia Test Network");
        assert_eq!(params["nativeCurrency"]["decimals"], 18);
        assert_eq!(params["rpcUrls"][0], "https://sepolia.infura.io/v3/");
        assert_eq!(params["blockExplorerUrls"][0], "https://sepolia.etherscan.io");
    }

    #[test]
    fn test_parse_contract_address() {
        let parsed = parse_contract_address(" 0x5FbDB2315678afecb367f032d93F642f64180aa3 ");
        assert_ne!(parsed, Address::ZERO);
        assert_eq!(parse_contract_address("not-an-address"), Address::ZERO);
    }
}
