//! Chain Access
//!
//! JSON-RPC transport, contract ABI and the typed contract client.

mod abi;
mod contract;
mod rpc;

pub use contract::VotingContract;
pub use rpc::{chain_name, parse_quantity, JsonRpc};

#[cfg(test)]
pub(crate) mod mock;
