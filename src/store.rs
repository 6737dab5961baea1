//! Wallet Session Store
//!
//! Uses Leptos reactive_stores so pages only re-run for the fields they read.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::chain::parse_quantity;

/// Where the wallet connection stands
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ConnectionStatus {
    #[default]
    Disconnected,
    Connecting,
    Connected,
}

/// Wallet session with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct WalletState {
    pub status: ConnectionStatus,
    /// Connected account as reported by the wallet
    pub address: Option<String>,
    /// Chain the wallet is currently on
    pub chain_id: Option<u64>,
    /// Last connect failure, shown in the navbar
    pub error: Option<String>,
    /// Wallet event listeners are registered
    pub listening: bool,
}

/// Type alias for the store
pub type WalletStore = Store<WalletState>;

// ========================
// Store Helper Functions
// ========================

pub fn store_set_connecting(store: &WalletStore) {
    store.status().set(ConnectionStatus::Connecting);
    store.error().set(None);
}

pub fn store_set_connected(store: &WalletStore, address: String, chain_id: u64) {
    store.address().set(Some(address));
    store.chain_id().set(Some(chain_id));
    store.status().set(ConnectionStatus::Connected);
}

pub fn store_set_failed(store: &WalletStore, message: String) {
    store.status().set(ConnectionStatus::Disconnected);
    store.error().set(Some(message));
}

/// Back to a blank session (listeners stay registered)
pub fn store_clear(store: &WalletStore) {
    store.status().set(ConnectionStatus::Disconnected);
    store.address().set(None);
    store.chain_id().set(None);
    store.error().set(None);
}

/// What an `accountsChanged` event did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountsUpdate {
    /// No live session to update
    Ignored,
    /// Now following this account
    Switched(String),
    /// Wallet reported no accounts; session cleared
    Disconnected,
}

/// Apply the wallet's current account list to a connected session
pub fn store_apply_accounts(store: &WalletStore, accounts: Vec<String>) -> AccountsUpdate {
    if store.status().get_untracked() != ConnectionStatus::Connected {
        return AccountsUpdate::Ignored;
    }
    match accounts.into_iter().next() {
        Some(account) => {
            store.address().set(Some(account.clone()));
            AccountsUpdate::Switched(account)
        }
        None => {
            store_clear(store);
            AccountsUpdate::Disconnected
        }
    }
}

/// Apply a `chainChanged` value; returns the new chain id, `None` if unparseable
pub fn store_apply_chain(store: &WalletStore, raw: &str) -> Option<u64> {
    let chain_id = parse_quantity(raw).ok()?;
    store.chain_id().set(Some(chain_id));
    Some(chain_id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_transitions() {
        let store = Store::new(WalletState::default());
        assert_eq!(store.status().get_untracked(), ConnectionStatus::Disconnected);

        store_set_connecting(&store);
        assert_eq!(store.status().get_untracked(), ConnectionStatus::Connecting);

        store_set_connected(&store, "0xabc".to_string(), 11_155_111);
        assert_eq!(store.status().get_untracked(), ConnectionStatus::Connected);
        assert_eq!(store.address().get_untracked(), Some("0xabc".to_string()));
        assert_eq!(store.chain_id().get_untracked(), Some(11_155_111));

        store.listening().set(true);
        store_clear(&store);
        assert_eq!(store.status().get_untracked(), ConnectionStatus::Disconnected);
        assert_eq!(store.address().get_untracked(), None);
        assert!(store.listening().get_untracked());
    }

    #[test]
    fn test_failed_connect_keeps_message() {
        let store = Store::new(WalletState::default());
        store_set_connecting(&store);
        store_set_failed(&store, "Request rejected in wallet".to_string());
        assert_eq!(store.status().get_untracked(), ConnectionStatus::Disconnected);
        assert_eq!(store.error().get_untracked(), Some("Request rejected in wallet".to_string()));
    }

    #[test]
    fn test_account_switch_while_connected() {
        let store = Store::new(WalletState::default());
        store_set_connected(&store, "0xabc".to_string(), 11_155_111);

        let update = store_apply_accounts(&store, vec!["0xdef".to_string(), "0x123".to_string()]);
        assert_eq!(update, AccountsUpdate::Switched("0xdef".to_string()));
        assert_eq!(store.address().get_untracked(), Some("0xdef".to_string()));
        assert_eq!(store.status().get_untracked(), ConnectionStatus::Connected);
    }

    #[test]
    fn test_empty_accounts_disconnect() {
        let store = Store::new(WalletState::default());
        store_set_connected(&store, "0xabc".to_string(), 11_155_111);

        assert_eq!(store_apply_accounts(&store, Vec::new()), AccountsUpdate::Disconnected);
        assert_eq!(store.status().get_untracked(), ConnectionStatus::Disconnected);
        assert_eq!(store.address().get_untracked(), None);
        assert_eq!(store.chain_id().get_untracked(), None);
    }

    #[test]
    fn test_account_events_ignored_while_disconnected() {
        let store = Store::new(WalletState::default());
        let update = store_apply_accounts(&store, vec!["0xdef".to_string()]);
        assert_eq!(update, AccountsUpdate::Ignored);
        assert_eq!(store.address().get_untracked(), None);
    }

    #[test]
    fn test_chain_change() {
        let store = Store::new(WalletState::default());
        store_set_connected(&store, "0xabc".to_string(), 11_155_111);

        assert_eq!(store_apply_chain(&store, "0x1"), Some(1));
        assert_eq!(store.chain_id().get_untracked(), Some(1));

        assert_eq!(store_apply_chain(&store, "0xnope"), None);
        assert_eq!(store.chain_id().get_untracked(), Some(1));
    }
}
