//! Wallet Context
//!
//! Shared wallet session provided via Leptos Context API.

use alloy_primitives::Address;
use eip1193::Provider;
use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::chain::VotingContract;
use crate::config::{AppConfig, WALLET_ADDRESS_KEY};
use crate::error::AppError;
use crate::storage;
use crate::store::{
    store_apply_accounts, store_apply_chain, store_clear, store_set_connected, store_set_connecting,
    store_set_failed, AccountsUpdate, ConnectionStatus, WalletState, WalletStateStoreFields,
    WalletStore,
};
use crate::wallet;

/// Wallet session plus app settings, available to every page
#[derive(Clone, Copy)]
pub struct WalletContext {
    pub store: WalletStore,
    pub config: AppConfig,
}

impl WalletContext {
    pub fn new(config: AppConfig) -> Self {
        Self {
            store: Store::new(WalletState::default()),
            config,
        }
    }

    pub fn is_connected(&self) -> bool {
        self.store.status().get() == ConnectionStatus::Connected
    }

    pub fn is_connecting(&self) -> bool {
        self.store.status().get() == ConnectionStatus::Connecting
    }

    pub fn address(&self) -> Option<String> {
        self.store.address().get()
    }

    /// Connected account as an address, if it parses
    pub fn voter(&self) -> Option<Address> {
        self.address().and_then(|a| a.parse().ok())
    }

    /// Last connect failure
    pub fn error(&self) -> Option<String> {
        self.store.error().get()
    }

    /// Set while connected to a chain other than the configured one
    pub fn network_error(&self) -> Option<String> {
        wallet::network_error(self.store.chain_id().get(), &self.config.chain).map(|e| e.to_string())
    }

    /// Contract client for the connected account, `None` while disconnected
    pub fn contract(&self) -> Option<VotingContract<Provider>> {
        if self.store.status().get_untracked() != ConnectionStatus::Connected {
            return None;
        }
        let provider = Provider::detect()?;
        let mut contract = VotingContract::new(provider, self.config.contract_address)
            .with_polling(self.config.receipt_polling);
        if let Some(sender) = self.store.address().get_untracked().and_then(|a| a.parse().ok()) {
            contract = contract.with_sender(sender);
        }
        Some(contract)
    }

    /// Run the connect sequence against the injected wallet
    pub fn connect(&self) {
        let ctx = *self;
        spawn_local(async move {
            let Some(provider) = Provider::detect() else {
                log::error!("[WALLET] No injected wallet found");
                store_set_failed(&ctx.store, AppError::WalletMissing.to_string());
                return;
            };

            store_set_connecting(&ctx.store);
            match wallet::establish_session(&provider, &ctx.config.chain).await {
                Ok(session) => {
                    storage::save(WALLET_ADDRESS_KEY, &session.address);
                    store_set_connected(&ctx.store, session.address, session.chain_id);
                    ctx.listen(&provider);
                }
                Err(e) => {
                    log::error!("[WALLET] Error connecting wallet: {}", e);
                    store_set_failed(&ctx.store, e.to_string());
                }
            }
        });
    }

    pub fn disconnect(&self) {
        store_clear(&self.store);
        storage::remove(WALLET_ADDRESS_KEY);
        log::info!("[WALLET] Disconnected");
    }

    /// Reconnect silently when a previous session was persisted
    pub fn restore(&self) {
        if storage::load(WALLET_ADDRESS_KEY).is_some() {
            log::info!("[WALLET] Restoring previous session");
            self.connect();
        }
    }

    /// Follow account and chain switches made in the wallet (registered once)
    fn listen(&self, provider: &Provider) {
        if self.store.listening().get_untracked() {
            return;
        }
        self.store.listening().set(true);

        let store = self.store;
        provider.on_accounts_changed(move |accounts| match store_apply_accounts(&store, accounts) {
            AccountsUpdate::Switched(account) => {
                log::info!("[WALLET] Account changed to {}", account);
                storage::save(WALLET_ADDRESS_KEY, &account);
            }
            AccountsUpdate::Disconnected => {
                storage::remove(WALLET_ADDRESS_KEY);
                log::info!("[WALLET] Wallet reported no accounts, disconnected");
            }
            AccountsUpdate::Ignored => {}
        });

        provider.on_chain_changed(move |raw| match store_apply_chain(&store, &raw) {
            Some(chain_id) => log::info!("[WALLET] Chain changed to {}", chain_id),
            None => log::warn!("[WALLET] Ignoring chain change {:?}", raw),
        });
    }
}

/// Get the wallet context
pub fn use_wallet() -> WalletContext {
    expect_context::<WalletContext>()
}
