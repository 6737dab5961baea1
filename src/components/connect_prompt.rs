//! Connect Prompt Component
//!
//! Shown by every page that needs a wallet before it can load anything.
//! `RequireWallet` wraps page content with the connect and network gates.

use leptos::prelude::*;

use super::alert::{Alert, AlertKind};
use crate::context::use_wallet;

#[component]
pub fn ConnectPrompt(#[prop(into)] message: String) -> impl IntoView {
    let wallet = use_wallet();

    view! {
        <div class="card connect-card">
            <h2 class="card-title">"Connect Your Wallet"</h2>
            <p class="card-description">{message}</p>
            <button
                class="btn btn-primary"
                disabled=move || wallet.is_connecting()
                on:click=move |_| wallet.connect()
            >
                {move || if wallet.is_connecting() { "Connecting..." } else { "Connect Wallet" }}
            </button>
        </div>
    }
}

/// Full-page network mismatch notice
#[component]
pub fn NetworkAlert(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <div class="page narrow">
            <Alert kind=AlertKind::Error title="Network Error">
                {message}
            </Alert>
        </div>
    }
}

/// Renders `children` only once a wallet is connected to the right network
#[component]
pub fn RequireWallet(#[prop(into)] message: String, children: ChildrenFn) -> impl IntoView {
    let wallet = use_wallet();

    move || {
        if !wallet.is_connected() {
            view! { <ConnectPrompt message=message.clone() /> }.into_any()
        } else if let Some(error) = wallet.network_error() {
            view! { <NetworkAlert message=error /> }.into_any()
        } else {
            children().into_any()
        }
    }
}
