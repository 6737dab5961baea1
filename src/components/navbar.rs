//! Navbar Component
//!
//! Brand, page links, theme toggle and wallet controls. Collapses into a menu
//! on narrow screens.

use leptos::prelude::*;

use super::theme_toggle::ThemeToggle;
use crate::context::use_wallet;
use crate::models::format_address;
use crate::routes::Route;

/// (route, label, accent)
const NAV_LINKS: &[(Route, &str, &str)] = &[
    (Route::Vote, "Vote", "accent-purple"),
    (Route::Create, "Create Ballot", "accent-blue"),
    (Route::Results, "Results", "accent-teal"),
];

/// Connect button or connected address with disconnect
#[component]
fn WalletControls(#[prop(optional)] stacked: bool) -> impl IntoView {
    let wallet = use_wallet();
    let class = if stacked { "wallet-controls stacked" } else { "wallet-controls" };

    view! {
        <div class=class>
            {move || if wallet.is_connected() {
                let address = wallet.address().unwrap_or_default();
                view! {
                    <span class="address-pill" title=address.clone()>{format_address(&address)}</span>
                    <button class="btn btn-outline btn-danger btn-sm" on:click=move |_| wallet.disconnect()>
                        "Disconnect"
                    </button>
                }.into_any()
            } else {
                view! {
                    <button
                        class="btn btn-primary"
                        disabled=move || wallet.is_connecting()
                        on:click=move |_| wallet.connect()
                    >
                        {move || if wallet.is_connecting() { "Connecting..." } else { "Connect Wallet" }}
                    </button>
                }.into_any()
            }}
            {move || wallet.error().map(|msg| view! { <span class="wallet-error">{msg}</span> })}
        </div>
    }
}

#[component]
pub fn Navbar() -> impl IntoView {
    let (menu_open, set_menu_open) = signal(false);

    let links = move |close_menu: bool| {
        NAV_LINKS.iter().map(|(route, label, accent)| {
            view! {
                <a
                    href=route.href()
                    class=format!("nav-link {}", accent)
                    on:click=move |_| {
                        if close_menu {
                            set_menu_open.set(false);
                        }
                    }
                >
                    {*label}
                </a>
            }
        }).collect_view()
    };

    view! {
        <header class="navbar">
            <div class="navbar-inner">
                <a href=Route::Home.href() class="brand gradient-text">"DeVote"</a>

                <nav class="nav-desktop">{links(false)}</nav>

                <div class="nav-actions">
                    <ThemeToggle />
                    <div class="desktop-only">
                        <WalletControls />
                    </div>
                    <button
                        class="btn btn-ghost menu-btn mobile-only"
                        on:click=move |_| set_menu_open.update(|open| *open = !*open)
                    >
                        {move || if menu_open.get() { "✕" } else { "☰" }}
                    </button>
                </div>
            </div>

            <Show when=move || menu_open.get()>
                <div class="nav-mobile">
                    <nav class="nav-mobile-links">{links(true)}</nav>
                    <WalletControls stacked=true />
                </div>
            </Show>
        </header>
    }
}
