//! DeVote Frontend App
//!
//! Root component: wallet context, hash routing, page chrome.

use leptos::prelude::*;

use crate::components::{Footer, Navbar};
use crate::config::AppConfig;
use crate::context::WalletContext;
use crate::pages::{BallotPage, CreatePage, HomePage, NotFoundPage, ResultsPage, VoteListPage};
use crate::routes::{self, Route};

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::load();
    log::info!(
        "[APP] Using contract {} on chain {}",
        config.contract_address,
        config.chain.chain_id
    );

    // Provide context to all children
    let wallet = WalletContext::new(config);
    provide_context(wallet);

    let (route, set_route) = signal(routes::current_route());
    routes::bind_hash_listener(set_route);

    // Pick up a persisted session on first load
    Effect::new(move |_| {
        wallet.restore();
    });

    view! {
        <div class="app-layout">
            <Navbar />
            <main class="main-content">
                {move || match route.get() {
                    Route::Home => view! { <HomePage /> }.into_any(),
                    Route::Create => view! { <CreatePage /> }.into_any(),
                    Route::Vote => view! { <VoteListPage /> }.into_any(),
                    Route::Ballot(id) => view! { <BallotPage id=id /> }.into_any(),
                    Route::Results => view! { <ResultsPage /> }.into_any(),
                    Route::NotFound => view! { <NotFoundPage /> }.into_any(),
                }}
            </main>
            <Footer />
        </div>
    }
}
