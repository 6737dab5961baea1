//! Active Ballots Page
//!
//! Lists ballots still open for voting with a link to each one.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::accent;
use crate::ballots;
use crate::components::{Alert, AlertKind, RequireWallet, Spinner};
use crate::context::use_wallet;
use crate::error::AppError;
use crate::format;
use crate::models::BallotSummary;
use crate::routes::Route;

#[component]
pub fn VoteListPage() -> impl IntoView {
    view! {
        <RequireWallet message="Please connect your wallet to view and participate in active ballots.">
            <ActiveBallots />
        </RequireWallet>
    }
}

#[component]
fn ActiveBallots() -> impl IntoView {
    let wallet = use_wallet();

    let (ballots, set_ballots) = signal(Vec::<BallotSummary>::new());
    let (loading, set_loading) = signal(true);
    let (error, set_error) = signal(Option::<String>::None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let Some(contract) = wallet.contract() else {
            set_error.set(Some(AppError::NotConnected.to_string()));
            set_loading.set(false);
            return;
        };

        set_loading.set(true);
        set_error.set(None);
        spawn_local(async move {
            match ballots::load_active_ballots(&contract, format::now_secs()).await {
                Ok(list) => {
                    log::info!("[VOTE] Loaded {} active ballots", list.len());
                    set_ballots.set(list);
                }
                Err(e) => {
                    log::error!("[VOTE] Error fetching ballots: {}", e);
                    set_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page wide">
            <h1 class="page-title gradient-text">"Active Ballots"</h1>

            {move || error.get().map(|msg| view! {
                <Alert kind=AlertKind::Error title="Error">
                    <p>{msg}</p>
                    <button class="btn btn-primary" on:click=move |_| set_reload_trigger.update(|n| *n += 1)>
                        "Retry"
                    </button>
                </Alert>
            })}

            {move || if loading.get() {
                view! { <Spinner label="Loading ballots..." /> }.into_any()
            } else if ballots.with(|list| list.is_empty()) {
                view! {
                    <div class="card empty-state">
                        <h3 class="card-title gradient-text">"No Active Ballots"</h3>
                        <p class="muted">"There are currently no active ballots to vote on."</p>
                        <a href=Route::Create.href() class="btn btn-primary">"Create a Ballot"</a>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="ballot-grid">
                        {ballots.get().into_iter().enumerate().map(|(index, ballot)| {
                            let color = accent(index);
                            view! {
                                <div class=format!("card card-hover {}", color)>
                                    <h3 class="card-title accent-text">{ballot.title}</h3>
                                    <p class="card-description">
                                        {format!(
                                            "Ends on {} at {}",
                                            format::format_date(ballot.end_time),
                                            format::format_time(ballot.end_time),
                                        )}
                                    </p>
                                    <p class="card-content">{ballot.description}</p>
                                    <a href=Route::Ballot(ballot.id).href() class="btn btn-accent">"Vote Now"</a>
                                </div>
                            }
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}
