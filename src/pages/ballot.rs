//! Ballot Detail Page
//!
//! Shows one ballot, lets the connected account pick an option and submit
//! its vote.

use leptos::prelude::*;
use leptos::task::spawn_local;

use super::accent;
use crate::ballots;
use crate::components::{Alert, AlertKind, RequireWallet, Spinner};
use crate::context::use_wallet;
use crate::error::AppError;
use crate::format;
use crate::models::BallotDetail;
use crate::routes::Route;

#[component]
pub fn BallotPage(id: u64) -> impl IntoView {
    view! {
        <RequireWallet message="Please connect your wallet to view and participate in this ballot.">
            <BallotView id=id />
        </RequireWallet>
    }
}

/// DOM id tying an option's radio input to its label
fn option_input_id(index: usize) -> String {
    format!("option-{}", index)
}

#[component]
fn BackLink() -> impl IntoView {
    view! {
        <a href=Route::Vote.href() class="btn btn-outline back-link">"← Back to Ballots"</a>
    }
}

#[component]
fn BallotView(id: u64) -> impl IntoView {
    let wallet = use_wallet();

    let detail = RwSignal::new(Option::<BallotDetail>::None);
    let (loading, set_loading) = signal(true);
    let (load_error, set_load_error) = signal(Option::<String>::None);
    let (reload_trigger, set_reload_trigger) = signal(0u32);

    let (selected, set_selected) = signal(Option::<usize>::None);
    let (submitting, set_submitting) = signal(false);
    let (vote_error, set_vote_error) = signal(Option::<String>::None);
    let (success, set_success) = signal(Option::<String>::None);

    // Reload on retry and when the wallet switches account
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        let voter = wallet.voter();
        let Some(contract) = wallet.contract() else {
            set_load_error.set(Some(AppError::NotConnected.to_string()));
            set_loading.set(false);
            return;
        };

        set_loading.set(true);
        set_load_error.set(None);
        spawn_local(async move {
            match ballots::load_ballot_detail(&contract, id, voter).await {
                Ok(loaded) => {
                    log::info!("[BALLOT] Loaded ballot {} (has_voted={})", id, loaded.has_voted);
                    detail.set(Some(loaded));
                }
                Err(e) => {
                    log::error!("[BALLOT] Error fetching ballot details: {}", e);
                    detail.set(None);
                    set_load_error.set(Some(e.to_string()));
                }
            }
            set_loading.set(false);
        });
    });

    let on_vote = move |_: leptos::ev::MouseEvent| {
        let Some(option_index) = selected.get_untracked() else {
            return;
        };
        let Some(current) = detail.get_untracked() else {
            return;
        };
        let Some(contract) = wallet.contract() else {
            set_vote_error.set(Some(AppError::NotConnected.to_string()));
            return;
        };

        set_submitting.set(true);
        set_vote_error.set(None);
        spawn_local(async move {
            match ballots::cast_vote(&contract, &current, option_index).await {
                Ok(tx_hash) => {
                    log::info!("[BALLOT] Vote recorded in {}", tx_hash);
                    detail.update(|d| {
                        if let Some(d) = d {
                            d.has_voted = true;
                        }
                    });
                    set_success.set(Some("Your vote has been recorded successfully!".to_string()));
                }
                Err(e) => {
                    log::error!("[BALLOT] Error submitting vote: {}", e);
                    set_vote_error.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    move || {
        if loading.get() {
            return view! { <Spinner /> }.into_any();
        }

        if let Some(msg) = load_error.get() {
            return view! {
                <div class="page narrow">
                    <BackLink />
                    <Alert kind=AlertKind::Error title="Error">
                        <p>{msg}</p>
                        <button class="btn btn-primary" on:click=move |_| set_reload_trigger.update(|n| *n += 1)>
                            "Retry"
                        </button>
                    </Alert>
                </div>
            }.into_any();
        }

        let Some(ballot) = detail.get().filter(|d| d.record.exists()) else {
            return view! {
                <div class="page narrow">
                    <div class="card empty-state accent-red">
                        <h1 class="card-title accent-text">"Ballot Not Found"</h1>
                        <p>"The ballot you're looking for doesn't exist or has been removed."</p>
                        <a href=Route::Vote.href() class="btn btn-primary">"View All Ballots"</a>
                    </div>
                </div>
            }.into_any();
        };

        let now = format::now_secs();
        let expired = ballot.is_expired(now);
        let can_vote = ballot.can_vote(now);
        let end_time = ballot.record.end_time;

        let ends_line = if expired {
            view! { <span class="text-danger">{format!("Ended on {}", format::format_date(end_time))}</span> }.into_any()
        } else {
            view! {
                <span>
                    {format!("Ends on {} at {}", format::format_date(end_time), format::format_time(end_time))}
                </span>
            }.into_any()
        };

        let choices = if ballot.has_voted {
            view! {
                <div class="notice notice-info">"You have already voted in this ballot."</div>
            }.into_any()
        } else if expired {
            view! {
                <div class="notice notice-danger">"This ballot has ended and is no longer accepting votes."</div>
            }.into_any()
        } else {
            view! {
                <div class="option-list" role="radiogroup">
                    {ballot.record.options.iter().cloned().enumerate().map(|(index, option)| {
                        view! {
                            <label
                                class=format!("option-row {}", accent(index))
                                class:selected=move || selected.get() == Some(index)
                                for=option_input_id(index)
                            >
                                <input
                                    type="radio"
                                    name="ballot-option"
                                    id=option_input_id(index)
                                    prop:checked=move || selected.get() == Some(index)
                                    on:change=move |_| set_selected.set(Some(index))
                                />
                                <span class="option-label">{option}</span>
                            </label>
                        }
                    }).collect_view()}
                </div>
            }.into_any()
        };

        view! {
            <div class="page medium">
                <BackLink />
                <div class="card accent-purple">
                    <h1 class="card-title gradient-text">{ballot.record.title.clone()}</h1>
                    <p class="card-description">{ends_line}</p>
                    <p class="card-content">{ballot.record.description.clone()}</p>

                    {move || vote_error.get().map(|msg| view! {
                        <Alert kind=AlertKind::Error title="Error">{msg}</Alert>
                    })}
                    {move || success.get().map(|msg| view! {
                        <Alert kind=AlertKind::Success title="Success">{msg}</Alert>
                    })}

                    {choices}

                    <Show when=move || can_vote>
                        <button
                            class="btn btn-primary btn-block"
                            disabled=move || selected.get().is_none() || submitting.get()
                            on:click=on_vote
                        >
                            {move || if submitting.get() { "Submitting Vote..." } else { "Submit Vote" }}
                        </button>
                    </Show>
                </div>
            </div>
        }.into_any()
    }
}
