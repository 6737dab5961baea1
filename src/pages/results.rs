use leptos::prelude::*;
use leptos::task::spawn_local;

use super::accent;
use crate::ballots;
use crate::components::{RequireWallet, Spinner};
use crate::context::use_wallet;
use crate::format;
use crate::models::BallotResult;

/// Bar colours cycled across the options of one ballot
const BAR_COLORS: &[&str] = &[
    "bar-purple",
    "bar-blue",
    "bar-teal",
    "bar-green",
    "bar-orange",
    "bar-red",
    "bar-pink",
    "bar-yellow",
];

fn bar_color(option_index: usize) -> &'static str {
    BAR_COLORS[option_index % BAR_COLORS.len()]
}

#[component]
pub fn ResultsPage() -> impl IntoView {
    view! {
        <RequireWallet message="Please connect your wallet to view ballot results.">
            <ResultList />
        </RequireWallet>
    }
}

#[component]
fn ResultList() -> impl IntoView {
    let wallet = use_wallet();

    let (results, set_results) = signal(Vec::<BallotResult>::new());
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let Some(contract) = wallet.contract() else {
            set_loading.set(false);
            return;
        };
        spawn_local(async move {
            match ballots::load_results(&contract).await {
                Ok(list) => set_results.set(list),
                // Read failures leave the list empty
                Err(e) => log::error!("[RESULTS] Error fetching ballots: {}", e),
            }
            set_loading.set(false);
        });
    });

    view! {
        <div class="page wide">
            <h1 class="page-title gradient-text">"Ballot Results"</h1>

            {move || if loading.get() {
                view! { <Spinner label="Loading results..." /> }.into_any()
            } else if results.with(|list| list.is_empty()) {
                view! {
                    <div class="card empty-state">
                        <h3 class="card-title gradient-text">"No Ballots Found"</h3>
                        <p class="muted">"There are no ballots to display results for."</p>
                    </div>
                }.into_any()
            } else {
                view! {
                    <div class="ballot-grid">
                        {results.get().into_iter().enumerate().map(|(index, result)| view! {
                            <ResultCard result=result color=accent(index) />
                        }).collect_view()}
                    </div>
                }.into_any()
            }}
        </div>
    }
}

#[component]
fn ResultCard(result: BallotResult, color: &'static str) -> impl IntoView {
    let ends = if result.is_active {
        format!("Ends on {}", format::format_date(result.end_time))
    } else {
        format!("Ended on {}", format::format_date(result.end_time))
    };

    let rows = result
        .options
        .iter()
        .enumerate()
        .map(|(index, option)| {
            let votes = result.votes_for(index);
            let percentage = result.percentage(index);
            view! {
                <div class="result-row">
                    <div class="result-label">
                        <span>{option.clone()}</span>
                        <span>{format!("{} votes ({}%)", votes, percentage)}</span>
                    </div>
                    <div class="progress">
                        <div
                            class=format!("progress-bar {}", bar_color(index))
                            style=format!("width: {}%", percentage)
                        ></div>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <div class=format!("card card-hover {}", color)>
            <h3 class="card-title accent-text">{result.title.clone()}</h3>
            <p class="card-description">{ends}</p>
            <p class="card-content">{result.description.clone()}</p>
            <div class="result-rows">
                <div class="result-total">{format!("Total votes: {}", result.total_votes)}</div>
                {rows}
            </div>
        </div>
    }
}
