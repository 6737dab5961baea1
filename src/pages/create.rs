//! Create Ballot Page
//!
//! Form for a new ballot. Validation runs locally before anything is sent to
//! the wallet; success returns to the active ballot list.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::ballots::{self, BallotReader};
use crate::components::{Alert, AlertKind, RequireWallet};
use crate::context::use_wallet;
use crate::error::AppError;
use crate::models::{BallotDraft, DURATION_CHOICES};
use crate::routes::{self, Route};

#[component]
pub fn CreatePage() -> impl IntoView {
    view! {
        <RequireWallet message="Please connect your wallet to create a new ballot.">
            <CreateForm />
        </RequireWallet>
    }
}

fn duration_label(days: u64) -> String {
    if days == 1 {
        "1 day".to_string()
    } else {
        format!("{} days", days)
    }
}

/// Apply a form edit; any previous form error no longer applies
fn edit_draft(
    draft: RwSignal<BallotDraft>,
    set_form_error: WriteSignal<Option<String>>,
    f: impl FnOnce(&mut BallotDraft),
) {
    draft.update(f);
    set_form_error.set(None);
}

#[component]
fn CreateForm() -> impl IntoView {
    let wallet = use_wallet();

    let draft = RwSignal::new(BallotDraft::default());
    let (submitting, set_submitting) = signal(false);
    let (contract_error, set_contract_error) = signal(Option::<String>::None);
    let (form_error, set_form_error) = signal(Option::<String>::None);

    // Check once that something is deployed at the configured address
    Effect::new(move |_| {
        let Some(contract) = wallet.contract() else {
            return;
        };
        spawn_local(async move {
            match contract.is_deployed().await {
                Ok(true) => set_contract_error.set(None),
                Ok(false) => {
                    let err = AppError::ContractMissing(contract.address().to_string());
                    log::error!("[CREATE] {}", err);
                    set_contract_error.set(Some(err.to_string()));
                }
                Err(e) => log::error!("[CREATE] Error checking contract: {}", e),
            }
        });
    });

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if submitting.get_untracked() {
            return;
        }
        let current = draft.get_untracked();
        let contract = wallet.contract();

        set_submitting.set(true);
        set_form_error.set(None);
        spawn_local(async move {
            match ballots::submit_ballot(contract.as_ref(), &current).await {
                Ok(tx_hash) => {
                    log::info!("[CREATE] Ballot created in {}", tx_hash);
                    routes::navigate(Route::Vote);
                }
                Err(e) => {
                    log::error!("[CREATE] Error creating ballot: {}", e);
                    set_form_error.set(Some(e.to_string()));
                }
            }
            set_submitting.set(false);
        });
    };

    let error = move || form_error.get().or_else(|| contract_error.get());

    view! {
        <div class="page medium">
            <h1 class="page-title gradient-text">"Create a New Ballot"</h1>

            {move || error().map(|msg| view! {
                <Alert kind=AlertKind::Error title="Error">{msg}</Alert>
            })}

            <form class="card accent-purple" on:submit=on_submit>
                <h2 class="card-title gradient-text">"Ballot Details"</h2>
                <p class="card-description">"Fill in the information below to create a new voting ballot."</p>

                <div class="field">
                    <label for="title">"Title"</label>
                    <input
                        id="title"
                        type="text"
                        placeholder="Enter ballot title"
                        prop:value=move || draft.with(|d| d.title.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_draft(draft, set_form_error, move |d| d.title = value);
                        }
                    />
                </div>

                <div class="field">
                    <label for="description">"Description"</label>
                    <textarea
                        id="description"
                        rows="4"
                        placeholder="Provide details about this ballot"
                        prop:value=move || draft.with(|d| d.description.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit_draft(draft, set_form_error, move |d| d.description = value);
                        }
                    ></textarea>
                </div>

                <div class="field">
                    <label>"Options"</label>
                    <For
                        each=move || 0..draft.with(|d| d.options.len())
                        key=|index| *index
                        children=move |index| {
                            view! {
                                <div class="option-input">
                                    <input
                                        type="text"
                                        placeholder=format!("Option {}", index + 1)
                                        prop:value=move || draft.with(|d| d.options.get(index).cloned().unwrap_or_default())
                                        on:input=move |ev| {
                                            let value = event_target_value(&ev);
                                            edit_draft(draft, set_form_error, move |d| d.update_option(index, value));
                                        }
                                    />
                                    <Show when=move || draft.with(|d| d.options.len() > 2)>
                                        <button
                                            type="button"
                                            class="btn btn-ghost btn-danger"
                                            title="Remove option"
                                            on:click=move |_| edit_draft(draft, set_form_error, move |d| d.remove_option(index))
                                        >
                                            "✕"
                                        </button>
                                    </Show>
                                </div>
                            }
                        }
                    />
                    <button
                        type="button"
                        class="btn btn-outline"
                        on:click=move |_| edit_draft(draft, set_form_error, |d| d.add_option())
                    >
                        "+ Add Option"
                    </button>
                </div>

                <div class="field">
                    <label for="duration">"Duration"</label>
                    <select
                        id="duration"
                        on:change=move |ev| {
                            if let Ok(days) = event_target_value(&ev).parse::<u64>() {
                                edit_draft(draft, set_form_error, move |d| d.duration_days = days);
                            }
                        }
                    >
                        {DURATION_CHOICES.iter().copied().map(|days| view! {
                            <option
                                value=days.to_string()
                                prop:selected=move || draft.with(|d| d.duration_days == days)
                            >
                                {duration_label(days)}
                            </option>
                        }).collect_view()}
                    </select>
                </div>

                <button
                    type="submit"
                    class="btn btn-primary btn-block"
                    disabled=move || submitting.get() || contract_error.get().is_some()
                >
                    {move || if submitting.get() { "Creating Ballot..." } else { "Create Ballot" }}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_duration_labels() {
        assert_eq!(duration_label(1), "1 day");
        assert_eq!(duration_label(14), "14 days");
    }
}
