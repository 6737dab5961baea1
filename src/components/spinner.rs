use leptos::prelude::*;

/// Centered loading indicator
#[component]
pub fn Spinner(#[prop(optional, into)] label: Option<String>) -> impl IntoView {
    view! {
        <div class="spinner-wrap">
            <span class="spinner" aria-hidden="true"></span>
            {label.map(|text| view! { <span class="spinner-label">{text}</span> })}
        </div>
    }
}
