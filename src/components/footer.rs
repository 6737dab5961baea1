use leptos::prelude::*;

use crate::format;

/// Page footer
#[component]
pub fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <p>
                "© " {format::current_year()} " "
                <span class="gradient-text">"DeVote"</span>
                ". All rights reserved."
            </p>
        </footer>
    }
}
