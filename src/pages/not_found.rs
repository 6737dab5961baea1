use leptos::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="page narrow">
            <div class="card empty-state">
                <h1 class="card-title">"Page Not Found"</h1>
                <p class="muted">"There is nothing at this address."</p>
                <a href=Route::Home.href() class="btn btn-primary">"Go Home"</a>
            </div>
        </div>
    }
}
