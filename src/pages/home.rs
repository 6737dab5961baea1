use leptos::prelude::*;

use crate::routes::Route;

/// (accent, icon, title, description, content)
const FEATURES: &[(&str, &str, &str, &str, &str)] = &[
    (
        "accent-purple",
        "🗳",
        "Secure Voting",
        "Your vote is securely recorded on the blockchain, ensuring it cannot be altered or deleted.",
        "Each vote is cryptographically signed with your wallet, providing a verifiable record of your participation while maintaining anonymity.",
    ),
    (
        "accent-blue",
        "✔",
        "Transparent Results",
        "All votes are publicly verifiable while maintaining voter privacy.",
        "Anyone can independently verify the vote count and results without revealing individual voting choices.",
    ),
    (
        "accent-teal",
        "🔒",
        "Decentralized Control",
        "No central authority controls the voting process or results.",
        "The voting system runs on a distributed network, eliminating the risk of manipulation by any single entity.",
    ),
];

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="page">
            <section class="hero">
                <h1 class="hero-title gradient-text">"Decentralized Voting System"</h1>
                <p class="hero-subtitle">
                    "Secure, transparent, and tamper-proof voting powered by blockchain technology."
                </p>
                <div class="hero-actions">
                    <a href=Route::Vote.href() class="btn btn-primary btn-lg">"Start Voting →"</a>
                    <a href=Route::Create.href() class="btn btn-outline btn-lg">"Create Ballot"</a>
                </div>
            </section>

            <section class="feature-grid">
                {FEATURES.iter().map(|(accent, icon, title, description, content)| view! {
                    <div class=format!("card card-hover {}", accent)>
                        <div class="feature-icon">{*icon}</div>
                        <h3 class="card-title">{*title}</h3>
                        <p class="card-description">{*description}</p>
                        <p class="card-content muted">{*content}</p>
                    </div>
                }).collect_view()}
            </section>
        </div>
    }
}
