//! Alert Component
//!
//! Titled message box for errors and confirmations.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AlertKind {
    Error,
    Success,
}

impl AlertKind {
    fn class(&self) -> &'static str {
        match self {
            AlertKind::Error => "alert alert-error",
            AlertKind::Success => "alert alert-success",
        }
    }
}

#[component]
pub fn Alert(
    kind: AlertKind,
    #[prop(into)] title: String,
    children: Children,
) -> impl IntoView {
    view! {
        <div class=kind.class() role="alert">
            <strong class="alert-title">{title}</strong>
            <div class="alert-description">{children()}</div>
        </div>
    }
}
