//! Theme Toggle Component
//!
//! Light/dark switch persisted in local storage, applied as a `dark` class on
//! the document element.

use leptos::prelude::*;

use crate::config::THEME_KEY;
use crate::storage;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(s: &str) -> Self {
        match s {
            "dark" => Theme::Dark,
            _ => Theme::Light,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

fn apply_theme(theme: Theme) {
    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.document_element());
    if let Some(root) = root {
        if let Err(e) = root.class_list().toggle_with_force("dark", theme == Theme::Dark) {
            log::warn!("[THEME] Could not apply {} theme: {:?}", theme.as_str(), e);
        }
    }
}

#[component]
pub fn ThemeToggle() -> impl IntoView {
    let initial = storage::load(THEME_KEY)
        .map(|s| Theme::parse(&s))
        .unwrap_or_default();
    let (theme, set_theme) = signal(initial);

    Effect::new(move |_| {
        let current = theme.get();
        apply_theme(current);
        storage::save(THEME_KEY, current.as_str());
    });

    view! {
        <button
            class="btn btn-ghost theme-toggle"
            title="Toggle theme"
            on:click=move |_| set_theme.update(|t| *t = t.toggled())
        >
            {move || if theme.get() == Theme::Dark { "☀" } else { "☾" }}
        </button>
    }
}
