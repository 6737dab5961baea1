//! DeVote Frontend Entry Point

mod app;
mod ballots;
mod chain;
mod components;
mod config;
mod context;
mod error;
mod format;
mod models;
mod pages;
mod routes;
mod storage;
mod store;
mod wallet;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = console_log::init_with_level(log::Level::Debug) {
        web_sys::console::error_1(&format!("[APP] Logger already initialised: {}", e).into());
    }
    mount_to_body(App);
}
