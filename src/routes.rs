//! Hash Routing
//!
//! Pages live behind `#/...` so the app can be served as static files.

use leptos::prelude::*;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;

/// Pages of the app
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Home,
    Create,
    Vote,
    Ballot(u64),
    Results,
    NotFound,
}

impl Route {
    /// Parse `location.hash` (with or without the leading `#`)
    pub fn parse(hash: &str) -> Self {
        let path = hash.trim_start_matches('#').trim_matches('/');
        let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        match segments.as_slice() {
            [] => Route::Home,
            ["create"] => Route::Create,
            ["vote"] => Route::Vote,
            ["vote", id] => id.parse().map(Route::Ballot).unwrap_or(Route::NotFound),
            ["results"] => Route::Results,
            _ => Route::NotFound,
        }
    }

    pub fn href(&self) -> String {
        match self {
            Route::Home | Route::NotFound => "#/".to_string(),
            Route::Create => "#/create".to_string(),
            Route::Vote => "#/vote".to_string(),
            Route::Ballot(id) => format!("#/vote/{}", id),
            Route::Results => "#/results".to_string(),
        }
    }
}

/// Route for the current `location.hash`
pub fn current_route() -> Route {
    web_sys::window()
        .and_then(|w| w.location().hash().ok())
        .map(|hash| Route::parse(&hash))
        .unwrap_or(Route::Home)
}

/// Change page; the `hashchange` listener picks it up
pub fn navigate(route: Route) {
    if let Some(win) = web_sys::window() {
        if let Err(e) = win.location().set_hash(&route.href()) {
            log::warn!("[ROUTE] Could not navigate to {}: {:?}", route.href(), e);
        }
    }
}

/// Keep `set_route` in sync with the address bar
pub fn bind_hash_listener(set_route: WriteSignal<Route>) {
    let on_hashchange = Closure::<dyn FnMut(web_sys::Event)>::new(move |_ev: web_sys::Event| {
        set_route.set(current_route());
    });

    if let Some(win) = web_sys::window() {
        if let Err(e) = win.add_event_listener_with_callback("hashchange", on_hashchange.as_ref().unchecked_ref()) {
            log::warn!("[ROUTE] Could not listen for hashchange: {:?}", e);
        }
    }
    on_hashchange.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_routes() {
        assert_eq!(Route::parse(""), Route::Home);
        assert_eq!(Route::parse("#"), Route::Home);
        assert_eq!(Route::parse("#/"), Route::Home);
        assert_eq!(Route::parse("#/create"), Route::Create);
        assert_eq!(Route::parse("#/vote"), Route::Vote);
        assert_eq!(Route::parse("#/vote/"), Route::Vote);
        assert_eq!(Route::parse("#/vote/12"), Route::Ballot(12));
        assert_eq!(Route::parse("#/results"), Route::Results);
    }

    #[test]
    fn test_parse_unknown_routes() {
        assert_eq!(Route::parse("#/vote/abc"), Route::NotFound);
        assert_eq!(Route::parse("#/vote/-1"), Route::NotFound);
        assert_eq!(Route::parse("#/about"), Route::NotFound);
        assert_eq!(Route::parse("#/vote/1/extra"), Route::NotFound);
    }

    #[test]
    fn test_href_parses_back() {
        for route in [Route::Home, Route::Create, Route::Vote, Route::Ballot(7), Route::Results] {
            assert_eq!(Route::parse(&route.href()), route);
        }
    }
}
