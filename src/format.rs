//! Browser clock and locale formatting

use wasm_bindgen::JsValue;

/// Current time in unix seconds
pub fn now_secs() -> u64 {
    (js_sys::Date::now() / 1000.0) as u64
}

fn date_at(secs: u64) -> js_sys::Date {
    js_sys::Date::new(&JsValue::from_f64(secs as f64 * 1000.0))
}

/// Locale date, e.g. `10/18/2026`
pub fn format_date(secs: u64) -> String {
    date_at(secs).to_locale_date_string("default", &JsValue::UNDEFINED).into()
}

/// Locale time, e.g. `2:30:00 PM`
pub fn format_time(secs: u64) -> String {
    date_at(secs).to_locale_time_string("default").into()
}

pub fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}
