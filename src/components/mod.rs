//! UI Components
//!
//! Reusable Leptos components.

mod alert;
mod connect_prompt;
mod footer;
mod navbar;
mod spinner;
mod theme_toggle;

pub use alert::{Alert, AlertKind};
pub use connect_prompt::RequireWallet;
pub use footer::Footer;
pub use navbar::Navbar;
pub use spinner::Spinner;
