//! Pages
//!
//! One component per route.

mod ballot;
mod create;
mod home;
mod not_found;
mod results;
mod vote_list;

pub use ballot::BallotPage;
pub use create::CreatePage;
pub use home::HomePage;
pub use not_found::NotFoundPage;
pub use results::ResultsPage;
pub use vote_list::VoteListPage;

/// Accent classes cycled across ballot cards
pub(crate) const ACCENTS: &[&str] = &[
    "accent-purple",
    "accent-blue",
    "accent-teal",
    "accent-green",
    "accent-orange",
];

pub(crate) fn accent(index: usize) -> &'static str {
    ACCENTS[index % ACCENTS.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_cycles() {
        assert_eq!(accent(0), "accent-purple");
        assert_eq!(accent(4), "accent-orange");
        assert_eq!(accent(5), "accent-purple");
        assert_eq!(accent(7), "accent-teal");
    }
}
