//! Frontend Models
//!
//! View models rebuilt from contract reads on every page load.

use alloy_primitives::Address;

use crate::error::{AppError, AppResult};

/// Decoded `getBallot` answer
#[derive(Debug, Clone, PartialEq)]
pub struct BallotRecord {
    pub title: String,
    pub description: String,
    pub options: Vec<String>,
    pub votes: Vec<u64>,
    /// Unix seconds
    pub start_time: u64,
    /// Unix seconds
    pub end_time: u64,
    pub creator: Address,
    pub is_active: bool,
}

impl BallotRecord {
    /// Saturates; tallies above `u64::MAX` arrive clamped
    pub fn total_votes(&self) -> u64 {
        self.votes.iter().fold(0u64, |total, votes| total.saturating_add(*votes))
    }

    /// Unknown ids read back as an empty ballot
    pub fn exists(&self) -> bool {
        !self.options.is_empty()
    }
}

/// Row of the active-ballot list
#[derive(Debug, Clone, PartialEq)]
pub struct BallotSummary {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub end_time: u64,
    pub is_active: bool,
}

impl BallotSummary {
    pub fn from_record(id: u64, record: BallotRecord) -> Self {
        Self {
            id,
            title: record.title,
            description: record.description,
            end_time: record.end_time,
            is_active: record.is_active,
        }
    }
}

/// Everything the vote page shows
#[derive(Debug, Clone, PartialEq)]
pub struct BallotDetail {
    pub id: u64,
    pub record: BallotRecord,
    pub has_voted: bool,
}

impl BallotDetail {
    pub fn is_expired(&self, now: u64) -> bool {
        now > self.record.end_time
    }

    pub fn can_vote(&self, now: u64) -> bool {
        !self.has_voted && !self.is_expired(now) && self.record.is_active
    }
}

/// Tallied ballot for the results page
#[derive(Debug, Clone, PartialEq)]
pub struct BallotResult {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub options: Vec<String>,
    pub votes: Vec<u64>,
    pub total_votes: u64,
    pub end_time: u64,
    pub is_active: bool,
}

impl BallotResult {
    pub fn from_record(id: u64, record: BallotRecord) -> Self {
        let total_votes = record.total_votes();
        Self {
            id,
            title: record.title,
            description: record.description,
            options: record.options,
            votes: record.votes,
            total_votes,
            end_time: record.end_time,
            is_active: record.is_active,
        }
    }

    /// Votes for an option; options without a tally count as zero
    pub fn votes_for(&self, option_index: usize) -> u64 {
        self.votes.get(option_index).copied().unwrap_or(0)
    }

    /// Share of the total, rounded to a whole percent
    pub fn percentage(&self, option_index: usize) -> u64 {
        if self.total_votes == 0 {
            return 0;
        }
        let share = self.votes_for(option_index) as f64 / self.total_votes as f64 * 100.0;
        share.round() as u64
    }
}

/// Ballot durations offered by the create form, in days
pub const DURATION_CHOICES: &[u64] = &[1, 3, 7, 14, 30];

const SECONDS_PER_DAY: u64 = 24 * 60 * 60;

/// Create-ballot form state
#[derive(Debug, Clone, PartialEq)]
pub struct BallotDraft {
    pub title: String,
    pub description: String,
    pub options: Vec<String>,
    pub duration_days: u64,
}

impl Default for BallotDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            options: vec![String::new(), String::new()],
            duration_days: DURATION_CHOICES[0],
        }
    }
}

impl BallotDraft {
    pub fn add_option(&mut self) {
        self.options.push(String::new());
    }

    /// Never drops below two option rows
    pub fn remove_option(&mut self, index: usize) {
        if self.options.len() <= 2 || index >= self.options.len() {
            return;
        }
        self.options.remove(index);
    }

    pub fn update_option(&mut self, index: usize, value: String) {
        if let Some(option) = self.options.get_mut(index) {
            *option = value;
        }
    }

    /// Check the form and produce what goes on chain
    pub fn validate(&self) -> AppResult<NewBallot> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(AppError::Validation("Please enter a ballot title".to_string()));
        }
        let description = self.description.trim();
        if description.is_empty() {
            return Err(AppError::Validation("Please enter a ballot description".to_string()));
        }
        let options: Vec<String> = self
            .options
            .iter()
            .map(|opt| opt.trim())
            .filter(|opt| !opt.is_empty())
            .map(str::to_string)
            .collect();
        if options.len() < 2 {
            return Err(AppError::Validation("Please enter at least two options".to_string()));
        }
        Ok(NewBallot {
            title: title.to_string(),
            description: description.to_string(),
            options,
            duration_secs: self.duration_days * SECONDS_PER_DAY,
        })
    }
}

/// Validated `createBallot` arguments
#[derive(Debug, Clone, PartialEq)]
pub struct NewBallot {
    pub title: String,
    pub description: String,
    pub options: Vec<String>,
    pub duration_secs: u64,
}

/// `0x1234...abcd`
pub fn format_address(address: &str) -> String {
    if address.len() <= 10 || !address.is_char_boundary(6) || !address.is_char_boundary(address.len() - 4) {
        return address.to_string();
    }
    format!("{}...{}", &address[..6], &address[address.len() - 4..])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_record(votes: Vec<u64>, end_time: u64, is_active: bool) -> BallotRecord {
        BallotRecord {
            title: "Lunch".to_string(),
            description: "Where do we eat".to_string(),
            options: (0..votes.len()).map(|i| format!("Option {}", i)).collect(),
            votes,
            start_time: 1_000,
            end_time,
            creator: Address::ZERO,
            is_active,
        }
    }

    #[test]
    fn test_result_percentages() {
        let result = BallotResult::from_record(0, make_record(vec![1, 2, 0], 2_000, true));
        assert_eq!(result.total_votes, 3);
        assert_eq!(result.percentage(0), 33);
        assert_eq!(result.percentage(1), 67);
        assert_eq!(result.percentage(2), 0);
        // Missing tally counts as zero
        assert_eq!(result.percentage(7), 0);
    }

    #[test]
    fn test_result_without_votes() {
        let result = BallotResult::from_record(0, make_record(vec![0, 0], 2_000, true));
        assert_eq!(result.total_votes, 0);
        assert_eq!(result.percentage(0), 0);
        assert_eq!(result.percentage(1), 0);
    }

    #[test]
    fn test_clamped_tallies_saturate() {
        let record = make_record(vec![u64::MAX, 1], 2_000, true);
        assert_eq!(record.total_votes(), u64::MAX);

        let result = BallotResult::from_record(0, record);
        assert_eq!(result.total_votes, u64::MAX);
        assert_eq!(result.percentage(0), 100);
        assert_eq!(result.percentage(1), 0);
    }

    #[test]
    fn test_empty_record_does_not_exist() {
        assert!(make_record(vec![0, 0], 2_000, true).exists());
        assert!(!make_record(vec![], 0, false).exists());
    }

    #[test]
    fn test_can_vote() {
        let open = BallotDetail { id: 1, record: make_record(vec![0, 0], 2_000, true), has_voted: false };
        assert!(open.can_vote(1_500));
        assert!(!open.is_expired(2_000));
        assert!(open.is_expired(2_001));
        assert!(!open.can_vote(2_001));

        let voted = BallotDetail { has_voted: true, ..open.clone() };
        assert!(!voted.can_vote(1_500));

        let closed = BallotDetail { record: make_record(vec![0, 0], 2_000, false), ..open };
        assert!(!closed.can_vote(1_500));
    }

    #[test]
    fn test_draft_option_editing() {
        let mut draft = BallotDraft::default();
        assert_eq!(draft.options.len(), 2);

        // Cannot drop below two rows
        draft.remove_option(0);
        assert_eq!(draft.options.len(), 2);

        draft.add_option();
        draft.update_option(0, "Pizza".to_string());
        draft.update_option(1, "Sushi".to_string());
        draft.update_option(2, "Tacos".to_string());
        draft.remove_option(1);
        assert_eq!(draft.options, vec!["Pizza".to_string(), "Tacos".to_string()]);

        // Out of range edits are ignored
        draft.update_option(9, "Nope".to_string());
        assert_eq!(draft.options.len(), 2);
    }

    #[test]
    fn test_draft_validation_messages() {
        let mut draft = BallotDraft::default();
        assert_eq!(
            draft.validate().unwrap_err(),
            AppError::Validation("Please enter a ballot title".to_string())
        );

        draft.title = "  Lunch ".to_string();
        assert_eq!(
            draft.validate().unwrap_err(),
            AppError::Validation("Please enter a ballot description".to_string())
        );

        draft.description = "Where do we eat".to_string();
        draft.options = vec!["Pizza".to_string(), "   ".to_string()];
        assert_eq!(
            draft.validate().unwrap_err(),
            AppError::Validation("Please enter at least two options".to_string())
        );
    }

    #[test]
    fn test_draft_validation_output() {
        let draft = BallotDraft {
            title: " Lunch ".to_string(),
            description: "Where do we eat".to_string(),
            options: vec!["Pizza".to_string(), "".to_string(), " Sushi ".to_string()],
            duration_days: 7,
        };
        let ballot = draft.validate().unwrap();
        assert_eq!(ballot.title, "Lunch");
        assert_eq!(ballot.options, vec!["Pizza".to_string(), "Sushi".to_string()]);
        assert_eq!(ballot.duration_secs, 7 * 86_400);
    }

    #[test]
    fn test_format_address() {
        assert_eq!(
            format_address("0x5FbDB2315678afecb367f032d93F642f64180aa3"),
            "0x5FbD...0aa3"
        );
        assert_eq!(format_address("0x1234"), "0x1234");
        assert_eq!(format_address(""), "");
    }
}
