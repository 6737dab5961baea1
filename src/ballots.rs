//! Ballot Loading
//!
//! Page-level read/write flows over the contract. Pages only deal with the
//! view models these return.

use alloy_primitives::Address;
use async_trait::async_trait;
use futures::future::join_all;

use crate::config::MAX_SCANNED_BALLOTS;
use crate::error::{AppError, AppResult};
use crate::models::{BallotDetail, BallotDraft, BallotRecord, BallotResult, BallotSummary, NewBallot};

/// Read side of the ballot contract
#[async_trait(?Send)]
pub trait BallotReader {
    /// Address the reads go to (for error messages)
    fn contract_address(&self) -> Address;

    /// Whether bytecode exists at the contract address
    async fn is_deployed(&self) -> AppResult<bool>;

    async fn active_ballot_ids(&self) -> AppResult<Vec<u64>>;

    async fn ballot(&self, id: u64) -> AppResult<BallotRecord>;

    async fn ballot_count(&self) -> AppResult<u64>;

    async fn has_voted(&self, id: u64, voter: Address) -> AppResult<bool>;
}

/// Write side; both calls resolve once the transaction is mined
#[async_trait(?Send)]
pub trait BallotWriter {
    /// Returns the transaction hash
    async fn create_ballot(&self, ballot: &NewBallot) -> AppResult<String>;

    /// Returns the transaction hash
    async fn vote(&self, id: u64, option_index: u64) -> AppResult<String>;
}

async fn ensure_deployed<R: BallotReader + ?Sized>(reader: &R) -> AppResult<()> {
    if reader.is_deployed().await? {
        Ok(())
    } else {
        Err(AppError::ContractMissing(reader.contract_address().to_string()))
    }
}

/// Fetch several ballots at once, dropping the ones that fail
async fn fetch_ballots<R, I>(reader: &R, ids: I) -> Vec<(u64, BallotRecord)>
where
    R: BallotReader + ?Sized,
    I: IntoIterator<Item = u64>,
{
    let fetches = ids.into_iter().map(move |id| async move { (id, reader.ballot(id).await) });
    join_all(fetches)
        .await
        .into_iter()
        .filter_map(|(id, result)| match result {
            Ok(record) => Some((id, record)),
            Err(e) => {
                log::warn!("[BALLOTS] Failed to fetch ballot {}: {}", id, e);
                None
            }
        })
        .collect()
}

/// Ballots currently open for voting
///
/// Falls back to probing the first ids one by one when the contract does not
/// answer `getActiveBallots`.
pub async fn load_active_ballots<R: BallotReader + ?Sized>(
    reader: &R,
    now: u64,
) -> AppResult<Vec<BallotSummary>> {
    ensure_deployed(reader).await?;

    match reader.active_ballot_ids().await {
        Ok(ids) => {
            let ballots = fetch_ballots(reader, ids).await;
            Ok(ballots
                .into_iter()
                .map(|(id, record)| BallotSummary::from_record(id, record))
                .collect())
        }
        Err(e) => {
            log::error!("[BALLOTS] getActiveBallots failed, scanning ids manually: {}", e);
            let mut ballots = Vec::new();
            for id in 0..MAX_SCANNED_BALLOTS {
                match reader.ballot(id).await {
                    Ok(record) if record.is_active && record.end_time > now => {
                        ballots.push(BallotSummary::from_record(id, record));
                    }
                    Ok(_) => {}
                    Err(e) => log::warn!("[BALLOTS] Ballot {} might not exist: {}", id, e),
                }
            }
            Ok(ballots)
        }
    }
}

/// One ballot plus whether `voter` already took part
pub async fn load_ballot_detail<R: BallotReader + ?Sized>(
    reader: &R,
    id: u64,
    voter: Option<Address>,
) -> AppResult<BallotDetail> {
    ensure_deployed(reader).await?;

    let record = reader.ballot(id).await?;
    let has_voted = match voter {
        Some(voter) => reader.has_voted(id, voter).await?,
        None => false,
    };
    Ok(BallotDetail { id, record, has_voted })
}

/// Every ballot with its tally, most recently ending first
pub async fn load_results<R: BallotReader + ?Sized>(reader: &R) -> AppResult<Vec<BallotResult>> {
    if !reader.is_deployed().await? {
        log::error!("[RESULTS] No contract found at address {}", reader.contract_address());
        return Ok(Vec::new());
    }

    let count = reader.ballot_count().await?;
    let mut results: Vec<BallotResult> = fetch_ballots(reader, 0..count)
        .await
        .into_iter()
        .map(|(id, record)| BallotResult::from_record(id, record))
        .collect();
    results.sort_by(|a, b| b.end_time.cmp(&a.end_time));
    Ok(results)
}

/// Validate the create form and send `createBallot`
pub async fn submit_ballot<W: BallotWriter + ?Sized>(
    writer: Option<&W>,
    draft: &BallotDraft,
) -> AppResult<String> {
    let ballot = draft.validate()?;
    let writer = writer.ok_or(AppError::NotConnected)?;
    writer.create_ballot(&ballot).await
}

/// Send `vote` for one of the ballot's options
pub async fn cast_vote<W: BallotWriter + ?Sized>(
    writer: &W,
    detail: &BallotDetail,
    option_index: usize,
) -> AppResult<String> {
    if option_index >= detail.record.options.len() {
        return Err(AppError::Validation("Please select one of the options".to_string()));
    }
    writer.vote(detail.id, option_index as u64).await
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{BTreeMap, HashSet};

    /// In-memory stand-in for the deployed contract
    #[derive(Default)]
    pub(crate) struct FakeContract {
        pub deployed: bool,
        pub ballots: BTreeMap<u64, BallotRecord>,
        /// `None` makes `getActiveBallots` fail
        pub active_ids: Option<Vec<u64>>,
        pub broken_ids: HashSet<u64>,
        pub voters: HashSet<(u64, Address)>,
        pub sent: RefCell<Vec<String>>,
    }

    #[async_trait(?Send)]
    impl BallotReader for FakeContract {
        fn contract_address(&self) -> Address {
            Address::repeat_byte(0x42)
        }

        async fn is_deployed(&self) -> AppResult<bool> {
            Ok(self.deployed)
        }

        async fn active_ballot_ids(&self) -> AppResult<Vec<u64>> {
            self.active_ids.clone().ok_or_else(|| AppError::Provider {
                code: -32000,
                message: "execution reverted".to_string(),
            })
        }

        async fn ballot(&self, id: u64) -> AppResult<BallotRecord> {
            if self.broken_ids.contains(&id) {
                return Err(AppError::Decode("bad ballot".to_string()));
            }
            self.ballots.get(&id).cloned().ok_or_else(|| AppError::Provider {
                code: -32000,
                message: "Ballot does not exist".to_string(),
            })
        }

        async fn ballot_count(&self) -> AppResult<u64> {
            Ok(self.ballots.len() as u64)
        }

        async fn has_voted(&self, id: u64, voter: Address) -> AppResult<bool> {
            Ok(self.voters.contains(&(id, voter)))
        }
    }

    #[async_trait(?Send)]
    impl BallotWriter for FakeContract {
        async fn create_ballot(&self, ballot: &NewBallot) -> AppResult<String> {
            self.sent.borrow_mut().push(format!("create:{}", ballot.title));
            Ok("0x01".to_string())
        }

        async fn vote(&self, id: u64, option_index: u64) -> AppResult<String> {
            self.sent.borrow_mut().push(format!("vote:{}:{}", id, option_index));
            Ok("0x02".to_string())
        }
    }

    pub(crate) fn make_ballot(title: &str, end_time: u64, is_active: bool, votes: Vec<u64>) -> BallotRecord {
        BallotRecord {
            title: title.to_string(),
            description: format!("About {}", title),
            options: (0..votes.len()).map(|i| format!("Option {}", i)).collect(),
            votes,
            start_time: 100,
            end_time,
            creator: Address::repeat_byte(0x11),
            is_active,
        }
    }

    fn deployed_with(ballots: Vec<BallotRecord>) -> FakeContract {
        FakeContract {
            deployed: true,
            ballots: ballots.into_iter().enumerate().map(|(i, b)| (i as u64, b)).collect(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_missing_contract_is_an_error_for_lists() {
        let fake = FakeContract::default();
        let err = load_active_ballots(&fake, 0).await.unwrap_err();
        assert_eq!(err, AppError::ContractMissing(Address::repeat_byte(0x42).to_string()));

        let err = load_ballot_detail(&fake, 0, None).await.unwrap_err();
        assert!(matches!(err, AppError::ContractMissing(_)));
    }

    #[tokio::test]
    async fn test_active_ballots_skip_failed_fetches() {
        let mut fake = deployed_with(vec![
            make_ballot("A", 5_000, true, vec![0, 0]),
            make_ballot("B", 5_000, true, vec![0, 0]),
            make_ballot("C", 5_000, true, vec![0, 0]),
        ]);
        fake.active_ids = Some(vec![0, 1, 2]);
        fake.broken_ids.insert(1);

        let ballots = load_active_ballots(&fake, 1_000).await.unwrap();
        let ids: Vec<u64> = ballots.iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![0, 2]);
        assert_eq!(ballots[0].title, "A");
    }

    #[tokio::test]
    async fn test_active_ballots_fallback_scan() {
        let mut fake = deployed_with(vec![
            make_ballot("Open", 5_000, true, vec![0, 0]),
            make_ballot("Expired", 900, true, vec![0, 0]),
            make_ballot("Closed", 5_000, false, vec![0, 0]),
            make_ballot("Broken", 5_000, true, vec![0, 0]),
            make_ballot("Also open", 5_000, true, vec![0, 0]),
        ]);
        fake.active_ids = None;
        fake.broken_ids.insert(3);
        // Beyond the scan limit, never reached
        fake.ballots.insert(MAX_SCANNED_BALLOTS, make_ballot("Far", 5_000, true, vec![0, 0]));

        let ballots = load_active_ballots(&fake, 1_000).await.unwrap();
        let titles: Vec<&str> = ballots.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["Open", "Also open"]);
        assert_eq!(ballots[1].id, 4);
    }

    #[tokio::test]
    async fn test_ballot_detail_has_voted() {
        let voter = Address::repeat_byte(0x77);
        let mut fake = deployed_with(vec![make_ballot("A", 5_000, true, vec![3, 1])]);
        fake.voters.insert((0, voter));

        let detail = load_ballot_detail(&fake, 0, Some(voter)).await.unwrap();
        assert!(detail.has_voted);
        assert!(!detail.can_vote(1_000));

        let anonymous = load_ballot_detail(&fake, 0, None).await.unwrap();
        assert!(!anonymous.has_voted);
        assert!(anonymous.can_vote(1_000));
    }

    #[tokio::test]
    async fn test_ballot_detail_unknown_id() {
        let fake = deployed_with(vec![]);
        let err = load_ballot_detail(&fake, 9, None).await.unwrap_err();
        assert_eq!(err.to_string(), "Ballot does not exist");
    }

    #[tokio::test]
    async fn test_results_sorted_by_end_time() {
        let mut fake = deployed_with(vec![
            make_ballot("Oldest", 1_000, false, vec![1, 1]),
            make_ballot("Newest", 9_000, true, vec![2, 0]),
            make_ballot("Broken", 9_500, true, vec![0, 0]),
            make_ballot("Middle", 5_000, false, vec![0, 4]),
        ]);
        fake.broken_ids.insert(2);

        let results = load_results(&fake).await.unwrap();
        let titles: Vec<&str> = results.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, vec!["Newest", "Middle", "Oldest"]);
        assert_eq!(results[0].total_votes, 2);
        assert_eq!(results[1].percentage(1), 100);
    }

    #[tokio::test]
    async fn test_results_without_contract_are_empty() {
        let fake = FakeContract::default();
        assert!(load_results(&fake).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_ballot_validates_before_wallet() {
        let fake = deployed_with(vec![]);
        let draft = BallotDraft::default();
        let err = submit_ballot(None::<&FakeContract>, &draft).await.unwrap_err();
        assert_eq!(err.to_string(), "Please enter a ballot title");

        let draft = BallotDraft {
            title: "Lunch".to_string(),
            description: "Where".to_string(),
            options: vec!["Pizza".to_string(), "Sushi".to_string()],
            duration_days: 1,
        };
        let err = submit_ballot(None::<&FakeContract>, &draft).await.unwrap_err();
        assert_eq!(err, AppError::NotConnected);

        let hash = submit_ballot(Some(&fake), &draft).await.unwrap();
        assert_eq!(hash, "0x01");
        assert_eq!(*fake.sent.borrow(), vec!["create:Lunch".to_string()]);
    }

    #[tokio::test]
    async fn test_cast_vote_checks_option_range() {
        let fake = deployed_with(vec![make_ballot("A", 5_000, true, vec![0, 0])]);
        let detail = load_ballot_detail(&fake, 0, None).await.unwrap();

        assert!(matches!(cast_vote(&fake, &detail, 2).await, Err(AppError::Validation(_))));
        cast_vote(&fake, &detail, 1).await.unwrap();
        assert_eq!(*fake.sent.borrow(), vec!["vote:0:1".to_string()]);
    }
}
