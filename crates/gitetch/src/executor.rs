// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Plan execution against a commit surface
//!
//! Dates are committed strictly in ascending order and execution stops at
//! the first failure, leaving already-made commits in place. Empty commits
//! are cheap and harmless, so there is no rollback.

use chrono::NaiveDate;
use gitetch_git::{CommitSurface, GitError};
use tracing::{error, info};

/// Commit message for one planned date
#[must_use]
pub fn commit_message(prefix: &str, date: NaiveDate) -> String {
    format!("{prefix}: Pixel on {date}")
}

/// The first failure encountered while executing a plan
#[derive(Debug)]
pub struct CommitFailure {
    /// The date whose commit failed
    pub date: NaiveDate,
    /// The underlying failure
    pub error: GitError,
}

/// What happened when a plan was executed
#[derive(Debug)]
pub struct ExecutionReport {
    /// Number of dates in the plan
    pub planned: usize,
    /// Number of commits actually created
    pub committed: usize,
    /// The failure that stopped execution, if any
    pub failure: Option<CommitFailure>,
}

impl ExecutionReport {
    /// True when every planned date was committed
    #[must_use]
    pub fn all_committed(&self) -> bool {
        self.failure.is_none() && self.committed == self.planned
    }
}

/// Create one empty commit per planned date, stopping at the first failure
///
/// The plan is processed in the order given (the planner emits ascending
/// dates). Commits already made before a failure are kept.
pub fn execute<S: CommitSurface>(
    surface: &mut S,
    plan: &[NaiveDate],
    prefix: &str,
) -> ExecutionReport {
    let mut committed = 0;
    for &date in plan {
        let message = commit_message(prefix, date);
        info!(%date, "committing");
        match surface.create_empty_commit(date, &message) {
            Ok(()) => committed += 1,
            Err(err) => {
                error!(%date, error = %err, "commit failed; stopping before the remaining dates");
                return ExecutionReport {
                    planned: plan.len(),
                    committed,
                    failure: Some(CommitFailure { date, error: err }),
                };
            }
        }
    }

    ExecutionReport {
        planned: plan.len(),
        committed,
        failure: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use similar_asserts::assert_eq;
    use std::collections::BTreeSet;

    /// In-memory commit surface recording every commit it is asked to make
    #[derive(Debug, Default)]
    struct MemorySurface {
        dates: BTreeSet<NaiveDate>,
        log: Vec<(NaiveDate, String)>,
        fail_on: Option<NaiveDate>,
    }

    impl CommitSurface for MemorySurface {
        fn existing_dates(&self) -> Result<BTreeSet<NaiveDate>, GitError> {
            Ok(self.dates.clone())
        }

        fn create_empty_commit(&mut self, date: NaiveDate, message: &str) -> Result<(), GitError> {
            if self.fail_on == Some(date) {
                return Err(GitError::CommitFailed {
                    date,
                    source: git2::Error::from_str("simulated failure"),
                });
            }
            self.dates.insert(date);
            self.log.push((date, message.to_string()));
            Ok(())
        }
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid date")
    }

    #[test]
    fn test_commit_message_format() {
        assert_eq!(
            commit_message("ArtCommit", date(2024, 1, 7)),
            "ArtCommit: Pixel on 2024-01-07"
        );
    }

    #[test]
    fn test_execute_empty_plan() {
        let mut surface = MemorySurface::default();
        let report = execute(&mut surface, &[], "ArtCommit");
        assert_eq!(report.planned, 0);
        assert_eq!(report.committed, 0);
        assert!(report.all_committed());
    }

    #[test]
    fn test_execute_commits_in_given_order() {
        let mut surface = MemorySurface::default();
        let plan = [date(2024, 1, 7), date(2024, 1, 8), date(2024, 2, 4)];
        let report = execute(&mut surface, &plan, "ArtCommit");

        assert!(report.all_committed());
        assert_eq!(report.committed, 3);
        let committed: Vec<NaiveDate> = surface.log.iter().map(|(d, _)| *d).collect();
        assert_eq!(committed, plan.to_vec());
    }

    #[test]
    fn test_execute_uses_prefix_in_messages() {
        let mut surface = MemorySurface::default();
        execute(&mut surface, &[date(2024, 1, 7)], "MyArt");
        assert_eq!(surface.log[0].1, "MyArt: Pixel on 2024-01-07");
    }

    #[test]
    fn test_execute_stops_at_first_failure() {
        let mut surface = MemorySurface {
            fail_on: Some(date(2024, 1, 8)),
            ..Default::default()
        };
        let plan = [date(2024, 1, 7), date(2024, 1, 8), date(2024, 2, 4)];
        let report = execute(&mut surface, &plan, "ArtCommit");

        assert!(!report.all_committed());
        assert_eq!(report.committed, 1, "Only the date before the failure");
        let failure = report.failure.expect("Should record the failure");
        assert_eq!(failure.date, date(2024, 1, 8));
        assert!(matches!(failure.error, GitError::CommitFailed { .. }));
        assert_eq!(
            surface.log.len(),
            1,
            "No commit is attempted after the failure"
        );
    }

    #[test]
    fn test_execute_failure_on_first_date() {
        let mut surface = MemorySurface {
            fail_on: Some(date(2024, 1, 7)),
            ..Default::default()
        };
        let report = execute(&mut surface, &[date(2024, 1, 7)], "ArtCommit");
        assert_eq!(report.committed, 0);
        assert!(report.failure.is_some());
    }
}
