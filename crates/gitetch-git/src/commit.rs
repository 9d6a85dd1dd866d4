//! Empty-commit creation with pinned timestamps
//!
//! The contribution graph buckets commits by their committer date, so each
//! planned pixel becomes one empty commit whose author and committer
//! timestamps are both pinned to the target date at a fixed time-of-day.

use crate::error::GitError;
use crate::history::GitRepo;
use chrono::{NaiveDate, NaiveTime};
use git2::{ErrorCode, Oid, Signature};
use std::collections::BTreeSet;
use tracing::debug;

/// Hour of day (UTC) at which every pixel commit is timestamped
pub const COMMIT_HOUR: u32 = 12;

/// The narrow version-control surface consumed by the planner and executor
///
/// Two operations: snapshot the dates that already have commits, and create
/// one empty commit on a given date. Keeping this surface minimal lets the
/// executor run against an in-memory fake in tests.
pub trait CommitSurface {
    /// Snapshot the set of committer-local dates already present in history
    ///
    /// # Errors
    ///
    /// Returns `GitError::HistoryQuery` if the history cannot be read.
    fn existing_dates(&self) -> Result<BTreeSet<NaiveDate>, GitError>;

    /// Create one empty commit dated `date` with the given message
    ///
    /// # Errors
    ///
    /// Returns `GitError::CommitFailed` (or `GitError::Identity`) if the
    /// commit could not be created.
    fn create_empty_commit(&mut self, date: NaiveDate, message: &str) -> Result<(), GitError>;
}

/// Epoch seconds for `date` at the pinned commit time-of-day, in UTC
///
/// Pinning to UTC keeps the date readable back out of history identical to
/// the date committed, independent of the host timezone.
#[must_use]
pub fn commit_timestamp(date: NaiveDate) -> i64 {
    let stamp = date
        .and_hms_opt(COMMIT_HOUR, 0, 0)
        .unwrap_or_else(|| date.and_time(NaiveTime::MIN));
    stamp.and_utc().timestamp()
}

impl GitRepo {
    /// Build a signature carrying the repository identity at the pinned time
    fn pinned_signature(&self, date: NaiveDate) -> Result<Signature<'static>, GitError> {
        let base = self.repo.signature().map_err(GitError::Identity)?;
        let when = git2::Time::new(commit_timestamp(date), 0);
        Signature::new(
            base.name().unwrap_or("unknown"),
            base.email().unwrap_or(""),
            &when,
        )
        .map_err(GitError::Identity)
    }

    /// Commit against the current HEAD tree, or an empty tree on an unborn branch
    fn commit_on_head(&self, sig: &Signature<'_>, message: &str) -> Result<Oid, git2::Error> {
        match self.repo.head() {
            Ok(head) => {
                let parent = head.peel_to_commit()?;
                let tree = parent.tree()?;
                self.repo
                    .commit(Some("HEAD"), sig, sig, message, &tree, &[&parent])
            }
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => {
                let tree_id = self.repo.treebuilder(None)?.write()?;
                let tree = self.repo.find_tree(tree_id)?;
                self.repo.commit(Some("HEAD"), sig, sig, message, &tree, &[])
            }
            Err(e) => Err(e),
        }
    }
}

impl CommitSurface for GitRepo {
    fn existing_dates(&self) -> Result<BTreeSet<NaiveDate>, GitError> {
        self.commit_dates()
    }

    fn create_empty_commit(&mut self, date: NaiveDate, message: &str) -> Result<(), GitError> {
        let sig = self.pinned_signature(date)?;
        let oid = self
            .commit_on_head(&sig, message)
            .map_err(|source| GitError::CommitFailed { date, source })?;
        debug!(%date, sha = %oid, "created empty commit");
        Ok(())
    }
}
