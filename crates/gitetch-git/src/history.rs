// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Repository access and commit-date history
//!
//! This module wraps `git2::Repository` and provides the history snapshot
//! used for plan reconciliation: the set of calendar dates (committer-local)
//! that already bear at least one commit.

use crate::error::GitError;
use chrono::{DateTime, NaiveDate};
use git2::{ErrorCode, Repository};
use std::collections::BTreeSet;
use std::path::Path;
use tracing::{debug, warn};

/// A git repository wrapper for history inspection and commit creation
pub struct GitRepo {
    pub(crate) repo: Repository,
}

impl GitRepo {
    /// Open a git repository at the given path
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository` if the path is not a git repository.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::open(path).map_err(|_| GitError::NotARepository {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Discover and open a git repository containing the given path
    ///
    /// This walks up the directory tree to find a `.git` directory, which is
    /// the precondition probe run before any planning starts.
    ///
    /// # Errors
    ///
    /// Returns `GitError::NotARepository` if no repository is found.
    pub fn discover(path: impl AsRef<Path>) -> Result<Self, GitError> {
        let path = path.as_ref();
        let repo = Repository::discover(path).map_err(|_| GitError::NotARepository {
            path: path.display().to_string(),
        })?;
        Ok(Self { repo })
    }

    /// Check if the repository is bare
    #[must_use]
    pub fn is_bare(&self) -> bool {
        self.repo.is_bare()
    }

    /// Get the repository path (the `.git` directory)
    #[must_use]
    pub fn path(&self) -> &Path {
        self.repo.path()
    }

    /// Get the working directory path (None for bare repos)
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.repo.workdir()
    }

    /// Collect the committer-local dates of all commits reachable from HEAD
    ///
    /// A repository with no commits yet (unborn branch) is a normal state and
    /// yields the empty set. Commits whose timestamps cannot be represented
    /// are skipped with a warning rather than aborting the walk.
    ///
    /// # Errors
    ///
    /// Returns `GitError::HistoryQuery` if the walk fails for any other reason.
    pub fn commit_dates(&self) -> Result<BTreeSet<NaiveDate>, GitError> {
        if self.head_is_unborn()? {
            debug!("repository has no commits yet; existing date set is empty");
            return Ok(BTreeSet::new());
        }

        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;

        let mut dates = BTreeSet::new();
        for oid_result in revwalk {
            let oid = oid_result?;
            let commit = self.repo.find_commit(oid)?;
            match committer_local_date(&commit.time()) {
                Some(date) => {
                    dates.insert(date);
                }
                None => {
                    warn!(sha = %oid, "skipping commit with unrepresentable timestamp");
                }
            }
        }

        debug!(count = dates.len(), "collected existing commit dates");
        Ok(dates)
    }

    /// Count commits reachable from HEAD (zero for an unborn branch)
    ///
    /// # Errors
    ///
    /// Returns `GitError::HistoryQuery` if the repository cannot be walked.
    pub fn commit_count(&self) -> Result<usize, GitError> {
        if self.head_is_unborn()? {
            return Ok(0);
        }
        let mut revwalk = self.repo.revwalk()?;
        revwalk.push_head()?;
        Ok(revwalk.count())
    }

    /// Whether HEAD points at a branch with no commits yet (or is absent)
    ///
    /// Detecting this via `Repository::head` keeps the unborn-branch check on
    /// the same API the commit path relies on, which reports the state as
    /// `UnbornBranch`/`NotFound` regardless of how `revwalk` surfaces it.
    fn head_is_unborn(&self) -> Result<bool, GitError> {
        match self.repo.head() {
            Ok(_) => Ok(false),
            Err(e) if matches!(e.code(), ErrorCode::UnbornBranch | ErrorCode::NotFound) => Ok(true),
            Err(e) => Err(e.into()),
        }
    }
}

/// Convert a git timestamp to the committer's local calendar date
///
/// This matches `git log --pretty=%cs`: the commit's epoch seconds shifted by
/// the committer's recorded UTC offset.
fn committer_local_date(time: &git2::Time) -> Option<NaiveDate> {
    let local_seconds = time
        .seconds()
        .checked_add(i64::from(time.offset_minutes()) * 60)?;
    DateTime::from_timestamp(local_seconds, 0).map(|dt| dt.date_naive())
}
