// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Error types for gitetch-git

use chrono::NaiveDate;
use thiserror::Error;

/// Errors that can occur during git operations
#[derive(Debug, Error)]
pub enum GitError {
    /// The path is not inside a git working tree
    #[error("Not a git repository: {path}. `cd` into a repository or run `git init` first.")]
    NotARepository {
        /// The path that was probed for a repository
        path: String,
    },

    /// The history walk failed for a reason other than an unborn branch
    #[error("Git history query failed: {0}")]
    HistoryQuery(#[from] git2::Error),

    /// No committer identity could be resolved from the repository config
    #[error("Could not determine commit identity: {0}. Set user.name and user.email in your git config.")]
    Identity(#[source] git2::Error),

    /// Creating the empty commit for a planned date failed
    #[error("Failed to create commit for {date}: {source}")]
    CommitFailed {
        /// The planned date whose commit could not be created
        date: NaiveDate,
        /// The underlying git failure
        source: git2::Error,
    },
}
