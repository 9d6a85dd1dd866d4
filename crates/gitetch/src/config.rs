//! CLI configuration for gitetch
//!
//! This module defines the command-line surface: the image and target year,
//! the dry-run/execute switch, reconciliation force mode, and logging flags.

use std::path::PathBuf;

use clap::Parser;

/// Earliest target year the CLI accepts
pub const MIN_YEAR: i32 = 1970;

/// Latest target year the CLI accepts
pub const MAX_YEAR: i32 = 9999;

/// Draw pixel art onto a git contribution graph with dated empty commits
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "gitetch")]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Path to the black-and-white pixel image (max 51px wide, 7px tall)
    pub image_path: PathBuf,

    /// The year in which to draw the contribution art (e.g. 2024)
    #[arg(value_parser = clap::value_parser!(i32).range(MIN_YEAR as i64..=MAX_YEAR as i64))]
    pub year: i32,

    /// Prefix for commit messages
    #[arg(long, default_value = "ArtCommit")]
    pub prefix: String,

    /// Simulate and print the plan without making changes
    ///
    /// This is also the default when neither --dry-run nor --execute is
    /// given, with a warning.
    #[arg(long, conflicts_with = "execute")]
    pub dry_run: bool,

    /// Actually create the commits (asks for confirmation first)
    #[arg(long)]
    pub execute: bool,

    /// Plan commits even on dates that already have one
    ///
    /// Skips the existing-history reconciliation check entirely. Use with
    /// caution: duplicate commits on a date darken that graph cell.
    #[arg(long)]
    pub force: bool,

    /// Path inside the repository to draw into
    ///
    /// Defaults to the current directory; the repository is discovered by
    /// walking up from here.
    #[arg(long, env = "GITETCH_REPO", default_value = ".")]
    pub repo: PathBuf,

    /// In dry-run mode, emit the plan as JSON instead of a text listing
    #[arg(long)]
    pub json: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, default_value = "false")]
    pub verbose: bool,

    /// Quiet mode - suppress info-level logs
    #[arg(short, long, default_value = "false")]
    pub quiet: bool,
}

impl Config {
    /// Whether this invocation is a simulation
    ///
    /// Anything that is not an explicit `--execute` is a dry run.
    #[must_use]
    pub fn effective_dry_run(&self) -> bool {
        !self.execute
    }

    /// Whether the dry run was chosen by omission rather than explicitly
    #[must_use]
    pub fn defaulted_to_dry_run(&self) -> bool {
        !self.dry_run && !self.execute
    }

    /// Whether the target year is far enough from `current_year` to warrant
    /// a warning (the profile graph may not display it prominently)
    #[must_use]
    pub fn year_is_unusual(&self, current_year: i32) -> bool {
        !(current_year - 10..=current_year + 1).contains(&self.year)
    }

    /// Get the log level based on verbose/quiet flags
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::WARN
        } else {
            tracing::Level::INFO
        }
    }
}
