//! Dry-run plan rendering
//!
//! A dry run prints the full would-be plan and exits cleanly; `--json`
//! swaps the text listing for a machine-readable form.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt::Write;

/// A plan ready to be reported or executed
#[derive(Debug, Clone, Serialize)]
pub struct PlanReport<'a> {
    /// The target year the art is drawn into
    pub year: i32,
    /// First Sunday of the graph (column 0, row 0)
    pub anchor: NaiveDate,
    /// Commit message prefix
    pub prefix: &'a str,
    /// The planned dates, ascending
    pub dates: &'a [NaiveDate],
}

impl PlanReport<'_> {
    /// Numbered text listing of the would-be commits
    #[must_use]
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "--- DRY RUN: The following {} commits would be made ---",
            self.dates.len()
        );
        for (i, date) in self.dates.iter().enumerate() {
            let _ = writeln!(out, "  {}. Date: {date}", i + 1);
        }
        let _ = write!(out, "--- End of DRY RUN ---");
        out
    }

    /// The plan as pretty-printed JSON
    ///
    /// # Errors
    ///
    /// Returns a `serde_json::Error` if serialization fails.
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
