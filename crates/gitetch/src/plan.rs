// Copyright (c) 2026 - present Nicholas D. Crosbie
// SPDX-License-Identifier: MIT

//! Calendar alignment and commit planning
//!
//! The contribution graph is a column-major weekly grid: column 0 begins on
//! the first Sunday on or after January 1 of the target year, each column is
//! one week, and each row is a day of week (0 = Sunday). A pixel at (x, y)
//! therefore lands on `anchor + x weeks + y days`.

use chrono::{Datelike, Duration, NaiveDate};
use gitetch_image::Pixel;
use std::collections::BTreeSet;
use tracing::debug;

/// How far past December 25 of the target year a date may spill
///
/// The last grid column naturally runs into early January of the next year;
/// anything beyond this bound would land absurdly far outside the intended
/// year and is skipped.
pub const YEAR_DRIFT_TOLERANCE_DAYS: i64 = 10;

/// The first Sunday on or after January 1 of `year`
///
/// This date anchors column 0, row 0 of the weekly grid. If January 1 is
/// itself a Sunday it is returned unchanged.
///
/// # Panics
///
/// Panics if `year` is outside chrono's representable range; the CLI
/// restricts the year argument well inside it.
#[must_use]
pub fn first_sunday(year: i32) -> NaiveDate {
    let jan_1 =
        NaiveDate::from_ymd_opt(year, 1, 1).expect("January 1 exists for every supported year");
    let days_ahead = i64::from(7 - jan_1.weekday().num_days_from_sunday()) % 7;
    jan_1 + Duration::days(days_ahead)
}

/// The calendar date a pixel maps to, or None if it overflows the calendar
#[must_use]
pub fn target_date(anchor: NaiveDate, pixel: Pixel) -> Option<NaiveDate> {
    anchor.checked_add_signed(
        Duration::weeks(i64::from(pixel.x)) + Duration::days(i64::from(pixel.y)),
    )
}

/// Map active pixels to the ordered list of dates to commit
///
/// Each pixel's date is dropped (never an error) when it spills more than
/// [`YEAR_DRIFT_TOLERANCE_DAYS`] past December 25 of the target year, or —
/// unless `force` is set — when the date already bears a commit. The result
/// is deduplicated and sorted ascending, so identical inputs always produce
/// an identical plan.
///
/// # Panics
///
/// Panics if `year` is outside chrono's representable range (see
/// [`first_sunday`]).
#[must_use]
pub fn build_plan(
    pixels: &[Pixel],
    anchor: NaiveDate,
    year: i32,
    existing: &BTreeSet<NaiveDate>,
    force: bool,
) -> Vec<NaiveDate> {
    let cutoff =
        NaiveDate::from_ymd_opt(year, 12, 25).expect("December 25 exists for every supported year");

    let mut accepted = BTreeSet::new();
    for &pixel in pixels {
        let Some(date) = target_date(anchor, pixel) else {
            debug!(x = pixel.x, y = pixel.y, "skipping pixel: date overflows the calendar");
            continue;
        };

        if date.year() > year && (date - cutoff).num_days() > YEAR_DRIFT_TOLERANCE_DAYS {
            debug!(
                x = pixel.x,
                y = pixel.y,
                %date,
                "skipping pixel: lands too far into the next year"
            );
            continue;
        }

        if !force && existing.contains(&date) {
            debug!(
                x = pixel.x,
                y = pixel.y,
                %date,
                "skipping pixel: date already has a commit"
            );
            continue;
        }

        accepted.insert(date);
    }

    accepted.into_iter().collect()
}
