//! Retention cutoff calculation.
//!
//! Boundary values of range-by-date partitions are `TO_DAYS` ordinals, so the
//! cutoff is computed in the same encoding and the eligibility check reduces
//! to an integer comparison. No string or timezone handling is involved.

use chrono::{Datelike, Months, NaiveDate};

use crate::models::DayOrdinal;

/// Offset between chrono's day count (day 1 = 0001-01-01) and MySQL's
/// `TO_DAYS` (which counts from year 0).
const TO_DAYS_OFFSET: i64 = 365;

/// Convert a calendar date to MySQL's `TO_DAYS` day number.
pub fn day_ordinal(date: NaiveDate) -> DayOrdinal {
    i64::from(date.num_days_from_ce()) + TO_DAYS_OFFSET
}

/// Compute the retention cutoff: `months` before `today`, as a `TO_DAYS`
/// ordinal. Computed once per run from the run's start date so the same
/// cutoff applies to every table, however long the sweep takes.
///
/// Month subtraction clamps to the last day of shorter months, matching
/// MySQL's `DATE_SUB(date, INTERVAL n MONTH)`.
pub fn compute(today: NaiveDate, months: u32) -> DayOrdinal {
    let window_start = today
        .checked_sub_months(Months::new(months))
        .unwrap_or(NaiveDate::MIN);
    day_ordinal(window_start)
}
