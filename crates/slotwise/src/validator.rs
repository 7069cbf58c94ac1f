//! Single entry point deciding whether a proposed slot may be placed.
//!
//! Combines input parsing, the business-hours check, and conflict detection
//! into one `ValidationResult`. Checks run in order and stop at the first
//! failure; every failure is a reported condition the form surfaces to the
//! user, never a panic.
//!
//! The validator only advises. Committing a booking against concurrent
//! writers is the booking store's job — callers snapshot the day's records,
//! validate, then commit through the store's own conflict handling.

use crate::booking::BookingRecord;
use crate::conflict;
use crate::hours::{format_12h, BusinessHours};
use crate::interval::TimeInterval;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Outcome of a single validation call.
///
/// `reason` is present exactly when `available` is false, worded for direct
/// display next to the time selector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationResult {
    pub available: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self {
            available: true,
            reason: None,
        }
    }

    pub fn rejected(reason: impl Into<String>) -> Self {
        Self {
            available: false,
            reason: Some(reason.into()),
        }
    }
}

/// Decide whether a slot at `time` lasting `duration_minutes` may be placed
/// on `date`, given the committed bookings and the operating window.
///
/// Pure function: identical inputs always yield an identical result. The
/// booking set is consumed read-only; records on other days, cancelled
/// records, and records whose stored times fail to parse are ignored.
///
/// Checks, terminal on first failure:
/// 1. parse the candidate time/duration,
/// 2. bound it to the operating window,
/// 3. scan the day's blocking bookings for an overlap.
pub fn validate_slot(
    time: &str,
    duration_minutes: i64,
    date: NaiveDate,
    existing: &[BookingRecord],
    hours: &BusinessHours,
) -> ValidationResult {
    let candidate = match TimeInterval::from_wall_clock(time, duration_minutes) {
        Ok(interval) => interval,
        Err(_) => return ValidationResult::rejected("Please select a time and service"),
    };

    if !hours.contains(&candidate) {
        return ValidationResult::rejected(format!(
            "Time must be between {} and {}",
            format_12h(hours.open_minutes()),
            format_12h(hours.close_minutes()),
        ));
    }

    let day: Vec<(&BookingRecord, TimeInterval)> = existing
        .iter()
        .filter(|record| record.date == date && record.status.blocks_time())
        .filter_map(|record| record.interval().ok().map(|iv| (record, iv)))
        .collect();
    let intervals: Vec<TimeInterval> = day.iter().map(|(_, iv)| *iv).collect();

    if let Some(hit) = conflict::find_conflict(&candidate, &intervals) {
        let (record, _) = day[hit];
        return ValidationResult::rejected(format!(
            "Time conflicts with existing booking ({} - {})",
            record.start_time, record.end_time,
        ));
    }

    ValidationResult::ok()
}
