//! Committed booking records, as held by the booking store.
//!
//! Records are consumed read-only: the validator never mutates the store's
//! data, it only normalizes the stored wall-clock strings into intervals.

use crate::error::Result;
use crate::interval::TimeInterval;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Lifecycle state of a booking.
///
/// Everything except `Cancelled` occupies calendar time — a `Pending`
/// booking blocks its slot until it is resolved. Integrators wiring this to
/// a real backend should confirm that pending-blocks policy with product
/// requirements.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BookingStatus {
    Confirmed,
    Pending,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "confirmed",
            BookingStatus::Pending => "pending",
            BookingStatus::Cancelled => "cancelled",
        }
    }

    /// Whether a booking in this state occupies its time slot.
    pub fn blocks_time(self) -> bool {
        !matches!(self, BookingStatus::Cancelled)
    }
}

/// One committed booking on a specialist's calendar.
///
/// Field names serialize in camelCase to match the JSON shape the booking
/// UI holds (`startTime`, `endTime`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRecord {
    /// Calendar day the booking belongs to.
    pub date: NaiveDate,
    /// Wall-clock start, `"HH:MM"`.
    pub start_time: String,
    /// Wall-clock end, `"HH:MM"`.
    pub end_time: String,
    pub status: BookingStatus,
}

impl BookingRecord {
    pub fn new(
        date: NaiveDate,
        start_time: impl Into<String>,
        end_time: impl Into<String>,
        status: BookingStatus,
    ) -> Self {
        Self {
            date,
            start_time: start_time.into(),
            end_time: end_time.into(),
            status,
        }
    }

    /// Normalize the stored wall-clock pair into a half-open interval.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTime` or `SlotError::EmptyInterval` when
    /// the stored strings are malformed; callers decide whether a corrupt
    /// record is skipped or reported.
    pub fn interval(&self) -> Result<TimeInterval> {
        TimeInterval::from_wall_clock_range(&self.start_time, &self.end_time)
    }
}
