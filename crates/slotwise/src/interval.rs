//! Half-open time intervals in minutes since midnight.
//!
//! Wall-clock strings ("HH:MM") are the external representation, carried by
//! booking records and form inputs. They are normalized to integer minutes
//! at the boundary so all interval arithmetic is plain integer comparison.

use crate::error::{Result, SlotError};

/// Minutes in one calendar day.
pub const MINUTES_PER_DAY: u32 = 1_440;

/// A half-open time interval `[start, end)` within a single day.
///
/// The half-open convention makes back-to-back slots non-overlapping: a
/// 09:00-10:00 appointment does not touch one starting at 10:00.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeInterval {
    pub start_minutes: u32,
    pub end_minutes: u32,
}

impl TimeInterval {
    /// Build an interval from raw minute offsets.
    ///
    /// # Errors
    /// Returns `SlotError::EmptyInterval` when `end <= start` — zero-length
    /// and inverted intervals are rejected before they can reach any
    /// overlap check.
    pub fn new(start_minutes: u32, end_minutes: u32) -> Result<Self> {
        if end_minutes <= start_minutes {
            return Err(SlotError::EmptyInterval {
                start: start_minutes,
                end: end_minutes,
            });
        }
        Ok(Self {
            start_minutes,
            end_minutes,
        })
    }

    /// Build a candidate interval from a start time and a duration.
    ///
    /// The end may land past midnight (e.g. "23:30" + 60); such an interval
    /// is constructible but can never sit inside an operating window, so the
    /// business-hours check rejects it downstream.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTime` for a malformed time string and
    /// `SlotError::InvalidDuration` for a duration that is non-positive or
    /// longer than a day — neither is producible by a sane service catalog.
    pub fn from_wall_clock(time: &str, duration_minutes: i64) -> Result<Self> {
        let start = parse_wall_clock(time)?;
        if duration_minutes <= 0 || duration_minutes > i64::from(MINUTES_PER_DAY) {
            return Err(SlotError::InvalidDuration(duration_minutes));
        }
        Ok(Self {
            start_minutes: start,
            end_minutes: start + duration_minutes as u32,
        })
    }

    /// Build an interval from a stored start/end wall-clock pair.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidTime` for a malformed string and
    /// `SlotError::EmptyInterval` when the pair is zero-length or inverted.
    pub fn from_wall_clock_range(start: &str, end: &str) -> Result<Self> {
        Self::new(parse_wall_clock(start)?, parse_wall_clock(end)?)
    }

    /// Whether two half-open intervals share any instant.
    ///
    /// `[s1, e1)` and `[s2, e2)` overlap iff `s1 < e2 && s2 < e1`.
    /// Adjacent intervals (`e1 == s2`) do not overlap.
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        self.start_minutes < other.end_minutes && other.start_minutes < self.end_minutes
    }

    /// Width of the overlap between two intervals, 0 when disjoint.
    pub fn overlap_minutes(&self, other: &TimeInterval) -> u32 {
        if !self.overlaps(other) {
            return 0;
        }
        self.end_minutes.min(other.end_minutes) - self.start_minutes.max(other.start_minutes)
    }

    pub fn duration_minutes(&self) -> u32 {
        self.end_minutes - self.start_minutes
    }
}

/// Parse a `"HH:MM"` wall-clock string into minutes since midnight.
///
/// Accepts one- or two-digit hours (form inputs emit both "9:00" and
/// "09:00") but requires exactly two minute digits, hours 0-23, minutes
/// 0-59.
///
/// # Errors
/// Returns `SlotError::InvalidTime` for anything else, including empty and
/// partial inputs from a half-filled form.
pub fn parse_wall_clock(time: &str) -> Result<u32> {
    let invalid = || SlotError::InvalidTime(time.to_string());

    let (hours_part, minutes_part) = time.split_once(':').ok_or_else(invalid)?;
    if hours_part.is_empty()
        || hours_part.len() > 2
        || minutes_part.len() != 2
        || !hours_part.bytes().all(|b| b.is_ascii_digit())
        || !minutes_part.bytes().all(|b| b.is_ascii_digit())
    {
        return Err(invalid());
    }

    let hours: u32 = hours_part.parse().map_err(|_| invalid())?;
    let minutes: u32 = minutes_part.parse().map_err(|_| invalid())?;
    if hours > 23 || minutes > 59 {
        return Err(invalid());
    }

    Ok(hours * 60 + minutes)
}

/// Format minutes since midnight as a zero-padded 24-hour `"HH:MM"` string.
///
/// Intended for offsets within a single day; `parse_wall_clock` round-trips
/// through it.
pub fn format_wall_clock(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}
