//! Operating-window policy for a specialist's day.
//!
//! Kept separate from conflict detection so the window can vary per
//! specialist without touching overlap logic.

use crate::error::{Result, SlotError};
use crate::interval::{parse_wall_clock, TimeInterval, MINUTES_PER_DAY};

/// The hours within which slots may be placed, as minutes since midnight.
///
/// The `open < close <= 1440` invariant is established at construction and
/// holds for the lifetime of the value; windows never cross midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BusinessHours {
    open_minutes: u32,
    close_minutes: u32,
}

impl BusinessHours {
    /// Build an operating window from minute offsets.
    ///
    /// # Errors
    /// Returns `SlotError::InvalidBusinessHours` when `open >= close` or the
    /// window runs past midnight. A misconfigured window is a setup bug and
    /// fails here, loudly, rather than surfacing per validation call.
    pub fn new(open_minutes: u32, close_minutes: u32) -> Result<Self> {
        if open_minutes >= close_minutes || close_minutes > MINUTES_PER_DAY {
            return Err(SlotError::InvalidBusinessHours {
                open: open_minutes,
                close: close_minutes,
            });
        }
        Ok(Self {
            open_minutes,
            close_minutes,
        })
    }

    /// Build an operating window from `"HH:MM"` strings.
    pub fn from_wall_clock(open: &str, close: &str) -> Result<Self> {
        Self::new(parse_wall_clock(open)?, parse_wall_clock(close)?)
    }

    pub fn open_minutes(&self) -> u32 {
        self.open_minutes
    }

    pub fn close_minutes(&self) -> u32 {
        self.close_minutes
    }

    /// Whether the interval sits entirely inside the operating window.
    ///
    /// Containment, not overlap: a slot that starts before opening or runs
    /// past closing is out of bounds even if most of it is inside.
    pub fn contains(&self, interval: &TimeInterval) -> bool {
        interval.start_minutes >= self.open_minutes && interval.end_minutes <= self.close_minutes
    }

    /// The whole operating window as one interval.
    pub fn window(&self) -> TimeInterval {
        TimeInterval {
            start_minutes: self.open_minutes,
            end_minutes: self.close_minutes,
        }
    }
}

/// The marketplace's standard window, 09:00-18:00.
impl Default for BusinessHours {
    fn default() -> Self {
        Self {
            open_minutes: 540,
            close_minutes: 1_080,
        }
    }
}

/// Format minutes since midnight as a 12-hour label, e.g. `"9:00 AM"`.
///
/// Used for user-facing messages; the 24-hour form stays internal.
pub fn format_12h(minutes: u32) -> String {
    let hours = (minutes / 60) % 24;
    let mins = minutes % 60;
    let period = if hours < 12 { "AM" } else { "PM" };
    let display_hours = match hours % 12 {
        0 => 12,
        h => h,
    };
    format!("{}:{:02} {}", display_hours, mins, period)
}
