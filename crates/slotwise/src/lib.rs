//! # slotwise
//!
//! Booking slot validation and day-schedule availability for appointment
//! calendars.
//!
//! Given a proposed appointment (start time, duration) and the committed
//! bookings for the same specialist on the same day, slotwise decides
//! whether the slot may be placed and, if not, explains why in a string the
//! booking form can show directly. Time is modeled as half-open intervals
//! in minutes since midnight, so back-to-back appointments never conflict.
//!
//! Everything is a pure, synchronous computation over a snapshot of the
//! day's bookings — there is no I/O and no shared state. The validator
//! advises; committing a booking is the store's responsibility.
//!
//! ## Modules
//!
//! - [`interval`] — half-open minute intervals, "HH:MM" normalization
//! - [`hours`] — per-specialist operating window policy
//! - [`booking`] — committed booking records and their lifecycle status
//! - [`conflict`] — overlap detection over a day's intervals
//! - [`schedule`] — free windows and bookable start times of a day
//! - [`validator`] — the single-call slot decision
//! - [`error`] — error types

pub mod booking;
pub mod conflict;
pub mod error;
pub mod hours;
pub mod interval;
pub mod schedule;
pub mod validator;

pub use booking::{BookingRecord, BookingStatus};
pub use conflict::{find_conflict, find_conflicts, find_self_conflicts, Conflict};
pub use error::SlotError;
pub use hours::BusinessHours;
pub use interval::{parse_wall_clock, TimeInterval, MINUTES_PER_DAY};
pub use schedule::{bookable_starts, first_fit, free_windows, FreeWindow};
pub use validator::{validate_slot, ValidationResult};
