//! Error types for slot validation operations.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    /// Wall-clock string was not `HH:MM` with hours in 0-23 and minutes in 0-59.
    #[error("Invalid time: {0:?}")]
    InvalidTime(String),

    /// Slot duration must be a positive number of minutes.
    #[error("Invalid duration: {0} minutes")]
    InvalidDuration(i64),

    /// Zero-length or inverted interval.
    #[error("Empty interval: start {start} must precede end {end}")]
    EmptyInterval { start: u32, end: u32 },

    /// Misconfigured operating window. This is a setup error, not a
    /// per-validation condition: it is raised when the window is built,
    /// never folded into a `ValidationResult`.
    #[error("Invalid business hours: open {open} must precede close {close}")]
    InvalidBusinessHours { open: u32, close: u32 },
}

pub type Result<T> = std::result::Result<T, SlotError>;
