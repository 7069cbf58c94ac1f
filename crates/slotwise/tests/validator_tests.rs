//! End-to-end tests for the slot validator.
//!
//! Covers the full decision path: candidate parsing, the business-hours
//! bound, and conflict detection against a day's committed bookings.

use chrono::NaiveDate;
use slotwise::{validate_slot, BookingRecord, BookingStatus, BusinessHours, ValidationResult};

fn day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 10).expect("valid test date")
}

fn other_day() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 8, 11).expect("valid test date")
}

fn booking(start: &str, end: &str, status: BookingStatus) -> BookingRecord {
    BookingRecord::new(day(), start, end, status)
}

/// Standard 09:00-18:00 window.
fn hours() -> BusinessHours {
    BusinessHours::default()
}

fn assert_available(result: &ValidationResult) {
    assert!(result.available, "expected available, got {:?}", result);
    assert_eq!(result.reason, None, "available results carry no reason");
}

fn assert_rejected(result: &ValidationResult, reason: &str) {
    assert!(!result.available, "expected rejection, got {:?}", result);
    assert_eq!(result.reason.as_deref(), Some(reason));
}

// ─────────────────────────────────────────────────────────────────────────────
// Clear day
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn open_slot_on_empty_day_is_available() {
    let result = validate_slot("10:00", 60, day(), &[], &hours());
    assert_available(&result);
}

// ─────────────────────────────────────────────────────────────────────────────
// Input parsing
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn empty_time_rejected_with_form_prompt() {
    let result = validate_slot("", 60, day(), &[], &hours());
    assert_rejected(&result, "Please select a time and service");
}

#[test]
fn malformed_time_rejected_with_form_prompt() {
    for input in ["25:00", "10:99", "10", "noon"] {
        let result = validate_slot(input, 60, day(), &[], &hours());
        assert_rejected(&result, "Please select a time and service");
    }
}

#[test]
fn non_positive_duration_rejected_with_form_prompt() {
    // A half-filled form (no service picked yet) arrives as duration 0.
    let result = validate_slot("10:00", 0, day(), &[], &hours());
    assert_rejected(&result, "Please select a time and service");

    let result = validate_slot("10:00", -15, day(), &[], &hours());
    assert_rejected(&result, "Please select a time and service");
}

// ─────────────────────────────────────────────────────────────────────────────
// Business hours
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn slot_before_opening_rejected() {
    let result = validate_slot("08:00", 60, day(), &[], &hours());
    assert_rejected(&result, "Time must be between 9:00 AM and 6:00 PM");
}

#[test]
fn slot_running_past_closing_rejected() {
    // 17:30 + 60 minutes ends at 18:30, past the 18:00 close.
    let result = validate_slot("17:30", 60, day(), &[], &hours());
    assert_rejected(&result, "Time must be between 9:00 AM and 6:00 PM");
}

#[test]
fn slot_filling_the_whole_window_is_available() {
    let result = validate_slot("09:00", 540, day(), &[], &hours());
    assert_available(&result);
}

#[test]
fn slot_past_midnight_rejected_as_out_of_hours() {
    let result = validate_slot("23:30", 60, day(), &[], &hours());
    assert_rejected(&result, "Time must be between 9:00 AM and 6:00 PM");
}

#[test]
fn bounds_check_wins_regardless_of_bookings() {
    // Out-of-hours is terminal before any conflict scan.
    let existing = vec![booking("08:00", "09:00", BookingStatus::Confirmed)];
    let result = validate_slot("08:00", 30, day(), &existing, &hours());
    assert_rejected(&result, "Time must be between 9:00 AM and 6:00 PM");
}

#[test]
fn custom_window_appears_in_reason() {
    let hours = BusinessHours::from_wall_clock("08:00", "20:00").unwrap();
    let result = validate_slot("07:00", 30, day(), &[], &hours);
    assert_rejected(&result, "Time must be between 8:00 AM and 8:00 PM");
}

// ─────────────────────────────────────────────────────────────────────────────
// Conflicts
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn overlapping_confirmed_booking_rejected_with_its_times() {
    let existing = vec![booking("10:00", "11:00", BookingStatus::Confirmed)];

    let result = validate_slot("10:30", 30, day(), &existing, &hours());

    assert_rejected(&result, "Time conflicts with existing booking (10:00 - 11:00)");
}

#[test]
fn back_to_back_slot_is_available() {
    let existing = vec![
        booking("09:00", "10:00", BookingStatus::Confirmed),
        booking("11:00", "12:00", BookingStatus::Confirmed),
    ];

    // Exactly fills the gap: starts when one ends, ends when the next starts.
    let result = validate_slot("10:00", 60, day(), &existing, &hours());
    assert_available(&result);
}

#[test]
fn pending_booking_blocks_its_slot() {
    let existing = vec![booking("10:00", "11:00", BookingStatus::Pending)];

    let result = validate_slot("10:30", 30, day(), &existing, &hours());

    assert_rejected(&result, "Time conflicts with existing booking (10:00 - 11:00)");
}

#[test]
fn cancelled_booking_never_conflicts() {
    let existing = vec![booking("10:00", "11:00", BookingStatus::Cancelled)];

    let result = validate_slot("10:00", 30, day(), &existing, &hours());
    assert_available(&result);
}

#[test]
fn booking_on_another_day_never_conflicts() {
    let existing = vec![BookingRecord::new(
        other_day(),
        "10:00",
        "11:00",
        BookingStatus::Confirmed,
    )];

    let result = validate_slot("10:00", 60, day(), &existing, &hours());
    assert_available(&result);
}

#[test]
fn first_overlapping_booking_names_the_reason() {
    let existing = vec![
        booking("10:00", "11:00", BookingStatus::Confirmed),
        booking("11:30", "12:30", BookingStatus::Confirmed),
    ];

    // Candidate 10:30-12:00 overlaps both; the first is reported.
    let result = validate_slot("10:30", 90, day(), &existing, &hours());

    assert_rejected(&result, "Time conflicts with existing booking (10:00 - 11:00)");
}

#[test]
fn reason_carries_the_records_original_strings() {
    // The store saved a single-digit hour; the message echoes it verbatim.
    let existing = vec![booking("9:00", "10:00", BookingStatus::Confirmed)];

    let result = validate_slot("09:30", 30, day(), &existing, &hours());

    assert_rejected(&result, "Time conflicts with existing booking (9:00 - 10:00)");
}

#[test]
fn record_with_unparseable_times_is_skipped() {
    let existing = vec![
        BookingRecord::new(day(), "garbage", "11:00", BookingStatus::Confirmed),
        booking("13:00", "14:00", BookingStatus::Confirmed),
    ];

    // Candidate overlaps only the corrupt record's nominal slot.
    let result = validate_slot("10:00", 60, day(), &existing, &hours());
    assert_available(&result);

    // The intact record still conflicts.
    let result = validate_slot("13:30", 30, day(), &existing, &hours());
    assert_rejected(&result, "Time conflicts with existing booking (13:00 - 14:00)");
}

// ─────────────────────────────────────────────────────────────────────────────
// Result shape
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn available_result_serializes_without_reason() {
    let json = serde_json::to_string(&ValidationResult::ok()).unwrap();
    assert_eq!(json, r#"{"available":true}"#);
}

#[test]
fn rejected_result_serializes_with_reason() {
    let json = serde_json::to_string(&ValidationResult::rejected("nope")).unwrap();
    assert_eq!(json, r#"{"available":false,"reason":"nope"}"#);
}
