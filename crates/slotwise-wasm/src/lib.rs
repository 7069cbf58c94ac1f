//! WASM bindings for slotwise.
//!
//! Exposes slot validation, free-window listing, and bookable-start
//! enumeration to JavaScript via `wasm-bindgen`, for the booking form to
//! call on every relevant field change. Complex values cross the boundary
//! as JSON strings.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p slotwise-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir packages/slotwise-js/wasm/ \
//!   target/wasm32-unknown-unknown/release/slotwise_wasm.wasm
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use wasm_bindgen::prelude::*;

use slotwise::interval::{format_wall_clock, TimeInterval};
use slotwise::{bookable_starts, free_windows, validate_slot, BookingRecord, BusinessHours};

// ---------------------------------------------------------------------------
// Serde-friendly DTOs for crossing the WASM boundary as JSON
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FreeWindowDto {
    start: String,
    end: String,
    duration_minutes: u32,
}

/// Input format for bookings passed from JavaScript — the same camelCase
/// array shape the form state holds.
#[derive(Deserialize)]
#[serde(transparent)]
struct BookingsInput(Vec<BookingRecord>);

// ---------------------------------------------------------------------------
// Helpers: parse boundary arguments into domain types
// ---------------------------------------------------------------------------

/// Parse a `YYYY-MM-DD` day key.
fn parse_date(s: &str) -> Result<NaiveDate, JsValue> {
    s.parse()
        .map_err(|e| JsValue::from_str(&format!("Invalid date '{}': {}", s, e)))
}

/// Parse the bookings JSON array held by the form.
fn parse_bookings(json: &str) -> Result<Vec<BookingRecord>, JsValue> {
    let BookingsInput(bookings) = serde_json::from_str(json)
        .map_err(|e| JsValue::from_str(&format!("Invalid bookings JSON: {}", e)))?;
    Ok(bookings)
}

/// Build the operating window from `"HH:MM"` bounds.
fn parse_hours(open: &str, close: &str) -> Result<BusinessHours, JsValue> {
    BusinessHours::from_wall_clock(open, close)
        .map_err(|e| JsValue::from_str(&format!("Invalid business hours: {}", e)))
}

/// The day's blocking bookings as intervals; records whose stored times fail
/// to parse are skipped, matching the validator.
fn day_intervals(bookings: &[BookingRecord], date: NaiveDate) -> Vec<TimeInterval> {
    bookings
        .iter()
        .filter(|record| record.date == date && record.status.blocks_time())
        .filter_map(|record| record.interval().ok())
        .collect()
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value)
        .map_err(|e| JsValue::from_str(&format!("Serialization error: {}", e)))
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Decide whether a candidate slot can be placed.
///
/// Returns a JSON string of `{available, reason?}` for the form to render.
/// Candidate time/duration problems come back inside the result (the user
/// can fix them); a malformed bookings array, date, or operating window is
/// a programming error and throws.
///
/// # Arguments
/// - `time` -- Candidate start, "HH:MM"
/// - `duration_minutes` -- Candidate length in minutes
/// - `date` -- Day key, "YYYY-MM-DD"
/// - `bookings_json` -- JSON array of booking records
/// - `open` / `close` -- Operating window bounds, "HH:MM"
#[wasm_bindgen(js_name = "validateSlot")]
pub fn validate_slot_js(
    time: &str,
    duration_minutes: i64,
    date: &str,
    bookings_json: &str,
    open: &str,
    close: &str,
) -> Result<String, JsValue> {
    let date = parse_date(date)?;
    let bookings = parse_bookings(bookings_json)?;
    let hours = parse_hours(open, close)?;

    let result = validate_slot(time, duration_minutes, date, &bookings, &hours);
    to_json(&result)
}

/// List the free windows of a day.
///
/// Returns a JSON string of `[{start, end, durationMinutes}]` with
/// wall-clock bounds, sorted by start time.
#[wasm_bindgen(js_name = "freeWindows")]
pub fn free_windows_js(
    date: &str,
    bookings_json: &str,
    open: &str,
    close: &str,
) -> Result<String, JsValue> {
    let date = parse_date(date)?;
    let bookings = parse_bookings(bookings_json)?;
    let hours = parse_hours(open, close)?;

    let windows: Vec<FreeWindowDto> = free_windows(&day_intervals(&bookings, date), &hours)
        .into_iter()
        .map(|w| FreeWindowDto {
            start: format_wall_clock(w.start_minutes),
            end: format_wall_clock(w.end_minutes),
            duration_minutes: w.duration_minutes,
        })
        .collect();

    to_json(&windows)
}

/// List bookable start times for a service on a step grid.
///
/// Returns a JSON string of `["HH:MM", ...]` — the options a schedule
/// picker offers for the day.
#[wasm_bindgen(js_name = "bookableStarts")]
pub fn bookable_starts_js(
    date: &str,
    bookings_json: &str,
    duration_minutes: u32,
    step_minutes: u32,
    open: &str,
    close: &str,
) -> Result<String, JsValue> {
    let date = parse_date(date)?;
    let bookings = parse_bookings(bookings_json)?;
    let hours = parse_hours(open, close)?;

    let starts: Vec<String> = bookable_starts(
        &day_intervals(&bookings, date),
        &hours,
        duration_minutes,
        step_minutes,
    )
    .into_iter()
    .map(format_wall_clock)
    .collect();

    to_json(&starts)
}
