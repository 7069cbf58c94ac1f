//! `slotwise` CLI — validate booking slots and inspect day availability from
//! the command line.
//!
//! ## Usage
//!
//! ```sh
//! # Check a candidate slot against a bookings file
//! slotwise check --time 10:00 --duration 60 --date 2026-08-10 -i bookings.json
//!
//! # Same, with the bookings piped via stdin
//! cat bookings.json | slotwise check --time 10:00 --duration 60 --date 2026-08-10
//!
//! # List the day's free windows
//! slotwise free --date 2026-08-10 -i bookings.json
//!
//! # List bookable start times for a 60-minute service on a 30-minute grid
//! slotwise free --date 2026-08-10 --duration 60 --step 30 -i bookings.json
//!
//! # Report double-booked time on the day
//! slotwise audit --date 2026-08-10 -i bookings.json
//! ```
//!
//! Bookings are a JSON array of records:
//! `[{"date":"2026-08-10","startTime":"10:00","endTime":"11:00","status":"confirmed"}]`

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use serde::Serialize;
use std::io::{self, Read};

use slotwise::interval::{format_wall_clock, TimeInterval};
use slotwise::{
    bookable_starts, find_self_conflicts, free_windows, validate_slot, BookingRecord,
    BusinessHours,
};

#[derive(Parser)]
#[command(
    name = "slotwise",
    version,
    about = "Booking slot validation and day availability"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Operating-window flags shared by every subcommand.
#[derive(Args)]
struct HoursArgs {
    /// Opening time, HH:MM
    #[arg(long, default_value = "09:00")]
    open: String,

    /// Closing time, HH:MM
    #[arg(long, default_value = "18:00")]
    close: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Check whether a candidate slot can be placed
    Check {
        /// Candidate start time, HH:MM
        #[arg(long)]
        time: String,

        /// Candidate duration in minutes
        #[arg(long)]
        duration: i64,

        /// Calendar day, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,

        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,

        #[command(flatten)]
        hours: HoursArgs,
    },
    /// List free windows, or bookable start times when --duration is given
    Free {
        /// Calendar day, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,

        /// Service duration in minutes; switches output to start times
        #[arg(long)]
        duration: Option<u32>,

        /// Grid step in minutes between candidate start times
        #[arg(long, default_value_t = 30)]
        step: u32,

        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,

        #[command(flatten)]
        hours: HoursArgs,
    },
    /// Report overlapping committed bookings on a day
    Audit {
        /// Calendar day, YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,

        /// Bookings JSON file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
    },
}

// ---------------------------------------------------------------------------
// Output DTOs — wall-clock strings, not raw minute offsets
// ---------------------------------------------------------------------------

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct FreeWindowDto {
    start: String,
    end: String,
    duration_minutes: u32,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ConflictDto {
    first: String,
    second: String,
    overlap_minutes: u32,
}

fn label(interval: &TimeInterval) -> String {
    format!(
        "{} - {}",
        format_wall_clock(interval.start_minutes),
        format_wall_clock(interval.end_minutes)
    )
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Check {
            time,
            duration,
            date,
            input,
            hours,
        } => {
            let bookings = read_bookings(input.as_deref())?;
            let hours = parse_hours(&hours)?;

            let result = validate_slot(&time, duration, date, &bookings, &hours);
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        Commands::Free {
            date,
            duration,
            step,
            input,
            hours,
        } => {
            let bookings = read_bookings(input.as_deref())?;
            let hours = parse_hours(&hours)?;
            let busy = day_intervals(&bookings, date);

            match duration {
                Some(duration) => {
                    let starts: Vec<String> = bookable_starts(&busy, &hours, duration, step)
                        .into_iter()
                        .map(format_wall_clock)
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&starts)?);
                }
                None => {
                    let windows: Vec<FreeWindowDto> = free_windows(&busy, &hours)
                        .into_iter()
                        .map(|w| FreeWindowDto {
                            start: format_wall_clock(w.start_minutes),
                            end: format_wall_clock(w.end_minutes),
                            duration_minutes: w.duration_minutes,
                        })
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&windows)?);
                }
            }
        }
        Commands::Audit { date, input } => {
            // Audit looks at the raw day; the operating window does not gate
            // what counts as a double-booking.
            let bookings = read_bookings(input.as_deref())?;
            let busy = day_intervals(&bookings, date);

            let conflicts: Vec<ConflictDto> = find_self_conflicts(&busy)
                .into_iter()
                .map(|c| ConflictDto {
                    first: label(&c.interval_a),
                    second: label(&c.interval_b),
                    overlap_minutes: c.overlap_minutes,
                })
                .collect();

            println!("{}", serde_json::to_string_pretty(&conflicts)?);
            if !conflicts.is_empty() {
                eprintln!("{} double-booked pair(s) on {}", conflicts.len(), date);
            }
        }
    }

    Ok(())
}

/// The day's blocking bookings as intervals, skipping records whose stored
/// times fail to parse (repairing data is the store's job, not the CLI's).
fn day_intervals(bookings: &[BookingRecord], date: NaiveDate) -> Vec<TimeInterval> {
    bookings
        .iter()
        .filter(|record| record.date == date && record.status.blocks_time())
        .filter_map(|record| record.interval().ok())
        .collect()
}

fn parse_hours(args: &HoursArgs) -> Result<BusinessHours> {
    BusinessHours::from_wall_clock(&args.open, &args.close).with_context(|| {
        format!(
            "Invalid operating window: --open {} --close {}",
            args.open, args.close
        )
    })
}

fn read_bookings(path: Option<&str>) -> Result<Vec<BookingRecord>> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse bookings JSON")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}
