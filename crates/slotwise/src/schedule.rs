//! Compute what is open on a day's calendar.
//!
//! Sorts busy intervals, merges overlapping ones clipped to the operating
//! window, then walks the gaps. Also enumerates bookable start times on a
//! step grid, which is what a schedule picker renders.

use crate::hours::BusinessHours;
use crate::interval::TimeInterval;

/// A free stretch of the day, inside the operating window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FreeWindow {
    pub start_minutes: u32,
    pub end_minutes: u32,
    pub duration_minutes: u32,
}

/// Merge overlapping or adjacent busy intervals, clipped to the operating
/// window.
///
/// Returns a sorted, non-overlapping list of `(start, end)` minute pairs.
fn merge_busy(busy: &[TimeInterval], hours: &BusinessHours) -> Vec<(u32, u32)> {
    let window = hours.window();

    // Clip to the window, discarding intervals entirely outside it.
    let mut clipped: Vec<(u32, u32)> = busy
        .iter()
        .filter(|iv| iv.overlaps(&window))
        .map(|iv| {
            (
                iv.start_minutes.max(window.start_minutes),
                iv.end_minutes.min(window.end_minutes),
            )
        })
        .collect();

    if clipped.is_empty() {
        return Vec::new();
    }

    clipped.sort_unstable();

    let mut merged: Vec<(u32, u32)> = Vec::new();
    for (start, end) in clipped {
        if let Some(last) = merged.last_mut() {
            if start <= last.1 {
                last.1 = last.1.max(end);
                continue;
            }
        }
        merged.push((start, end));
    }

    merged
}

/// Free windows of the day, given the committed busy intervals.
///
/// Busy intervals may overlap each other — they are merged before the gaps
/// are computed. Windows come back sorted by start time.
pub fn free_windows(busy: &[TimeInterval], hours: &BusinessHours) -> Vec<FreeWindow> {
    let merged = merge_busy(busy, hours);

    let mut windows = Vec::new();
    let mut cursor = hours.open_minutes();

    for (busy_start, busy_end) in &merged {
        if cursor < *busy_start {
            windows.push(FreeWindow {
                start_minutes: cursor,
                end_minutes: *busy_start,
                duration_minutes: *busy_start - cursor,
            });
        }
        cursor = cursor.max(*busy_end);
    }

    // Trailing gap up to closing time.
    if cursor < hours.close_minutes() {
        windows.push(FreeWindow {
            start_minutes: cursor,
            end_minutes: hours.close_minutes(),
            duration_minutes: hours.close_minutes() - cursor,
        });
    }

    windows
}

/// First free window of at least `min_duration_minutes`.
///
/// Delegates to [`free_windows`] and returns the earliest window meeting the
/// minimum.
pub fn first_fit(
    busy: &[TimeInterval],
    hours: &BusinessHours,
    min_duration_minutes: u32,
) -> Option<FreeWindow> {
    free_windows(busy, hours)
        .into_iter()
        .find(|w| w.duration_minutes >= min_duration_minutes)
}

/// Start times on a `step_minutes` grid whose slot of `duration_minutes`
/// fits inside the operating window without touching a busy interval.
///
/// The grid is anchored at opening time. Degenerate input (`duration == 0`
/// or `step == 0`) yields an empty list.
pub fn bookable_starts(
    busy: &[TimeInterval],
    hours: &BusinessHours,
    duration_minutes: u32,
    step_minutes: u32,
) -> Vec<u32> {
    if duration_minutes == 0 || step_minutes == 0 {
        return Vec::new();
    }

    let merged = merge_busy(busy, hours);
    let mut starts = Vec::new();

    let mut start = hours.open_minutes();
    loop {
        let end = match start.checked_add(duration_minutes) {
            Some(end) if end <= hours.close_minutes() => end,
            _ => break,
        };
        let clear = merged
            .iter()
            .all(|&(busy_start, busy_end)| end <= busy_start || busy_end <= start);
        if clear {
            starts.push(start);
        }
        start = match start.checked_add(step_minutes) {
            Some(next) => next,
            None => break,
        };
    }

    starts
}
