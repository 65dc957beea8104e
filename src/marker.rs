//! # Current-Time Marker Calculation
//!
//! Decides whether the "now" indicator is drawn and, if so, where. The
//! marker appears **only** when the model's date equals the current calendar
//! date in the process's local time zone; past and future dates render with
//! no marker at all, which keeps those images fully deterministic regardless
//! of wall-clock time.
//!
//! The horizontal position is a continuous interpolation, not a stepped one:
//! two renders of the same "today" record at different real times land the
//! marker at different pixels, monotonically advancing through the day. This
//! is a primary functional requirement of the image, not a cosmetic detail.
//!
//! "Now" is always injected by the caller (the binary passes
//! `Local::now()`), following the same injected-clock pattern the tests rely
//! on for determinism.

use crate::{CANVAS_WIDTH, HOURS};
use chrono::{DateTime, Local, NaiveDate, Timelike};

/// Horizontal marker position for a model date, or `None` when the record is
/// not for today.
///
/// Position formula: `(hour + minute / 60) * (canvas_width / 24)`, anchored
/// at boundary 0 of the segment geometry (the left canvas edge).
///
/// # Example
/// ```
/// use chrono::{Local, TimeZone};
/// use grid_timeline_lib::marker;
///
/// let now = Local.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap();
/// let x = marker::position(now.date_naive(), now).unwrap();
/// assert!((x - 512.0).abs() < 1e-9); // noon lands mid-canvas
/// ```
pub fn position(date: NaiveDate, now: DateTime<Local>) -> Option<f64> {
    if now.date_naive() != date {
        return None;
    }

    let hours_elapsed = now.hour() as f64 + now.minute() as f64 / 60.0;
    Some(hours_elapsed * (CANVAS_WIDTH as f64 / HOURS as f64))
}
