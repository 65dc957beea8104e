//! # Canvas Layout Geometry
//!
//! Computes the pixel geometry of the fixed 1024x250 canvas: the horizontal
//! segment boundaries for the 24 hourly slots, the vertical band occupied by
//! the segment bar, and the reserved text bands above and below it.
//!
//! ## Cumulative rounding
//!
//! Segment boundaries are computed as `boundary(i) = round(i * 1024 / 24)`
//! rather than by rounding each segment width independently. Per-segment
//! rounding accumulates a systematic 1-2 pixel gap or overlap at the right
//! canvas edge; the cumulative form guarantees `boundary(0) == 0` and
//! `boundary(24) == 1024` exactly, so the 24 segments partition the full
//! width with no gap and no overlap.
//!
//! ## Vertical bands
//!
//! The bar occupies the same vertical region on every call. Text bands
//! (title and date above, hour ticks and legend below) never overlap the bar
//! band; the marker is allowed to rise slightly above the bar into the
//! whitespace between the date line and the bar top.

use crate::{CANVAS_WIDTH, HOURS};

/// Baseline of the centered title line
pub const TITLE_BASELINE: u32 = 34;
/// Baseline of the centered human-readable date line
pub const DATE_BASELINE: u32 = 62;
/// Top edge of the segment bar band
pub const BAR_TOP: u32 = 96;
/// Bottom edge (exclusive) of the segment bar band
pub const BAR_BOTTOM: u32 = 168;
/// Top of the current-time marker line (above the bar, below the date band)
pub const MARKER_TOP: u32 = 80;
/// Apex row of the marker's triangle pointer
pub const MARKER_TRIANGLE_TOP: u32 = 70;
/// Baseline of the hour tick labels under the bar
pub const HOUR_LABEL_BASELINE: u32 = 186;
/// Top edge of the legend color swatches
pub const LEGEND_SWATCH_TOP: u32 = 208;
/// Baseline of the legend labels
pub const LEGEND_BASELINE: u32 = 219;

/// Derived horizontal geometry for one render: 25 boundaries partitioning
/// the canvas width into 24 contiguous, non-overlapping segments.
///
/// Geometry is recomputed per request (it is cheap) and never stored between
/// requests.
#[derive(Clone, Debug)]
pub struct Geometry {
    boundaries: [u32; HOURS + 1],
}

impl Geometry {
    /// Compute segment boundaries across the fixed canvas width.
    pub fn compute() -> Self {
        let mut boundaries = [0u32; HOURS + 1];
        for (i, boundary) in boundaries.iter_mut().enumerate() {
            *boundary = (i as f64 * CANVAS_WIDTH as f64 / HOURS as f64).round() as u32;
        }
        Geometry { boundaries }
    }

    /// Pixel boundary i, for i in 0..=24. `boundary(0) == 0` and
    /// `boundary(24) == CANVAS_WIDTH` by construction.
    pub fn boundary(&self, i: usize) -> u32 {
        self.boundaries[i]
    }

    /// Left and right (exclusive) pixel edges of the segment for one hour.
    pub fn segment(&self, hour: usize) -> (u32, u32) {
        (self.boundaries[hour], self.boundaries[hour + 1])
    }

    /// Horizontal center of one hour's segment, for tick labels.
    pub fn segment_center(&self, hour: usize) -> f64 {
        let (left, right) = self.segment(hour);
        (left + right) as f64 / 2.0
    }

    /// Height of the bar band in pixels.
    pub fn bar_height() -> u32 {
        BAR_BOTTOM - BAR_TOP
    }
}
