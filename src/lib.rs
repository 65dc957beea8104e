//! # Grid Timeline Core Library
//!
//! This library renders a fixed-size timeline image depicting 24 hourly
//! electricity grid availability states for a single calendar day. The output
//! is consumed by downstream automation (chat tools, workflow engines,
//! dashboards), so the rendering contract is strict: the canvas is always
//! 1024x250 pixels, and identical input plus an identical "now" timestamp
//! produces byte-identical PNG output.
//!
//! ## Pipeline
//!
//! 1. **Validate**: [`grid_data`] parses a raw JSON mapping (`T_Date`,
//!    `T_00`..`T_23`) into a [`StateModel`], failing fast on bad dates
//! 2. **Lay out**: [`layout`] partitions the canvas width into 24 contiguous
//!    pixel segments using cumulative rounding
//! 3. **Render**: [`renderer`] composes background, segments, the optional
//!    current-time marker, and text labels into a raster image
//! 4. **Deliver**: [`encode`] serializes the canvas to PNG and either writes
//!    it to a path or returns an unwrapped base64 string
//!
//! ## Concurrency
//!
//! Rendering is synchronous and single-threaded per request. A [`StateModel`]
//! is constructed fresh per request and never shared across calls; the only
//! process-wide state is the read-only font database in [`fonts`], loaded at
//! most once behind a `OnceLock`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::io;
use std::path::PathBuf;
use thiserror::Error;

// Module declarations
pub mod config;
pub mod encode;
pub mod fonts;
pub mod grid_data;
pub mod layout;
pub mod marker;
pub mod palette;
pub mod renderer;

/// Canvas width in pixels. Hard external contract, not a default.
pub const CANVAS_WIDTH: u32 = 1024;
/// Canvas height in pixels. Hard external contract, not a default.
pub const CANVAS_HEIGHT: u32 = 250;
/// Number of hourly slots in a day's record.
pub const HOURS: usize = 24;

/// Availability state of a single hourly slot.
///
/// Modeled as a closed enum rather than a raw glyph so the color mapping and
/// validation stay exhaustive and checkable at compile time. The wire format
/// uses single glyphs: `●` available, `✕` unavailable, `%` partial, `-`
/// unknown.
///
/// # Example
/// ```
/// use grid_timeline_lib::StateSymbol;
///
/// assert_eq!(StateSymbol::from_glyph("●"), Some(StateSymbol::Available));
/// assert_eq!(StateSymbol::from_glyph("?"), None);
/// assert_eq!(StateSymbol::Partial.glyph(), "%");
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum StateSymbol {
    /// Grid power available for the full hour
    Available,
    /// Grid power unavailable for the full hour
    Unavailable,
    /// Power present for part of the hour (outage starts or ends inside it)
    Partial,
    /// No information for this hour
    Unknown,
}

impl StateSymbol {
    /// Parse a wire glyph into a state symbol. Returns `None` for anything
    /// outside the closed four-glyph set; the caller decides the policy for
    /// unrecognized glyphs (see [`grid_data`]).
    pub fn from_glyph(glyph: &str) -> Option<Self> {
        match glyph {
            "●" => Some(StateSymbol::Available),
            "✕" => Some(StateSymbol::Unavailable),
            "%" => Some(StateSymbol::Partial),
            "-" => Some(StateSymbol::Unknown),
            _ => None,
        }
    }

    /// The wire glyph for this symbol.
    pub fn glyph(&self) -> &'static str {
        match self {
            StateSymbol::Available => "●",
            StateSymbol::Unavailable => "✕",
            StateSymbol::Partial => "%",
            StateSymbol::Unknown => "-",
        }
    }
}

/// One day's validated availability record: a calendar date plus exactly 24
/// hourly states, indexed 0..23 where slot 0 is midnight-to-1am.
///
/// Instances are constructed fresh per request (via [`grid_data::parse`] or
/// directly in tests) and discarded after rendering. They are never shared or
/// mutated across concurrent calls.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use grid_timeline_lib::{StateModel, StateSymbol};
///
/// let date = NaiveDate::from_ymd_opt(2025, 11, 20).unwrap();
/// let model = StateModel::uniform(date, StateSymbol::Available);
/// assert_eq!(model.hours.len(), 24);
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StateModel {
    /// The calendar day this record describes
    pub date: NaiveDate,
    /// Exactly 24 hourly states, slot i covering hour i of the day
    pub hours: [StateSymbol; HOURS],
}

impl StateModel {
    /// Build a model with every slot set to the same symbol.
    pub fn uniform(date: NaiveDate, symbol: StateSymbol) -> Self {
        StateModel {
            date,
            hours: [symbol; HOURS],
        }
    }
}

/// Errors surfaced by the validation and delivery stages.
///
/// All validation failures are detected before any drawing begins, so no
/// partial image is ever produced on a failed validation. Font-load problems
/// are deliberately absent here: they are recovered locally in [`fonts`] via
/// the fallback chain and only degrade visual fidelity.
#[derive(Error, Debug)]
pub enum RenderError {
    /// `T_Date` missing, malformed, or not a real calendar date
    #[error("invalid date: {0} (expected DD-MM-YYYY)")]
    InvalidDateFormat(String),

    /// Input was not a JSON object at all
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// File delivery failed (unwritable path, disk full, permissions)
    #[error("failed to write image to {path}: {source}")]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// Scene composition failed; not expected once validation succeeds
    #[error("scene composition failed: {0}")]
    Compose(String),

    /// PNG serialization failed; not expected for a well-formed canvas
    #[error("PNG encoding failed: {0}")]
    Encode(String),
}
