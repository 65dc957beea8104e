//! # State Color Palette
//!
//! Fixed, high-contrast palette drawn from the iOS system colors (light
//! mode), matching the design language the timeline images were originally
//! specified against. The state mapping is total and stable: every
//! [`StateSymbol`] has exactly one color, and the mapping never changes
//! between calls.

use crate::StateSymbol;

/// An opaque RGB color.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Rgb {
    /// Hex form for SVG attributes, e.g. `#34C759`.
    pub fn hex(&self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

/// iOS system green: grid power available
pub const AVAILABLE: Rgb = Rgb(52, 199, 89);
/// iOS system red: grid power unavailable
pub const UNAVAILABLE: Rgb = Rgb(255, 59, 48);
/// iOS system orange: partial availability
pub const PARTIAL: Rgb = Rgb(255, 149, 0);
/// iOS system gray: no information
pub const UNKNOWN: Rgb = Rgb(142, 142, 147);

/// Canvas background (white)
pub const BACKGROUND: Rgb = Rgb(255, 255, 255);
/// Primary label color (title)
pub const PRIMARY_TEXT: Rgb = Rgb(0, 0, 0);
/// Secondary label color (date, hour ticks)
pub const SECONDARY_TEXT: Rgb = Rgb(60, 60, 67);
/// Current-time marker color; distinct from every state color
pub const MARKER: Rgb = Rgb(128, 128, 128);

/// Map a state symbol to its display color. Pure, total, stable.
pub fn state_color(symbol: StateSymbol) -> Rgb {
    match symbol {
        StateSymbol::Available => AVAILABLE,
        StateSymbol::Unavailable => UNAVAILABLE,
        StateSymbol::Partial => PARTIAL,
        StateSymbol::Unknown => UNKNOWN,
    }
}

/// Human-readable legend label for a state symbol.
pub fn state_label(symbol: StateSymbol) -> &'static str {
    match symbol {
        StateSymbol::Available => "Available",
        StateSymbol::Unavailable => "Not Available",
        StateSymbol::Partial => "Partial",
        StateSymbol::Unknown => "Unknown",
    }
}
