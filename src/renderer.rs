//! # Timeline Rendering
//!
//! Composes the availability timeline and rasterizes it to the fixed
//! 1024x250 canvas. Composition is a single pure step with a fixed z-order,
//! which is a correctness requirement rather than a style choice:
//!
//! 1. Background
//! 2. The 24 color segments per [`Geometry`](crate::layout::Geometry)
//! 3. The current-time marker (when the record is for today)
//! 4. Text labels (title, date, hour ticks, legend) on top of everything
//!
//! The scene is built as an SVG document and rasterized through `resvg` into
//! a `tiny_skia` pixmap. Segment rectangles use integer pixel boundaries and
//! `crispEdges` shape rendering, so the bar band contains exactly the mapped
//! state colors with no anti-aliased blending between neighbors.
//!
//! Rendering is deterministic: an identical [`StateModel`] plus an identical
//! "now" timestamp produces byte-identical output. "Now" is injected by the
//! caller instead of read here, both for the determinism contract and for
//! the simulated-clock tests.

use crate::config::Config;
use crate::layout::{
    Geometry, BAR_BOTTOM, BAR_TOP, DATE_BASELINE, HOUR_LABEL_BASELINE, LEGEND_BASELINE,
    LEGEND_SWATCH_TOP, MARKER_TOP, MARKER_TRIANGLE_TOP, TITLE_BASELINE,
};
use crate::{fonts, marker, palette, RenderError, StateModel, StateSymbol, CANVAS_HEIGHT, CANVAS_WIDTH, HOURS};
use chrono::{DateTime, Local};
use resvg::{tiny_skia, usvg};
use std::fmt::Write as _;

/// Title line drawn at the top of every image
pub const TITLE: &str = "Electricity Grid Availability";

/// Legend entries, in display order
const LEGEND: [StateSymbol; 4] = [
    StateSymbol::Available,
    StateSymbol::Unavailable,
    StateSymbol::Partial,
    StateSymbol::Unknown,
];

/// Render one availability record to a 1024x250 pixmap.
///
/// # Returns
/// - `Ok(Pixmap)`: the composed canvas, ready for [`crate::encode`]
/// - `Err(RenderError::Compose)`: scene parsing or pixmap allocation failed;
///   not expected for validated input
pub fn render(
    model: &StateModel,
    now: DateTime<Local>,
    config: &Config,
) -> Result<tiny_skia::Pixmap, RenderError> {
    let geometry = Geometry::compute();
    let svg = compose_svg(model, now, &geometry);
    rasterize(&svg, config)
}

/// Build the SVG scene in the required z-order.
fn compose_svg(model: &StateModel, now: DateTime<Local>, geometry: &Geometry) -> String {
    let mut svg = String::with_capacity(8 * 1024);

    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
        w = CANVAS_WIDTH,
        h = CANVAS_HEIGHT
    );

    // 1. Background
    let _ = write!(
        svg,
        r#"<rect width="{}" height="{}" fill="{}"/>"#,
        CANVAS_WIDTH,
        CANVAS_HEIGHT,
        palette::BACKGROUND.hex()
    );

    // 2. Hour segments; crispEdges keeps integer-aligned rects unblended
    svg.push_str(r#"<g shape-rendering="crispEdges">"#);
    for (hour, state) in model.hours.iter().enumerate() {
        let (left, right) = geometry.segment(hour);
        let _ = write!(
            svg,
            r#"<rect x="{}" y="{}" width="{}" height="{}" fill="{}"/>"#,
            left,
            BAR_TOP,
            right - left,
            Geometry::bar_height(),
            palette::state_color(*state).hex()
        );
    }
    svg.push_str("</g>");

    // 3. Current-time marker, only when the record is for today
    if let Some(x) = marker::position(model.date, now) {
        push_marker(&mut svg, x);
    }

    // 4. Text labels on top of everything
    push_labels(&mut svg, model, geometry);

    svg.push_str("</svg>");
    svg
}

/// Triangle pointer, vertical indicator line, and "now" caption at the
/// continuous time-of-day position.
fn push_marker(svg: &mut String, x: f64) {
    let color = palette::MARKER.hex();

    let _ = write!(
        svg,
        r#"<polygon points="{:.2},{t} {:.2},{t} {:.2},{m}" fill="{c}"/>"#,
        x - 5.0,
        x + 5.0,
        x,
        t = MARKER_TRIANGLE_TOP,
        m = MARKER_TOP,
        c = color
    );
    let _ = write!(
        svg,
        r#"<line x1="{x:.2}" y1="{}" x2="{x:.2}" y2="{}" stroke="{c}" stroke-width="2"/>"#,
        MARKER_TOP,
        BAR_BOTTOM,
        x = x,
        c = color
    );

    // Keep the caption on-canvas near the right edge
    let (caption_x, anchor) = if x > CANVAS_WIDTH as f64 - 40.0 {
        (x - 8.0, "end")
    } else {
        (x + 8.0, "start")
    };
    let _ = write!(
        svg,
        r#"<text x="{:.2}" y="{}" font-size="11" fill="{}" text-anchor="{}">now</text>"#,
        caption_x,
        MARKER_TOP - 2,
        color,
        anchor
    );
}

/// Title, human-readable date, hour tick labels, and legend.
fn push_labels(svg: &mut String, model: &StateModel, geometry: &Geometry) {
    let center_x = CANVAS_WIDTH / 2;

    let _ = write!(
        svg,
        r#"<text x="{}" y="{}" font-size="22" font-weight="600" fill="{}" text-anchor="middle">{}</text>"#,
        center_x,
        TITLE_BASELINE,
        palette::PRIMARY_TEXT.hex(),
        escape_xml(TITLE)
    );

    let date_text = model.date.format("%-d %B %Y").to_string();
    let _ = write!(
        svg,
        r#"<text x="{}" y="{}" font-size="15" fill="{}" text-anchor="middle">{}</text>"#,
        center_x,
        DATE_BASELINE,
        palette::SECONDARY_TEXT.hex(),
        escape_xml(&date_text)
    );

    // Hour ticks, one per slot, centered under their segment
    for hour in 0..HOURS {
        let _ = write!(
            svg,
            r#"<text x="{:.1}" y="{}" font-size="11" fill="{}" text-anchor="middle">{:02}</text>"#,
            geometry.segment_center(hour),
            HOUR_LABEL_BASELINE,
            palette::SECONDARY_TEXT.hex(),
            hour
        );
    }

    // Legend: colored swatch plus label per state
    let mut legend_x = 12u32;
    for state in LEGEND {
        let _ = write!(
            svg,
            r#"<rect x="{}" y="{}" width="18" height="10" fill="{}"/>"#,
            legend_x,
            LEGEND_SWATCH_TOP,
            palette::state_color(state).hex()
        );
        let _ = write!(
            svg,
            r#"<text x="{}" y="{}" font-size="13" fill="{}">{}</text>"#,
            legend_x + 26,
            LEGEND_BASELINE,
            palette::PRIMARY_TEXT.hex(),
            escape_xml(palette::state_label(state))
        );
        legend_x += 170;
    }
}

/// Rasterize the scene into a canvas-sized pixmap using the process-wide
/// font database.
fn rasterize(svg: &str, config: &Config) -> Result<tiny_skia::Pixmap, RenderError> {
    let db = fonts::database(config.fonts.extra_dir.as_deref());
    let family = fonts::resolve_family(&db, &config.fonts.preferred_family);

    let mut options = usvg::Options::default();
    options.font_family = family;
    options.fontdb = db;

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| RenderError::Compose(e.to_string()))?;

    let mut pixmap = tiny_skia::Pixmap::new(CANVAS_WIDTH, CANVAS_HEIGHT)
        .ok_or_else(|| RenderError::Compose("failed to allocate canvas pixmap".to_string()))?;
    resvg::render(&tree, tiny_skia::Transform::identity(), &mut pixmap.as_mut());

    Ok(pixmap)
}

fn escape_xml(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, TimeZone};

    fn model_for(date: (i32, u32, u32)) -> StateModel {
        let date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        StateModel::uniform(date, StateSymbol::Available)
    }

    fn local_noon(y: i32, m: u32, d: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(y, m, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn scene_contains_all_segments_and_labels() {
        let model = model_for((2025, 11, 20));
        let svg = compose_svg(&model, local_noon(2025, 1, 1), &Geometry::compute());

        assert!(svg.matches(&palette::AVAILABLE.hex()).count() >= HOURS);
        assert!(svg.contains(TITLE));
        assert!(svg.contains("20 November 2025"));
        assert!(svg.contains(">00<") && svg.contains(">23<"));
    }

    #[test]
    fn marker_is_composed_only_for_today() {
        let geometry = Geometry::compute();
        let model = model_for((2025, 6, 15));

        let today = compose_svg(&model, local_noon(2025, 6, 15), &geometry);
        assert!(today.contains("polygon"));
        assert!(today.contains(">now<"));

        let other_day = compose_svg(&model, local_noon(2025, 6, 16), &geometry);
        assert!(!other_day.contains("polygon"));
        assert!(!other_day.contains(">now<"));
    }

    #[test]
    fn composition_is_deterministic_for_fixed_now() {
        let geometry = Geometry::compute();
        let model = model_for((2025, 6, 15));
        let now = local_noon(2025, 6, 15);

        assert_eq!(
            compose_svg(&model, now, &geometry),
            compose_svg(&model, now, &geometry)
        );
    }

    #[test]
    fn z_order_places_segments_before_marker_before_labels() {
        let model = model_for((2025, 6, 15));
        let svg = compose_svg(&model, local_noon(2025, 6, 15), &Geometry::compute());

        let segments_at = svg.find("crispEdges").unwrap();
        let marker_at = svg.find("polygon").unwrap();
        let title_at = svg.find(TITLE).unwrap();
        assert!(segments_at < marker_at);
        assert!(marker_at < title_at);
    }

    #[test]
    fn caption_flips_near_the_right_edge() {
        let mut svg = String::new();
        push_marker(&mut svg, 1020.0);
        assert!(svg.contains(r#"text-anchor="end""#));

        let mut svg = String::new();
        push_marker(&mut svg, 512.0);
        assert!(svg.contains(r#"text-anchor="start""#));
    }

    #[test]
    fn escape_xml_handles_markup_characters() {
        assert_eq!(escape_xml("a&b<c>"), "a&amp;b&lt;c&gt;");
        assert_eq!(escape_xml("plain"), "plain");
    }
}
