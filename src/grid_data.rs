//! # Input Validation
//!
//! Parses a loosely-typed JSON mapping into a validated [`StateModel`]. The
//! wire format carries a required `T_Date` key (`DD-MM-YYYY`) and up to 24
//! optional hour keys `T_00`..`T_23`, each holding one of the four state
//! glyphs.
//!
//! ## Default and coercion policy
//!
//! - A **missing** hour key defaults to [`StateSymbol::Unknown`].
//! - A **present but unrecognized** glyph is coerced to
//!   [`StateSymbol::Unknown`] with a warning log rather than rejected. The
//!   reference tool's color lookup falls through to the neutral gray for any
//!   glyph outside the four-symbol set, so coercion is the faithful reading;
//!   this policy is deliberate and documented here rather than guessed
//!   silently.
//! - Keys outside `T_00`..`T_23` (the reference payloads carry a stray
//!   `T_24`) are ignored.
//!
//! Date validation is strict: the key must be present, textual, and a real
//! calendar date, so `31-02-2025` fails just like `not-a-date`. All failures
//! are detected here, before any drawing begins.

use crate::{RenderError, StateModel, StateSymbol, HOURS};
use chrono::NaiveDate;
use serde_json::{Map, Value};

/// JSON key holding the record's date
pub const DATE_KEY: &str = "T_Date";

/// Expected textual date layout: two-digit day, two-digit month, four-digit year
const DATE_FORMAT: &str = "%d-%m-%Y";

/// Validate a raw JSON object into a [`StateModel`].
///
/// # Returns
/// - `Ok(StateModel)`: date parsed, all 24 slots resolved (absent or
///   unrecognized slots as `Unknown`)
/// - `Err(RenderError::InvalidDateFormat)`: `T_Date` missing, non-textual,
///   malformed, or an impossible calendar date
///
/// # Example
/// ```
/// use grid_timeline_lib::{grid_data, StateSymbol};
///
/// let raw = serde_json::json!({ "T_Date": "20-11-2025", "T_06": "✕" });
/// let model = grid_data::parse(raw.as_object().unwrap()).unwrap();
/// assert_eq!(model.hours[6], StateSymbol::Unavailable);
/// assert_eq!(model.hours[7], StateSymbol::Unknown);
/// ```
pub fn parse(raw: &Map<String, Value>) -> Result<StateModel, RenderError> {
    let date_text = raw
        .get(DATE_KEY)
        .and_then(Value::as_str)
        .ok_or_else(|| RenderError::InvalidDateFormat(format!("missing {}", DATE_KEY)))?;

    let date = NaiveDate::parse_from_str(date_text.trim(), DATE_FORMAT)
        .map_err(|_| RenderError::InvalidDateFormat(date_text.to_string()))?;

    let mut hours = [StateSymbol::Unknown; HOURS];
    for (hour, slot) in hours.iter_mut().enumerate() {
        let key = format!("T_{:02}", hour);
        match raw.get(&key) {
            None => {} // absent slot stays Unknown
            Some(Value::String(glyph)) => match StateSymbol::from_glyph(glyph.trim()) {
                Some(symbol) => *slot = symbol,
                None => {
                    tracing::warn!(key = %key, glyph = %glyph, "unrecognized state glyph, treating as unknown");
                }
            },
            Some(other) => {
                tracing::warn!(key = %key, value = %other, "non-string state value, treating as unknown");
            }
        }
    }

    Ok(StateModel { date, hours })
}

/// Convenience entry point for transports that hand over raw JSON text
/// (files, stdin pipes).
pub fn parse_str(json: &str) -> Result<StateModel, RenderError> {
    let value: Value =
        serde_json::from_str(json).map_err(|e| RenderError::InvalidInput(e.to_string()))?;
    let object = value
        .as_object()
        .ok_or_else(|| RenderError::InvalidInput("expected a JSON object".to_string()))?;
    parse(object)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(pairs: &[(&str, &str)]) -> Map<String, Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), Value::String(v.to_string())))
            .collect()
    }

    #[test]
    fn missing_date_fails_with_invalid_date_format() {
        let err = parse(&raw(&[("T_00", "●")])).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDateFormat(_)));
    }

    #[test]
    fn malformed_date_fails() {
        for bad in ["2025-11-20", "20/11/2025", "tomorrow", ""] {
            let err = parse(&raw(&[(DATE_KEY, bad)])).unwrap_err();
            assert!(
                matches!(err, RenderError::InvalidDateFormat(_)),
                "{:?} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn impossible_calendar_date_fails() {
        // February 31st parses lexically but is not a real date
        let err = parse(&raw(&[(DATE_KEY, "31-02-2025")])).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDateFormat(_)));
    }

    #[test]
    fn non_string_date_fails() {
        let mut map = Map::new();
        map.insert(DATE_KEY.to_string(), Value::from(20112025));
        let err = parse(&map).unwrap_err();
        assert!(matches!(err, RenderError::InvalidDateFormat(_)));
    }

    #[test]
    fn missing_hours_default_to_unknown() {
        let model = parse(&raw(&[(DATE_KEY, "20-11-2025"), ("T_03", "●")])).unwrap();
        assert_eq!(model.hours[3], StateSymbol::Available);
        for (hour, state) in model.hours.iter().enumerate() {
            if hour != 3 {
                assert_eq!(*state, StateSymbol::Unknown, "hour {}", hour);
            }
        }
    }

    #[test]
    fn unrecognized_glyph_is_coerced_to_unknown() {
        let model = parse(&raw(&[(DATE_KEY, "20-11-2025"), ("T_10", "@")])).unwrap();
        assert_eq!(model.hours[10], StateSymbol::Unknown);
    }

    #[test]
    fn non_string_hour_value_is_coerced_to_unknown() {
        let mut map = raw(&[(DATE_KEY, "20-11-2025")]);
        map.insert("T_05".to_string(), Value::from(1));
        let model = parse(&map).unwrap();
        assert_eq!(model.hours[5], StateSymbol::Unknown);
    }

    #[test]
    fn keys_outside_the_hour_range_are_ignored() {
        // Reference payloads carry a stray T_24; nothing reads it
        let model = parse(&raw(&[
            (DATE_KEY, "20-11-2025"),
            ("T_23", "✕"),
            ("T_24", "●"),
        ]))
        .unwrap();
        assert_eq!(model.hours[23], StateSymbol::Unavailable);
    }

    #[test]
    fn full_reference_payload_parses() {
        let mut pairs = vec![(DATE_KEY.to_string(), "20-11-2025".to_string())];
        for hour in 0..6 {
            pairs.push((format!("T_{:02}", hour), "●".to_string()));
        }
        for hour in 6..13 {
            pairs.push((format!("T_{:02}", hour), "✕".to_string()));
        }
        pairs.push(("T_16".to_string(), "%".to_string()));
        pairs.push(("T_17".to_string(), "-".to_string()));

        let map: Map<String, Value> = pairs
            .into_iter()
            .map(|(k, v)| (k, Value::String(v)))
            .collect();
        let model = parse(&map).unwrap();

        assert_eq!(model.date, NaiveDate::from_ymd_opt(2025, 11, 20).unwrap());
        assert_eq!(model.hours[0], StateSymbol::Available);
        assert_eq!(model.hours[6], StateSymbol::Unavailable);
        assert_eq!(model.hours[16], StateSymbol::Partial);
        assert_eq!(model.hours[17], StateSymbol::Unknown);
        assert_eq!(model.hours[20], StateSymbol::Unknown); // absent
    }

    #[test]
    fn parse_str_rejects_non_object_input() {
        assert!(matches!(
            parse_str("[1, 2, 3]").unwrap_err(),
            RenderError::InvalidInput(_)
        ));
        assert!(matches!(
            parse_str("not json at all").unwrap_err(),
            RenderError::InvalidInput(_)
        ));
    }

    #[test]
    fn parse_str_accepts_object_input() {
        let model = parse_str(r#"{ "T_Date": "01-01-2025", "T_00": "✕" }"#).unwrap();
        assert_eq!(model.hours[0], StateSymbol::Unavailable);
    }
}
