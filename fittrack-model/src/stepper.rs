//! Up/down arrow helpers for the biometric form fields.

use crate::biometrics::{parse_number, Field};

impl Field {
    /// Amount a single arrow press moves the field by, `None` for fields that
    /// cannot be stepped.
    pub fn step(&self) -> Option<f64> {
        match self {
            Field::Age => Some(1.0),
            Field::Height | Field::Weight => Some(0.5),
            Field::Sex => None,
        }
    }
}

/// Adds `step` to the current text value. Empty or unreadable text starts
/// from `step` rather than zero.
pub fn increment(current: &str, step: f64) -> f64 {
    match parse_number(current) {
        Some(value) => value + step,
        None => step,
    }
}

/// Subtracts `step` from the current text value, never going below zero.
pub fn decrement(current: &str, step: f64) -> f64 {
    let value = parse_number(current).map_or(0.0, |value| value - step);
    if value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Renders a stepped value back into form text, e.g. `70.1 + 0.5` comes out
/// as `70.6`, not `70.6000000000001`.
pub fn format_value(value: f64) -> String {
    let scaled = value * 1e6;
    if !scaled.is_finite() {
        return value.to_string();
    }
    let rounded = scaled.round() / 1e6;
    if rounded == 0.0 {
        // Avoid "-0".
        return "0".to_owned();
    }
    rounded.to_string()
}
