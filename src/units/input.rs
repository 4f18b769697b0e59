use crate::units::error::ConvertError;
use crate::units::types::{Measurement, Unit};
use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    /// Leading decimal number, as accepted by a lenient text field
    /// Examples: "12.5", "-40", ".5e2", "Infinity", "3abc" (matches "3")
    static ref LEADING_NUMBER: Regex = Regex::new(
        r"^[+-]?(?:Infinity|(?:[0-9]+\.?[0-9]*|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)"
    ).unwrap();

    /// Number followed by a unit tag, optionally separated by whitespace
    /// Examples: "100 F", "-40 fahrenheit", "273.15 K", "20°C", "1e2 Re"
    static ref MEASUREMENT_PATTERN: Regex = Regex::new(
        r"^([+-]?(?:[0-9]+(?:\.[0-9]*)?|\.[0-9]+)(?:[eE][+-]?[0-9]+)?)\s*(°?[a-zA-ZéÉ]+)$"
    ).unwrap();
}

/// Parse user-typed text into a number.
///
/// Reads the longest numeric prefix and ignores whatever follows it. Text
/// with no numeric prefix, or a prefix that evaluates to zero, gives 0.0.
pub fn parse_input(text: &str) -> f64 {
    let value = LEADING_NUMBER
        .find(text.trim_start())
        .and_then(|m| m.as_str().parse::<f64>().ok())
        .unwrap_or(0.0);

    if value.is_nan() || value == 0.0 {
        0.0
    } else {
        value
    }
}

/// Check if a string looks like a "value unit" measurement
pub fn looks_like_measurement(text: &str) -> bool {
    MEASUREMENT_PATTERN.is_match(text.trim())
}

/// Parse a measurement string such as "100 F" or "20°C"
pub fn parse_measurement(text: &str) -> Result<Measurement, ConvertError> {
    let trimmed = text.trim();
    let caps = MEASUREMENT_PATTERN
        .captures(trimmed)
        .ok_or_else(|| ConvertError::InvalidMeasurement(text.to_string()))?;

    let value = caps[1]
        .parse::<f64>()
        .map_err(|_| ConvertError::InvalidMeasurement(text.to_string()))?;
    let unit: Unit = caps[2].parse()?;

    Ok(Measurement::new(value, unit))
}

/// Read `value` either as "number unit" or as a bare number in `fallback`
pub fn read_measurement(value: &str, fallback: Unit) -> Result<Measurement, ConvertError> {
    if looks_like_measurement(value) {
        parse_measurement(value)
    } else {
        Ok(Measurement::new(parse_input(value), fallback))
    }
}

/// Resolve the arguments of a single conversion into (source, target).
///
/// With `to` given, `unit` is the source unit and `value` a bare number.
/// Without it, `value` must carry its own unit and `unit` is the target.
pub fn parse_conversion_args(
    value: &str,
    unit: &str,
    to: Option<&str>,
) -> Result<(Measurement, Unit), ConvertError> {
    match to {
        Some(to) => {
            let from: Unit = unit.parse()?;
            Ok((Measurement::new(parse_input(value), from), to.parse()?))
        }
        None => Ok((parse_measurement(value)?, unit.parse()?)),
    }
}
