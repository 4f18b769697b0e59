/// Number of decimal places shown for a value of this magnitude
pub fn precision_for(value: f64) -> usize {
    let magnitude = value.abs();
    if magnitude >= 1000.0 {
        1
    } else if magnitude >= 100.0 {
        2
    } else {
        3
    }
}

/// Format a converted value for display.
///
/// Large magnitudes get fewer decimals: 1 at or above 1000, 2 at or above
/// 100, 3 otherwise. Exact ties round to even, unlike JavaScript's
/// `toFixed`. Only NaN, the infinities and negative zero are spelled the
/// way `toFixed` spells them.
pub fn format_result(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        };
    }

    // -0.0 would otherwise print as "-0.000"
    let value = if value == 0.0 { 0.0 } else { value };
    format!("{:.*}", precision_for(value), value)
}
