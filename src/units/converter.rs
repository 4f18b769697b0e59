use crate::units::types::Unit;

/// Convert `value` from one scale to another, routing through Celsius.
///
/// NaN input yields 0.0 rather than an error.
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    if value.is_nan() {
        return 0.0;
    }
    from_celsius(to_celsius(value, from), to)
}

/// String-tag variant of [`convert`] used by the presentation layers.
///
/// An unrecognized tag on either side is treated as Celsius, so the value
/// passes through unchanged on that side.
pub fn convert_tags(value: f64, from_tag: &str, to_tag: &str) -> f64 {
    let from = lenient_unit(from_tag);
    let to = lenient_unit(to_tag);
    convert(value, from, to)
}

fn lenient_unit(tag: &str) -> Unit {
    Unit::from_tag_lenient(tag).unwrap_or_else(|| {
        log::debug!("unrecognized unit tag '{}', treating as celsius", tag);
        Unit::Celsius
    })
}

fn to_celsius(value: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Celsius => value,
        Unit::Fahrenheit => (value - 32.0) * 5.0 / 9.0,
        Unit::Kelvin => value - 273.15,
        Unit::Reaumur => value * 5.0 / 4.0,
        Unit::Rankine => (value - 491.67) * 5.0 / 9.0,
    }
}

fn from_celsius(celsius: f64, unit: Unit) -> f64 {
    match unit {
        Unit::Celsius => celsius,
        Unit::Fahrenheit => celsius * 9.0 / 5.0 + 32.0,
        Unit::Kelvin => celsius + 273.15,
        Unit::Reaumur => celsius * 4.0 / 5.0,
        Unit::Rankine => (celsius + 273.15) * 9.0 / 5.0,
    }
}
