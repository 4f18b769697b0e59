use crate::units::converter::convert;
use crate::units::error::ConvertError;
use crate::units::formatter::format_result;
use crate::units::input::parse_input;
use crate::units::types::{Measurement, Unit};
use serde::{Deserialize, Serialize};

/// One row of a conversion table
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Conversion {
    pub unit: Unit,
    pub value: f64,
    pub formatted: String,
    /// True for the row holding the source unit
    pub active: bool,
}

/// Convert a value into each of `targets`, in order
pub fn convert_all(value: f64, from: Unit, targets: &[Unit]) -> Vec<Conversion> {
    targets
        .iter()
        .map(|&unit| {
            let converted = convert(value, from, unit);
            Conversion {
                unit,
                value: converted,
                formatted: format_result(converted),
                active: unit == from,
            }
        })
        .collect()
}

/// Make the `target` row the new source measurement.
///
/// The new value is read back from the row's formatted text, so it carries
/// the displayed precision rather than the full-precision conversion.
pub fn swap(rows: &[Conversion], target: Unit) -> Result<Measurement, ConvertError> {
    let row = rows
        .iter()
        .find(|row| row.unit == target)
        .ok_or(ConvertError::UnitNotInTable(target))?;

    Ok(Measurement::new(parse_input(&row.formatted), row.unit))
}
