use crate::units::types::Unit;
use std::fmt;

#[derive(Debug, Clone, PartialEq)]
pub enum ConvertError {
    UnknownUnit(String),
    InvalidMeasurement(String),
    UnitNotInTable(Unit),
}

impl fmt::Display for ConvertError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConvertError::UnknownUnit(tag) => write!(f, "Unknown unit: {}", tag),
            ConvertError::InvalidMeasurement(input) => {
                write!(f, "Invalid measurement: '{}'", input)
            }
            ConvertError::UnitNotInTable(unit) => {
                write!(f, "Unit '{}' is not in the conversion table", unit)
            }
        }
    }
}

impl std::error::Error for ConvertError {}
