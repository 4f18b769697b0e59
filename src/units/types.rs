use crate::units::error::ConvertError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported temperature scales
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Celsius,
    Fahrenheit,
    Kelvin,
    Reaumur,
    Rankine,
}

impl Unit {
    /// Every unit, in the order a conversion table shows them
    pub const ALL: [Unit; 5] = [
        Unit::Celsius,
        Unit::Fahrenheit,
        Unit::Kelvin,
        Unit::Reaumur,
        Unit::Rankine,
    ];

    /// Lowercase tag used on the wire and in config files
    pub fn tag(self) -> &'static str {
        match self {
            Unit::Celsius => "celsius",
            Unit::Fahrenheit => "fahrenheit",
            Unit::Kelvin => "kelvin",
            Unit::Reaumur => "reaumur",
            Unit::Rankine => "rankine",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Unit::Celsius => "Celsius",
            Unit::Fahrenheit => "Fahrenheit",
            Unit::Kelvin => "Kelvin",
            Unit::Reaumur => "Réaumur",
            Unit::Rankine => "Rankine",
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            Unit::Celsius => "°C",
            Unit::Fahrenheit => "°F",
            Unit::Kelvin => "K",
            Unit::Reaumur => "°Ré",
            Unit::Rankine => "°R",
        }
    }

    /// Like `from_str`, but returns `None` instead of an error for unknown tags
    pub fn from_tag_lenient(tag: &str) -> Option<Unit> {
        tag.parse().ok()
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

impl FromStr for Unit {
    type Err = ConvertError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "celsius" | "c" | "°c" => Ok(Unit::Celsius),
            "fahrenheit" | "f" | "°f" => Ok(Unit::Fahrenheit),
            "kelvin" | "k" => Ok(Unit::Kelvin),
            "reaumur" | "réaumur" | "re" | "ré" | "°re" | "°ré" => Ok(Unit::Reaumur),
            "rankine" | "r" | "ra" | "°r" | "°ra" => Ok(Unit::Rankine),
            _ => Err(ConvertError::UnknownUnit(s.to_string())),
        }
    }
}

/// A value paired with the scale it is expressed in
#[derive(Debug, Clone, Copy, PartialEq, Deserialize, Serialize)]
pub struct Measurement {
    pub value: f64,
    pub unit: Unit,
}

impl Measurement {
    pub fn new(value: f64, unit: Unit) -> Self {
        Self { value, unit }
    }
}
