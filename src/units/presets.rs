use crate::units::types::{Measurement, Unit};
use serde::{Deserialize, Serialize};

/// A named reference temperature
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct Preset {
    pub label: String,
    pub value: f64,
    pub unit: Unit,
}

impl Preset {
    pub fn new(label: &str, value: f64, unit: Unit) -> Self {
        Self {
            label: label.to_string(),
            value,
            unit,
        }
    }

    pub fn measurement(&self) -> Measurement {
        Measurement::new(self.value, self.unit)
    }
}

pub fn builtin_presets() -> Vec<Preset> {
    vec![
        Preset::new("Absolute Zero", -273.15, Unit::Celsius),
        Preset::new("Water Freezing", 0.0, Unit::Celsius),
        Preset::new("Room Temperature", 20.0, Unit::Celsius),
        Preset::new("Body Temperature", 37.0, Unit::Celsius),
        Preset::new("Water Boiling", 100.0, Unit::Celsius),
    ]
}

/// Look up a preset by label, ignoring case
pub fn find_preset<'a>(presets: &'a [Preset], label: &str) -> Option<&'a Preset> {
    let label = label.trim();
    presets.iter().find(|p| p.label.eq_ignore_ascii_case(label))
}
