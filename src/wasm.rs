// WebAssembly bindings for the converter page
use crate::units;
use crate::units::{Conversion, Unit};
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct TempConvertWasm {}

impl Default for TempConvertWasm {
    fn default() -> Self {
        Self::new()
    }
}

#[wasm_bindgen]
impl TempConvertWasm {
    #[wasm_bindgen(constructor)]
    pub fn new() -> Self {
        Self {}
    }

    /// Convert between unit tags; unknown tags are treated as celsius
    #[wasm_bindgen]
    pub fn convert(&self, value: f64, from_unit: &str, to_unit: &str) -> f64 {
        units::convert_tags(value, from_unit, to_unit)
    }

    #[wasm_bindgen(js_name = formatResult)]
    pub fn format_result(&self, value: f64) -> String {
        units::format_result(value)
    }

    /// Parse raw text field contents the way the page expects
    #[wasm_bindgen(js_name = parseInput)]
    pub fn parse_input(&self, text: &str) -> f64 {
        units::parse_input(text)
    }

    /// Convert a value into every unit
    /// Returns JSON string array of {unit, value, formatted, active}
    #[wasm_bindgen(js_name = convertAll)]
    pub fn convert_all(&self, value: f64, from_unit: &str) -> Result<String, JsValue> {
        let from: Unit = from_unit
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;

        let rows = units::convert_all(value, from, &Unit::ALL);

        serde_json::to_string(&rows)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize table: {}", e)))
    }

    /// Swap the source with one of the rows from `convertAll`
    /// Returns JSON string of the new {value, unit}
    #[wasm_bindgen]
    pub fn swap(&self, rows_json: &str, target_unit: &str) -> Result<String, JsValue> {
        let rows: Vec<Conversion> = serde_json::from_str(rows_json)
            .map_err(|e| JsValue::from_str(&format!("Failed to parse table JSON: {}", e)))?;
        let target: Unit = target_unit
            .parse()
            .map_err(|e| JsValue::from_str(&format!("{}", e)))?;

        let measurement =
            units::swap(&rows, target).map_err(|e| JsValue::from_str(&format!("{}", e)))?;

        serde_json::to_string(&measurement)
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize measurement: {}", e)))
    }

    /// Returns JSON string array of built-in presets
    #[wasm_bindgen]
    pub fn presets(&self) -> Result<String, JsValue> {
        serde_json::to_string(&units::builtin_presets())
            .map_err(|e| JsValue::from_str(&format!("Failed to serialize presets: {}", e)))
    }

    /// Supported unit tags, in table order
    #[wasm_bindgen]
    pub fn units(&self) -> js_sys::Array {
        Unit::ALL
            .iter()
            .map(|unit| JsValue::from_str(unit.tag()))
            .collect()
    }
}
