// Temperature conversion between a closed set of scales.
// Every conversion goes through Celsius, so each unit only needs a formula
// to and from Celsius.

pub mod converter;
pub mod error;
pub mod formatter;
pub mod input;
pub mod presets;
pub mod table;
pub mod types;

#[cfg(test)]
mod tests;

pub use converter::{convert, convert_tags};
pub use error::ConvertError;
pub use formatter::{format_result, precision_for};
pub use input::{
    looks_like_measurement, parse_conversion_args, parse_input, parse_measurement,
    read_measurement,
};
pub use presets::{builtin_presets, find_preset, Preset};
pub use table::{convert_all, swap, Conversion};
pub use types::{Measurement, Unit};
