#[cfg(test)]
mod tests {
    use super::super::converter::convert;
    use super::super::formatter::format_result;
    use super::super::input::{parse_input, parse_measurement};
    use super::super::presets::{builtin_presets, find_preset};
    use super::super::table::{convert_all, swap};
    use super::super::types::{Measurement, Unit};

    #[test]
    fn test_measurement_string_to_table() {
        let m = parse_measurement("-40 F").unwrap();
        let rows = convert_all(m.value, m.unit, &Unit::ALL);

        let celsius = rows.iter().find(|r| r.unit == Unit::Celsius).unwrap();
        assert_eq!(celsius.formatted, "-40.000");

        let fahrenheit = rows.iter().find(|r| r.unit == Unit::Fahrenheit).unwrap();
        assert!(fahrenheit.active);
    }

    #[test]
    fn test_typed_input_to_formatted_result() {
        // Text field contents pass through the lenient parser first
        let value = parse_input("98.6 is normal");
        let celsius = convert(value, Unit::Fahrenheit, Unit::Celsius);
        assert_eq!(format_result(celsius), "37.000");

        let value = parse_input("not a number");
        assert_eq!(format_result(convert(value, Unit::Celsius, Unit::Kelvin)), "273.15");
    }

    #[test]
    fn test_preset_then_swap_back() {
        let presets = builtin_presets();
        let boiling = find_preset(&presets, "Water Boiling").unwrap().measurement();

        let rows = convert_all(boiling.value, boiling.unit, &Unit::ALL);
        let in_rankine = swap(&rows, Unit::Rankine).unwrap();
        assert_eq!(in_rankine, Measurement::new(671.67, Unit::Rankine));

        let rows = convert_all(in_rankine.value, in_rankine.unit, &Unit::ALL);
        let back = swap(&rows, Unit::Celsius).unwrap();
        assert_eq!(back, Measurement::new(100.0, Unit::Celsius));
    }

    #[test]
    fn test_absolute_zero_across_scales() {
        let rows = convert_all(-273.15, Unit::Celsius, &Unit::ALL);
        let formatted: Vec<&str> = rows.iter().map(|r| r.formatted.as_str()).collect();
        assert_eq!(
            formatted,
            vec!["-273.15", "-459.67", "0.000", "-218.52", "0.000"]
        );
    }
}
