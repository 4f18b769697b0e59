// Public API checks for the conversion core and the config file format.

use tempconvert::config::Config;
use tempconvert::units::{convert, convert_all, convert_tags, format_result, swap, Unit};

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn known_conversions() {
    assert!(close(convert(0.0, Unit::Celsius, Unit::Fahrenheit), 32.0));
    assert!(close(convert(100.0, Unit::Celsius, Unit::Fahrenheit), 212.0));
    assert!(close(convert(0.0, Unit::Celsius, Unit::Kelvin), 273.15));
    assert!(close(convert(-273.15, Unit::Celsius, Unit::Kelvin), 0.0));
    assert!(close(convert(32.0, Unit::Fahrenheit, Unit::Rankine), 491.67));
    assert_eq!(convert(f64::NAN, Unit::Celsius, Unit::Fahrenheit), 0.0);
}

#[test]
fn every_pair_round_trips() {
    for a in Unit::ALL {
        for b in Unit::ALL {
            for v in [-273.15, -17.5, 0.0, 36.6, 1000.0] {
                assert!(close(convert(convert(v, a, b), b, a), v));
            }
        }
    }
}

#[test]
fn display_precision() {
    assert_eq!(format_result(1234.567), "1234.6");
    assert_eq!(format_result(123.456), "123.46");
    assert_eq!(format_result(12.3456), "12.346");
}

#[test]
fn string_tags_keep_identity_fallback() {
    assert!("newton".parse::<Unit>().is_err());
    assert!(close(convert_tags(12.0, "newton", "celsius"), 12.0));
    assert!(close(convert_tags(0.0, "celsius", "kelvin"), 273.15));
}

#[test]
fn configured_table_order_drives_rows() {
    let config = Config::load_from_str(
        r#"
default_unit = "kelvin"
table = ["kelvin", "rankine"]
"#,
    )
    .unwrap();

    let rows = convert_all(300.0, config.default_unit, &config.table);
    assert_eq!(rows.len(), 2);
    assert!(rows[0].active);
    assert_eq!(rows[1].formatted, "540.00");

    let swapped = swap(&rows, Unit::Rankine).unwrap();
    assert_eq!(swapped.unit, Unit::Rankine);
    assert_eq!(swapped.value, 540.0);
}
