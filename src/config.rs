use crate::units::{builtin_presets, Preset, Unit};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;
use std::path::Path;

/// File picked up from the working directory when no path is given
pub const DEFAULT_CONFIG_FILE: &str = "tempconvert.toml";

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Config {
    // Source unit when the caller doesn't name one; any unit tag ("F", "kelvin")
    #[serde(default = "default_source_unit", deserialize_with = "unit_tag")]
    pub default_unit: Unit,

    // Rows shown by a conversion table, in order
    #[serde(default = "default_table_units", deserialize_with = "unit_tags")]
    pub table: Vec<Unit>,

    // Extra named temperatures, listed after the built-in ones
    #[serde(default)]
    pub presets: Vec<PresetEntry>,
}

/// Preset as written in the config file; the unit is a free-form tag
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct PresetEntry {
    pub label: String,
    pub value: f64,
    #[serde(default = "default_preset_unit")]
    pub unit: String,
}

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Toml(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "Failed to read config: {}", e),
            ConfigError::Toml(e) => write!(f, "Failed to parse config: {}", e),
        }
    }
}

impl std::error::Error for ConfigError {}

impl From<std::io::Error> for ConfigError {
    fn from(e: std::io::Error) -> Self {
        ConfigError::Io(e)
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(e: toml::de::Error) -> Self {
        ConfigError::Toml(e)
    }
}

fn unit_tag<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Unit, D::Error> {
    let tag = String::deserialize(deserializer)?;
    tag.parse::<Unit>().map_err(serde::de::Error::custom)
}

fn unit_tags<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Unit>, D::Error> {
    Vec::<String>::deserialize(deserializer)?
        .iter()
        .map(|tag| tag.parse::<Unit>().map_err(serde::de::Error::custom))
        .collect()
}

fn default_source_unit() -> Unit {
    Unit::Celsius
}

fn default_table_units() -> Vec<Unit> {
    Unit::ALL.to_vec()
}

fn default_preset_unit() -> String {
    Unit::Celsius.tag().to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self::empty()
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        log::debug!("loading config from {}", path.display());
        let content = std::fs::read_to_string(path)?;
        Self::load_from_str(&content)
    }

    pub fn load_from_str(content: &str) -> Result<Self, ConfigError> {
        let mut config: Config = toml::from_str(content)?;
        if config.table.is_empty() {
            config.table = default_table_units();
        }
        Ok(config)
    }

    /// Load `path` if given, else the default file if it exists, else defaults
    pub fn discover(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load_from_file(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => {
                Self::load_from_file(DEFAULT_CONFIG_FILE)
            }
            None => Ok(Self::empty()),
        }
    }

    pub fn empty() -> Self {
        Self {
            default_unit: default_source_unit(),
            table: default_table_units(),
            presets: Vec::new(),
        }
    }

    /// Built-in presets followed by configured ones.
    /// Entries with an unknown unit tag are skipped with a warning.
    pub fn all_presets(&self) -> Vec<Preset> {
        let mut presets = builtin_presets();
        for entry in &self.presets {
            match entry.unit.parse::<Unit>() {
                Ok(unit) => presets.push(Preset::new(&entry.label, entry.value, unit)),
                Err(e) => log::warn!("skipping preset '{}': {}", entry.label, e),
            }
        }
        presets
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config() {
        let config = Config::load_from_str("").unwrap();
        assert_eq!(config.default_unit, Unit::Celsius);
        assert_eq!(config.table, Unit::ALL.to_vec());
        assert_eq!(config.all_presets().len(), 5);
    }

    #[test]
    fn test_full_config() {
        let config = Config::load_from_str(
            r#"
default_unit = "fahrenheit"
table = ["fahrenheit", "celsius"]

[[presets]]
label = "Oven"
value = 350
unit = "F"

[[presets]]
label = "Sauna"
value = 80
"#,
        )
        .unwrap();

        assert_eq!(config.default_unit, Unit::Fahrenheit);
        assert_eq!(config.table, vec![Unit::Fahrenheit, Unit::Celsius]);

        let presets = config.all_presets();
        assert_eq!(presets.len(), 7);
        assert_eq!(presets[5], Preset::new("Oven", 350.0, Unit::Fahrenheit));
        assert_eq!(presets[6], Preset::new("Sauna", 80.0, Unit::Celsius));
    }

    #[test]
    fn test_empty_table_uses_all_units() {
        let config = Config::load_from_str("table = []").unwrap();
        assert_eq!(config.table.len(), 5);
    }

    #[test]
    fn test_bad_preset_unit_is_skipped() {
        let config = Config::load_from_str(
            r#"
[[presets]]
label = "Mystery"
value = 1.0
unit = "newton"
"#,
        )
        .unwrap();
        assert_eq!(config.all_presets().len(), 5);
    }

    #[test]
    fn test_unit_symbols_accepted() {
        let config = Config::load_from_str(
            r#"
default_unit = "F"
table = ["°F", "K", "Ré"]
"#,
        )
        .unwrap();
        assert_eq!(config.default_unit, Unit::Fahrenheit);
        assert_eq!(config.table, vec![Unit::Fahrenheit, Unit::Kelvin, Unit::Reaumur]);
    }

    #[test]
    fn test_load_from_file_and_discover() {
        let path = std::env::temp_dir().join(format!(
            "tempconvert-config-test-{}.toml",
            std::process::id()
        ));
        std::fs::write(&path, "default_unit = \"rankine\"\n").unwrap();

        let config = Config::load_from_file(&path).unwrap();
        assert_eq!(config.default_unit, Unit::Rankine);

        let config = Config::discover(Some(path.as_path())).unwrap();
        assert_eq!(config.default_unit, Unit::Rankine);

        std::fs::remove_file(&path).unwrap();
        assert!(matches!(
            Config::load_from_file(&path),
            Err(ConfigError::Io(_))
        ));
    }

    #[test]
    fn test_unknown_default_unit_is_error() {
        let result = Config::load_from_str(r#"default_unit = "delisle""#);
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }
}
