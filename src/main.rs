use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tempconvert::config::Config;
use tempconvert::units::{self, Conversion, Measurement, Unit};

#[derive(Parser)]
#[command(name = "tempconvert")]
#[command(about = "Temperature conversion between Celsius, Fahrenheit, Kelvin, Réaumur and Rankine", long_about = None)]
struct Cli {
    /// Config file (default: ./tempconvert.toml if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Print results as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a value from one unit to another
    Convert {
        /// Value (e.g., "100") or measurement (e.g., "100 F")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit, or the target unit when VALUE carries its own unit
        unit: String,

        /// Target unit
        to: Option<String>,
    },

    /// Convert a value into every unit
    Table {
        /// Value (e.g., "-40") or measurement (e.g., "-40 F")
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit (default: from config, else celsius)
        #[arg(short, long)]
        from: Option<String>,
    },

    /// Take a converted value as the new source
    Swap {
        /// Value in the source unit
        #[arg(allow_hyphen_values = true)]
        value: String,

        /// Source unit
        from: String,

        /// Unit to swap to
        to: String,
    },

    /// List preset temperatures, or convert one into every unit
    Presets {
        /// Preset label (e.g., "Body Temperature")
        name: Option<String>,
    },

    /// List supported units
    Units,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::discover(cli.config.as_deref())?;
    let json = cli.json;

    match cli.command {
        Commands::Convert { value, unit, to } => convert_value(&value, &unit, to.as_deref(), json),
        Commands::Table { value, from } => print_table(&config, &value, from.as_deref(), json),
        Commands::Swap { value, from, to } => swap_units(&config, &value, &from, &to, json),
        Commands::Presets { name } => list_presets(&config, name.as_deref(), json),
        Commands::Units => list_units(json),
    }
}

fn convert_value(
    value: &str,
    unit: &str,
    to: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let (source, target) = units::parse_conversion_args(value, unit, to)?;

    let converted = units::convert(source.value, source.unit, target);
    log::debug!(
        "{} {} -> {} {}",
        source.value,
        source.unit,
        converted,
        target
    );

    if json {
        let result = Measurement::new(converted, target);
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        println!("{} {}", units::format_result(converted), target.symbol());
    }

    Ok(())
}

fn print_rows(rows: &[Conversion], json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(rows)?);
        return Ok(());
    }

    for row in rows {
        let marker = if row.active { "*" } else { " " };
        println!(
            "{} {:<11} {:>12} {}",
            marker,
            row.unit.name(),
            row.formatted,
            row.unit.symbol()
        );
    }
    Ok(())
}

fn print_table(
    config: &Config,
    value: &str,
    from: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let source = match from {
        Some(from) => Measurement::new(units::parse_input(value), from.parse::<Unit>()?),
        None => units::read_measurement(value, config.default_unit)?,
    };

    let rows = units::convert_all(source.value, source.unit, &config.table);
    print_rows(&rows, json)
}

fn swap_units(
    config: &Config,
    value: &str,
    from: &str,
    to: &str,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let from: Unit = from.parse()?;
    let to: Unit = to.parse()?;

    let rows = units::convert_all(units::parse_input(value), from, &config.table);
    let swapped = units::swap(&rows, to)?;
    let rows = units::convert_all(swapped.value, swapped.unit, &config.table);

    if json {
        let result = serde_json::json!({
            "source": swapped,
            "table": rows,
        });
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    println!(
        "Source: {} {}",
        units::format_result(swapped.value),
        swapped.unit.symbol()
    );
    print_rows(&rows, false)
}

fn list_presets(
    config: &Config,
    name: Option<&str>,
    json: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let presets = config.all_presets();

    if let Some(name) = name {
        let preset = units::find_preset(&presets, name)
            .ok_or_else(|| format!("Preset '{}' not found", name))?;
        let rows = units::convert_all(preset.value, preset.unit, &config.table);
        return print_rows(&rows, json);
    }

    if json {
        println!("{}", serde_json::to_string_pretty(&presets)?);
        return Ok(());
    }

    println!("Presets ({}):", presets.len());
    for preset in &presets {
        println!(
            "  - {}: {} {}",
            preset.label,
            units::format_result(preset.value),
            preset.unit.symbol()
        );
    }
    Ok(())
}

fn list_units(json: bool) -> Result<(), Box<dyn std::error::Error>> {
    if json {
        println!("{}", serde_json::to_string_pretty(&Unit::ALL)?);
        return Ok(());
    }

    for unit in Unit::ALL {
        println!("  - {} ({}, {})", unit.tag(), unit.name(), unit.symbol());
    }
    Ok(())
}
