//! Partshelf CLI - normalize electronic component values from the command line.

use clap::{Parser, Subcommand, ValueEnum};
use partshelf::{
    capacitance_units, resistance_units, switch_patterns, DisplayPrecision, NormalizationError,
    NormalizeOptions, NormalizedValue, UnitTable, ValueNormalizer, ValueRange, ValueType,
};
use std::io::{self, BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "partshelf")]
#[command(about = "Component value normalization for electronics inventories", long_about = None)]
#[command(version)]
struct Cli {
    /// Log resolution details to stderr (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Normalize a single value
    Normalize {
        /// Raw value, e.g. 4.7uF, 10k, spdt
        #[arg(value_name = "VALUE")]
        value: String,

        /// Value type of the component
        #[arg(short = 't', long = "type", value_enum)]
        value_type: TypeArg,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        #[command(flatten)]
        precision: PrecisionArgs,
    },

    /// Normalize `type,value` lines from a file or stdin
    Batch {
        /// Input file (stdin when omitted or `-`)
        #[arg(value_name = "FILE")]
        file: Option<PathBuf>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,

        /// Stop at the first invalid line
        #[arg(long)]
        fail_fast: bool,

        #[command(flatten)]
        precision: PrecisionArgs,
    },

    /// Show which values fall inside a range
    Range {
        /// Value type of the range and values
        #[arg(short = 't', long = "type", value_enum)]
        value_type: TypeArg,

        /// Lower bound (inclusive), e.g. 1k
        #[arg(long)]
        min: Option<String>,

        /// Upper bound (inclusive), e.g. 10k
        #[arg(long)]
        max: Option<String>,

        /// Values to test
        #[arg(value_name = "VALUE", required = true)]
        values: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value = "human")]
        format: OutputFormat,
    },

    /// List unit tables and switch patterns
    Units {
        /// Show aliases and multipliers
        #[arg(short, long)]
        details: bool,
    },
}

#[derive(clap::Args)]
struct PrecisionArgs {
    /// Significant digits in display values
    #[arg(long, value_name = "N", default_value_t = 12, conflicts_with = "shortest")]
    precision: u32,

    /// Print display values without rounding
    #[arg(long)]
    shortest: bool,
}

impl PrecisionArgs {
    fn options(&self) -> NormalizeOptions {
        let display_precision = if self.shortest {
            DisplayPrecision::Shortest
        } else {
            DisplayPrecision::Significant(self.precision)
        };
        NormalizeOptions { display_precision }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeArg {
    Capacitance,
    Resistance,
    Switch,
    Voltage,
    Current,
}

impl From<TypeArg> for ValueType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Capacitance => ValueType::Capacitance,
            TypeArg::Resistance => ValueType::Resistance,
            TypeArg::Switch => ValueType::Switch,
            TypeArg::Voltage => ValueType::Voltage,
            TypeArg::Current => ValueType::Current,
        }
    }
}

#[derive(Clone, ValueEnum)]
enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output for scripts
    Json,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let exit_code = match cli.command {
        Commands::Normalize {
            value,
            value_type,
            format,
            precision,
        } => handle_normalize(&value, value_type.into(), format, precision.options()),
        Commands::Batch {
            file,
            format,
            fail_fast,
            precision,
        } => handle_batch(file.as_deref(), format, fail_fast, precision.options()),
        Commands::Range {
            value_type,
            min,
            max,
            values,
            format,
        } => handle_range(value_type.into(), min.as_deref(), max.as_deref(), &values, format),
        Commands::Units { details } => {
            handle_units(details);
            0
        }
    };

    process::exit(exit_code);
}

fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();
}

/// Message shown to users when a value is rejected
fn rejection_message(value_type: ValueType, error: &NormalizationError) -> String {
    format!("Invalid {} value: {}", value_type, error)
}

fn value_json(value: &NormalizedValue) -> serde_json::Value {
    serde_json::to_value(value).unwrap_or(serde_json::Value::Null)
}

fn print_json(output: &serde_json::Value) {
    match serde_json::to_string_pretty(output) {
        Ok(text) => println!("{}", text),
        Err(e) => eprintln!("Error: {}", e),
    }
}

fn handle_normalize(
    raw: &str,
    value_type: ValueType,
    format: OutputFormat,
    options: NormalizeOptions,
) -> i32 {
    let normalizer = ValueNormalizer::new(options);

    match normalizer.normalize(raw, value_type) {
        Ok(value) => {
            match format {
                OutputFormat::Human => {
                    println!("{}", value.display_value());
                    println!("  Base value: {} {}", value.base_value(), value.unit());
                    println!("  Type:       {}", value.value_type());
                }
                OutputFormat::Json => print_json(&value_json(&value)),
            }
            0
        }
        Err(e) => {
            eprintln!("Error: {}", rejection_message(value_type, &e));
            1
        }
    }
}

/// One parsed line of batch input
struct BatchLine {
    line_number: usize,
    raw: String,
    result: Result<NormalizedValue, String>,
}

fn parse_batch_line(normalizer: &ValueNormalizer, line_number: usize, line: &str) -> BatchLine {
    let (tag, raw) = match line.split_once(',') {
        Some((tag, raw)) => (tag.trim(), raw.trim()),
        None => {
            return BatchLine {
                line_number,
                raw: line.trim().to_string(),
                result: Err("expected `type,value`".to_string()),
            }
        }
    };

    let result = tag
        .parse::<ValueType>()
        .map_err(|e| e.to_string())
        .and_then(|value_type| {
            normalizer
                .normalize(raw, value_type)
                .map_err(|e| rejection_message(value_type, &e))
        });

    BatchLine {
        line_number,
        raw: raw.to_string(),
        result,
    }
}

fn open_input(file: Option<&Path>) -> io::Result<Box<dyn BufRead>> {
    match file {
        None => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(path) if path == Path::new("-") => Ok(Box::new(BufReader::new(io::stdin()))),
        Some(path) => Ok(Box::new(BufReader::new(std::fs::File::open(path)?))),
    }
}

fn handle_batch(
    file: Option<&Path>,
    format: OutputFormat,
    fail_fast: bool,
    options: NormalizeOptions,
) -> i32 {
    let reader = match open_input(file) {
        Ok(reader) => reader,
        Err(e) => {
            eprintln!("Error: {}", e);
            return 1;
        }
    };

    let normalizer = ValueNormalizer::new(options);
    let mut lines = Vec::new();
    for (index, line) in reader.lines().enumerate() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        };
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let parsed = parse_batch_line(&normalizer, index + 1, trimmed);
        let failed = parsed.result.is_err();
        lines.push(parsed);
        if failed && fail_fast {
            break;
        }
    }

    let failed = lines.iter().filter(|l| l.result.is_err()).count();
    tracing::debug!("Normalized {} lines ({} failed)", lines.len(), failed);
    match format {
        OutputFormat::Human => output_batch_human(&lines),
        OutputFormat::Json => output_batch_json(&lines, failed),
    }

    if failed > 0 {
        1
    } else {
        0
    }
}

fn output_batch_human(lines: &[BatchLine]) {
    for line in lines {
        match &line.result {
            Ok(value) => println!(
                "{:>4}: {} -> {} ({} {})",
                line.line_number,
                line.raw,
                value.display_value(),
                value.base_value(),
                value.unit()
            ),
            Err(e) => println!("{:>4}: {} -> error: {}", line.line_number, line.raw, e),
        }
    }
}

fn output_batch_json(lines: &[BatchLine], failed: usize) {
    let output = serde_json::json!({
        "results": lines.iter().map(|l| {
            match &l.result {
                Ok(value) => serde_json::json!({
                    "line": l.line_number,
                    "input": l.raw,
                    "value": value_json(value),
                }),
                Err(e) => serde_json::json!({
                    "line": l.line_number,
                    "input": l.raw,
                    "error": e,
                }),
            }
        }).collect::<Vec<_>>(),
        "summary": {
            "total": lines.len(),
            "ok": lines.len() - failed,
            "failed": failed,
        }
    });
    print_json(&output);
}

fn handle_range(
    value_type: ValueType,
    min: Option<&str>,
    max: Option<&str>,
    values: &[String],
    format: OutputFormat,
) -> i32 {
    let normalizer = ValueNormalizer::default();
    let range = match ValueRange::parse(&normalizer, value_type, min, max) {
        Ok(range) => range,
        Err(e) => {
            eprintln!("Error: {}", rejection_message(value_type, &e));
            return 1;
        }
    };

    let mut results = Vec::new();
    for raw in values {
        match normalizer.normalize(raw, value_type) {
            Ok(value) => {
                let in_range = range.contains(&value);
                results.push((raw.as_str(), value, in_range));
            }
            Err(e) => {
                eprintln!("Error: {}", rejection_message(value_type, &e));
                return 1;
            }
        }
    }

    match format {
        OutputFormat::Human => {
            let bound = |b: Option<f64>| b.map_or("-".to_string(), |v| v.to_string());
            println!(
                "Range: {} .. {} ({})",
                bound(range.min),
                bound(range.max),
                value_type.base_unit()
            );
            for (raw, value, in_range) in &results {
                let marker = if *in_range { "in " } else { "out" };
                println!("  [{}] {} ({})", marker, value.display_value(), raw);
            }
        }
        OutputFormat::Json => {
            let output = serde_json::json!({
                "range": range,
                "values": results.iter().map(|(raw, value, in_range)| {
                    serde_json::json!({
                        "input": raw,
                        "value": value_json(value),
                        "in_range": in_range,
                    })
                }).collect::<Vec<_>>(),
            });
            print_json(&output);
        }
    }
    0
}

fn print_unit_table(table: &UnitTable, verbose: bool) {
    println!("  {}", table.quantity);
    for unit in table.definitions {
        if verbose {
            let aliases: Vec<String> = unit
                .symbols
                .iter()
                .map(|s| if s.is_empty() { "(none)".to_string() } else { s.to_string() })
                .collect();
            println!(
                "    {:<6} {:<4} x{:<8e} aliases: {}",
                unit.name,
                unit.preferred_symbol,
                unit.multiplier,
                aliases.join(", ")
            );
        } else {
            println!("    {:<6} {}", unit.name, unit.preferred_symbol);
        }
    }
    println!();
}

fn handle_units(verbose: bool) {
    println!("Unit tables (resolution order):\n");
    print_unit_table(capacitance_units(), verbose);
    print_unit_table(resistance_units(), verbose);
    if verbose {
        println!("  Resistance: lowercase m is milli; M or meg is mega.\n");
    }

    println!("Switch patterns:\n");
    for pattern in switch_patterns() {
        println!(
            "  {:<6} {}P{}T",
            pattern.name, pattern.poles, pattern.throws
        );
    }
    if verbose {
        println!("\n  Explicit form <poles>p<throws>t is also accepted (throws 1-9).");
    }

    println!("\nValue types:\n");
    for value_type in ValueType::ALL {
        let status = if value_type.is_supported() {
            "supported"
        } else {
            "no parser"
        };
        println!("  {:<12} {:<14} {}", value_type, value_type.base_unit(), status);
    }
}
