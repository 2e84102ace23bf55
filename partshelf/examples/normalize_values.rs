//! Normalize values given on the command line and print the results.

use partshelf::prelude::*;

fn main() -> Result<(), NormalizationError> {
    let mut args = std::env::args().skip(1);
    let value_type: ValueType = args
        .next()
        .unwrap_or_else(|| "resistance".to_string())
        .parse()?;
    let values: Vec<String> = args.collect();

    if values.is_empty() {
        eprintln!("Usage: cargo run --example normalize_values <type> <value>...");
        eprintln!("Example: cargo run --example normalize_values capacitance 4700pF 0.1uF");
        std::process::exit(1);
    }

    let normalizer = ValueNormalizer::default();
    for raw in &values {
        match normalizer.normalize(raw, value_type) {
            Ok(value) => println!(
                "{:>12} -> {:<10} ({} {})",
                raw,
                value.display_value(),
                value.base_value(),
                value.unit()
            ),
            Err(e) => println!("{:>12} -> error: {}", raw, e),
        }
    }

    Ok(())
}
