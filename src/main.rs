//! CLI entry point for csvsift.
//!
//! Loads a CSV file, optionally filters rows with `--where`, optionally
//! aggregates a numeric column with `--aggregate`, and prints the result to
//! stdout. Logs go to stderr so the output stays pipeable.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use tracing::info;
use tracing_subscriber::{
    EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt,
};

use csvsift::aggregate::{AggregateSpec, aggregate};
use csvsift::condition::Condition;
use csvsift::filter::apply_filter;
use csvsift::loader::{Schema, load_csv};
use csvsift::output;

#[derive(Parser)]
#[command(name = "csvsift")]
#[command(about = "Filter and aggregate CSV data from the command line", long_about = None)]
struct Cli {
    /// Path to the CSV file
    #[arg(long)]
    file: PathBuf,

    /// Filter condition, e.g. "price>500" or "brand=apple"
    #[arg(long = "where", value_name = "CONDITION")]
    filter: Option<String>,

    /// Aggregation to apply, e.g. "rating=avg" or "price=max"
    #[arg(long, value_name = "COLUMN=FUNC")]
    aggregate: Option<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = Format::Grid)]
    format: Format,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    Grid,
    Json,
}

fn main() -> Result<()> {
    let stderr_layer = fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr)
        .with_filter(EnvFilter::from_env("RUST_LOG").add_directive("info".parse()?));

    tracing_subscriber::registry().with(stderr_layer).init();

    let cli = Cli::parse();

    let schema = Schema::default();
    let mut table = load_csv(&cli.file, &schema)?;

    if let Some(raw) = &cli.filter {
        let condition = Condition::parse(raw)?;
        table = apply_filter(&table, &condition)?;
        info!(rows = table.len(), condition = %raw, "Rows matched");
    }

    match &cli.aggregate {
        Some(raw) => {
            let spec = AggregateSpec::parse(raw)?;
            let result = aggregate(&table, &spec.column, spec.func)?;
            match cli.format {
                Format::Grid => print!("{}", output::aggregate_to_grid(spec.func, result)),
                Format::Json => println!("{}", output::aggregate_to_json(spec.func, result)?),
            }
        }
        None => match cli.format {
            Format::Grid => print!("{}", output::table_to_grid(&table)),
            Format::Json => println!("{}", output::table_to_json(&table)?),
        },
    }

    Ok(())
}
