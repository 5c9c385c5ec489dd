use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{error, info};

mod config;
mod domain;
mod error;
mod logging;
mod pipeline;
mod report;
mod storage;

use crate::config::Config;
use crate::report::ValidationReport;
use crate::storage::SalesStore;

#[derive(Parser)]
#[command(name = "sales_etl")]
#[command(about = "Regional sales order ETL pipeline")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to a TOML config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full pipeline: load, merge, transform, dedupe, filter,
    /// persist, then print the validation report
    Run {
        /// Region A orders CSV
        #[arg(long)]
        region_a: Option<PathBuf>,
        /// Region B orders CSV
        #[arg(long)]
        region_b: Option<PathBuf>,
        /// SQLite database file to write
        #[arg(long)]
        db: Option<PathBuf>,
        /// Coerce non-numeric values in numeric columns to 0 instead of
        /// aborting
        #[arg(long)]
        coerce_invalid: bool,
    },
    /// Print the validation report over an existing database without
    /// re-running the pipeline
    Validate {
        /// SQLite database file to read
        #[arg(long)]
        db: Option<PathBuf>,
    },
}

fn print_report(report: &ValidationReport) {
    println!("\n📊 Validation Report:");
    println!("   Total records: {}", report.total_records);
    println!("   Total sales by region:");
    for (region, total) in &report.region_totals {
        println!("      Region {}: {:.2}", region, total);
    }
    println!("   Average sale per transaction: {:.2}", report.average_sale);
    println!(
        "   Duplicate rows discarded during run: {}",
        report.duplicates_discarded
    );

    if report.duplicate_order_ids.is_empty() {
        println!("   Duplicate OrderIds in store: none");
    } else {
        println!("⚠️  Duplicate OrderIds in store (dedup defect!):");
        for (order_id, count) in &report.duplicate_order_ids {
            println!("      {} appears {} times", order_id, count);
        }
    }
}

fn run_pipeline(config: &Config) -> error::Result<ValidationReport> {
    let output = pipeline::run(config)?;
    let mut store = SalesStore::open(&config.db_path)?;
    store.replace_sales_data(&output.table)?;
    report::validate(&store, output.duplicates_discarded)
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_logging();

    let cli = Cli::parse();
    let mut config = Config::load_or_default(cli.config.as_deref())?;

    match cli.command {
        Commands::Run {
            region_a,
            region_b,
            db,
            coerce_invalid,
        } => {
            if let Some(path) = region_a {
                config.region_a_path = path;
            }
            if let Some(path) = region_b {
                config.region_b_path = path;
            }
            if let Some(path) = db {
                config.db_path = path;
            }
            if coerce_invalid {
                config.coerce_invalid_numeric = true;
            }

            info!(
                region_a = %config.region_a_path.display(),
                region_b = %config.region_b_path.display(),
                db = %config.db_path.display(),
                "starting pipeline run"
            );

            match run_pipeline(&config) {
                Ok(report) => {
                    info!(records = report.total_records, "pipeline run complete");
                    print_report(&report);
                }
                Err(e) => {
                    error!("pipeline run failed: {e}");
                    println!("❌ Pipeline run failed: {e}");
                    std::process::exit(1);
                }
            }
        }
        Commands::Validate { db } => {
            if let Some(path) = db {
                config.db_path = path;
            }

            let result = SalesStore::open_existing(&config.db_path)
                .and_then(|store| report::validate(&store, 0));
            match result {
                Ok(report) => print_report(&report),
                Err(e) => {
                    error!("validation failed: {e}");
                    println!("❌ Validation failed: {e}");
                    std::process::exit(1);
                }
            }
        }
    }

    Ok(())
}
