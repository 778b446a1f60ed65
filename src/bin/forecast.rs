//! Analog Kp forecast CLI.
//!
//! Resolves the current solar-wind conditions, matches them against the
//! historical archive, and prints the empirical Kp distribution of the
//! 100 closest analogs.
//!
//! # Usage
//!
//! ```bash
//! # Manual conditions
//! aafs-forecast --archive data/l1_archive.csv --speed 450 --bz -5
//!
//! # Trailing hour of live SWPC data for both conditions
//! aafs-forecast --archive data/l1_archive.csv --speed latest --bz latest
//!
//! # Machine-readable report
//! aafs-forecast --archive data/l1_archive.csv --speed 450 --bz -5 --json
//! ```
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Log level (default: warn)

use std::env;
use std::path::PathBuf;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use aafs_rust::core::domain::ConditionInput;
use aafs_rust::services::{run_forecast, ForecastConfig, ForecastReport};

#[derive(Parser, Debug)]
#[command(
    name = "aafs-forecast",
    about = "Empirical 3-hour Kp forecast from historical solar-wind analogs"
)]
struct Args {
    /// Path to the historical archive CSV (columns Bz, Vp, Kp3)
    #[arg(long)]
    archive: PathBuf,

    /// Solar-wind speed in km/s, or 'latest' for the trailing hour of
    /// SWPC data
    #[arg(long, allow_hyphen_values = true)]
    speed: ConditionInput,

    /// IMF Bz in nT, or 'latest' (negative values favor storming)
    #[arg(long, allow_hyphen_values = true)]
    bz: ConditionInput,

    /// Emit the full report as JSON instead of the text summary
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    FmtSubscriber::builder()
        .with_max_level(
            env::var("RUST_LOG")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(Level::WARN),
        )
        .with_target(true)
        .init();

    let args = Args::parse();

    let config = ForecastConfig {
        archive_path: args.archive,
        solar_wind: args.speed,
        bz: args.bz,
    };

    let outcome = run_forecast(config)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&outcome.report)?);
    } else {
        print_report(&outcome.report);
    }

    Ok(())
}

fn print_report(report: &ForecastReport) {
    println!(
        "Query: speed = {:.1} km/s, Bz = {:.1} nT ({})",
        report.query.speed_km_s, report.query.bz_nt, report.provenance_label
    );
    println!(
        "Corpus: {} observations searched ({} artifact rows removed)",
        report.corpus_rows, report.artifact_rows_removed
    );
    println!(
        "Analogs: {} (Kp mean {:.2}, median {:.2}, max {:.2})",
        report.summary.count, report.summary.mean, report.summary.median, report.summary.max
    );
    println!();
    println!("Kp probability over the next 3 hours:");

    let total = report.distribution.total().max(1);
    for bucket in report.distribution.grouped() {
        let pct = bucket.count as f64 * 100.0 / total as f64;
        let bar = "#".repeat((pct / 2.0).round() as usize);
        println!("  {:<14} {:>5.1}%  {}", bucket.label, pct, bar);
    }
}
