use anyhow::{Context, Result};
use polars::prelude::*;
use std::path::Path;

use crate::core::domain::HistoricalDataset;

/// Columns the archive must provide: solar-wind speed in km/s, IMF Bz in
/// nT, and the Kp index of the following 3-hour interval.
const REQUIRED_COLUMNS: [&str; 3] = ["Vp", "Bz", "Kp3"];

/// Parse the historical archive CSV into a Polars DataFrame.
pub fn parse_archive_csv(csv_path: &Path) -> Result<DataFrame> {
    let df = CsvReadOptions::default()
        .with_has_header(true)
        .try_into_reader_with_file_path(Some(csv_path.into()))?
        .finish()
        .context("Failed to parse archive CSV into DataFrame")?;

    let column_names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|s| s.to_string())
        .collect();

    for col_name in REQUIRED_COLUMNS {
        if !column_names.contains(&col_name.to_string()) {
            anyhow::bail!("Archive is missing required column '{}'", col_name);
        }
    }

    // Cast to Float64; columns without a decimal point are inferred as i64
    let mut lazy_df = df.lazy();
    for col_name in REQUIRED_COLUMNS {
        lazy_df = lazy_df.with_column(col(col_name).cast(DataType::Float64));
    }

    let df = lazy_df
        .collect()
        .context("Failed to cast archive columns to Float64")?;

    Ok(df)
}

/// Parse the archive CSV and convert it to the in-memory dataset.
pub fn parse_archive_csv_to_dataset(csv_path: &Path) -> Result<HistoricalDataset> {
    let df = parse_archive_csv(csv_path)?;
    dataframe_to_dataset(&df)
}

/// Convert an archive DataFrame into parallel observation columns.
///
/// Every required cell must hold a value; the archive provider guarantees
/// completeness, so a null is a hard error rather than a row to skip.
pub fn dataframe_to_dataset(df: &DataFrame) -> Result<HistoricalDataset> {
    let height = df.height();

    let speeds = df.column("Vp")?.f64()?;
    let bz = df.column("Bz")?.f64()?;
    let kp3 = df.column("Kp3")?.f64()?;

    let mut speed_col = Vec::with_capacity(height);
    let mut bz_col = Vec::with_capacity(height);
    let mut kp3_col = Vec::with_capacity(height);

    for i in 0..height {
        speed_col.push(
            speeds
                .get(i)
                .with_context(|| format!("Missing Vp at row {}", i))?,
        );
        bz_col.push(
            bz.get(i)
                .with_context(|| format!("Missing Bz at row {}", i))?,
        );
        kp3_col.push(
            kp3.get(i)
                .with_context(|| format!("Missing Kp3 at row {}", i))?,
        );
    }

    Ok(HistoricalDataset::from_columns(speed_col, bz_col, kp3_col)?)
}
