use anyhow::{Context, Result};
use std::path::Path;

use crate::core::domain::HistoricalDataset;
use crate::parsing::archive_parser;

/// Result of loading the historical archive
#[derive(Debug)]
pub struct ArchiveLoadResult {
    pub dataset: HistoricalDataset,
    pub num_rows: usize,
}

impl ArchiveLoadResult {
    pub fn new(dataset: HistoricalDataset) -> Self {
        let num_rows = dataset.len();
        Self { dataset, num_rows }
    }
}

/// Unified interface for loading the historical archive
pub struct ArchiveLoader;

impl ArchiveLoader {
    /// Load the (speed, Bz, Kp3) archive from a CSV file
    pub fn load_from_csv(csv_path: &Path) -> Result<ArchiveLoadResult> {
        let dataset = archive_parser::parse_archive_csv_to_dataset(csv_path)
            .with_context(|| format!("Failed to load archive from {}", csv_path.display()))?;

        Ok(ArchiveLoadResult::new(dataset))
    }
}
