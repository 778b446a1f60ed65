use tracing::info;

use crate::core::domain::{HistoricalDataset, KP_ARTIFACT_FLOOR, SPEED_ARTIFACT_CEILING_KM_S};

/// Outcome of a filter pass over the archive
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FilterReport {
    pub kept: usize,
    pub removed: usize,
}

/// True when a row matches the artifact signature: storm-level Kp recorded
/// while the solar wind was below the slow-stream ceiling.
///
/// Physically, sustained Kp >= 4 does not happen at such low speeds; these
/// rows come from a known instrument problem in the archive, not from real
/// geomagnetic activity.
pub fn is_slow_wind_storm_artifact(speed_km_s: f64, kp3: f64) -> bool {
    kp3 >= KP_ARTIFACT_FLOOR && speed_km_s < SPEED_ARTIFACT_CEILING_KM_S
}

/// Remove artifact rows from the archive.
///
/// Rebuilds the dataset row-wise, so the three observation columns stay in
/// lockstep. Idempotent: a second pass removes nothing.
pub fn remove_slow_wind_storms(dataset: &HistoricalDataset) -> (HistoricalDataset, FilterReport) {
    let filtered = HistoricalDataset::from_rows(
        dataset
            .rows()
            .filter(|&(speed, _, kp)| !is_slow_wind_storm_artifact(speed, kp)),
    );

    let report = FilterReport {
        kept: filtered.len(),
        removed: dataset.len() - filtered.len(),
    };
    info!(
        kept = report.kept,
        removed = report.removed,
        "Removed slow-wind storm artifact rows"
    );

    (filtered, report)
}
