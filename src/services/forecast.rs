use anyhow::{Context, Result};
use serde::Serialize;
use std::path::PathBuf;
use tracing::info;

use crate::algorithms::analog_search;
use crate::core::domain::{ConditionInput, HistoricalDataset, QueryPoint, ANALOG_COUNT};
use crate::io::loaders::ArchiveLoader;
use crate::services::distribution::{summarize_analogs, AnalogSummary, KpDistribution};
use crate::telemetry::{averager, SwpcClient, TelemetryFeed};
use crate::transformations::filtering;

/// Configuration for one forecast run: the archive location and the two
/// condition inputs.
pub struct ForecastConfig {
    pub archive_path: PathBuf,
    pub solar_wind: ConditionInput,
    pub bz: ConditionInput,
}

/// Everything a presentation layer needs from one run.
#[derive(Debug)]
pub struct ForecastOutcome {
    /// Filtered archive, for scatter-style rendering of the corpus.
    pub dataset: HistoricalDataset,
    /// Serializable forecast report.
    pub report: ForecastReport,
}

/// Serializable summary of one forecast run.
#[derive(Debug, Clone, Serialize)]
pub struct ForecastReport {
    pub query: QueryPoint,
    /// Display label of the query provenance ("manual input" or
    /// "last 1 hr avg").
    pub provenance_label: String,
    /// Kp of the matched analogs, ascending by distance.
    pub analog_kp: Vec<f64>,
    pub distribution: KpDistribution,
    pub summary: AnalogSummary,
    /// Observations searched, after artifact removal.
    pub corpus_rows: usize,
    pub artifact_rows_removed: usize,
}

/// Main forecast pipeline.
///
/// One run resolves the query conditions, loads and filters the archive,
/// ranks analogs, and aggregates their Kp outcomes. The archive is read
/// and filtered exactly once per run; nothing is cached between runs.
pub struct ForecastPipeline {
    config: ForecastConfig,
}

impl ForecastPipeline {
    pub fn new(config: ForecastConfig) -> Self {
        Self { config }
    }

    /// Produce a forecast using the given telemetry feed.
    ///
    /// Any stage failure aborts the run; there are no partial reports.
    pub fn run(&self, feed: &dyn TelemetryFeed) -> Result<ForecastOutcome> {
        let query = averager::resolve_query(self.config.solar_wind, self.config.bz, feed)
            .context("Failed to resolve query conditions")?;
        info!(
            speed_km_s = query.speed_km_s,
            bz_nt = query.bz_nt,
            provenance = %query.provenance,
            "Query point resolved"
        );

        let loaded = ArchiveLoader::load_from_csv(&self.config.archive_path)
            .context("Failed to load historical archive")?;

        let (dataset, filter_report) = filtering::remove_slow_wind_storms(&loaded.dataset);

        let analog_kp = analog_search::nearest_kp(&query, &dataset, ANALOG_COUNT)
            .context("Analog search failed")?;

        let distribution = KpDistribution::from_analogs(&analog_kp);
        let summary = summarize_analogs(&analog_kp);
        info!(
            analogs = analog_kp.len(),
            kp_median = summary.median,
            kp_max = summary.max,
            "Forecast aggregated"
        );

        let report = ForecastReport {
            query,
            provenance_label: query.provenance.to_string(),
            analog_kp,
            distribution,
            summary,
            corpus_rows: dataset.len(),
            artifact_rows_removed: filter_report.removed,
        };

        Ok(ForecastOutcome { dataset, report })
    }
}

/// Convenience function to run a forecast against the production SWPC feed.
pub fn run_forecast(config: ForecastConfig) -> Result<ForecastOutcome> {
    let pipeline = ForecastPipeline::new(config);
    let feed = SwpcClient::new();
    pipeline.run(&feed)
}
