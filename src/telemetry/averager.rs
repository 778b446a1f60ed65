//! Query resolution: manual values or the trailing hour of live data.

use tracing::info;

use crate::core::domain::{
    ConditionInput, Provenance, QueryPoint, TelemetrySample, TRAILING_WINDOW,
};
use crate::error::{ForecastError, ForecastResult};

use super::{FeedKind, TelemetryFeed};

/// Resolve the pair of query conditions into a query point.
///
/// Two manual values pass through untouched and never hit the network. If
/// either condition asks for live data, *both* values are taken from the
/// trailing hour of telemetry, so the query point describes one moment in
/// time; a manual number supplied alongside a `latest` is discarded.
pub fn resolve_query(
    speed: ConditionInput,
    bz: ConditionInput,
    feed: &dyn TelemetryFeed,
) -> ForecastResult<QueryPoint> {
    if let (ConditionInput::Manual(speed_km_s), ConditionInput::Manual(bz_nt)) = (speed, bz) {
        return Ok(QueryPoint {
            speed_km_s,
            bz_nt,
            provenance: Provenance::ManualInput,
        });
    }

    let wind = feed.fetch_samples(FeedKind::Wind)?;
    let mag = feed.fetch_samples(FeedKind::Mag)?;

    let speed_km_s = trailing_hour_average(&wind, FeedKind::Wind)?;
    let bz_nt = trailing_hour_average(&mag, FeedKind::Mag)?;

    info!(speed_km_s, bz_nt, "Resolved query point from live telemetry");

    Ok(QueryPoint {
        speed_km_s,
        bz_nt,
        provenance: Provenance::TrailingHourAverage,
    })
}

/// Mean over the most recent [`TRAILING_WINDOW`] active samples.
///
/// Samples flagged inactive never enter the window. Within the window,
/// records whose value is missing are skipped; a window with no values at
/// all is a fetch failure, never a zero. Input order does not matter.
pub fn trailing_hour_average(
    samples: &[TelemetrySample],
    kind: FeedKind,
) -> ForecastResult<f64> {
    let mut active: Vec<&TelemetrySample> = samples.iter().filter(|s| s.active).collect();
    active.sort_by(|a, b| b.time_tag.cmp(&a.time_tag));

    let window = &active[..active.len().min(TRAILING_WINDOW)];
    let values: Vec<f64> = window.iter().filter_map(|s| s.value).collect();

    if values.is_empty() {
        return Err(ForecastError::Fetch(format!(
            "no usable {} samples in the trailing window",
            kind
        )));
    }

    Ok(values.iter().sum::<f64>() / values.len() as f64)
}
