//! Domain models for the analog Kp forecast.
//!
//! This module provides the core data structures of the forecast pipeline:
//! the user-facing condition inputs, the resolved query point with its
//! provenance, single telemetry samples, and the historical archive of
//! (speed, Bz, Kp) observations held as parallel columns.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ForecastError;

/// Number of historical analogs backing the forecast distribution.
pub const ANALOG_COUNT: usize = 100;

/// Solar-wind speed normalizer of the analog distance metric, in km/s.
///
/// Roughly the empirical range of observed wind speeds, so that speed and
/// Bz differences contribute on comparable scales.
pub const SPEED_SCALE_KM_S: f64 = 1000.0;

/// IMF Bz normalizer of the analog distance metric, in nT.
pub const BZ_SCALE_NT: f64 = 100.0;

/// Kp floor of the known archive artifact: storm-level Kp recorded while
/// the wind was slow.
pub const KP_ARTIFACT_FLOOR: f64 = 4.0;

/// Speed ceiling of the known archive artifact, in km/s.
pub const SPEED_ARTIFACT_CEILING_KM_S: f64 = 300.0;

/// Samples in the trailing live-data window: one hour at 1-minute cadence.
pub const TRAILING_WINDOW: usize = 60;

/// A user-supplied solar-wind condition.
///
/// Replaces the loose "number or the string latest" convention with an
/// explicit variant, so everything past the input boundary works with
/// plain numbers.
///
/// # Examples
///
/// ```
/// use aafs_rust::core::domain::ConditionInput;
///
/// let manual: ConditionInput = "450".parse().unwrap();
/// assert_eq!(manual, ConditionInput::Manual(450.0));
///
/// let live: ConditionInput = "latest".parse().unwrap();
/// assert_eq!(live, ConditionInput::Latest);
///
/// assert!("sideways".parse::<ConditionInput>().is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ConditionInput {
    /// Fixed value provided by the operator.
    Manual(f64),
    /// Resolve from the trailing hour of real-time telemetry.
    Latest,
}

impl FromStr for ConditionInput {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case("latest") {
            return Ok(ConditionInput::Latest);
        }
        match trimmed.parse::<f64>() {
            Ok(value) if value.is_finite() => Ok(ConditionInput::Manual(value)),
            _ => Err(ForecastError::InvalidInput(format!(
                "expected a finite number or 'latest', got '{}'",
                s
            ))),
        }
    }
}

/// Where the resolved query values came from.
///
/// The `Display` form is the label shown next to the query point in
/// reports and plots.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Provenance {
    ManualInput,
    TrailingHourAverage,
}

impl fmt::Display for Provenance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Provenance::ManualInput => write!(f, "manual input"),
            Provenance::TrailingHourAverage => write!(f, "last 1 hr avg"),
        }
    }
}

/// The resolved pair of current conditions the forecast is made for.
///
/// Immutable once produced; both values always share one provenance.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct QueryPoint {
    pub speed_km_s: f64,
    pub bz_nt: f64,
    pub provenance: Provenance,
}

/// One record of a real-time solar-wind product, reduced to the fields
/// the trailing average needs.
///
/// `value` is `None` when the instrument reported no reading for the
/// minute; such samples stay in the window but contribute nothing to the
/// mean.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySample {
    pub time_tag: DateTime<Utc>,
    pub active: bool,
    pub value: Option<f64>,
}

/// Historical (speed, Bz, Kp3) archive held as parallel columns.
///
/// Index `i` across the three columns refers to one 3-hour observation:
/// the solar-wind speed and IMF Bz measured at L1, and the planetary Kp
/// index (quantized to thirds, 0 to 9) registered for that interval.
///
/// The columns always share one length. Construction checks it and
/// filtering rebuilds row-wise, so per-column mutation never happens.
///
/// # Examples
///
/// ```
/// use aafs_rust::core::domain::HistoricalDataset;
///
/// let dataset = HistoricalDataset::from_columns(
///     vec![450.0, 620.0],
///     vec![-3.2, 1.5],
///     vec![2.33, 4.0],
/// ).unwrap();
///
/// assert_eq!(dataset.len(), 2);
/// assert_eq!(dataset.kp3(), &[2.33, 4.0]);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct HistoricalDataset {
    speed_km_s: Vec<f64>,
    bz_nt: Vec<f64>,
    kp3: Vec<f64>,
}

impl HistoricalDataset {
    /// Builds a dataset from three parallel columns.
    ///
    /// Returns [`ForecastError::Archive`] when the columns disagree on
    /// length.
    pub fn from_columns(
        speed_km_s: Vec<f64>,
        bz_nt: Vec<f64>,
        kp3: Vec<f64>,
    ) -> Result<Self, ForecastError> {
        if speed_km_s.len() != bz_nt.len() || bz_nt.len() != kp3.len() {
            return Err(ForecastError::Archive(format!(
                "column lengths differ: speed={}, bz={}, kp3={}",
                speed_km_s.len(),
                bz_nt.len(),
                kp3.len()
            )));
        }
        Ok(Self {
            speed_km_s,
            bz_nt,
            kp3,
        })
    }

    /// Builds a dataset row by row. Lockstep by construction.
    pub fn from_rows<I>(rows: I) -> Self
    where
        I: IntoIterator<Item = (f64, f64, f64)>,
    {
        let mut speed_km_s = Vec::new();
        let mut bz_nt = Vec::new();
        let mut kp3 = Vec::new();
        for (speed, bz, kp) in rows {
            speed_km_s.push(speed);
            bz_nt.push(bz);
            kp3.push(kp);
        }
        Self {
            speed_km_s,
            bz_nt,
            kp3,
        }
    }

    /// Number of observations.
    pub fn len(&self) -> usize {
        self.kp3.len()
    }

    pub fn is_empty(&self) -> bool {
        self.kp3.is_empty()
    }

    pub fn speed_km_s(&self) -> &[f64] {
        &self.speed_km_s
    }

    pub fn bz_nt(&self) -> &[f64] {
        &self.bz_nt
    }

    pub fn kp3(&self) -> &[f64] {
        &self.kp3
    }

    /// Iterates observations as `(speed_km_s, bz_nt, kp3)` rows in
    /// archive order.
    pub fn rows(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.speed_km_s
            .iter()
            .zip(&self.bz_nt)
            .zip(&self.kp3)
            .map(|((&speed, &bz), &kp)| (speed, bz, kp))
    }
}

/// Categorizes a Kp value into its NOAA storm-scale display label.
///
/// The boundaries sit halfway between the thirds-quantized Kp levels, so
/// 3.67 already counts as "Kp 4" while 3.33 is still quiet.
///
/// # Examples
///
/// ```
/// use aafs_rust::core::domain::storm_category;
///
/// assert_eq!(storm_category(2.33), "Kp 0-3");
/// assert_eq!(storm_category(3.67), "Kp 4");
/// assert_eq!(storm_category(5.0), "Kp 5 (G1)");
/// assert_eq!(storm_category(8.33), "Kp 8-9 (G4-5)");
/// ```
pub fn storm_category(kp3: f64) -> &'static str {
    if kp3 < 3.5 {
        "Kp 0-3"
    } else if kp3 < 4.5 {
        "Kp 4"
    } else if kp3 < 5.5 {
        "Kp 5 (G1)"
    } else if kp3 < 6.5 {
        "Kp 6 (G2)"
    } else if kp3 < 7.5 {
        "Kp 7 (G3)"
    } else {
        "Kp 8-9 (G4-5)"
    }
}
