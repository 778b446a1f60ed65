//! Real-time solar-wind telemetry access.
//!
//! This module abstracts the live data source behind a small trait so the
//! pipeline can run against the production SWPC endpoint or an in-memory
//! feed in tests.
//!
//! # Components
//!
//! - [`TelemetryFeed`]: the source seam, one method per product fetch
//! - [`swpc::SwpcClient`]: blocking HTTP client for the SWPC RTSW products
//! - [`averager`]: query resolution and the trailing-hour average

pub mod averager;
pub mod swpc;

use std::fmt;

use crate::core::domain::TelemetrySample;
use crate::error::ForecastResult;

/// Which real-time product to fetch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedKind {
    /// Plasma product: proton speed in km/s
    Wind,
    /// Magnetometer product: IMF Bz (GSM) in nT
    Mag,
}

impl FeedKind {
    /// Product file name under the RTSW endpoint.
    pub fn product(&self) -> &'static str {
        match self {
            FeedKind::Wind => "wind_1m.json",
            FeedKind::Mag => "mag_1m.json",
        }
    }
}

impl fmt::Display for FeedKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FeedKind::Wind => write!(f, "wind"),
            FeedKind::Mag => write!(f, "mag"),
        }
    }
}

/// Source of real-time telemetry samples.
///
/// Implementations return one product's samples per call. Callers must not
/// rely on sample order; the averager sorts before windowing.
pub trait TelemetryFeed {
    fn fetch_samples(&self, kind: FeedKind) -> ForecastResult<Vec<TelemetrySample>>;
}

pub use averager::{resolve_query, trailing_hour_average};
pub use swpc::SwpcClient;
