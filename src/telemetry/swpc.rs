//! Blocking client for the NOAA SWPC real-time solar wind products.

use reqwest::blocking::Client;
use tracing::debug;

use crate::core::domain::TelemetrySample;
use crate::error::{ForecastError, ForecastResult};
use crate::parsing::rtsw_parser;

use super::{FeedKind, TelemetryFeed};

/// Base URL of the real-time solar wind (RTSW) product directory.
pub const RTSW_BASE_URL: &str = "https://services.swpc.noaa.gov/json/rtsw/rtsw_";

/// HTTP client for the SWPC RTSW JSON products.
///
/// Fetches are blocking and fail-stop: no retries, no fallback values. A
/// non-success status or an undecodable body ends the run.
#[derive(Debug, Clone)]
pub struct SwpcClient {
    client: Client,
    base_url: String,
}

impl SwpcClient {
    /// Client for the production SWPC endpoint.
    pub fn new() -> Self {
        Self::with_base_url(RTSW_BASE_URL)
    }

    /// Client pointed at a non-default endpoint (local test servers).
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
        }
    }

    fn product_url(&self, kind: FeedKind) -> String {
        format!("{}{}", self.base_url, kind.product())
    }
}

impl Default for SwpcClient {
    fn default() -> Self {
        Self::new()
    }
}

impl TelemetryFeed for SwpcClient {
    fn fetch_samples(&self, kind: FeedKind) -> ForecastResult<Vec<TelemetrySample>> {
        let url = self.product_url(kind);
        debug!(%url, "Fetching RTSW product");

        let response = self
            .client
            .get(&url)
            .send()
            .map_err(|e| ForecastError::Fetch(format!("request to {} failed: {}", url, e)))?;

        if !response.status().is_success() {
            return Err(ForecastError::Fetch(format!(
                "{} returned HTTP {}",
                url,
                response.status()
            )));
        }

        let body = response
            .text()
            .map_err(|e| ForecastError::Fetch(format!("failed to read {}: {}", url, e)))?;

        let samples = match kind {
            FeedKind::Wind => rtsw_parser::parse_wind_json(&body),
            FeedKind::Mag => rtsw_parser::parse_mag_json(&body),
        }
        .map_err(|e| ForecastError::Fetch(format!("failed to decode {}: {:#}", url, e)))?;

        debug!(kind = %kind, samples = samples.len(), "RTSW product decoded");
        Ok(samples)
    }
}
