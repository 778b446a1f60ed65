//! Error types for forecast operations.

/// Result type for forecast operations
pub type ForecastResult<T> = Result<T, ForecastError>;

/// Errors that can occur while producing a forecast.
///
/// Every variant is terminal for the current run: the forecast never
/// substitutes a fallback value for failed input resolution or a missing
/// corpus.
#[derive(Debug, thiserror::Error)]
pub enum ForecastError {
    /// Input was neither a finite number nor the literal `latest`
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Real-time feed request failed or returned no usable data
    #[error("Telemetry fetch failed: {0}")]
    Fetch(String),

    /// Historical archive could not be read or failed validation
    #[error("Archive error: {0}")]
    Archive(String),

    /// No historical observations left to match against
    #[error("Historical corpus is empty")]
    EmptyCorpus,
}
