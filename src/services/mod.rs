//! Service layer: aggregation and forecast orchestration.
//!
//! Services sit between the numeric kernels and the presentation surface:
//! [`distribution`] turns analog Kp values into the report's histogram and
//! summary statistics, [`forecast`] runs the whole pipeline.

pub mod distribution;
pub mod forecast;

pub use distribution::{summarize_analogs, AnalogSummary, GroupedCount, KpDistribution};
pub use forecast::{
    run_forecast, ForecastConfig, ForecastOutcome, ForecastPipeline, ForecastReport,
};
