//! Analog-based geomagnetic storm forecasting.
//!
//! Estimates the probability distribution of the Kp index over the next
//! three hours by matching current solar-wind conditions (speed and IMF
//! Bz, entered manually or averaged from the trailing hour of NOAA SWPC
//! real-time data) against a historical archive of L1 observations, and
//! aggregating the Kp outcomes of the 100 closest historical analogs.

pub mod algorithms;
pub mod core;
pub mod error;
pub mod io;
pub mod parsing;
pub mod services;
pub mod telemetry;
pub mod transformations;

pub use error::{ForecastError, ForecastResult};
