//! Dataset quality filters.
//!
//! This module provides the cleaning passes applied to the historical
//! archive before it is searched for analogs.
//!
//! # Modules
//!
//! - [`filtering`]: Remove the known slow-wind storm artifact

pub mod filtering;

pub use filtering::{is_slow_wind_storm_artifact, remove_slow_wind_storms, FilterReport};
