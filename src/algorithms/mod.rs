//! Numeric kernels of the analog method.
//!
//! # Components
//!
//! - [`analog_search`]: distance metric and nearest-neighbor ranking over
//!   the historical archive

pub mod analog_search;

pub use analog_search::{condition_distance, nearest_kp};
