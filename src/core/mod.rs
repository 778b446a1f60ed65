//! Core domain models for solar-wind driven Kp forecasting.
//!
//! This module defines the fundamental data structures used throughout the
//! forecast pipeline: user-supplied conditions, the resolved query point,
//! real-time telemetry samples, and the historical observation archive.

pub mod domain;
