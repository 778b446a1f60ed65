//! Parsers for the forecast's external data formats.
//!
//! This module provides parsers for the two inputs the pipeline consumes:
//! the historical (speed, Bz, Kp3) archive CSV and the real-time solar
//! wind JSON products.
//!
//! # Parsers
//!
//! - [`archive_parser`]: Parse the historical L1 archive CSV
//! - [`rtsw_parser`]: Parse real-time solar wind JSON product bodies

pub mod archive_parser;
pub mod rtsw_parser;

#[cfg(test)]
mod rtsw_parser_tests;
