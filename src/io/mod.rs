//! High-level data loading utilities.
//!
//! Loaders combine parsing with error context and produce ready-to-use
//! domain structures for the pipeline.

pub mod loaders;


pub use loaders::{ArchiveLoadResult, ArchiveLoader};
