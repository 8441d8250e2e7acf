//! Benchmark result data models
//!
//! Contains the measurement record parsed from one benchmark line and the
//! table the report is rendered from.

pub mod table;

pub use table::{BenchTable, Kind, Measurement};
