//! bench-report - BLAKE3 benchmark table generator
//!
//! Reads `go test -bench` result files produced by the BLAKE3 benchmark
//! suite and renders them as Markdown tables: small-input latency,
//! large-input incremental/full-buffer/reset timings, and a
//! no-hardware-acceleration variant.

use std::fmt;

// Public re-exports
pub mod loader;
pub mod models;
pub mod report;
pub mod util;

// Common error types
#[derive(Debug)]
pub enum ReportError {
    /// I/O operation failed
    IoError(std::io::Error),
    /// A line matched the benchmark prefix but did not have the
    /// expected field layout
    MalformedLine(String),
    /// A (kind, size) lookup failed while rendering a row
    MissingEntry { kind: models::Kind, size: String },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReportError::IoError(err) => write!(f, "I/O error: {}", err),
            ReportError::MalformedLine(msg) => write!(f, "Malformed benchmark line: {}", msg),
            ReportError::MissingEntry { kind, size } => {
                write!(f, "No benchmark entry for {}/{}", kind, size)
            }
        }
    }
}

impl std::error::Error for ReportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReportError::IoError(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ReportError {
    fn from(err: std::io::Error) -> Self {
        ReportError::IoError(err)
    }
}

/// Result type alias for bench-report operations
pub type Result<T> = std::result::Result<T, ReportError>;

// Common constants
pub const BENCH_PREFIX: &str = "BenchmarkBLAKE3";
pub const BENCH_FILE: &str = "bench.txt";
pub const BENCH_PURE_FILE: &str = "bench-pure.txt";
