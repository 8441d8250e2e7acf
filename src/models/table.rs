//! Benchmark table keyed by (kind, size)

use std::collections::HashMap;
use std::fmt;

use crate::{ReportError, Result};

/// Benchmark operation category, naming which hashing code path was measured
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    /// Chunked writes through the incremental hasher API
    Incremental,
    /// One-shot hash of the entire buffer
    Entire,
    /// Hash of the entire buffer through a reused, reset hasher
    Reset,
}

impl Kind {
    /// Label used for this kind in benchmark names, e.g.
    /// `BenchmarkBLAKE3/Incremental/0001_kib`
    pub fn as_str(&self) -> &'static str {
        match self {
            Kind::Incremental => "Incremental",
            Kind::Entire => "Entire",
            Kind::Reset => "Reset",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed benchmark measurement: elapsed nanoseconds per operation and
/// throughput in megabytes per second. Immutable once created.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Measurement {
    pub time_ns: u64,
    pub rate_mb_s: u64,
}

/// Mapping from (kind label, size label) to a measurement.
///
/// Keys are raw strings rather than [`Kind`] so that well-formed lines with a
/// kind label the report never queries are stored harmlessly instead of
/// failing the load. Iteration order is irrelevant; the renderers look up
/// explicit keys.
#[derive(Debug, Default)]
pub struct BenchTable {
    entries: HashMap<(String, String), Measurement>,
}

impl BenchTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a measurement, silently overwriting any earlier measurement
    /// for the same (kind, size) key. Later benchmark lines win.
    pub fn insert(&mut self, kind: &str, size: &str, measurement: Measurement) {
        self.entries
            .insert((kind.to_string(), size.to_string()), measurement);
    }

    /// Look up the measurement for a kind at a size label.
    ///
    /// A missing key is an error naming the failed lookup; the renderers
    /// never emit a blank cell.
    pub fn get(&self, kind: Kind, size: &str) -> Result<Measurement> {
        self.entries
            .get(&(kind.as_str().to_string(), size.to_string()))
            .copied()
            .ok_or_else(|| ReportError::MissingEntry {
                kind,
                size: size.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
