//! Benchmark result file loading
//!
//! Parses the text output of the BLAKE3 benchmark suite into a
//! [`BenchTable`]. Lines that do not carry a benchmark measurement are
//! skipped; lines that do but are malformed fail the load.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::models::{BenchTable, Measurement};
use crate::{ReportError, Result, BENCH_PREFIX};

/// Load a benchmark result file into a table keyed by (kind, size).
///
/// A line qualifies when its first whitespace-delimited token starts with
/// `BenchmarkBLAKE3`; everything else (headers, `ok` trailers, `PASS`
/// lines) is skipped silently. Qualifying lines must have exactly ten
/// whitespace-delimited fields, with the benchmark name in field 0, the
/// ns/op value in field 2, and the MB/s value in field 4.
pub fn load(path: impl AsRef<Path>) -> Result<BenchTable> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);

    let mut table = BenchTable::new();
    for line in reader.lines() {
        let line = line?;
        if let Some(((kind, size), measurement)) = parse_line(&line)? {
            table.insert(kind, size, measurement);
        }
    }

    debug!(path = %path.display(), entries = table.len(), "loaded benchmark table");
    Ok(table)
}

/// Parse one line of benchmark output.
///
/// Returns `Ok(None)` for lines that are not benchmark measurements and
/// `Err` for measurement lines with an unexpected shape.
fn parse_line(line: &str) -> Result<Option<((&str, &str), Measurement)>> {
    let fields: Vec<&str> = line.split_whitespace().collect();
    match fields.first() {
        Some(name) if name.starts_with(BENCH_PREFIX) => {}
        _ => {
            trace!(line, "skipping non-benchmark line");
            return Ok(None);
        }
    }

    // Fixed layout: name N ns/op-value "ns/op" MB/s-value "MB/s" ...
    if fields.len() != 10 {
        return Err(ReportError::MalformedLine(format!(
            "expected 10 fields, got {}: {:?}",
            fields.len(),
            line
        )));
    }

    let parts: Vec<&str> = fields[0].split('/').collect();
    if parts.len() != 3 {
        return Err(ReportError::MalformedLine(format!(
            "expected name of the form {}/<kind>/<size>: {:?}",
            BENCH_PREFIX, fields[0]
        )));
    }
    let (kind, size) = (parts[1], parts[2]);

    let time_ns = parse_truncated(fields[2], line)?;
    let rate_mb_s = parse_truncated(fields[4], line)?;

    Ok(Some((
        (kind, size),
        Measurement { time_ns, rate_mb_s },
    )))
}

/// Parse a numeric field as floating-point text truncated to an integer.
/// The benchmark reporter emits values with a trailing decimal, e.g.
/// `1530.0`, which must load as 1530.
fn parse_truncated(field: &str, line: &str) -> Result<u64> {
    let value: f64 = field.parse().map_err(|_| {
        ReportError::MalformedLine(format!("non-numeric value {:?} in line {:?}", field, line))
    })?;
    Ok(value as u64)
}
