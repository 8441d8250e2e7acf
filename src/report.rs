//! Markdown row rendering
//!
//! Stateless formatting of benchmark table rows. Column widths match the
//! committed report tables, so regenerating the report produces a clean
//! diff.

use crate::models::{BenchTable, Kind};
use crate::util::units::{format_sig4, scale_ns};
use crate::Result;

/// Header for the small-input table (full-buffer and reset only)
pub const SMALL_HEADER: &str =
    "| Size   | Full Buffer |  Reset     | | Full Buffer Rate | Reset Rate   |";
pub const SMALL_RULE: &str =
    "|--------|-------------|------------|-|------------------|--------------|";

/// Header for the large-input tables (incremental, full-buffer, reset)
pub const LARGE_HEADER: &str =
    "| Size     | Incremental | Full Buffer | Reset      | | Incremental Rate | Full Buffer Rate | Reset Rate   |";
pub const LARGE_RULE: &str =
    "|----------|-------------|-------------|------------|-|------------------|------------------|--------------|";

/// Visual separator row between size groups in a large table
pub const BLANK_ROW: &str =
    "|          |             |             |            | |                  |                  |              |";

/// Render a small-input row: full-buffer and reset timings and rates as
/// raw integers, no unit scaling. The label is rendered verbatim.
pub fn short_row(table: &BenchTable, label: &str, size: &str) -> Result<String> {
    let fb = table.get(Kind::Entire, size)?;
    let reset = table.get(Kind::Reset, size)?;

    Ok(format!(
        "| {:<6} | {:>3} ns      | {:>3} ns     | | {:>3} MB/s         | {:>3} MB/s     |",
        label, fb.time_ns, reset.time_ns, fb.rate_mb_s, reset.rate_mb_s
    ))
}

/// Render a large-input row: incremental, full-buffer, and reset timings
/// scaled to human units and formatted to four significant digits, rates
/// as raw integers.
pub fn row(table: &BenchTable, label: &str, size: &str) -> Result<String> {
    let inc = table.get(Kind::Incremental, size)?;
    let fb = table.get(Kind::Entire, size)?;
    let reset = table.get(Kind::Reset, size)?;

    let (inc_mag, inc_unit) = scale_ns(inc.time_ns);
    let (fb_mag, fb_unit) = scale_ns(fb.time_ns);
    let (reset_mag, reset_unit) = scale_ns(reset.time_ns);

    Ok(format!(
        "| {:<8} | {:>5} {}    | {:>5} {}    | {:>5} {}   | | {:>4} MB/s        | {:>4} MB/s        | {:>4} MB/s    |",
        label,
        format_sig4(inc_mag),
        inc_unit,
        format_sig4(fb_mag),
        fb_unit,
        format_sig4(reset_mag),
        reset_unit,
        inc.rate_mb_s,
        fb.rate_mb_s,
        reset.rate_mb_s
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Measurement;
    use crate::ReportError;

    fn table_1kib() -> BenchTable {
        let mut table = BenchTable::new();
        table.insert(
            "Incremental",
            "0001_kib",
            Measurement {
                time_ns: 1500,
                rate_mb_s: 500,
            },
        );
        table.insert(
            "Entire",
            "0001_kib",
            Measurement {
                time_ns: 1_400_000,
                rate_mb_s: 600,
            },
        );
        table.insert(
            "Reset",
            "0001_kib",
            Measurement {
                time_ns: 200,
                rate_mb_s: 700,
            },
        );
        table
    }

    #[test]
    fn test_row_scales_each_timing() {
        let table = table_1kib();
        let rendered = row(&table, "1 kib", "0001_kib").expect("row renders");
        assert_eq!(
            rendered,
            "| 1 kib    |   1.5 µs    |   1.4 ms    | 200.0 ns   | |  500 MB/s        |  600 MB/s        |  700 MB/s    |"
        );
    }

    #[test]
    fn test_short_row_is_unscaled() {
        let mut table = BenchTable::new();
        table.insert(
            "Entire",
            "0001_block",
            Measurement {
                time_ns: 100,
                rate_mb_s: 1,
            },
        );
        table.insert(
            "Reset",
            "0001_block",
            Measurement {
                time_ns: 90,
                rate_mb_s: 2,
            },
        );

        let rendered = short_row(&table, "64 b", "0001_block").expect("row renders");
        assert_eq!(
            rendered,
            "| 64 b   | 100 ns      |  90 ns     | |   1 MB/s         |   2 MB/s     |"
        );
        // Raw nanoseconds even above the microsecond threshold
        table.insert(
            "Entire",
            "0001_block",
            Measurement {
                time_ns: 1500,
                rate_mb_s: 1,
            },
        );
        let rendered = short_row(&table, "64 b", "0001_block").expect("row renders");
        assert!(rendered.contains("1500 ns"));
    }

    #[test]
    fn test_row_missing_kind_is_an_error() {
        let mut table = BenchTable::new();
        table.insert(
            "Incremental",
            "0001_kib",
            Measurement {
                time_ns: 1500,
                rate_mb_s: 500,
            },
        );
        table.insert(
            "Entire",
            "0001_kib",
            Measurement {
                time_ns: 1_400_000,
                rate_mb_s: 600,
            },
        );

        let err = row(&table, "1 kib", "0001_kib").unwrap_err();
        assert!(matches!(
            err,
            ReportError::MissingEntry {
                kind: Kind::Reset,
                ..
            }
        ));
    }

    #[test]
    fn test_short_row_missing_kind_is_an_error() {
        let mut table = BenchTable::new();
        table.insert(
            "Entire",
            "0001_block",
            Measurement {
                time_ns: 100,
                rate_mb_s: 1,
            },
        );

        let err = short_row(&table, "64 b", "0001_block").unwrap_err();
        assert!(matches!(
            err,
            ReportError::MissingEntry {
                kind: Kind::Reset,
                ..
            }
        ));
    }

    #[test]
    fn test_rule_widths_match_headers() {
        assert_eq!(SMALL_HEADER.chars().count(), SMALL_RULE.chars().count());
        assert_eq!(LARGE_HEADER.chars().count(), LARGE_RULE.chars().count());
        assert_eq!(LARGE_HEADER.chars().count(), BLANK_ROW.chars().count());
    }
}
