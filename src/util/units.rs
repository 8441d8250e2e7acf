//! Units scaling and formatting utilities
//!
//! Converts raw nanosecond counts from the benchmark harness into
//! human-friendly magnitudes and renders them with a fixed number of
//! significant digits.

/// Scale a nanosecond count into a (magnitude, unit label) pair
///
/// Three tiers: nanoseconds below 1 000, microseconds below 1 000 000,
/// milliseconds above. No rounding happens here; display formatting is
/// the renderer's job.
///
/// # Examples
/// ```
/// use bench_report::util::units::scale_ns;
///
/// assert_eq!(scale_ns(999), (999.0, "ns"));
/// assert_eq!(scale_ns(1000), (1.0, "µs"));
/// assert_eq!(scale_ns(1_000_000), (1.0, "ms"));
/// ```
pub fn scale_ns(ns: u64) -> (f64, &'static str) {
    if ns < 1_000 {
        (ns as f64, "ns")
    } else if ns < 1_000_000 {
        (ns as f64 / 1_000.0, "µs")
    } else {
        (ns as f64 / 1_000_000.0, "ms")
    }
}

/// Format a magnitude to four significant digits
///
/// Trailing zeros are trimmed, but at least one digit is kept after the
/// decimal point, matching how the benchmark reporter prints scaled
/// timings.
///
/// # Examples
/// ```
/// use bench_report::util::units::format_sig4;
///
/// assert_eq!(format_sig4(1.5), "1.5");
/// assert_eq!(format_sig4(200.0), "200.0");
/// assert_eq!(format_sig4(999.999), "1000.0");
/// ```
pub fn format_sig4(value: f64) -> String {
    const SIG_DIGITS: i32 = 4;

    if value == 0.0 {
        return "0.0".to_string();
    }

    let magnitude = value.abs().log10().floor() as i32;
    let decimals = (SIG_DIGITS - 1 - magnitude).max(1) as usize;
    let formatted = format!("{:.*}", decimals, value);

    let trimmed = formatted.trim_end_matches('0');
    if trimmed.ends_with('.') {
        format!("{}0", trimmed)
    } else {
        trimmed.to_string()
    }
}
