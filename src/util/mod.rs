//! Utility functions module
//!
//! Contains helpers for scaling nanosecond timings into human-friendly
//! units and for significant-digit formatting.

pub mod units;

// Re-export commonly used functions
pub use units::{format_sig4, scale_ns};
