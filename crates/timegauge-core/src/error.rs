//! Error types for timegauge-core.
//!
//! The arithmetic surface of this crate is total: degenerate intervals
//! produce empty results rather than errors. Only constructing values
//! from unvalidated input can fail.

use thiserror::Error;

/// Error type for the fallible constructors in this crate.
#[derive(Error, Debug)]
pub enum GaugeError {
    /// A boundary time-of-day had out-of-range fields
    #[error("invalid boundary time {hour:02}:{minute:02}:{second:02}.{nanosecond:09}")]
    InvalidBoundaryTime {
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
    },

    /// A timestamp string failed to parse as RFC 3339
    #[error("invalid timestamp {input:?}: {source}")]
    InvalidTimestamp {
        input: String,
        #[source]
        source: chrono::ParseError,
    },
}

/// Result type alias for GaugeError
pub type Result<T, E = GaugeError> = std::result::Result<T, E>;
