//! # Timegauge Core Library
//!
//! This library provides pure date/time arithmetic over caller-supplied
//! timestamps. It has two independent components with no shared state:
//!
//! - **Gauge**: an immutable begin/end timestamp pair with duration
//!   accessors, verb-driven string rendering, overlap/containment tests,
//!   and calendar-day splitting at a configurable daily boundary time
//!   (a logical day that rolls over at, say, 18:00 instead of midnight)
//! - **Weeks**: week span queries, week-of-month numbering, week
//!   advancement and same-week predicates under both Sunday-start and
//!   ISO (Monday-start) conventions
//!
//! All computation is synchronous and side-effect free. Timestamps carry
//! a fixed UTC offset (`chrono::DateTime<FixedOffset>`); time-zone
//! database lookups are out of scope. Degenerate inputs (an interval
//! whose end precedes its begin) yield empty results, not errors.
//!
//! ## Key Components
//!
//! - [`TimeGauge`]: immutable interval value type
//! - [`DayBoundary`]: the daily cut point used by [`TimeGauge::split`]
//! - [`weeks`]: free functions for week-oriented calendar queries

pub mod error;
pub mod gauge;
pub mod weeks;

pub use error::GaugeError;
pub use gauge::{DayBoundary, Directive, DurationParts, TimeGauge};
