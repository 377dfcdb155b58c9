//! The interval value type and its duration arithmetic.

use std::fmt;

use chrono::{DateTime, Duration, FixedOffset};
use serde::{Deserialize, Serialize};

use crate::error::{GaugeError, Result};

pub(crate) const NANOS_PER_MICRO: i64 = 1_000;
pub(crate) const NANOS_PER_MILLI: i64 = 1_000_000;
pub(crate) const NANOS_PER_SEC: i64 = 1_000_000_000;
pub(crate) const NANOS_PER_MIN: i64 = 60 * NANOS_PER_SEC;
pub(crate) const NANOS_PER_HOUR: i64 = 60 * NANOS_PER_MIN;

/// Calendar-day key format, `YYYY-MM-DD`.
pub(crate) const DATE_FORMAT: &str = "%Y-%m-%d";

/// An immutable begin/end timestamp pair with derived duration.
///
/// No validation is performed at construction: `begin > end` is legal
/// and yields a negative duration, which [`TimeGauge::split`] treats as
/// an empty range rather than an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeGauge {
    date: String,
    begin: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl TimeGauge {
    /// Create a gauge over `[begin, end)`.
    pub fn new(begin: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> Self {
        let date = begin.format(DATE_FORMAT).to_string();
        Self { date, begin, end }
    }

    /// Create a gauge from two RFC 3339 timestamps.
    pub fn parse(begin: &str, end: &str) -> Result<Self> {
        Ok(Self::new(parse_rfc3339(begin)?, parse_rfc3339(end)?))
    }

    /// Segment constructor: the owning day of a split segment is the
    /// boundary day that claimed it, not necessarily `begin`'s day.
    pub(crate) fn with_date(
        date: String,
        begin: DateTime<FixedOffset>,
        end: DateTime<FixedOffset>,
    ) -> Self {
        Self { date, begin, end }
    }

    /// Start of the interval.
    pub fn begin(&self) -> DateTime<FixedOffset> {
        self.begin
    }

    /// End of the interval.
    pub fn end(&self) -> DateTime<FixedOffset> {
        self.end
    }

    /// Owning calendar day, formatted `YYYY-MM-DD`.
    ///
    /// For a gauge built with [`TimeGauge::new`] this is the day of
    /// `begin` in its own offset; for segments produced by
    /// [`TimeGauge::split`] it is the day that owns the segment.
    pub fn date(&self) -> &str {
        &self.date
    }

    /// `end - begin`. Negative when the gauge is inverted.
    pub fn duration(&self) -> Duration {
        self.end - self.begin
    }

    /// Duration as a floating point number of seconds.
    pub fn seconds(&self) -> f64 {
        total_nanos(self.duration()) as f64 / NANOS_PER_SEC as f64
    }

    /// Duration as a floating point number of minutes.
    pub fn minutes(&self) -> f64 {
        self.seconds() / 60.0
    }

    /// Duration as a floating point number of hours.
    pub fn hours(&self) -> f64 {
        self.seconds() / 3600.0
    }

    /// Duration as a floating point number of days (24h).
    pub fn days(&self) -> f64 {
        self.hours() / 24.0
    }

    /// Duration as a floating point number of weeks (168h).
    pub fn weeks(&self) -> f64 {
        self.hours() / 168.0
    }

    /// Duration as a floating point number of months (720h).
    pub fn months(&self) -> f64 {
        self.hours() / 720.0
    }

    /// Duration as a floating point number of years (8760h).
    pub fn years(&self) -> f64 {
        self.hours() / 8760.0
    }

    /// Duration rounded to the nearest whole second, decomposed into
    /// `(hours, minutes, seconds)`.
    ///
    /// Hours are unbounded, not wrapped to 24. Halves round away from
    /// zero.
    pub fn rounds(&self) -> (i64, i64, i64) {
        let mut n = round_nanos(total_nanos(self.duration()), NANOS_PER_SEC);
        let hours = n / NANOS_PER_HOUR;
        n -= hours * NANOS_PER_HOUR;
        let minutes = n / NANOS_PER_MIN;
        n -= minutes * NANOS_PER_MIN;
        (hours, minutes, n / NANOS_PER_SEC)
    }

    /// Exact decomposition of the unrounded duration.
    ///
    /// No rounding is applied at any unit, so the parts reconstruct the
    /// duration to the nanosecond.
    pub fn round_all(&self) -> DurationParts {
        let mut n = total_nanos(self.duration());
        let hours = n / NANOS_PER_HOUR;
        n -= hours * NANOS_PER_HOUR;
        let minutes = n / NANOS_PER_MIN;
        n -= minutes * NANOS_PER_MIN;
        let seconds = n / NANOS_PER_SEC;
        n -= seconds * NANOS_PER_SEC;
        let millis = n / NANOS_PER_MILLI;
        n -= millis * NANOS_PER_MILLI;
        let micros = n / NANOS_PER_MICRO;
        n -= micros * NANOS_PER_MICRO;
        DurationParts {
            hours,
            minutes,
            seconds,
            millis,
            micros,
            nanos: n,
        }
    }

    /// Whether this gauge properly intersects `[start, end]`.
    ///
    /// All comparisons are strict: intervals that merely touch at an
    /// endpoint do not overlap.
    pub fn overlap(&self, start: DateTime<FixedOffset>, end: DateTime<FixedOffset>) -> bool {
        if self.begin < start && self.end > start {
            return true;
        }
        if self.begin < end && self.end > end {
            return true;
        }
        if start < self.begin && end > self.begin {
            return true;
        }
        if start < self.end && end > self.end {
            return true;
        }
        false
    }

    /// Whether `t` lies strictly inside the gauge, endpoints excluded.
    pub fn contains(&self, t: DateTime<FixedOffset>) -> bool {
        self.begin < t && self.end > t
    }
}

impl fmt::Display for TimeGauge {
    /// Default string form of the duration: `h`/`m`/`s` components with
    /// leading zero units omitted and trailing fraction zeros trimmed,
    /// e.g. `8h15m12.023123456s`. The zero duration prints as `0s`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let n = total_nanos(self.duration());
        if n < 0 {
            f.write_str("-")?;
        }
        let mut mag = n.unsigned_abs();
        let hours = mag / NANOS_PER_HOUR as u64;
        mag -= hours * NANOS_PER_HOUR as u64;
        let minutes = mag / NANOS_PER_MIN as u64;
        mag -= minutes * NANOS_PER_MIN as u64;
        let seconds = mag / NANOS_PER_SEC as u64;
        let frac = mag - seconds * NANOS_PER_SEC as u64;
        if hours > 0 {
            write!(f, "{hours}h")?;
        }
        if minutes > 0 || hours > 0 {
            write!(f, "{minutes}m")?;
        }
        if frac == 0 {
            write!(f, "{seconds}s")
        } else {
            let frac = format!("{frac:09}");
            write!(f, "{seconds}.{}s", frac.trim_end_matches('0'))
        }
    }
}

/// Exact unit decomposition of a duration, as produced by
/// [`TimeGauge::round_all`].
///
/// Summing the parts with their unit weights reconstructs the duration
/// exactly. For a negative duration every part is non-positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DurationParts {
    pub hours: i64,
    pub minutes: i64,
    pub seconds: i64,
    pub millis: i64,
    pub micros: i64,
    pub nanos: i64,
}

/// Total nanoseconds of a span, saturating at the i64 range.
pub(crate) fn total_nanos(d: Duration) -> i64 {
    d.num_nanoseconds().unwrap_or(if d < Duration::zero() {
        i64::MIN
    } else {
        i64::MAX
    })
}

/// Round a nanosecond count to the nearest multiple of `unit`, halves
/// away from zero.
pub(crate) fn round_nanos(nanos: i64, unit: i64) -> i64 {
    let rem = nanos % unit;
    if rem.abs() * 2 >= unit {
        nanos - rem + unit * rem.signum()
    } else {
        nanos - rem
    }
}

fn parse_rfc3339(input: &str) -> Result<DateTime<FixedOffset>> {
    DateTime::parse_from_rfc3339(input).map_err(|source| GaugeError::InvalidTimestamp {
        input: input.to_string(),
        source,
    })
}
