//! Calendar-day splitting at a configurable daily boundary time.
//!
//! A [`DayBoundary`] marks the wall-clock instant at which one logical
//! day ends and the next begins -- 18:00 for a workday that rolls over
//! in the evening, midnight for plain calendar days. Splitting a gauge
//! cuts it at every boundary instant inside the span and tags each
//! resulting segment with the calendar day that owns it.

use std::collections::BTreeMap;

use chrono::{DateTime, Days, Duration, FixedOffset, NaiveDate, NaiveTime, TimeZone};

use crate::error::{GaugeError, Result};
use crate::gauge::interval::{TimeGauge, DATE_FORMAT};

/// A wall-clock time-of-day plus a fixed offset, used as the cut point
/// between one logical day and the next.
///
/// Stateless and reusable across splits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayBoundary {
    time: NaiveTime,
    zone: FixedOffset,
}

impl DayBoundary {
    /// Boundary at the given wall-clock time in `zone`.
    ///
    /// Nanoseconds up to 999,999,999 are accepted; out-of-range fields
    /// are an error.
    pub fn new(
        hour: u32,
        minute: u32,
        second: u32,
        nanosecond: u32,
        zone: FixedOffset,
    ) -> Result<Self> {
        let time = NaiveTime::from_hms_nano_opt(hour, minute, second, nanosecond).ok_or(
            GaugeError::InvalidBoundaryTime {
                hour,
                minute,
                second,
                nanosecond,
            },
        )?;
        Ok(Self { time, zone })
    }

    /// Boundary at an already-validated time-of-day.
    pub fn from_time(time: NaiveTime, zone: FixedOffset) -> Self {
        Self { time, zone }
    }

    /// Boundary at midnight in `zone`, splitting plain calendar days.
    pub fn midnight(zone: FixedOffset) -> Self {
        Self {
            time: NaiveTime::MIN,
            zone,
        }
    }

    /// The absolute instant at which the boundary occurs on `date`.
    fn instant_on(&self, date: NaiveDate) -> DateTime<FixedOffset> {
        // A fixed offset maps each local time to exactly one instant.
        self.zone
            .from_local_datetime(&date.and_time(self.time))
            .unwrap()
    }
}

/// Working segment; the owning-day tag is the map key.
struct Span {
    begin: DateTime<FixedOffset>,
    end: DateTime<FixedOffset>,
}

impl TimeGauge {
    /// Cut `[begin, end)` at every instant where `boundary` occurs and
    /// return one segment per owning calendar day.
    ///
    /// A segment starting before its day's boundary instant belongs to
    /// the day it starts on; once the boundary has passed (or falls
    /// exactly on the segment start), the span belongs to the next day,
    /// whose boundary has not yet occurred. Dates are read in the
    /// boundary's offset once the walk crosses its first boundary.
    ///
    /// A gauge with `end <= begin` produces no segments. Segments come
    /// back keyed by date and in date order, but callers needing
    /// chronological order should sort by `begin` themselves.
    pub fn split(&self, boundary: DayBoundary) -> Vec<TimeGauge> {
        let mut remaining = self.duration();
        if remaining < Duration::zero() {
            return Vec::new();
        }
        let mut segments: BTreeMap<String, Span> = BTreeMap::new();
        let mut pos = self.begin();
        while remaining > Duration::zero() {
            let base = boundary.instant_on(pos.date_naive());
            if base > pos {
                // Today's boundary is still ahead of the walk.
                let key = pos.format(DATE_FORMAT).to_string();
                let diff = base - pos;
                if remaining < diff {
                    segments.insert(
                        key,
                        Span {
                            begin: pos,
                            end: pos + remaining,
                        },
                    );
                    break;
                }
                segments.insert(
                    key,
                    Span {
                        begin: pos,
                        end: base,
                    },
                );
                remaining = remaining - diff;
                pos = base;
            } else {
                // Today's boundary already passed; the next day owns
                // everything up to its own boundary instant.
                let next = base + Days::new(1);
                let key = next.format(DATE_FORMAT).to_string();
                let diff = next - pos;
                if remaining < diff {
                    let end = pos + remaining;
                    segments
                        .entry(key)
                        .and_modify(|s| s.end = end)
                        .or_insert(Span { begin: pos, end });
                    break;
                }
                segments
                    .entry(key)
                    .and_modify(|s| s.end = next)
                    .or_insert(Span {
                        begin: pos,
                        end: next,
                    });
                remaining = remaining - diff;
                pos = next;
            }
        }
        segments
            .into_iter()
            .map(|(date, s)| TimeGauge::with_date(date, s.begin, s.end))
            .collect()
    }
}
