//! Week-oriented calendar queries.
//!
//! Two conventions are supported side by side: Sunday-start weeks and
//! ISO 8601 Monday-start weeks. All functions are stateless and operate
//! on a single caller-supplied timestamp; day arithmetic preserves the
//! wall-clock time of the input.

use chrono::{DateTime, Datelike, Days, FixedOffset, NaiveDate, NaiveTime, TimeZone, Weekday};

/// Default rendering layout for [`day_strings`] and [`iso_day_strings`].
const DATE_LAYOUT: &str = "%Y-%m-%d";

/// The seven days of the Sunday-start week containing `t`, Sunday
/// through Saturday, each keeping `t`'s wall-clock time.
pub fn times(t: DateTime<FixedOffset>) -> Vec<DateTime<FixedOffset>> {
    let sunday = t - Days::new(u64::from(t.weekday().num_days_from_sunday()));
    (0..7).map(|i| sunday + Days::new(i)).collect()
}

/// The seven days of the ISO week containing `t`, Monday through
/// Sunday, each keeping `t`'s wall-clock time.
pub fn iso_times(t: DateTime<FixedOffset>) -> Vec<DateTime<FixedOffset>> {
    let monday = t - Days::new(u64::from(t.weekday().num_days_from_monday()));
    (0..7).map(|i| monday + Days::new(i)).collect()
}

/// The Sunday-start week containing `t` as formatted strings.
///
/// `layout` is a `chrono` format string; `None` renders `YYYY-MM-DD`.
pub fn day_strings(t: DateTime<FixedOffset>, layout: Option<&str>) -> Vec<String> {
    let layout = layout.unwrap_or(DATE_LAYOUT);
    times(t)
        .into_iter()
        .map(|day| day.format(layout).to_string())
        .collect()
}

/// The ISO week containing `t` as formatted strings.
///
/// `layout` is a `chrono` format string; `None` renders `YYYY-MM-DD`.
pub fn iso_day_strings(t: DateTime<FixedOffset>, layout: Option<&str>) -> Vec<String> {
    let layout = layout.unwrap_or(DATE_LAYOUT);
    iso_times(t)
        .into_iter()
        .map(|day| day.format(layout).to_string())
        .collect()
}

/// 1-based index of the Sunday-start week of `t` within its calendar
/// month.
///
/// Computed as the ISO week-number difference between `t` and the first
/// of the month, shifting Sundays forward one week since ISO counts
/// them as the tail of the previous week.
pub fn week_of_month(t: DateTime<FixedOffset>) -> i64 {
    let iso = t.date_naive().iso_week();
    let mut week = i64::from(iso.week());
    if t.weekday() == Weekday::Sun {
        week += 1;
    }
    let first = first_of_month(iso.year(), t.month());
    let mut first_week = i64::from(first.iso_week().week());
    if first.weekday() == Weekday::Sun {
        first_week += 1;
    }
    week - first_week + 1
}

/// 1-based index of the ISO week of `t` within its calendar month.
pub fn iso_week_of_month(t: DateTime<FixedOffset>) -> i64 {
    let iso = t.date_naive().iso_week();
    let first = first_of_month(iso.year(), t.month());
    i64::from(iso.week()) - i64::from(first.iso_week().week()) + 1
}

/// `t` advanced by `n` weeks; `n` may be negative.
pub fn add(t: DateTime<FixedOffset>, n: i64) -> DateTime<FixedOffset> {
    let days = Days::new(n.unsigned_abs() * 7);
    if n < 0 {
        t - days
    } else {
        t + days
    }
}

/// Whether `a` and `b` fall in the same Sunday-start week.
pub fn same(a: DateTime<FixedOffset>, b: DateTime<FixedOffset>) -> bool {
    let (earlier, later) = ordered(a, b);
    week_floor(later, later.weekday().num_days_from_sunday()) <= earlier
}

/// Whether `a` and `b` fall in the same ISO week.
///
/// A matching (ISO year, ISO week) pair short-circuits; otherwise this
/// falls back to comparing against the later instant's week start, the
/// same way [`same`] does.
pub fn iso_same(a: DateTime<FixedOffset>, b: DateTime<FixedOffset>) -> bool {
    let (week_a, week_b) = (a.iso_week(), b.iso_week());
    if week_a.year() == week_b.year() {
        return week_a.week() == week_b.week();
    }
    let (earlier, later) = ordered(a, b);
    week_floor(later, later.weekday().num_days_from_monday()) <= earlier
}

fn ordered(
    a: DateTime<FixedOffset>,
    b: DateTime<FixedOffset>,
) -> (DateTime<FixedOffset>, DateTime<FixedOffset>) {
    if b < a {
        (b, a)
    } else {
        (a, b)
    }
}

/// Midnight at the start of `t`'s week, `back` days before `t`, in
/// `t`'s offset.
fn week_floor(t: DateTime<FixedOffset>, back: u32) -> DateTime<FixedOffset> {
    let start = (t - Days::new(u64::from(back))).date_naive();
    // A fixed offset maps each local time to exactly one instant.
    t.offset()
        .from_local_datetime(&start.and_time(NaiveTime::MIN))
        .unwrap()
}

/// First day of `month` in `year`. Both fields come from a valid date,
/// so the fallback is unreachable.
fn first_of_month(year: i32, month: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, 1).unwrap_or_default()
}
