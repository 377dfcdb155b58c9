//! Integration tests for day-boundary splitting.
//!
//! These exercise the full flow of parsing timestamps, splitting at a
//! boundary and consuming the resulting segments, plus the tiling
//! property the segments must uphold for any input span.

use chrono::{DateTime, Duration, FixedOffset, NaiveTime};
use proptest::prelude::*;
use timegauge_core::{DayBoundary, TimeGauge};

fn jst() -> FixedOffset {
    FixedOffset::east_opt(9 * 3600).unwrap()
}

fn at(s: &str) -> DateTime<FixedOffset> {
    DateTime::parse_from_rfc3339(s).unwrap()
}

#[test]
fn overnight_work_log_split_at_evening_boundary() {
    let g = TimeGauge::parse("2020-04-01T23:00:00+09:00", "2020-04-05T07:00:00+09:00").unwrap();
    let boundary = DayBoundary::new(18, 0, 0, 0, jst()).unwrap();

    let mut segments = g.split(boundary);
    segments.sort_by_key(TimeGauge::begin);

    // One logical day per 18:00-to-18:00 stretch the span touches.
    assert_eq!(segments.len(), 4);
    assert_eq!(segments[0].begin(), g.begin());
    assert_eq!(segments[3].end(), g.end());
    for pair in segments.windows(2) {
        assert_eq!(pair[0].end(), pair[1].begin());
    }

    // First stretch runs 23:00 to the next day's boundary.
    assert_eq!(segments[0].date(), "2020-04-02");
    assert_eq!(segments[0].end(), at("2020-04-02T18:00:00+09:00"));
    assert_eq!(segments[0].hours(), 19.0);

    // Middle stretches are exactly one boundary period long.
    assert_eq!(segments[1].duration(), Duration::hours(24));
    assert_eq!(segments[2].duration(), Duration::hours(24));

    // Tail stops at the gauge end, owned by the day whose boundary
    // never arrived.
    assert_eq!(segments[3].date(), "2020-04-05");
    assert_eq!(segments[3].hours(), 13.0);
}

#[test]
fn segment_dates_feed_per_day_totals() {
    let g = TimeGauge::parse("2020-04-01T17:00:00+09:00", "2020-04-01T19:00:00+09:00").unwrap();
    let boundary = DayBoundary::new(18, 0, 0, 0, jst()).unwrap();

    let totals: Vec<(String, f64)> = g
        .split(boundary)
        .iter()
        .map(|s| (s.date().to_string(), s.hours()))
        .collect();
    assert_eq!(
        totals,
        [
            ("2020-04-01".to_string(), 1.0),
            ("2020-04-02".to_string(), 1.0)
        ]
    );
}

#[test]
fn boundary_in_a_different_offset_cuts_at_its_own_instant() {
    // The walk reads the calendar date at the current position's offset
    // and places the boundary instant in the boundary's own offset, so a
    // JST gauge against an 18:00 UTC boundary cuts at 03:00 JST.
    let g = TimeGauge::parse("2020-04-02T00:00:00+09:00", "2020-04-03T06:00:00+09:00").unwrap();
    let boundary = DayBoundary::new(18, 0, 0, 0, FixedOffset::east_opt(0).unwrap()).unwrap();

    let mut segments = g.split(boundary);
    segments.sort_by_key(TimeGauge::begin);
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0].date(), "2020-04-02");
    assert_eq!(segments[0].end(), at("2020-04-02T18:00:00+00:00"));
    assert_eq!(segments[1].date(), "2020-04-03");
    assert_eq!(segments[1].begin(), at("2020-04-02T18:00:00+00:00"));
    assert_eq!(segments[1].end(), g.end());
}

proptest! {
    #[test]
    fn segments_tile_the_span(
        start_secs in 0i64..86_400,
        len_secs in 1i64..(14 * 86_400),
        boundary_secs in 0u32..86_400,
    ) {
        let begin = at("2020-04-01T00:00:00+09:00") + Duration::seconds(start_secs);
        let end = begin + Duration::seconds(len_secs);
        let time = NaiveTime::from_num_seconds_from_midnight_opt(boundary_secs, 0).unwrap();
        let boundary = DayBoundary::from_time(time, jst());

        let mut segments = TimeGauge::new(begin, end).split(boundary);
        segments.sort_by_key(TimeGauge::begin);

        prop_assert!(!segments.is_empty());
        prop_assert_eq!(segments.first().unwrap().begin(), begin);
        prop_assert_eq!(segments.last().unwrap().end(), end);
        for pair in segments.windows(2) {
            prop_assert_eq!(pair[0].end(), pair[1].begin());
            prop_assert!(pair[0].duration() > Duration::zero());
        }

        let total: Duration = segments
            .iter()
            .map(TimeGauge::duration)
            .fold(Duration::zero(), |acc, d| acc + d);
        prop_assert_eq!(total, Duration::seconds(len_secs));

        // Date keys are unique: one segment per owning day.
        let mut dates: Vec<&str> = segments.iter().map(TimeGauge::date).collect();
        dates.dedup();
        prop_assert_eq!(dates.len(), segments.len());
    }

    #[test]
    fn degenerate_spans_produce_no_segments(
        len_secs in -(7 * 86_400i64)..=0,
        boundary_secs in 0u32..86_400,
    ) {
        let begin = at("2020-04-01T12:00:00+09:00");
        let end = begin + Duration::seconds(len_secs);
        let time = NaiveTime::from_num_seconds_from_midnight_opt(boundary_secs, 0).unwrap();
        let boundary = DayBoundary::from_time(time, jst());

        prop_assert!(TimeGauge::new(begin, end).split(boundary).is_empty());
    }
}
