//! The count-by-year series drawn by the timeline.

use crate::error::DataError;
use crate::record::{count_from_value, year_from_value, RawRecord};
use chrono::NaiveDateTime;
use serde::Serialize;

/// One year of the series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeriesPoint {
    /// January 1st of the year this count belongs to.
    pub year: NaiveDateTime,
    pub count: u64,
}

/// A non-empty series sorted ascending by year with exactly one point per year.
///
/// When the input holds several records for the same year the one appearing
/// last in input order wins.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    points: Vec<SeriesPoint>,
}

impl Series {
    /// Validate raw records and build a series.
    ///
    /// Fails on the first record whose year or count cannot be read, or when
    /// there are no records at all.
    pub fn from_records(records: &[RawRecord]) -> Result<Self, DataError> {
        let points = records
            .iter()
            .enumerate()
            .map(|(index, r)| {
                Ok(SeriesPoint {
                    year: year_from_value(index, &r.year)?,
                    count: count_from_value(index, &r.count)?,
                })
            })
            .collect::<Result<Vec<_>, DataError>>()?;
        Self::from_points(points)
    }

    /// Parse a JSON array of `{year, count}` records.
    pub fn from_json_str(json: &str) -> Result<Self, DataError> {
        let records: Vec<RawRecord> = serde_json::from_str(json)?;
        Self::from_records(&records)
    }

    /// Build a series from already-typed points.
    pub fn from_points(mut points: Vec<SeriesPoint>) -> Result<Self, DataError> {
        if points.is_empty() {
            return Err(DataError::EmptySeries);
        }
        let before = points.len();
        // Stable sort keeps input order within a year; keep the last of each run.
        points.sort_by_key(|p| p.year);
        let mut deduped: Vec<SeriesPoint> = Vec::with_capacity(points.len());
        for p in points {
            match deduped.last_mut() {
                Some(last) if last.year == p.year => *last = p,
                _ => deduped.push(p),
            }
        }
        if deduped.len() != before {
            log::warn!(
                "series: collapsed {} duplicate year record(s), last one wins",
                before - deduped.len()
            );
        }
        Ok(Self { points: deduped })
    }

    pub fn points(&self) -> &[SeriesPoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Always false; kept for the `len`/`is_empty` pair.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> SeriesPoint {
        self.points[0]
    }

    pub fn last(&self) -> SeriesPoint {
        self.points[self.points.len() - 1]
    }

    /// `[first year, last year]`.
    pub fn year_range(&self) -> (NaiveDateTime, NaiveDateTime) {
        (self.first().year, self.last().year)
    }

    /// Largest count anywhere in the series.
    pub fn max_count(&self) -> u64 {
        self.points.iter().map(|p| p.count).max().unwrap_or(0)
    }

    /// Index of the first point whose year is strictly after `t`.
    pub fn bisect_right(&self, t: NaiveDateTime) -> usize {
        self.points.partition_point(|p| p.year <= t)
    }

    /// Count of the series line at instant `t`, linearly interpolated between
    /// the two points bracketing it.
    ///
    /// Returns 0 before the first point and after the last one.
    pub fn value_at(&self, t: NaiveDateTime) -> f64 {
        let i = self.bisect_right(t);
        if i == 0 {
            return 0.0;
        }
        let before = self.points[i - 1];
        if before.year == t {
            return before.count as f64;
        }
        let Some(after) = self.points.get(i) else {
            return 0.0;
        };
        let span = (after.year - before.year).num_milliseconds() as f64;
        let offset = (t - before.year).num_milliseconds() as f64;
        let frac = offset / span;
        before.count as f64 + (after.count as f64 - before.count as f64) * frac
    }

    /// Points whose year lies in `[start, end]`, both ends inclusive.
    pub fn within(&self, start: NaiveDateTime, end: NaiveDateTime) -> &[SeriesPoint] {
        let lo = self.points.partition_point(|p| p.year < start);
        let hi = self.points.partition_point(|p| p.year <= end);
        if lo >= hi {
            &[]
        } else {
            &self.points[lo..hi]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dt_utils::years::{offset_millis, year_start, ONE_YEAR};

    fn y(year: i32) -> NaiveDateTime {
        year_start(year).unwrap()
    }

    fn sample() -> Series {
        Series::from_json_str(
            r#"[{"year":"2003","count":20},{"year":"2000","count":5},
                {"year":"2001","count":10},{"year":"2002","count":0}]"#,
        )
        .unwrap()
    }

    #[test]
    fn test_sorted_ascending() {
        let s = sample();
        let years: Vec<_> = s.points().iter().map(|p| p.year).collect();
        assert_eq!(years, vec![y(2000), y(2001), y(2002), y(2003)]);
        assert_eq!(s.year_range(), (y(2000), y(2003)));
        assert_eq!(s.max_count(), 20);
    }

    #[test]
    fn test_empty_series_rejected() {
        assert!(matches!(
            Series::from_json_str("[]"),
            Err(DataError::EmptySeries)
        ));
    }

    #[test]
    fn test_bad_record_reports_index() {
        let err = Series::from_json_str(r#"[{"year":"2000","count":1},{"year":"x","count":1}]"#)
            .unwrap_err();
        assert!(
            matches!(err, DataError::InvalidYear { index: 1, .. }),
            "unexpected error: {err}"
        );
    }

    #[test]
    fn test_duplicate_years_last_wins() {
        let s = Series::from_json_str(
            r#"[{"year":"2000","count":1},{"year":"2001","count":2},{"year":"2000","count":7}]"#,
        )
        .unwrap();
        assert_eq!(s.len(), 2);
        assert_eq!(s.points()[0].count, 7, "later record should replace earlier one");
    }

    #[test]
    fn test_value_at_on_points_and_between() {
        let s = sample();
        assert_eq!(s.value_at(y(2001)), 10.0);
        assert_eq!(s.value_at(y(2002)), 0.0);
        assert_eq!(s.value_at(y(2003)), 20.0, "last point itself is not 'after' the series");

        // 2002 is 365 days long, so half of ONE_YEAR lands exactly in the middle.
        let mid = offset_millis(&y(2002), ONE_YEAR.num_milliseconds() as f64 / 2.0);
        assert!((s.value_at(mid) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_value_at_outside_is_zero() {
        let s = sample();
        assert_eq!(s.value_at(y(1990)), 0.0);
        assert_eq!(s.value_at(y(2010)), 0.0);
    }

    #[test]
    fn test_within_is_inclusive() {
        let s = sample();
        let counts: Vec<_> = s.within(y(2001), y(2002)).iter().map(|p| p.count).collect();
        assert_eq!(counts, vec![10, 0]);
        assert!(s.within(y(2005), y(2009)).is_empty());
    }
}
