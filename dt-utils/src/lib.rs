//! Shared utility functions for drama timeline crates.

/// Year utility functions
pub mod years {
    use chrono::{Datelike, NaiveDate, NaiveDateTime, TimeDelta};

    /// One year's worth of time, as used when clamping a window at a domain edge.
    /// 365 days (31,536,000,000 ms); leap days are ignored.
    pub const ONE_YEAR: TimeDelta = TimeDelta::days(365);

    /// Midnight on January 1st of `year`, or `None` if chrono cannot represent it.
    pub fn year_start(year: i32) -> Option<NaiveDateTime> {
        NaiveDate::from_ymd_opt(year, 1, 1).and_then(|d| d.and_hms_opt(0, 0, 0))
    }

    /// Parse a year marker.
    ///
    /// Accepts a bare year (`"1850"`, `"-20"`) or an ISO date (`"1850-03-01"`),
    /// whose year is kept. The result is normalized to January 1st.
    pub fn parse_year(s: &str) -> anyhow::Result<NaiveDateTime> {
        let s = s.trim();
        let year = match s.parse::<i32>() {
            Ok(year) => year,
            Err(_) => NaiveDate::parse_from_str(s, "%Y-%m-%d")?.year(),
        };
        year_start(year).ok_or_else(|| anyhow::anyhow!("year {year} out of range"))
    }

    /// Format an instant as its four-digit year, e.g. "1850".
    pub fn format_year(t: &NaiveDateTime) -> String {
        t.format("%Y").to_string()
    }

    /// Milliseconds since the Unix epoch, as a float for scale arithmetic.
    pub fn to_millis(t: &NaiveDateTime) -> f64 {
        t.and_utc().timestamp_millis() as f64
    }

    /// Offset `t` by a (possibly fractional, possibly negative) number of
    /// milliseconds, saturating at chrono's representable range. NaN leaves
    /// `t` unchanged.
    pub fn offset_millis(t: &NaiveDateTime, ms: f64) -> NaiveDateTime {
        if ms.is_nan() {
            return *t;
        }
        let delta = if ms.abs() < i64::MAX as f64 {
            TimeDelta::try_milliseconds(ms.round() as i64)
        } else {
            None
        };
        delta
            .and_then(|d| t.checked_add_signed(d))
            .unwrap_or(if ms < 0.0 {
                NaiveDateTime::MIN
            } else {
                NaiveDateTime::MAX
            })
    }

    /// Smallest January 1st that is `>= t` (d3's `time.year.ceil`).
    pub fn year_ceil(t: &NaiveDateTime) -> Option<NaiveDateTime> {
        let start = year_start(t.year())?;
        if start == *t {
            Some(start)
        } else {
            year_start(t.year() + 1)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_parse_bare_year() {
            let t = parse_year("1850").unwrap();
            assert_eq!(t, year_start(1850).unwrap());
            assert_eq!(format_year(&t), "1850");
        }

        #[test]
        fn test_parse_iso_date_keeps_year_only() {
            let t = parse_year(" 1912-06-30 ").unwrap();
            assert_eq!(t, year_start(1912).unwrap());
        }

        #[test]
        fn test_parse_garbage_fails() {
            assert!(parse_year("eighteen-fifty").is_err());
            assert!(parse_year("").is_err());
        }

        #[test]
        fn test_year_ceil() {
            let jan1 = year_start(2000).unwrap();
            assert_eq!(year_ceil(&jan1), Some(jan1));

            let mid = offset_millis(&jan1, 1000.0);
            assert_eq!(year_ceil(&mid), year_start(2001));
        }

        #[test]
        fn test_offset_millis_saturates() {
            let t = year_start(2001).unwrap();
            assert_eq!(offset_millis(&t, 1e30), NaiveDateTime::MAX);
            assert_eq!(offset_millis(&t, -1e30), NaiveDateTime::MIN);
            // i64::MIN milliseconds is not a valid TimeDelta.
            assert_eq!(offset_millis(&t, i64::MIN as f64), NaiveDateTime::MIN);
            assert_eq!(offset_millis(&t, f64::INFINITY), NaiveDateTime::MAX);
            assert_eq!(offset_millis(&t, f64::NAN), t);
        }

        #[test]
        fn test_offset_millis_round_trip() {
            let t = year_start(2001).unwrap();
            let ms = ONE_YEAR.num_milliseconds() as f64;
            assert_eq!(offset_millis(&t, ms), year_start(2002).unwrap());
            assert_eq!(offset_millis(&t, -ms), year_start(2000).unwrap() + TimeDelta::days(1));
        }
    }
}
