//! Time extents: the fixed domain and the movable window over it.

use chrono::{NaiveDateTime, TimeDelta};
use dt_utils::years::{format_year, offset_millis, to_millis};

/// A closed time interval `[start, end]` with `start <= end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Extent {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl Extent {
    /// Build an extent from two bounds in either order.
    pub fn new(a: NaiveDateTime, b: NaiveDateTime) -> Self {
        if a <= b {
            Self { start: a, end: b }
        } else {
            Self { start: b, end: a }
        }
    }

    pub fn span(&self) -> TimeDelta {
        self.end - self.start
    }

    pub fn span_millis(&self) -> f64 {
        to_millis(&self.end) - to_millis(&self.start)
    }

    pub fn contains(&self, t: NaiveDateTime) -> bool {
        self.start <= t && t <= self.end
    }

    /// Whether both bounds of `self` lie inside `outer`.
    pub fn is_within(&self, outer: &Extent) -> bool {
        outer.contains(self.start) && outer.contains(self.end)
    }

    pub fn intersects(&self, other: &Extent) -> bool {
        self.start <= other.end && other.start <= self.end
    }

    /// Move both bounds by `ms` milliseconds.
    pub fn shifted(&self, ms: f64) -> Self {
        Self {
            start: offset_millis(&self.start, ms),
            end: offset_millis(&self.end, ms),
        }
    }

    /// Pull an extent back inside `domain`.
    ///
    /// A bound below the domain snaps to its start and a bound above snaps to
    /// its end. A bound that overshot past the *opposite* edge lands
    /// `min_span` inside that edge instead. Whenever anything had to move,
    /// the result is widened to at least `min_span` (domain permitting) by
    /// pushing the bound that did not sit on the domain start.
    ///
    /// Returns the clamped extent and whether clamping happened.
    pub fn clamp_into(self, domain: &Extent, min_span: TimeDelta) -> (Self, bool) {
        if self.is_within(domain) {
            return (self, false);
        }

        let mut start = if self.start < domain.start {
            domain.start
        } else if self.start > domain.end {
            domain
                .end
                .checked_sub_signed(min_span)
                .unwrap_or(domain.start)
        } else {
            self.start
        };
        let mut end = if self.end > domain.end {
            domain.end
        } else if self.end < domain.start {
            domain
                .start
                .checked_add_signed(min_span)
                .unwrap_or(domain.end)
        } else {
            self.end
        };
        start = start.clamp(domain.start, domain.end);
        end = end.clamp(domain.start, domain.end);

        if end - start < min_span {
            if start == domain.start {
                end = start
                    .checked_add_signed(min_span)
                    .map_or(domain.end, |e| e.min(domain.end));
            } else {
                start = end
                    .checked_sub_signed(min_span)
                    .map_or(domain.start, |s| s.max(domain.start));
            }
        }
        (Self::new(start, end), true)
    }

    /// "1850 - 1900", or just "1850" when both bounds fall in the same year.
    pub fn year_label(&self) -> String {
        let start = format_year(&self.start);
        let end = format_year(&self.end);
        if start == end {
            start
        } else {
            format!("{start} - {end}")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dt_utils::years::{year_start, ONE_YEAR};

    fn y(year: i32) -> NaiveDateTime {
        year_start(year).unwrap()
    }

    fn domain() -> Extent {
        Extent::new(y(2000), y(2010))
    }

    #[test]
    fn test_new_orders_bounds() {
        let e = Extent::new(y(2005), y(2001));
        assert_eq!(e.start, y(2001));
        assert_eq!(e.end, y(2005));
    }

    #[test]
    fn test_inside_is_untouched() {
        let e = Extent::new(y(2002), y(2002));
        assert_eq!(e.clamp_into(&domain(), ONE_YEAR), (e, false));
    }

    #[test]
    fn test_left_overshoot_keeps_one_year() {
        let (e, clamped) = Extent::new(y(1995), y(2000)).clamp_into(&domain(), ONE_YEAR);
        assert!(clamped);
        assert_eq!(e.start, y(2000));
        assert_eq!(e.end, y(2000) + ONE_YEAR);
    }

    #[test]
    fn test_right_overshoot_keeps_one_year() {
        let (e, clamped) = Extent::new(y(2012), y(2015)).clamp_into(&domain(), ONE_YEAR);
        assert!(clamped);
        assert_eq!(e.end, y(2010));
        assert_eq!(e.start, y(2010) - ONE_YEAR);
    }

    #[test]
    fn test_partial_overshoot_widens_from_the_free_side() {
        let near_end = y(2009) + TimeDelta::days(300);
        let (e, _) = Extent::new(near_end, y(2011)).clamp_into(&domain(), ONE_YEAR);
        assert_eq!(e.end, y(2010));
        assert_eq!(e.span(), ONE_YEAR);

        let (e, _) = Extent::new(y(1990), y(2000) + TimeDelta::days(10)).clamp_into(&domain(), ONE_YEAR);
        assert_eq!(e.start, y(2000));
        assert_eq!(e.span(), ONE_YEAR);
    }

    #[test]
    fn test_wide_overshoot_becomes_domain() {
        let (e, clamped) = Extent::new(y(1900), y(2100)).clamp_into(&domain(), ONE_YEAR);
        assert!(clamped);
        assert_eq!(e, domain());
    }

    #[test]
    fn test_short_domain_caps_span() {
        let tiny = Extent::new(y(2000), y(2000));
        let (e, _) = Extent::new(y(1999), y(2003)).clamp_into(&tiny, ONE_YEAR);
        assert_eq!(e, tiny);
    }

    #[test]
    fn test_year_label() {
        assert_eq!(domain().year_label(), "2000 - 2010");
        assert_eq!(Extent::new(y(2000), y(2000) + TimeDelta::days(3)).year_label(), "2000");
    }
}
