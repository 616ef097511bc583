//! Linear scales mapping data space to pixels.

use crate::extent::Extent;
use chrono::NaiveDateTime;
use dt_utils::years::{offset_millis, to_millis};

/// Linear map from a time extent onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimeScale {
    domain: Extent,
    range: (f64, f64),
}

impl TimeScale {
    pub fn new(domain: Extent, range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> Extent {
        self.domain
    }

    pub fn range(&self) -> (f64, f64) {
        self.range
    }

    /// Pixel position of `t`. A zero-length domain maps everything to the
    /// start of the range.
    pub fn apply(&self, t: NaiveDateTime) -> f64 {
        let span = self.domain.span_millis();
        if span == 0.0 {
            return self.range.0;
        }
        let frac = (to_millis(&t) - to_millis(&self.domain.start)) / span;
        self.range.0 + frac * (self.range.1 - self.range.0)
    }

    /// Instant at pixel position `px`.
    pub fn invert(&self, px: f64) -> NaiveDateTime {
        let width = self.range.1 - self.range.0;
        if width == 0.0 {
            return self.domain.start;
        }
        let frac = (px - self.range.0) / width;
        offset_millis(&self.domain.start, frac * self.domain.span_millis())
    }
}

/// Linear map from a numeric domain onto a pixel range.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LinearScale {
    domain: (f64, f64),
    range: (f64, f64),
}

impl LinearScale {
    pub fn new(domain: (f64, f64), range: (f64, f64)) -> Self {
        Self { domain, range }
    }

    pub fn domain(&self) -> (f64, f64) {
        self.domain
    }

    pub fn apply(&self, v: f64) -> f64 {
        let span = self.domain.1 - self.domain.0;
        if span == 0.0 {
            return self.range.0;
        }
        let frac = (v - self.domain.0) / span;
        self.range.0 + frac * (self.range.1 - self.range.0)
    }

    pub fn invert(&self, px: f64) -> f64 {
        let width = self.range.1 - self.range.0;
        if width == 0.0 {
            return self.domain.0;
        }
        self.domain.0 + (px - self.range.0) / width * (self.domain.1 - self.domain.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dt_utils::years::year_start;

    #[test]
    fn test_time_scale_maps_ends_and_inverts() {
        let domain = Extent::new(year_start(2000).unwrap(), year_start(2010).unwrap());
        let x = TimeScale::new(domain, (0.0, 850.0));
        assert_eq!(x.apply(domain.start), 0.0);
        assert_eq!(x.apply(domain.end), 850.0);
        assert_eq!(x.invert(850.0), domain.end);
        assert_eq!(x.invert(x.apply(year_start(2004).unwrap())), year_start(2004).unwrap());
    }

    #[test]
    fn test_linear_scale_is_flipped_for_y() {
        let y = LinearScale::new((0.0, 20.0), (80.0, 0.0));
        assert_eq!(y.apply(0.0), 80.0);
        assert_eq!(y.apply(20.0), 0.0);
        assert_eq!(y.apply(10.0), 40.0);
        assert_eq!(y.invert(40.0), 10.0);
    }

    #[test]
    fn test_degenerate_domains() {
        let t = year_start(1900).unwrap();
        let x = TimeScale::new(Extent::new(t, t), (0.0, 100.0));
        assert_eq!(x.apply(t), 0.0);
        assert_eq!(LinearScale::new((5.0, 5.0), (80.0, 0.0)).apply(5.0), 80.0);
    }
}
