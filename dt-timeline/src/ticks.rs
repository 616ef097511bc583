//! Year ticks for the x-axis.

use crate::extent::Extent;
use chrono::{Datelike, NaiveDateTime};
use dt_utils::years::{year_ceil, year_start};

/// One tick per January 1st in `[ceil(start), end)`, thinned so that at most
/// `floor(pixel_width / label_width)` labels are kept. Thinning keeps every
/// `ceil(n / max)`-th tick starting with the first.
pub fn year_ticks(extent: &Extent, pixel_width: f64, label_width: f64) -> Vec<NaiveDateTime> {
    let max_labels = if label_width > 0.0 {
        ((pixel_width / label_width).floor() as usize).max(1)
    } else {
        usize::MAX
    };

    let mut times = Vec::new();
    let mut next = year_ceil(&extent.start);
    while let Some(t) = next {
        if t >= extent.end {
            break;
        }
        times.push(t);
        next = year_start(t.year() + 1);
    }

    if times.len() > max_labels {
        let step = times.len().div_ceil(max_labels);
        times = times.into_iter().step_by(step).collect();
    }
    times
}
