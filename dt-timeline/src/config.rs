//! Sizing and behaviour knobs for a timeline view.

use crate::error::TimelineError;
use chrono::TimeDelta;
use dt_utils::years::ONE_YEAR;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margin {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

/// Timeline configuration, read from JSON with camelCase keys.
///
/// Every field has a default, so `{}` is a valid config.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields, rename_all = "camelCase")]
pub struct TimelineConfig {
    /// Outer SVG width in pixels.
    pub width: f64,
    /// Outer SVG height in pixels.
    pub height: f64,
    /// Margins around the context plot.
    pub margin: Margin,
    /// Horizontal room reserved per year label when thinning ticks.
    pub tick_label_width: f64,
    /// Multiplier applied on top of the visible maximum.
    pub headroom: f64,
    /// Minimum window span kept when a window is clamped at a domain edge.
    pub min_span_days: i64,
    /// Distance in pixels within which a press grabs a brush edge.
    pub handle_grab_px: f64,
    pub highlight_opacity: f64,
    /// Category → colour overrides merged over the built-in palette.
    pub palette: BTreeMap<String, String>,
}

impl Default for TimelineConfig {
    fn default() -> Self {
        Self {
            width: 900.0,
            height: 150.0,
            margin: Margin {
                top: 50.0,
                right: 30.0,
                bottom: 20.0,
                left: 20.0,
            },
            tick_label_width: 42.0,
            headroom: 1.05,
            min_span_days: ONE_YEAR.num_days(),
            handle_grab_px: 4.0,
            highlight_opacity: 0.35,
            palette: BTreeMap::new(),
        }
    }
}

impl TimelineConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self, TimelineError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), TimelineError> {
        if self.plot_width().is_nan() || self.plot_width() <= 0.0 {
            return Err(TimelineError::Config(format!(
                "plot width must be positive, got {}",
                self.plot_width()
            )));
        }
        if self.plot_height().is_nan() || self.plot_height() <= 0.0 {
            return Err(TimelineError::Config(format!(
                "plot height must be positive, got {}",
                self.plot_height()
            )));
        }
        if self.headroom.is_nan() || self.headroom < 1.0 {
            return Err(TimelineError::Config(format!(
                "headroom must be at least 1.0, got {}",
                self.headroom
            )));
        }
        if self.min_span_days <= 0 || self.min_span_days > TimeDelta::MAX.num_days() {
            return Err(TimelineError::Config(format!(
                "minSpanDays must be between 1 and {}, got {}",
                TimeDelta::MAX.num_days(),
                self.min_span_days
            )));
        }
        Ok(())
    }

    /// Width of the plot area inside the margins.
    pub fn plot_width(&self) -> f64 {
        self.width - self.margin.left - self.margin.right
    }

    /// Height of the plot area inside the margins.
    pub fn plot_height(&self) -> f64 {
        self.height - self.margin.top - self.margin.bottom
    }

    /// Saturates for values `validate` would reject.
    pub fn min_span(&self) -> TimeDelta {
        TimeDelta::try_days(self.min_span_days).unwrap_or(TimeDelta::MAX)
    }
}
