//! Timeline surface exported to page script through `wasm-bindgen`.
//!
//! Each `TimelineHandle` owns one view and mounts into one container.
//! Methods that change what is drawn re-mount the SVG before returning.

use crate::js_bridge;
use dt_data::CategoryPoint;
use dt_timeline::{HighlightOutcome, TimelineConfig, TimelineView};
use dt_utils::years::parse_year;
use wasm_bindgen::prelude::*;

#[wasm_bindgen]
pub struct TimelineHandle {
    view: TimelineView,
}

#[wasm_bindgen]
impl TimelineHandle {
    /// Build a timeline from a JSON `[{year, count}]` array and draw it into
    /// `#container_id`. `config_json` overrides the default layout.
    pub fn initialize(
        container_id: &str,
        series_json: &str,
        config_json: Option<String>,
    ) -> Result<TimelineHandle, JsError> {
        let config = match config_json {
            Some(json) => TimelineConfig::from_json_str(&json)?,
            None => TimelineConfig::default(),
        };
        let handle = Self {
            view: TimelineView::from_json(container_id, series_json, config)?,
        };
        handle.render()?;
        Ok(handle)
    }

    /// Shade `[start, end]` (years or `YYYY-MM-DD` dates). Returns whether a
    /// rectangle was added.
    pub fn highlight_range(
        &mut self,
        start: &str,
        end: &str,
        category: &str,
        exclusive: bool,
    ) -> Result<bool, JsError> {
        let start = parse_year(start).map_err(|e| JsError::new(&e.to_string()))?;
        let end = parse_year(end).map_err(|e| JsError::new(&e.to_string()))?;
        match self.view.highlight_range(start, end, category, exclusive) {
            HighlightOutcome::Drawn(_) => {
                self.render()?;
                Ok(true)
            }
            HighlightOutcome::Duplicate => Ok(false),
            HighlightOutcome::OutsideWindow => {
                js_bridge::console_warn(&format!(
                    "highlight {category} outside the window {}",
                    self.view.readout()
                ));
                Ok(false)
            }
        }
    }

    /// Replace the category lines with the series in a JSON
    /// `[{year, category, value}]` array.
    pub fn plot_category_series(&mut self, points_json: &str) -> Result<(), JsError> {
        let points = CategoryPoint::from_json_str(points_json)?;
        self.view.plot_category_series(&points);
        self.render()
    }

    pub fn clear_highlights(&mut self, reset_window: bool, exclusive_only: bool) -> Result<(), JsError> {
        self.view.clear_highlights(reset_window, exclusive_only);
        self.render()
    }

    pub fn raise_selection_handles(&mut self) -> Result<(), JsError> {
        self.view.raise_selection_handles();
        self.render()
    }

    pub fn jump_to_preset(&mut self, name: &str) -> Result<(), JsError> {
        self.view.jump_to_preset_named(name)?;
        self.render()
    }

    /// Drop overlays, rebuild the brush and show the whole domain.
    pub fn recreate(&mut self) -> Result<(), JsError> {
        self.view.recreate();
        self.render()
    }

    /// The "1850 - 1900" window readout.
    pub fn readout(&self) -> String {
        self.view.readout()
    }

    /// The current SVG document, without mounting it.
    pub fn svg(&self) -> String {
        self.view.render_svg()
    }

    /// Mount the current SVG into the container.
    pub fn render(&self) -> Result<(), JsError> {
        js_bridge::mount_svg(self.view.container(), &self.view.render_svg())?;
        Ok(())
    }
}
