use crate::brush::{press_region, BrushDrag, BrushTarget, PressRegion};
use crate::config::TimelineConfig;
use crate::error::TimelineError;
use crate::extent::Extent;
use crate::palette::Palette;
use crate::scale::{LinearScale, TimeScale};
use crate::scene::{CategoryLine, HighlightOutcome, HighlightRect, Item, Scene};
use crate::ticks::year_ticks;
use chrono::NaiveDateTime;
use dt_data::{group_by_category, CategoryPoint, RawRecord, Series};
use dt_utils::years::{offset_millis, to_millis};
use std::str::FromStr;

/// Pixel tolerance when comparing highlight bounds for duplicates.
const SAME_PX: f64 = 1e-6;

/// Named window presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    /// Show the whole domain.
    Reset,
}

impl FromStr for Preset {
    type Err = TimelineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reset" => Ok(Preset::Reset),
            "month" | "year" => Err(TimelineError::DisabledPreset(s.to_string())),
            other => Err(TimelineError::UnknownPreset(other.to_string())),
        }
    }
}

/// A drag, pan or zoom that has started but not yet been committed.
#[derive(Debug, Clone, PartialEq)]
struct Gesture {
    /// Window to restore on cancel.
    committed: Extent,
    brush: Option<BrushDrag>,
    /// Pointer x where a pane drag started.
    pan_origin: Option<f64>,
    /// The brush is currently cleared.
    empty: bool,
}

/// Context chart with a draggable window and a y-axis fitted to the window.
///
/// The view is single-owner state: every mutation goes through `&mut self`,
/// and nothing is shared with other views.
#[derive(Debug, Clone)]
pub struct TimelineView {
    container: String,
    config: TimelineConfig,
    palette: Palette,
    series: Series,
    domain: Extent,
    window: Extent,
    x: TimeScale,
    y: LinearScale,
    visible_max: f64,
    gesture: Option<Gesture>,
    brush_generation: u32,
    revision: u64,
    scene: Scene,
}

impl TimelineView {
    /// Build a view that will draw into the container with id `container`.
    ///
    /// The domain is fixed here from the series' first and last year and the
    /// window starts out covering all of it.
    pub fn new(container: &str, series: Series, config: TimelineConfig) -> Result<Self, TimelineError> {
        if container.trim().is_empty() {
            return Err(TimelineError::MissingContainer(container.to_string()));
        }
        config.validate()?;

        let (min, max) = series.year_range();
        let domain = Extent::new(min, max);
        let x = TimeScale::new(domain, (0.0, config.plot_width()));
        let y = LinearScale::new(
            (0.0, series.max_count() as f64),
            (config.plot_height(), 0.0),
        );
        let palette = Palette::with_overrides(&config.palette);

        let mut view = Self {
            container: container.to_string(),
            config,
            palette,
            series,
            domain,
            window: domain,
            x,
            y,
            visible_max: 0.0,
            gesture: None,
            brush_generation: 0,
            revision: 0,
            scene: Scene::default(),
        };
        view.recompute_y_domain();
        log::info!(
            "timeline `{}`: {} years, domain {}",
            view.container,
            view.series.len(),
            view.domain.year_label()
        );
        Ok(view)
    }

    /// Validate raw `{year, count}` records and build a view from them.
    pub fn initialize(
        container: &str,
        records: &[RawRecord],
        config: TimelineConfig,
    ) -> Result<Self, TimelineError> {
        Self::new(container, Series::from_records(records)?, config)
    }

    /// Parse a JSON array of `{year, count}` records and build a view.
    pub fn from_json(container: &str, json: &str, config: TimelineConfig) -> Result<Self, TimelineError> {
        Self::new(container, Series::from_json_str(json)?, config)
    }

    pub fn container(&self) -> &str {
        &self.container
    }

    pub fn config(&self) -> &TimelineConfig {
        &self.config
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn series(&self) -> &Series {
        &self.series
    }

    pub fn domain(&self) -> Extent {
        self.domain
    }

    pub fn window(&self) -> Extent {
        self.window
    }

    pub fn x_scale(&self) -> &TimeScale {
        &self.x
    }

    pub fn y_scale(&self) -> &LinearScale {
        &self.y
    }

    pub fn y_domain(&self) -> (f64, f64) {
        self.y.domain()
    }

    /// Largest value visible in the window, before headroom.
    pub fn visible_max(&self) -> f64 {
        self.visible_max
    }

    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// Bumped every time the brush interaction is rebuilt.
    pub fn brush_generation(&self) -> u32 {
        self.brush_generation
    }

    /// Bumped every time a window change is committed.
    pub fn revision(&self) -> u64 {
        self.revision
    }

    pub fn is_gesture_active(&self) -> bool {
        self.gesture.is_some()
    }

    /// Window bounds in plot pixels.
    pub fn selection_px(&self) -> (f64, f64) {
        (self.x.apply(self.window.start), self.x.apply(self.window.end))
    }

    /// The "1850 - 1900" text shown next to "Showing data from:".
    pub fn readout(&self) -> String {
        self.window.year_label()
    }

    /// Year ticks for the part of the current window inside the domain,
    /// positioned with the context scale.
    pub fn x_ticks(&self) -> Vec<NaiveDateTime> {
        if !self.window.intersects(&self.domain) {
            return Vec::new();
        }
        let visible = Extent::new(
            self.window.start.max(self.domain.start),
            self.window.end.min(self.domain.end),
        );
        let width = self.x.apply(visible.end) - self.x.apply(visible.start);
        year_ticks(&visible, width, self.config.tick_label_width)
    }

    /// Which interaction a press at plot y-coordinate `y` starts.
    pub fn press_region(&self, y: f64) -> PressRegion {
        press_region(y, self.config.plot_height())
    }

    /// Zero and the visible maximum.
    pub fn y_ticks(&self) -> [f64; 2] {
        [0.0, self.visible_max]
    }

    /// Commit a new window.
    ///
    /// `None` is an empty selection and means the whole domain. Bounds that
    /// leave the domain are clamped (see [`Extent::clamp_into`]), then the
    /// y-axis is refitted. Returns the window now in effect.
    pub fn on_window_change(&mut self, candidate: Option<Extent>) -> Extent {
        let requested = candidate.unwrap_or(self.domain);
        let (window, clamped) = requested.clamp_into(&self.domain, self.config.min_span());
        if clamped {
            log::debug!(
                "timeline `{}`: clamped {:?} to {:?}",
                self.container,
                requested,
                window
            );
        }
        self.window = window;
        self.recompute_y_domain();
        self.revision += 1;
        log::debug!(
            "timeline `{}`: window {} y-domain {:?}",
            self.container,
            self.readout(),
            self.y.domain()
        );
        window
    }

    /// Refit the y-axis to the data under the current window.
    ///
    /// The maximum is taken over the line's interpolated value at both window
    /// edges and every point inside the window. A maximum of zero falls back
    /// to the series maximum so the axis never collapses.
    fn recompute_y_domain(&mut self) {
        let Extent { start, end } = self.window;
        let left = self.series.value_at(start);
        let right = self.series.value_at(end);
        let mut max = self
            .series
            .within(start, end)
            .iter()
            .map(|p| p.count as f64)
            .fold(left.max(right), f64::max);
        if max == 0.0 {
            max = self.series.max_count() as f64;
        }
        if max == 0.0 {
            // All-zero series.
            max = 1.0;
        }
        self.visible_max = max;
        self.y = LinearScale::new(
            (0.0, max * self.config.headroom),
            (self.config.plot_height(), 0.0),
        );
    }

    /// Apply an uncommitted window for the current gesture frame.
    fn preview(&mut self, window: Extent) {
        self.window = window;
        self.recompute_y_domain();
    }

    fn ensure_gesture(&mut self) -> &mut Gesture {
        let committed = self.window;
        self.gesture.get_or_insert(Gesture {
            committed,
            brush: None,
            pan_origin: None,
            empty: false,
        })
    }

    /// Start a gesture without touching the brush (e.g. a pan on the plot).
    pub fn begin_gesture(&mut self) {
        self.ensure_gesture();
    }

    /// Press on the brush row at plot x-coordinate `x`.
    ///
    /// A press on the empty track clears the brush; releasing without moving
    /// then commits the whole domain.
    pub fn begin_brush_drag(&mut self, x: f64) {
        let drag = BrushDrag::new(self.selection_px(), x, self.config.handle_grab_px);
        let gesture = self.ensure_gesture();
        gesture.brush = Some(drag);
        gesture.empty = drag.target == BrushTarget::Outside;
    }

    /// Pointer moved to `x` while the brush is held. Returns false when no
    /// brush drag is in progress.
    pub fn drag_brush_to(&mut self, x: f64) -> bool {
        let Some(drag) = self.gesture.as_ref().and_then(|g| g.brush) else {
            return false;
        };
        match drag.selection_at(x) {
            Some((x0, x1)) => {
                let window = Extent::new(self.x.invert(x0), self.x.invert(x1));
                if let Some(g) = self.gesture.as_mut() {
                    g.empty = false;
                }
                self.preview(window);
            }
            None => {
                if let Some(g) = self.gesture.as_mut() {
                    g.empty = true;
                }
                self.preview(self.domain);
            }
        }
        true
    }

    /// Milliseconds the window moves for a pointer movement of `dx` pixels.
    fn pan_millis(&self, dx: f64) -> f64 {
        -dx * self.domain.span_millis() / self.config.plot_width()
    }

    /// Pan by `dx` plot pixels on the context scale. Positive `dx` moves the
    /// window earlier.
    pub fn pan_by(&mut self, dx: f64) {
        if dx == 0.0 || !dx.is_finite() {
            return;
        }
        self.ensure_gesture();
        self.preview(self.window.shifted(self.pan_millis(dx)));
    }

    /// Press on the pane (outside the brush row) at plot x-coordinate `x`.
    pub fn begin_pan(&mut self, x: f64) {
        self.ensure_gesture().pan_origin = Some(x);
    }

    /// Pointer moved to `x` while the pane is held: the window follows the
    /// pointer from where it was at the press. Returns false when no pane
    /// drag is in progress.
    pub fn pan_to(&mut self, x: f64) -> bool {
        let Some((origin, committed)) = self
            .gesture
            .as_ref()
            .and_then(|g| g.pan_origin.map(|o| (o, g.committed)))
        else {
            return false;
        };
        if x.is_finite() {
            self.preview(committed.shifted(self.pan_millis(x - origin)));
        }
        true
    }

    /// Zoom around plot x-coordinate `anchor`; `factor > 1` zooms in. The
    /// instant under the anchor stays put when it lies inside the window.
    pub fn zoom_about(&mut self, anchor: f64, factor: f64) {
        if !(factor.is_finite() && factor > 0.0) || factor == 1.0 {
            return;
        }
        self.ensure_gesture();
        let w = self.window;
        let anchor_t = self.x.invert(anchor);
        let before = to_millis(&anchor_t) - to_millis(&w.start);
        let after = to_millis(&w.end) - to_millis(&anchor_t);
        let start = offset_millis(&anchor_t, -before / factor);
        let end = offset_millis(&anchor_t, after / factor);
        self.preview(Extent::new(start, end));
    }

    /// Finish the current gesture: clamp and commit. A no-op outside a gesture.
    pub fn end_gesture(&mut self) -> Extent {
        match self.gesture.take() {
            Some(g) => self.on_window_change((!g.empty).then_some(self.window)),
            None => self.window,
        }
    }

    /// Abort the current gesture and put back the last committed window.
    /// Does not count as a window change.
    pub fn cancel_gesture(&mut self) {
        if let Some(g) = self.gesture.take() {
            self.preview(g.committed);
        }
    }

    pub fn jump_to_preset(&mut self, preset: Preset) -> Extent {
        match preset {
            Preset::Reset => {
                self.gesture = None;
                self.clear_overlays();
                self.on_window_change(Some(self.domain))
            }
        }
    }

    /// [`Self::jump_to_preset`] by name, as wired to the preset buttons.
    pub fn jump_to_preset_named(&mut self, name: &str) -> Result<Extent, TimelineError> {
        Ok(self.jump_to_preset(name.parse()?))
    }

    /// Shade `[start, end]`, clipped to the window's pixel extent.
    ///
    /// An exclusive rectangle replaces any previous exclusive one. A request
    /// whose clipped bounds match a rectangle already on screen does nothing.
    pub fn highlight_range(
        &mut self,
        start: NaiveDateTime,
        end: NaiveDateTime,
        category: &str,
        exclusive: bool,
    ) -> HighlightOutcome {
        let range = Extent::new(start, end);
        if !range.intersects(&self.window) {
            return HighlightOutcome::OutsideWindow;
        }
        let (wx0, wx1) = self.selection_px();
        let x0 = self.x.apply(range.start).max(wx0);
        let x1 = self.x.apply(range.end).min(wx1);

        let duplicate = self
            .scene
            .highlights()
            .any(|(_, h)| (h.x0 - x0).abs() < SAME_PX && (h.x1 - x1).abs() < SAME_PX);
        if duplicate {
            return HighlightOutcome::Duplicate;
        }

        if exclusive {
            self.clear_exclusive();
        }
        let color = if exclusive {
            self.palette.exclusive_color()
        } else {
            self.palette.color_for(category)
        };
        let id = self.scene.insert(Item::Highlight(HighlightRect {
            x0,
            x1,
            category: category.to_string(),
            color: color.to_string(),
            exclusive,
        }));
        HighlightOutcome::Drawn(id)
    }

    /// Remove highlights.
    ///
    /// With `exclusive_only`, only the exclusive rectangle goes. Otherwise all
    /// overlays go, and with `reset_window` the brush is rebuilt and the
    /// window reset to the domain.
    pub fn clear_highlights(&mut self, reset_window: bool, exclusive_only: bool) {
        if exclusive_only {
            self.clear_exclusive();
            return;
        }
        self.clear_overlays();
        if reset_window {
            self.rebuild_brush();
            self.on_window_change(Some(self.domain));
        }
    }

    /// Replace the category polylines with one line per category in `points`.
    pub fn plot_category_series(&mut self, points: &[CategoryPoint]) {
        self.scene.retain(|it| !matches!(it, Item::CategoryLine(_)));
        for (category, run) in group_by_category(points) {
            let color = self.palette.color_for(&category).to_string();
            self.scene.insert(Item::CategoryLine(CategoryLine {
                points: run.iter().map(|p| (p.year, p.value)).collect(),
                category,
                color,
            }));
        }
    }

    /// Keep the brush handles above every overlay.
    ///
    /// The scene is stacked by layer on insertion, so this only restores the
    /// order if it was ever disturbed.
    pub fn raise_selection_handles(&mut self) {
        if !self.scene.is_stacked() {
            self.scene.restack();
        }
    }

    /// Start over: drop overlays, rebuild the brush, show the whole domain.
    pub fn recreate(&mut self) -> Extent {
        self.clear_overlays();
        self.rebuild_brush();
        self.on_window_change(Some(self.domain))
    }

    fn clear_exclusive(&mut self) {
        self.scene
            .retain(|it| !matches!(it, Item::Highlight(h) if h.exclusive));
    }

    fn clear_overlays(&mut self) {
        let removed = self.scene.retain(|it| !it.is_overlay());
        if removed > 0 {
            log::debug!("timeline `{}`: cleared {} overlay(s)", self.container, removed);
        }
    }

    fn rebuild_brush(&mut self) {
        self.gesture = None;
        self.brush_generation += 1;
    }

    /// Render the whole scene as a standalone SVG document.
    pub fn render_svg(&self) -> String {
        crate::render::render_svg(self)
    }
}
