//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use dt_data::CategoryPoint;
use dt_timeline::TimelineView;

/// Value of `selected_category` when no category line is shown.
pub const NO_CATEGORY: &str = "";

/// Shared application state for timeline chart apps.
#[derive(Clone, Copy)]
pub struct AppState {
    /// The timeline (None until the series is loaded)
    pub view: Signal<Option<TimelineView>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if something went wrong
    pub error_msg: Signal<Option<String>>,
    /// Per-category points offered by the category selector
    pub category_points: Signal<Vec<CategoryPoint>>,
    /// Category whose line is drawn, or `NO_CATEGORY`
    pub selected_category: Signal<String>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            view: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            category_points: Signal::new(Vec::new()),
            selected_category: Signal::new(NO_CATEGORY.to_string()),
        }
    }

    /// Run `f` against the loaded view. Returns None before loading finishes.
    pub fn with_view<R>(&mut self, f: impl FnOnce(&mut TimelineView) -> R) -> Option<R> {
        self.view.write().as_mut().map(f)
    }

    /// Distinct categories in `category_points`, sorted.
    pub fn categories(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .category_points
            .read()
            .iter()
            .map(|p| p.category.clone())
            .collect();
        names.sort();
        names.dedup();
        names
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
