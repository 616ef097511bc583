//! Plays per year
//!
//! Shows how many plays premiered each year as a context chart with a
//! draggable window. The y-axis follows the window, and one language can be
//! overlaid as its own line.
//!
//! Data flow:
//! 1. `build.rs` reads `fixtures/plays.csv` and counts plays per year and per
//!    year and language into two small JSON arrays.
//! 2. `include_str!` embeds both arrays into the WASM binary.
//! 3. On mount: build the `TimelineView` and load the language points.
//! 4. `TimelineContainer` re-mounts the SVG whenever the view changes.

use dioxus::prelude::*;
use dt_chart_ui::components::{
    CategorySelector, ChartHeader, ErrorDisplay, LoadingSpinner, PresetButtons, TimelineContainer,
    WindowReadout,
};
use dt_chart_ui::state::AppState;
use dt_data::CategoryPoint;
use dt_timeline::{TimelineConfig, TimelineView};

const PLAYS_BY_YEAR_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/plays_by_year.json"));
const PLAYS_BY_LANG_JSON: &str = include_str!(concat!(env!("OUT_DIR"), "/plays_by_lang.json"));

/// DOM id for the timeline container div.
const TIMELINE_CONTAINER_ID: &str = "plays-timeline";

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("plays-timeline-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Build the view once on mount.
    use_effect(move || {
        match TimelineView::from_json(TIMELINE_CONTAINER_ID, PLAYS_BY_YEAR_JSON, TimelineConfig::default()) {
            Ok(view) => state.view.set(Some(view)),
            Err(e) => {
                log::error!("cannot build timeline: {}", e);
                state.error_msg.set(Some(format!("No play data available: {e}")));
            }
        }
        match CategoryPoint::from_json_str(PLAYS_BY_LANG_JSON) {
            Ok(points) => state.category_points.set(points),
            Err(e) => log::warn!("language series unavailable: {}", e),
        }
        state.loading.set(false);
    });

    let has_view = state.view.read().is_some();

    rsx! {
        div {
            style: "max-width: 900px; margin: 0 auto; padding: 8px; font-family: system-ui, -apple-system, sans-serif;",

            if let Some(err) = state.error_msg.read().as_ref() {
                ErrorDisplay { message: err.clone() }
            }

            if *state.loading.read() {
                LoadingSpinner {}
            } else if has_view {
                ChartHeader {
                    title: "Plays per year".to_string(),
                    y_caption: "Number of plays premiered".to_string(),
                }

                TimelineContainer { id: TIMELINE_CONTAINER_ID.to_string() }
                WindowReadout {}

                div {
                    style: "margin-top: 12px; padding-top: 8px; border-top: 1px solid #e0e0e0; display: flex; gap: 24px;",
                    PresetButtons {}
                    CategorySelector {}
                }
                p {
                    style: "font-size: 11px; color: #888; margin-top: 4px;",
                    "Drag on the chart to pick a window, scroll to zoom, arrow keys to pan."
                }
            }
        }
    }
}
