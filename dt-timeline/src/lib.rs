//! Windowed timeline view over a count-by-year series.
//!
//! A [`TimelineView`] owns a fixed-size context chart (area + line over the
//! full year range), a draggable window ("brush") over that range, and a
//! y-axis that is refitted to whatever the window currently shows. Page code
//! can lay highlight rectangles and per-category polylines over the chart;
//! the scene keeps those below the brush handles at all times.
//!
//! Rendering produces a standalone SVG document (see [`render`]); mounting it
//! into the page is left to the UI crate.
//!
//! ```rust
//! use dt_timeline::{Extent, TimelineConfig, TimelineView};
//! use dt_utils::years::year_start;
//!
//! let json = r#"[{"year":"2000","count":5},{"year":"2001","count":10},
//!                {"year":"2002","count":0},{"year":"2003","count":20}]"#;
//! let mut view = TimelineView::from_json("timeline", json, TimelineConfig::default()).unwrap();
//!
//! let window = Extent::new(year_start(2001).unwrap(), year_start(2002).unwrap());
//! view.on_window_change(Some(window));
//! assert_eq!(view.y_domain(), (0.0, 10.5));
//! ```

pub mod brush;
pub mod config;
pub mod error;
pub mod extent;
pub mod palette;
pub mod render;
pub mod scale;
pub mod scene;
pub mod ticks;
mod view;

pub use config::{Margin, TimelineConfig};
pub use error::TimelineError;
pub use extent::Extent;
pub use palette::Palette;
pub use brush::PressRegion;
pub use render::preset_button_at;
pub use scene::{HighlightOutcome, Layer};
pub use view::{Preset, TimelineView};
