//! Reusable Dioxus RSX components for timeline chart apps.

mod category_selector;
mod chart_header;
mod error_display;
mod loading_spinner;
mod preset_buttons;
mod timeline_container;
mod window_readout;

pub use category_selector::CategorySelector;
pub use chart_header::ChartHeader;
pub use error_display::ErrorDisplay;
pub use loading_spinner::LoadingSpinner;
pub use preset_buttons::PresetButtons;
pub use timeline_container::TimelineContainer;
pub use window_readout::WindowReadout;
