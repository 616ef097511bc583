//! Chart header component with title, y-axis caption and data source.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartHeaderProps {
    /// Chart title
    pub title: String,
    /// What the y-axis counts (e.g., "Plays premiered per year")
    #[props(default = String::new())]
    pub y_caption: String,
    /// Where the data comes from
    #[props(default = String::new())]
    pub source: String,
}

/// Header for chart sections. Empty captions are not rendered.
#[component]
pub fn ChartHeader(props: ChartHeaderProps) -> Element {
    rsx! {
        div {
            style: "margin-bottom: 8px;",
            h3 {
                style: "margin: 0 0 4px 0; font-size: 16px;",
                "{props.title}"
            }
            if !props.y_caption.is_empty() {
                p {
                    style: "margin: 0; font-size: 12px; color: #666;",
                    "Y-axis: {props.y_caption}"
                }
            }
            if !props.source.is_empty() {
                p {
                    style: "margin: 0; font-size: 11px; color: #888;",
                    "Source: {props.source}"
                }
            }
        }
    }
}
