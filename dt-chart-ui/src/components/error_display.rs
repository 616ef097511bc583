//! Error display component.

use crate::state::AppState;
use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ErrorDisplayProps {
    pub message: String,
    /// Show a button that clears `AppState::error_msg`
    #[props(default = true)]
    pub dismissible: bool,
}

/// Displays an error message in a styled box.
#[component]
pub fn ErrorDisplay(props: ErrorDisplayProps) -> Element {
    let mut state = use_context::<AppState>();

    rsx! {
        div {
            class: "timeline-error",
            style: "display: flex; justify-content: space-between; padding: 12px 16px; margin: 8px 0; background: #FFEBEE; color: #C62828; border-radius: 4px; border: 1px solid #EF9A9A;",
            span {
                strong { "Error: " }
                "{props.message}"
            }
            if props.dismissible {
                button {
                    style: "border: none; background: none; color: inherit; cursor: pointer;",
                    onclick: move |_| state.error_msg.set(None),
                    "×"
                }
            }
        }
    }
}
