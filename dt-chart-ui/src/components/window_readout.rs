//! "Showing data from: 1850 - 1900" line for the current window.

use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn WindowReadout() -> Element {
    let state = use_context::<AppState>();
    let readout = state.view.read().as_ref().map(|v| v.readout());

    rsx! {
        if let Some(dates) = readout {
            p {
                class: "window-readout",
                style: "margin: 4px 0; font-size: 12px;",
                "Showing data from: "
                strong { "{dates}" }
            }
        }
    }
}
