//! "Zoom to:" preset buttons.

use crate::state::AppState;
use dioxus::prelude::*;

/// Preset names with whether they are currently offered.
const PRESETS: &[(&str, bool)] = &[("month", false), ("year", false), ("reset", true)];

/// One button per preset. Disabled presets are shown greyed out.
#[component]
pub fn PresetButtons() -> Element {
    let mut state = use_context::<AppState>();

    let mut jump = move |name: &'static str| {
        let result = state.with_view(|v| v.jump_to_preset_named(name));
        if let Some(Err(e)) = result {
            log::warn!("preset `{}` rejected: {}", name, e);
            state.error_msg.set(Some(e.to_string()));
        }
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; gap: 8px; align-items: center;",
            span { style: "font-weight: bold;", "Zoom to: " }
            for (name, enabled) in PRESETS.iter().copied() {
                button {
                    key: "{name}",
                    class: "scale_button",
                    disabled: !enabled,
                    onclick: move |_| jump(name),
                    "{name}"
                }
            }
        }
    }
}
