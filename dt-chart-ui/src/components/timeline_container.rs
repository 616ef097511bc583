//! Timeline container: owns the DOM node the SVG is mounted into and maps
//! pointer input onto the view's gesture API.
//!
//! - click on a preset button: jump to that preset
//! - drag on the brush row: move, resize or redraw the brush
//! - drag elsewhere on the chart (e.g. the axis band): pan
//! - wheel: zoom about the pointer
//! - left/right arrows: pan by a tenth of the plot
//! - escape: abandon the drag in progress

use crate::js_bridge;
use crate::state::AppState;
use dioxus::prelude::*;
use dt_timeline::{preset_button_at, PressRegion};

/// Wheel zoom per notch.
const ZOOM_STEP: f64 = 1.2;

/// What the held mouse button is driving.
#[derive(Clone, Copy, PartialEq)]
enum DragMode {
    Brush,
    Pan,
}

#[derive(Props, Clone, PartialEq)]
pub struct TimelineContainerProps {
    /// The DOM id of the div the SVG is mounted into
    pub id: String,
}

#[component]
pub fn TimelineContainer(props: TimelineContainerProps) -> Element {
    let mut state = use_context::<AppState>();
    let mut dragging = use_signal(|| None::<DragMode>);
    let container_id = props.id.clone();

    // Re-mount whenever the view changes.
    use_effect(move || {
        let svg = state.view.read().as_ref().map(|v| v.render_svg());
        if let Some(svg) = svg {
            if let Err(e) = js_bridge::mount_svg(&container_id, &svg) {
                log::error!("{}", e);
                state.error_msg.set(Some(e.to_string()));
            }
        }
    });

    // Container offset to plot x.
    let plot_x = move |element_x: f64| -> f64 {
        state
            .view
            .read()
            .as_ref()
            .map_or(element_x, |v| element_x - v.config().margin.left)
    };

    let on_mouse_down = move |evt: MouseEvent| {
        let p = evt.element_coordinates();
        let pressed = state.with_view(|v| {
            if let Some(name) = preset_button_at(v.config(), p.x, p.y) {
                return Err(v.jump_to_preset_named(name).err());
            }
            let x = p.x - v.config().margin.left;
            let y = p.y - v.config().margin.top;
            Ok(match v.press_region(y) {
                PressRegion::Brush => {
                    v.begin_brush_drag(x);
                    DragMode::Brush
                }
                PressRegion::Pane => {
                    v.begin_pan(x);
                    DragMode::Pan
                }
            })
        });
        match pressed {
            Some(Ok(mode)) => dragging.set(Some(mode)),
            Some(Err(Some(e))) => {
                log::warn!("{}", e);
                state.error_msg.set(Some(e.to_string()));
            }
            _ => {}
        }
    };

    let on_mouse_move = move |evt: MouseEvent| {
        let Some(mode) = dragging() else {
            return;
        };
        let x = plot_x(evt.element_coordinates().x);
        state.with_view(|v| match mode {
            DragMode::Brush => v.drag_brush_to(x),
            DragMode::Pan => v.pan_to(x),
        });
    };

    let mut finish = move || {
        if dragging().is_some() {
            dragging.set(None);
            state.with_view(|v| v.end_gesture());
        }
    };

    let on_wheel = move |evt: WheelEvent| {
        evt.prevent_default();
        let dy = evt.delta().strip_units().y;
        if dy == 0.0 {
            return;
        }
        let factor = if dy < 0.0 { ZOOM_STEP } else { 1.0 / ZOOM_STEP };
        let x = plot_x(evt.element_coordinates().x);
        state.with_view(|v| {
            v.zoom_about(x, factor);
            v.end_gesture();
        });
    };

    let on_key_down = move |evt: KeyboardEvent| {
        let step = state
            .view
            .read()
            .as_ref()
            .map_or(0.0, |v| v.config().plot_width() / 10.0);
        match evt.key() {
            Key::ArrowLeft => {
                state.with_view(|v| {
                    v.pan_by(step);
                    v.end_gesture();
                });
            }
            Key::ArrowRight => {
                state.with_view(|v| {
                    v.pan_by(-step);
                    v.end_gesture();
                });
            }
            Key::Escape => {
                dragging.set(None);
                state.with_view(|v| v.cancel_gesture());
            }
            _ => {}
        }
    };

    rsx! {
        div {
            id: "{props.id}",
            class: "timeline-container",
            tabindex: "0",
            style: "width: 100%; user-select: none; outline: none;",
            onmousedown: on_mouse_down,
            onmousemove: on_mouse_move,
            onmouseup: move |_| finish(),
            onmouseleave: move |_| finish(),
            onwheel: on_wheel,
            onkeydown: on_key_down,
        }
    }
}
