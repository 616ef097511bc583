//! DOM access through `web-sys`.
//!
//! The timeline renders itself to an SVG string; this module is the only place
//! that touches the document. A page without a `window` or `document` (a
//! worker, say) reports every container as missing.

use dt_timeline::TimelineError;
use wasm_bindgen::JsValue;

fn container(container_id: &str) -> Result<web_sys::Element, TimelineError> {
    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(container_id))
        .ok_or_else(|| TimelineError::MissingContainer(container_id.to_string()))
}

/// Replace the contents of `#container_id` with `svg`.
pub fn mount_svg(container_id: &str, svg: &str) -> Result<(), TimelineError> {
    let el = container(container_id)?;
    let started = js_sys::Date::now();
    el.set_inner_html(svg);
    log::debug!(
        "mounted {} bytes of SVG into #{} in {:.1}ms",
        svg.len(),
        container_id,
        js_sys::Date::now() - started
    );
    Ok(())
}

/// Empty `#container_id`. A container that is already gone is not an error.
pub fn unmount(container_id: &str) {
    if let Ok(el) = container(container_id) {
        el.set_inner_html("");
    }
}

/// Log a warning to the browser console.
pub fn console_warn(message: &str) {
    web_sys::console::warn_1(&JsValue::from_str(message));
}
