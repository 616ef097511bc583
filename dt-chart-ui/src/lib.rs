//! Shared Dioxus components and DOM bridge for timeline chart apps.
//!
//! This crate provides:
//! - `js_bridge`: mounts a rendered timeline SVG into a container element via `web-sys`
//! - `state`: Reactive AppState with Dioxus Signals
//! - `components`: Reusable RSX components (container, readout, presets, etc.)
//! - `handle`: `TimelineHandle`, the timeline surface exported to page script

pub mod components;
pub mod handle;
pub mod js_bridge;
pub mod state;
