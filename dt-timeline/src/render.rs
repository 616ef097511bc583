//! SVG output for a [`TimelineView`].
//!
//! The document mirrors the markup of the d3 context chart it replaces
//! (`g.context`, `path.area`, `path.line`, `g.x.axis`, `g.x.brush` with
//! `rect.extent` and `g.resize` handles, `#buttons_group`) so existing
//! stylesheets keep working. Element ids are prefixed with the container id
//! so two timelines on one page do not collide.

use crate::config::TimelineConfig;
use crate::scene::{CategoryLine, HighlightRect, Item, Layer};
use crate::view::TimelineView;
use dt_utils::years::format_year;
use std::fmt::Write;

const BUTTON_WIDTH: f64 = 40.0;
const BUTTON_HEIGHT: f64 = 14.0;
/// Preset buttons drawn next to "Zoom to:".
const PRESET_BUTTONS: &[&str] = &["reset"];

/// Top of the readout row, in SVG coordinates.
fn readout_top(config: &TimelineConfig) -> f64 {
    config.margin.bottom + 10.0
}

fn button_left(index: usize) -> f64 {
    220.0 + index as f64 * (BUTTON_WIDTH + 10.0)
}

/// The preset whose button is under SVG coordinate `(x, y)`, if any.
///
/// The buttons are part of the same SVG as the brush, so the UI resolves
/// presses against them before handing the press to the brush.
pub fn preset_button_at(config: &TimelineConfig, x: f64, y: f64) -> Option<&'static str> {
    let top = readout_top(config);
    if !(top..=top + BUTTON_HEIGHT).contains(&y) {
        return None;
    }
    PRESET_BUTTONS
        .iter()
        .enumerate()
        .find(|(i, _)| (button_left(*i)..=button_left(*i) + BUTTON_WIDTH).contains(&x))
        .map(|(_, name)| *name)
}

/// Render the full scene in stacking order.
pub fn render_svg(view: &TimelineView) -> String {
    let config = view.config();
    let clip_id = format!("{}-clip", view.container());

    let mut svg = String::new();
    let _ = write!(
        svg,
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}" class="metric-chart">"#,
        w = fmt_px(config.width),
        h = fmt_px(config.height),
    );
    let _ = write!(
        svg,
        r#"<defs><clipPath id="{}"><rect width="{}" height="{}"/></clipPath></defs>"#,
        escape(&clip_id),
        fmt_px(config.plot_width()),
        fmt_px(config.plot_height()),
    );

    let _ = write!(
        svg,
        r#"<g class="context" transform="translate({},{})">"#,
        fmt_px(config.margin.left),
        fmt_px(config.margin.top),
    );
    for (_, item) in view.scene().items().filter(|(_, it)| it.layer() < Layer::Controls) {
        match item {
            Item::Area => write_area(&mut svg, view, &clip_id),
            Item::Line => write_line(&mut svg, view, &clip_id),
            Item::XAxis => write_x_axis(&mut svg, view),
            Item::YAxis => write_y_axis(&mut svg, view),
            Item::Highlight(h) => write_highlight(&mut svg, view, h),
            Item::CategoryLine(l) => write_category_line(&mut svg, view, l, &clip_id),
            Item::Brush => write_brush(&mut svg, view),
            Item::Readout => {}
        }
    }
    svg.push_str("</g>");

    for (_, item) in view.scene().items() {
        if let Item::Readout = item {
            write_readout(&mut svg, view);
        }
    }

    svg.push_str("</svg>");
    svg
}

fn write_area(svg: &mut String, view: &TimelineView, clip_id: &str) {
    let baseline = fmt_px(view.config().plot_height());
    let points = series_px(view);
    let Some(((fx, _), (lx, _))) = points.first().zip(points.last()) else {
        return;
    };
    let mut d = format!("M{},{}", fmt_px(*fx), baseline);
    for (x, y) in &points {
        let _ = write!(d, "L{},{}", fmt_px(*x), fmt_px(*y));
    }
    let _ = write!(d, "L{},{}Z", fmt_px(*lx), baseline);
    let _ = write!(
        svg,
        r#"<path class="area" clip-path="url(#{})" d="{}"/>"#,
        escape(clip_id),
        d
    );
}

fn write_line(svg: &mut String, view: &TimelineView, clip_id: &str) {
    let d = polyline(&series_px(view));
    let _ = write!(
        svg,
        r#"<path class="line" clip-path="url(#{})" fill="none" d="{}"/>"#,
        escape(clip_id),
        d
    );
}

fn write_x_axis(svg: &mut String, view: &TimelineView) {
    let x = view.x_scale();
    let _ = write!(
        svg,
        r#"<g class="x axis" transform="translate(0,{})">"#,
        fmt_px(view.config().plot_height())
    );
    for tick in view.x_ticks() {
        let _ = write!(
            svg,
            r#"<g class="tick" transform="translate({},0)"><line y2="6"/><text y="9" dy=".71em" text-anchor="middle">{}</text></g>"#,
            fmt_px(x.apply(tick)),
            format_year(&tick)
        );
    }
    let _ = write!(
        svg,
        r#"<path class="domain" d="M0,6V0H{}V6"/></g>"#,
        fmt_px(view.config().plot_width())
    );
}

fn write_y_axis(svg: &mut String, view: &TimelineView) {
    let y = view.y_scale();
    svg.push_str(r#"<g class="y axis">"#);
    for value in view.y_ticks() {
        let _ = write!(
            svg,
            r#"<g class="tick" transform="translate(0,{})"><line x2="-6"/><text x="-9" dy=".32em" text-anchor="end">{}</text></g>"#,
            fmt_px(y.apply(value)),
            value.round()
        );
    }
    let _ = write!(
        svg,
        r#"<path class="domain" d="M-6,0H0V{}H-6"/></g>"#,
        fmt_px(view.config().plot_height())
    );
}

fn write_highlight(svg: &mut String, view: &TimelineView, h: &HighlightRect) {
    let class = if h.exclusive {
        "highlight exclusive"
    } else {
        "highlight"
    };
    let _ = write!(
        svg,
        r#"<rect class="{}" data-category="{}" x="{}" y="0" width="{}" height="{}" fill="{}" fill-opacity="{}"/>"#,
        class,
        escape(&h.category),
        fmt_px(h.x0),
        // Keep zero-width requests visible as a hairline.
        fmt_px((h.x1 - h.x0).max(1.0)),
        fmt_px(view.config().plot_height()),
        escape(&h.color),
        view.config().highlight_opacity
    );
}

fn write_category_line(svg: &mut String, view: &TimelineView, line: &CategoryLine, clip_id: &str) {
    let points: Vec<(f64, f64)> = line
        .points
        .iter()
        .map(|(t, v)| (view.x_scale().apply(*t), view.y_scale().apply(*v)))
        .collect();
    let _ = write!(
        svg,
        r#"<path class="category-line" data-category="{}" clip-path="url(#{})" fill="none" stroke="{}" d="{}"/>"#,
        escape(&line.category),
        escape(clip_id),
        escape(&line.color),
        polyline(&points)
    );
}

fn write_brush(svg: &mut String, view: &TimelineView) {
    let height = view.config().plot_height();
    let (x0, x1) = view.selection_px();
    let _ = write!(
        svg,
        r#"<g class="x brush" data-generation="{}"><rect class="extent" x="{}" y="-6" width="{}" height="{}"/>"#,
        view.brush_generation(),
        fmt_px(x0),
        fmt_px(x1 - x0),
        fmt_px(height + 8.0)
    );
    for (side, x) in [("w", x0), ("e", x1)] {
        let _ = write!(
            svg,
            r#"<g class="resize {side}" transform="translate({},0)"><rect class="handle" transform="translate(0,-3)" rx="2" ry="2" width="3" height="{}"/><rect class="handle-mini" transform="translate(-2,8)" rx="3" ry="3" width="7" height="{}"/></g>"#,
            fmt_px(x),
            fmt_px(height),
            fmt_px(height / 2.0)
        );
    }
    svg.push_str("</g>");
}

fn write_readout(svg: &mut String, view: &TimelineView) {
    let config = view.config();
    let _ = write!(
        svg,
        r#"<g id="{id}-buttons" class="buttons_group" transform="translate(0,{})">"#,
        fmt_px(readout_top(config)),
        id = escape(view.container()),
    );
    svg.push_str(r#"<text text-anchor="start" transform="translate(0,10)">Showing data from: </text>"#);
    let _ = write!(
        svg,
        r#"<text id="{}-display-dates" class="display-dates" text-anchor="start" transform="translate(98,10)">{}</text>"#,
        escape(view.container()),
        escape(&view.readout())
    );
    svg.push_str(r#"<text text-anchor="start" transform="translate(180,10)">Zoom to: </text>"#);
    for (i, name) in PRESET_BUTTONS.iter().enumerate() {
        let offset = button_left(i);
        let _ = write!(
            svg,
            r#"<g class="scale_button" data-preset="{name}" transform="translate({},0)"><rect width="{}" height="{}" rx="1" ry="1"/><text dy="{}" dx="{}" text-anchor="middle">{name}</text></g>"#,
            fmt_px(offset),
            fmt_px(BUTTON_WIDTH),
            fmt_px(BUTTON_HEIGHT),
            fmt_px(BUTTON_HEIGHT / 2.0 + 3.0),
            fmt_px(BUTTON_WIDTH / 2.0),
        );
    }
    svg.push_str("</g>");
}

fn series_px(view: &TimelineView) -> Vec<(f64, f64)> {
    let (x, y) = (view.x_scale(), view.y_scale());
    view.series()
        .points()
        .iter()
        .map(|p| (x.apply(p.year), y.apply(p.count as f64)))
        .collect()
}

fn polyline(points: &[(f64, f64)]) -> String {
    let mut d = String::new();
    for (i, (x, y)) in points.iter().enumerate() {
        let cmd = if i == 0 { 'M' } else { 'L' };
        let _ = write!(d, "{cmd}{},{}", fmt_px(*x), fmt_px(*y));
    }
    d
}

/// Two decimals, trailing zeros trimmed.
fn fmt_px(v: f64) -> String {
    let s = format!("{v:.2}");
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            c => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Extent;
    use dt_utils::years::year_start;

    fn view() -> TimelineView {
        TimelineView::from_json(
            "plays",
            r#"[{"year":"2000","count":5},{"year":"2001","count":10},
                {"year":"2002","count":0},{"year":"2003","count":20}]"#,
            TimelineConfig::default(),
        )
        .unwrap()
    }

    #[test]
    fn test_fmt_px() {
        assert_eq!(fmt_px(12.0), "12");
        assert_eq!(fmt_px(12.5), "12.5");
        assert_eq!(fmt_px(1.0 / 3.0), "0.33");
        assert_eq!(fmt_px(-0.001), "0");
    }

    #[test]
    fn test_document_shape() {
        let svg = view().render_svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"<clipPath id="plays-clip">"#));
        assert!(svg.contains(r#"class="area""#));
        assert!(svg.contains(r#"id="plays-display-dates""#));
        assert!(svg.contains(">2000 - 2003<"));
        assert!(svg.contains(r#"data-preset="reset""#));
    }

    #[test]
    fn test_preset_button_hit_matches_drawn_button() {
        let config = TimelineConfig::default();
        let svg = view().render_svg();
        // Readout row at y = 30, reset button at x = 220..260.
        assert!(svg.contains(r#"class="buttons_group" transform="translate(0,30)""#));
        assert!(svg.contains(r#"data-preset="reset" transform="translate(220,0)""#));
        assert_eq!(preset_button_at(&config, 240.0, 37.0), Some("reset"));
        assert_eq!(preset_button_at(&config, 100.0, 37.0), None);
        assert_eq!(preset_button_at(&config, 240.0, 60.0), None);
    }

    #[test]
    fn test_overlays_render_before_brush() {
        let mut v = view();
        v.highlight_range(year_start(2001).unwrap(), year_start(2002).unwrap(), "<ger>", false);
        let svg = v.render_svg();
        let rect = svg.find(r#"class="highlight""#).unwrap();
        let brush = svg.find(r#"class="x brush""#).unwrap();
        assert!(rect < brush, "highlight must be drawn under the brush");
        assert!(svg.contains(r#"data-category="&lt;ger&gt;""#));
    }

    #[test]
    fn test_readout_follows_window() {
        let mut v = view();
        v.on_window_change(Some(Extent::new(year_start(2001).unwrap(), year_start(2002).unwrap())));
        assert!(v.render_svg().contains(">2001 - 2002<"));
    }
}
