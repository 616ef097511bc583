use chrono::{NaiveDateTime, TimeDelta};
use dt_data::RawRecord;
use dt_timeline::{Extent, HighlightOutcome, Preset, TimelineConfig, TimelineView};
use dt_utils::years::{offset_millis, year_start};

fn y(year: i32) -> NaiveDateTime {
    year_start(year).unwrap()
}

fn view_of(counts: &[(i32, u64)]) -> TimelineView {
    let records: Vec<RawRecord> = counts
        .iter()
        .map(|(year, count)| {
            serde_json::from_value(serde_json::json!({"year": year.to_string(), "count": count}))
                .unwrap()
        })
        .collect();
    TimelineView::initialize("timeline", &records, TimelineConfig::default()).unwrap()
}

fn scenario() -> TimelineView {
    view_of(&[(2000, 5), (2001, 10), (2002, 0), (2003, 20)])
}

/// A bumpy series over 1850..=1950 with no zero counts.
fn century() -> TimelineView {
    let counts: Vec<(i32, u64)> = (1850..=1950)
        .map(|year| (year, 1 + ((year * 37) % 23) as u64))
        .collect();
    view_of(&counts)
}

fn close(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-9
}

#[test]
fn test_initialize_sets_domain_and_window() {
    let v = view_of(&[(1903, 2), (1850, 1), (1877, 9)]);
    assert_eq!(v.domain(), Extent::new(y(1850), y(1903)));
    assert_eq!(v.window(), v.domain());
}

#[test]
fn test_window_stays_in_domain_for_any_candidate() {
    let mut v = century();
    let domain = v.domain();
    let one_year = TimeDelta::days(365);

    for a in (1800..=2000).step_by(7) {
        for len in [0, 1, 3, 20, 80, 150] {
            let candidate = Extent::new(y(a), y(a + len));
            let clamped = !candidate.is_within(&domain);
            let w = v.on_window_change(Some(candidate));
            assert!(
                w.is_within(&domain),
                "{candidate:?} produced {w:?} outside {domain:?}"
            );
            assert!(w.start <= w.end);
            if clamped {
                assert!(w.span() >= one_year, "{candidate:?} clamped to short {w:?}");
            }
        }
    }
}

#[test]
fn test_clamp_examples() {
    let mut v = century();
    // Overlaps the start: snapped, then widened to a year.
    let w = v.on_window_change(Some(Extent::new(y(1840), y(1850))));
    assert_eq!(w.start, y(1850));
    assert!(w.span() >= TimeDelta::days(365));
    // Wholly past the end: lands one year inside the end.
    let w = v.on_window_change(Some(Extent::new(y(1960), y(1970))));
    assert_eq!(w.end, y(1950));
    assert_eq!(w.span(), TimeDelta::days(365));
}

#[test]
fn test_same_window_twice_gives_same_y_domain() {
    let mut v = century();
    let w = v.on_window_change(Some(Extent::new(y(1862), y(1911))));
    let first = v.y_domain();
    assert_eq!(v.on_window_change(Some(w)), w);
    assert_eq!(v.y_domain(), first);
}

#[test]
fn test_shrinking_window_never_raises_max() {
    let mut v = century();
    for (outer, inner) in [
        ((1850, 1950), (1870, 1900)),
        ((1860, 1880), (1861, 1879)),
        ((1900, 1950), (1925, 1926)),
    ] {
        v.on_window_change(Some(Extent::new(y(outer.0), y(outer.1))));
        let outer_max = v.visible_max();
        // Mid-year edges exercise the interpolated values as well.
        let start = offset_millis(&y(inner.0), 1.5e10);
        let end = offset_millis(&y(inner.1), 1.5e10);
        v.on_window_change(Some(Extent::new(start, end)));
        assert!(
            v.visible_max() <= outer_max + 1e-9,
            "{inner:?} max {} exceeds {outer:?} max {outer_max}",
            v.visible_max()
        );
    }
}

#[test]
fn test_two_year_window_scenario() {
    let mut v = scenario();
    v.on_window_change(Some(Extent::new(y(2001), y(2002))));
    assert_eq!(v.visible_max(), 10.0);
    assert_eq!(v.y_domain(), (0.0, 10.5));
}

#[test]
fn test_zero_window_falls_back_to_series_max() {
    let mut v = view_of(&[(2000, 0), (2001, 0), (2002, 0), (2003, 7)]);
    v.on_window_change(Some(Extent::new(y(2000), y(2001))));
    let (lo, hi) = v.y_domain();
    assert_eq!(lo, 0.0);
    assert!(close(hi, 7.0 * 1.05), "got {hi}");
}

#[test]
fn test_all_zero_series_still_has_an_axis() {
    let v = view_of(&[(2000, 0), (2001, 0)]);
    let (lo, hi) = v.y_domain();
    assert_eq!(lo, 0.0);
    assert!(hi > 0.0);
}

#[test]
fn test_repeated_highlight_is_noop() {
    let mut v = view_of(&[(1980, 3), (1990, 8), (2000, 4)]);
    let first = v.highlight_range(y(1990), y(1995), "ger", false);
    assert!(matches!(first, HighlightOutcome::Drawn(_)));
    assert_eq!(
        v.highlight_range(y(1990), y(1995), "ger", false),
        HighlightOutcome::Duplicate
    );
    assert_eq!(v.scene().highlights().count(), 1);
}

#[test]
fn test_at_most_one_exclusive_highlight() {
    let mut v = view_of(&[(1980, 3), (1990, 8), (2000, 4)]);
    v.highlight_range(y(1982), y(1984), "fre", false);
    v.highlight_range(y(1985), y(1988), "ger", true);
    v.highlight_range(y(1991), y(1996), "ger", true);

    let exclusive: Vec<_> = v
        .scene()
        .highlights()
        .filter(|(_, h)| h.exclusive)
        .map(|(_, h)| h.x0)
        .collect();
    assert_eq!(exclusive.len(), 1);
    assert!(close(exclusive[0], v.x_scale().apply(y(1991))));
    assert_eq!(v.scene().highlights().count(), 2, "the plain highlight stays");
}

#[test]
fn test_highlight_outside_window_is_ignored() {
    let mut v = view_of(&[(1980, 3), (1990, 8), (2000, 4)]);
    v.on_window_change(Some(Extent::new(y(1980), y(1985))));
    assert_eq!(
        v.highlight_range(y(1995), y(1999), "ger", false),
        HighlightOutcome::OutsideWindow
    );
}

#[test]
fn test_reset_after_drag_matches_initial_state() {
    let mut v = scenario();
    let initial_y = v.y_domain();
    let (x0, x1) = v.selection_px();

    // Drag the west handle halfway in and let go.
    v.begin_brush_drag(x0);
    v.drag_brush_to((x0 + x1) / 2.0);
    v.end_gesture();
    assert_ne!(v.window(), v.domain());

    assert_eq!(v.jump_to_preset(Preset::Reset), v.domain());
    assert_eq!(v.window(), v.domain());
    assert_eq!(v.y_domain(), initial_y);
}

#[test]
fn test_overlays_always_below_brush() {
    let mut v = scenario();
    v.highlight_range(y(2001), y(2002), "ger", false);
    let points = dt_data::CategoryPoint::from_json_str(
        r#"[{"year":"2000","category":"fre","value":3},{"year":"2003","category":"fre","value":6}]"#,
    )
    .unwrap();
    v.plot_category_series(&points);
    v.highlight_range(y(2000), y(2001), "als", true);
    v.raise_selection_handles();

    assert!(v.scene().is_stacked());
    let svg = v.render_svg();
    let brush = svg.find("class=\"x brush\"").unwrap();
    for needle in ["class=\"highlight\"", "class=\"highlight exclusive\"", "class=\"category-line\""] {
        assert!(svg.find(needle).unwrap() < brush, "{needle} drawn above the brush");
    }
}
