//! `render`: series JSON to a standalone timeline SVG.

use anyhow::{bail, Context};
use chrono::NaiveDateTime;
use dt_data::CategoryPoint;
use dt_timeline::{Extent, HighlightOutcome, TimelineConfig, TimelineView};
use dt_utils::years::parse_year;
use log::{info, warn};
use std::fs;

/// Container id baked into the SVG's element ids.
const CONTAINER_ID: &str = "timeline";

pub struct RenderArgs {
    pub series: String,
    pub out: String,
    pub config: Option<String>,
    pub window: Option<String>,
    pub highlights: Vec<String>,
    pub categories: Option<String>,
}

/// A `--highlight START:END:CATEGORY[:exclusive]` argument.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightArg {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub category: String,
    pub exclusive: bool,
}

fn parse_bound(s: &str, arg: &str) -> anyhow::Result<NaiveDateTime> {
    parse_year(s).with_context(|| format!("in `{}`", arg))
}

/// Parse `START:END`.
pub fn parse_window(arg: &str) -> anyhow::Result<Extent> {
    let Some((start, end)) = arg.split_once(':') else {
        bail!("window `{}` is not START:END", arg);
    };
    Ok(Extent::new(parse_bound(start, arg)?, parse_bound(end, arg)?))
}

/// Parse `START:END:CATEGORY[:exclusive]`.
pub fn parse_highlight(arg: &str) -> anyhow::Result<HighlightArg> {
    let parts: Vec<&str> = arg.split(':').collect();
    let exclusive = match parts.as_slice() {
        [_, _, _] => false,
        [_, _, _, "exclusive"] => true,
        [_, _, _, other] => bail!("highlight `{}`: expected `exclusive`, got `{}`", arg, other),
        _ => bail!("highlight `{}` is not START:END:CATEGORY[:exclusive]", arg),
    };
    if parts[2].is_empty() {
        bail!("highlight `{}` has an empty category", arg);
    }
    Ok(HighlightArg {
        start: parse_bound(parts[0], arg)?,
        end: parse_bound(parts[1], arg)?,
        category: parts[2].to_string(),
        exclusive,
    })
}

/// Build the view from already-loaded inputs and render it.
pub fn render_document(
    series_json: &str,
    config_json: Option<&str>,
    window: Option<Extent>,
    highlights: &[HighlightArg],
    categories_json: Option<&str>,
) -> anyhow::Result<String> {
    let config = match config_json {
        Some(json) => TimelineConfig::from_json_str(json).context("Failed to load timeline config")?,
        None => TimelineConfig::default(),
    };
    let mut view =
        TimelineView::from_json(CONTAINER_ID, series_json, config).context("Failed to load series")?;

    if let Some(window) = window {
        let shown = view.on_window_change(Some(window));
        if shown != window {
            warn!("Window {} clamped to {}", window.year_label(), shown.year_label());
        }
    }

    if let Some(json) = categories_json {
        let points = CategoryPoint::from_json_str(json).context("Failed to load category series")?;
        view.plot_category_series(&points);
    }

    for h in highlights {
        match view.highlight_range(h.start, h.end, &h.category, h.exclusive) {
            HighlightOutcome::Drawn(_) => {}
            HighlightOutcome::Duplicate => warn!("Skipping duplicate highlight for {}", h.category),
            HighlightOutcome::OutsideWindow => {
                warn!("Skipping highlight for {} outside {}", h.category, view.readout())
            }
        }
    }

    Ok(view.render_svg())
}

/// Read the inputs named in `args`, render, and write the SVG.
pub fn run_render(args: &RenderArgs) -> anyhow::Result<()> {
    let read = |path: &str| fs::read_to_string(path).with_context(|| format!("Failed to read {}", path));

    let series_json = read(&args.series)?;
    let config_json = args.config.as_deref().map(read).transpose()?;
    let categories_json = args.categories.as_deref().map(read).transpose()?;
    let window = args.window.as_deref().map(parse_window).transpose()?;
    let highlights = args
        .highlights
        .iter()
        .map(|h| parse_highlight(h))
        .collect::<anyhow::Result<Vec<_>>>()?;

    let svg = render_document(
        &series_json,
        config_json.as_deref(),
        window,
        &highlights,
        categories_json.as_deref(),
    )?;
    fs::write(&args.out, &svg).with_context(|| format!("Failed to write {}", args.out))?;
    info!("Render complete: {} bytes. Output: {}", svg.len(), args.out);
    Ok(())
}
