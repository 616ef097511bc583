//! `aggregate`: plays CSV to timeline JSON.

use anyhow::Context;
use dt_data::aggregate::{plays_per_year, plays_per_year_by_lang};
use log::info;
use std::fs;

/// Count the plays in `plays_csv` per year (or per year and language with
/// `by_lang`) and write the result to `out_json`.
pub fn run_aggregate(plays_csv: &str, out_json: &str, by_lang: bool) -> anyhow::Result<()> {
    let csv_data =
        fs::read_to_string(plays_csv).with_context(|| format!("Failed to read {}", plays_csv))?;

    let (json, records) = if by_lang {
        let counts = plays_per_year_by_lang(&csv_data)
            .with_context(|| format!("Failed to aggregate {} by language", plays_csv))?;
        (serde_json::to_string_pretty(&counts)?, counts.len())
    } else {
        let counts =
            plays_per_year(&csv_data).with_context(|| format!("Failed to aggregate {}", plays_csv))?;
        (serde_json::to_string_pretty(&counts)?, counts.len())
    };

    fs::write(out_json, json).with_context(|| format!("Failed to write {}", out_json))?;
    info!("Aggregate complete: {} records. Output: {}", records, out_json);
    Ok(())
}
