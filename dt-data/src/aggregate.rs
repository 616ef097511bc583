//! Plays-per-year aggregation over the plays CSV export.
//!
//! The CSV must have headers and contain at least `year` and `lang` columns;
//! any other columns are ignored. Rows with no language are dropped (the
//! dataset does the same when converting plays to JSON), as are rows whose
//! year cannot be read.

use crate::error::DataError;
use crate::record::YearCount;
use chrono::NaiveDateTime;
use dt_utils::years::{format_year, parse_year};
use serde::Serialize;
use std::collections::BTreeMap;

/// One `{year, category, value}` output record, as read back by
/// [`crate::CategoryPoint::from_json_str`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryCount {
    pub year: String,
    pub category: String,
    pub value: u64,
}

/// Parsed `(year, lang)` pairs from every usable row.
fn play_years(csv_data: &str) -> Result<Vec<(NaiveDateTime, String)>, DataError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(csv_data.as_bytes());

    let headers = rdr.headers()?.clone();
    let column = |name: &'static str| {
        headers
            .iter()
            .position(|h| h.trim().eq_ignore_ascii_case(name))
            .ok_or(DataError::MissingColumn(name))
    };
    let year_col = column("year")?;
    let lang_col = column("lang")?;

    let mut rows = Vec::new();
    let mut skipped = 0u32;
    for result in rdr.records() {
        let r = result?;
        let lang = r.get(lang_col).unwrap_or("").trim();
        let year = r.get(year_col).unwrap_or("").trim();
        // "1850.0" shows up when the export went through a float column.
        let year = year.strip_suffix(".0").unwrap_or(year);
        match parse_year(year) {
            Ok(year) if !lang.is_empty() => rows.push((year, lang.to_string())),
            _ => skipped += 1,
        }
    }
    if skipped > 0 {
        log::warn!("aggregate: skipped {} play row(s) without a usable year or lang", skipped);
    }
    Ok(rows)
}

/// Count plays per year, sorted by year.
pub fn plays_per_year(csv_data: &str) -> Result<Vec<YearCount>, DataError> {
    let mut counts: BTreeMap<NaiveDateTime, u64> = BTreeMap::new();
    for (year, _) in play_years(csv_data)? {
        *counts.entry(year).or_default() += 1;
    }
    log::info!("aggregate: {} distinct years", counts.len());
    Ok(counts
        .into_iter()
        .map(|(year, count)| YearCount {
            year: format_year(&year),
            count,
        })
        .collect())
}

/// Count plays per year and language, sorted by language then year.
pub fn plays_per_year_by_lang(csv_data: &str) -> Result<Vec<CategoryCount>, DataError> {
    let mut counts: BTreeMap<(String, NaiveDateTime), u64> = BTreeMap::new();
    for (year, lang) in play_years(csv_data)? {
        *counts.entry((lang, year)).or_default() += 1;
    }
    Ok(counts
        .into_iter()
        .map(|((category, year), value)| CategoryCount {
            year: format_year(&year),
            category,
            value,
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CategoryPoint, Series};

    const PLAYS: &str = "\
workId,lang,titleMain,year
1,ger,Der Hausfreund,1850
2,fre,Le Voyage,1850.0
3,ger,Die Posse,1852
4,,Ohne Sprache,1852
5,als,D'r Hans,unknown
";

    #[test]
    fn test_plays_per_year() {
        let counts = plays_per_year(PLAYS).unwrap();
        assert_eq!(
            counts,
            vec![
                YearCount { year: "1850".into(), count: 2 },
                YearCount { year: "1852".into(), count: 1 },
            ]
        );
    }

    #[test]
    fn test_output_reads_back_as_series() {
        let json = serde_json::to_string(&plays_per_year(PLAYS).unwrap()).unwrap();
        let series = Series::from_json_str(&json).unwrap();
        assert_eq!(series.len(), 2);
        assert_eq!(series.max_count(), 2);
    }

    #[test]
    fn test_by_lang_reads_back_as_category_points() {
        let counts = plays_per_year_by_lang(PLAYS).unwrap();
        assert_eq!(counts.len(), 3);
        assert_eq!(counts[0].category, "fre");

        let json = serde_json::to_string(&counts).unwrap();
        let points = CategoryPoint::from_json_str(&json).unwrap();
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_missing_column() {
        let err = plays_per_year("workId,titleMain\n1,x\n").unwrap_err();
        assert!(matches!(err, DataError::MissingColumn("year")));
    }
}
