//! Per-category `{year, category, value}` points, e.g. plays per language.

use crate::error::DataError;
use crate::record::year_from_value;
use chrono::NaiveDateTime;
use serde::Deserialize;
use serde_json::Value;
use std::collections::BTreeMap;

#[derive(Debug, Clone, PartialEq)]
pub struct CategoryPoint {
    pub year: NaiveDateTime,
    pub category: String,
    pub value: f64,
}

#[derive(Debug, Deserialize)]
struct RawCategoryPoint {
    year: Value,
    category: Option<String>,
    value: Option<f64>,
}

impl CategoryPoint {
    /// Parse a JSON array of category points.
    ///
    /// Entries with a null category or null value are dropped; a year that
    /// cannot be read is still an error.
    pub fn from_json_str(json: &str) -> Result<Vec<Self>, DataError> {
        let raw: Vec<RawCategoryPoint> = serde_json::from_str(json)?;
        let mut points = Vec::with_capacity(raw.len());
        for (index, r) in raw.into_iter().enumerate() {
            let (Some(category), Some(value)) = (r.category, r.value) else {
                continue;
            };
            points.push(CategoryPoint {
                year: year_from_value(index, &r.year)?,
                category,
                value,
            });
        }
        Ok(points)
    }
}

/// Split points into one year-sorted run per category, keyed by category name.
pub fn group_by_category(points: &[CategoryPoint]) -> BTreeMap<String, Vec<CategoryPoint>> {
    let mut groups: BTreeMap<String, Vec<CategoryPoint>> = BTreeMap::new();
    for p in points {
        groups.entry(p.category.clone()).or_default().push(p.clone());
    }
    for run in groups.values_mut() {
        run.sort_by_key(|p| p.year);
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    const POINTS: &str = r#"[
        {"year": "1851", "category": "ger", "value": 3},
        {"year": "1850", "category": "ger", "value": 1},
        {"year": "1850", "category": "fre", "value": 2},
        {"year": "1852", "category": null, "value": 9},
        {"year": "1852", "category": "als", "value": null}
    ]"#;

    #[test]
    fn test_nulls_are_filtered() {
        let points = CategoryPoint::from_json_str(POINTS).unwrap();
        assert_eq!(points.len(), 3);
    }

    #[test]
    fn test_grouping_sorts_each_run() {
        let points = CategoryPoint::from_json_str(POINTS).unwrap();
        let groups = group_by_category(&points);
        assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["fre", "ger"]);
        let ger: Vec<_> = groups["ger"].iter().map(|p| p.value).collect();
        assert_eq!(ger, vec![1.0, 3.0]);
    }
}
