//! Category colours shared by highlight rectangles and category polylines.

use std::collections::BTreeMap;

/// Colour reserved for the single exclusive highlight.
pub const EXCLUSIVE_COLOR: &str = "#d62728";

/// Colour for categories the palette does not know.
pub const FALLBACK_COLOR: &str = "#8c8c8c";

const DEFAULT_COLORS: &[(&str, &str)] = &[
    // languages
    ("fre", "#1f77b4"),
    ("ger", "#ff7f0e"),
    ("als", "#2ca02c"),
    // author / character gender
    ("M", "#198038"),
    ("F", "#fa8775"),
    ("U", "#a56eff"),
    ("B", "orange"),
    // play genre
    ("vaudeville", "#e072a4"),
    ("comedy", "#28536b"),
    ("posse", "#8B9EB7"),
    ("schwank", "#f7b633"),
    ("drama", "#bbb193"),
    ("other", "#632A50"),
];

#[derive(Debug, Clone, PartialEq)]
pub struct Palette {
    colors: BTreeMap<String, String>,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: DEFAULT_COLORS
                .iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        }
    }
}

impl Palette {
    /// Built-in palette with `overrides` applied on top.
    pub fn with_overrides(overrides: &BTreeMap<String, String>) -> Self {
        let mut palette = Self::default();
        palette
            .colors
            .extend(overrides.iter().map(|(k, v)| (k.clone(), v.clone())));
        palette
    }

    pub fn color_for(&self, category: &str) -> &str {
        self.colors
            .get(category)
            .map(String::as_str)
            .unwrap_or(FALLBACK_COLOR)
    }

    pub fn exclusive_color(&self) -> &str {
        EXCLUSIVE_COLOR
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_and_unknown_categories() {
        let palette = Palette::default();
        assert_eq!(palette.color_for("ger"), "#ff7f0e");
        assert_eq!(palette.color_for("klingon"), FALLBACK_COLOR);
    }

    #[test]
    fn test_overrides_win() {
        let overrides = BTreeMap::from([("ger".to_string(), "#000000".to_string())]);
        let palette = Palette::with_overrides(&overrides);
        assert_eq!(palette.color_for("ger"), "#000000");
        assert_eq!(palette.color_for("fre"), "#1f77b4");
    }
}
