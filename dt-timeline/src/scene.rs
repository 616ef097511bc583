//! Z-ordered scene of everything a timeline draws.
//!
//! Every item belongs to a [`Layer`] fixed by its kind, and the scene list is
//! kept sorted by layer. Overlays therefore always end up between the axes
//! and the brush, whatever order they were added in.

use chrono::NaiveDateTime;

/// Drawing bands, bottom to top.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Layer {
    Plot,
    Axes,
    Overlays,
    Brush,
    Controls,
}

pub type ItemId = u64;

/// A translucent rectangle over part of the x-range.
#[derive(Debug, Clone, PartialEq)]
pub struct HighlightRect {
    /// Left edge in plot pixels, already clipped to the window.
    pub x0: f64,
    /// Right edge in plot pixels, already clipped to the window.
    pub x1: f64,
    pub category: String,
    pub color: String,
    pub exclusive: bool,
}

/// One polyline of a category series. Geometry is kept in data space so the
/// line follows the y-axis when it is refitted.
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryLine {
    pub category: String,
    pub color: String,
    pub points: Vec<(NaiveDateTime, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Item {
    Area,
    Line,
    XAxis,
    YAxis,
    Highlight(HighlightRect),
    CategoryLine(CategoryLine),
    Brush,
    Readout,
}

impl Item {
    pub fn layer(&self) -> Layer {
        match self {
            Item::Area | Item::Line => Layer::Plot,
            Item::XAxis | Item::YAxis => Layer::Axes,
            Item::Highlight(_) | Item::CategoryLine(_) => Layer::Overlays,
            Item::Brush => Layer::Brush,
            Item::Readout => Layer::Controls,
        }
    }

    pub fn is_overlay(&self) -> bool {
        self.layer() == Layer::Overlays
    }
}

/// Result of a highlight request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HighlightOutcome {
    Drawn(ItemId),
    /// A rectangle with the same pixel bounds is already on screen.
    Duplicate,
    /// The requested range does not touch the current window.
    OutsideWindow,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    items: Vec<(ItemId, Item)>,
    next_id: ItemId,
}

impl Default for Scene {
    fn default() -> Self {
        let mut scene = Self {
            items: Vec::new(),
            next_id: 0,
        };
        for item in [
            Item::Area,
            Item::Line,
            Item::XAxis,
            Item::YAxis,
            Item::Brush,
            Item::Readout,
        ] {
            scene.insert(item);
        }
        scene
    }
}

impl Scene {
    /// Add `item` on top of its layer.
    pub fn insert(&mut self, item: Item) -> ItemId {
        let layer = item.layer();
        let at = self.items.partition_point(|(_, it)| it.layer() <= layer);
        let id = self.next_id;
        self.next_id += 1;
        self.items.insert(at, (id, item));
        id
    }

    pub fn remove(&mut self, id: ItemId) -> Option<Item> {
        let at = self.items.iter().position(|(i, _)| *i == id)?;
        Some(self.items.remove(at).1)
    }

    /// Drop every item for which `keep` returns false. Returns how many went.
    pub fn retain(&mut self, mut keep: impl FnMut(&Item) -> bool) -> usize {
        let before = self.items.len();
        self.items.retain(|(_, it)| keep(it));
        before - self.items.len()
    }

    pub fn items(&self) -> impl Iterator<Item = (ItemId, &Item)> {
        self.items.iter().map(|(id, it)| (*id, it))
    }

    pub fn highlights(&self) -> impl Iterator<Item = (ItemId, &HighlightRect)> {
        self.items().filter_map(|(id, it)| match it {
            Item::Highlight(h) => Some((id, h)),
            _ => None,
        })
    }

    pub fn category_lines(&self) -> impl Iterator<Item = &CategoryLine> {
        self.items().filter_map(|(_, it)| match it {
            Item::CategoryLine(l) => Some(l),
            _ => None,
        })
    }

    /// Re-sort by layer, keeping insertion order within a layer.
    pub fn restack(&mut self) {
        self.items.sort_by_key(|(_, it)| it.layer());
    }

    pub fn is_stacked(&self) -> bool {
        self.items
            .windows(2)
            .all(|w| w[0].1.layer() <= w[1].1.layer())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x0: f64) -> Item {
        Item::Highlight(HighlightRect {
            x0,
            x1: x0 + 10.0,
            category: "ger".into(),
            color: "#ff7f0e".into(),
            exclusive: false,
        })
    }

    #[test]
    fn test_overlays_land_below_brush() {
        let mut scene = Scene::default();
        let id = scene.insert(rect(0.0));
        let layers: Vec<_> = scene.items().map(|(_, it)| it.layer()).collect();
        let pos = scene.items().position(|(i, _)| i == id).unwrap();
        assert_eq!(layers[pos + 1], Layer::Brush, "overlay should sit right under the brush");
        assert!(scene.is_stacked());
    }

    #[test]
    fn test_later_overlays_stack_on_top_of_earlier() {
        let mut scene = Scene::default();
        let first = scene.insert(rect(0.0));
        let second = scene.insert(rect(20.0));
        let ids: Vec<_> = scene.highlights().map(|(id, _)| id).collect();
        assert_eq!(ids, vec![first, second]);
    }

    #[test]
    fn test_remove_and_retain() {
        let mut scene = Scene::default();
        let id = scene.insert(rect(0.0));
        scene.insert(rect(20.0));
        assert!(scene.remove(id).is_some());
        assert!(scene.remove(id).is_none());
        assert_eq!(scene.retain(|it| !it.is_overlay()), 1);
        assert_eq!(scene.highlights().count(), 0);
        assert_eq!(scene.items().count(), 6, "base items survive");
    }
}
