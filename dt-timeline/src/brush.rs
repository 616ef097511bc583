//! Brush hit-testing and drag maths, in plot pixel space.

/// What a press on the brush row grabbed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BrushTarget {
    /// The left resize handle.
    West,
    /// The right resize handle.
    East,
    /// The selection body; dragging moves the whole selection.
    Body,
    /// Empty track; dragging draws a fresh selection.
    Outside,
}

/// Classify a press at `x` against the current selection `[x0, x1]`.
///
/// Handles win over the body so a narrow selection can still be resized.
pub fn hit_test(selection: (f64, f64), x: f64, grab: f64) -> BrushTarget {
    let (x0, x1) = selection;
    if (x - x0).abs() <= grab {
        BrushTarget::West
    } else if (x - x1).abs() <= grab {
        BrushTarget::East
    } else if x0 < x && x < x1 {
        BrushTarget::Body
    } else {
        BrushTarget::Outside
    }
}

/// Rows above and below the plot that still belong to the brush, matching
/// the extent rect drawn from `y = -6` to `plot_height + 2`.
const BRUSH_OVERHANG_TOP: f64 = 6.0;
const BRUSH_OVERHANG_BOTTOM: f64 = 2.0;

/// Where a press on the chart landed, in plot y-coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PressRegion {
    /// The brush row; the press drives the brush.
    Brush,
    /// Anywhere else on the chart (e.g. the axis band); the press pans.
    Pane,
}

pub fn press_region(y: f64, plot_height: f64) -> PressRegion {
    if (-BRUSH_OVERHANG_TOP..=plot_height + BRUSH_OVERHANG_BOTTOM).contains(&y) {
        PressRegion::Brush
    } else {
        PressRegion::Pane
    }
}

/// An in-progress brush drag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BrushDrag {
    pub target: BrushTarget,
    pub origin_x: f64,
    /// Selection at the moment the press happened.
    pub selection: (f64, f64),
}

impl BrushDrag {
    pub fn new(selection: (f64, f64), origin_x: f64, grab: f64) -> Self {
        Self {
            target: hit_test(selection, origin_x, grab),
            origin_x,
            selection,
        }
    }

    /// Selection after the pointer moved to `x`, ordered left to right.
    ///
    /// `None` means the selection is empty: a press on the empty track that
    /// has not moved clears the brush.
    pub fn selection_at(&self, x: f64) -> Option<(f64, f64)> {
        let (s0, s1) = self.selection;
        let (a, b) = match self.target {
            BrushTarget::West => (x, s1),
            BrushTarget::East => (s0, x),
            BrushTarget::Body => {
                let dx = x - self.origin_x;
                (s0 + dx, s1 + dx)
            }
            BrushTarget::Outside => {
                if x == self.origin_x {
                    return None;
                }
                (self.origin_x, x)
            }
        };
        Some(if a <= b { (a, b) } else { (b, a) })
    }
}
