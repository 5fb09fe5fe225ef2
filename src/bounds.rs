//! Axis-aligned rectangle algebra. `Bounds` is the immutable rectangle value
//! everything else is built on; `BoundsOffsets` is the four-sided signed
//! distance between two rectangles.

use serde::{Deserialize, Serialize};

use crate::side::{BOUND_SIDES, Side};

/// An immutable axis-aligned rectangle in viewport pixels, y-down.
///
/// Invariants: `right - left == width` and `bottom - top == height`. All
/// transformations return new instances.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Bounds {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
    pub width: f64,
    pub height: f64,
}

/// A partial rectangle used by [`Bounds::merge`]. Unset fields keep the
/// current value.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoundsPatch {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Per-side amounts used by [`Bounds::subtract`]. Unset sides are left
/// untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct SideInsets {
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
}

impl Bounds {
    /// Constructs from raw edge coordinates, deriving width and height.
    pub fn new(top: f64, left: f64, right: f64, bottom: f64) -> Self {
        Self {
            top,
            left,
            right,
            bottom,
            width: right - left,
            height: bottom - top,
        }
    }

    /// Constructs from a raw measurement (origin + size), deriving the far
    /// edges.
    pub fn from_measurement(top: f64, left: f64, width: f64, height: f64) -> Self {
        Self {
            top,
            left,
            right: left + width,
            bottom: top + height,
            width,
            height,
        }
    }

    /// The all-zero rectangle.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns a new rectangle with the patch fields replaced verbatim.
    /// The caller is responsible for keeping the patch consistent; this
    /// mirrors how snapshots substitute a speculative layer rectangle.
    pub fn merge(&self, patch: BoundsPatch) -> Self {
        Self {
            top: patch.top.unwrap_or(self.top),
            left: patch.left.unwrap_or(self.left),
            right: patch.right.unwrap_or(self.right),
            bottom: patch.bottom.unwrap_or(self.bottom),
            width: patch.width.unwrap_or(self.width),
            height: patch.height.unwrap_or(self.height),
        }
    }

    /// Returns a new rectangle with the given value on one side, size
    /// re-derived.
    pub fn with_side(&self, side: Side, value: f64) -> Self {
        let mut out = *self;
        out.set_side(side, value);
        Self::new(out.top, out.left, out.right, out.bottom)
    }

    /// Shrinks (positive amounts) or grows (negative amounts) the rectangle
    /// inward per side, re-deriving width and height.
    pub fn subtract(&self, insets: SideInsets) -> Self {
        let top = self.top + insets.top.unwrap_or(0.0);
        let left = self.left + insets.left.unwrap_or(0.0);
        let right = self.right - insets.right.unwrap_or(0.0);
        let bottom = self.bottom - insets.bottom.unwrap_or(0.0);
        Self::new(top, left, right, bottom)
    }

    /// Maps every cardinal side through `f`, re-deriving width and height.
    pub fn map_sides(&self, mut f: impl FnMut(Side, f64) -> f64) -> Self {
        Self::new(
            f(Side::Top, self.top),
            f(Side::Left, self.left),
            f(Side::Right, self.right),
            f(Side::Bottom, self.bottom),
        )
    }

    /// Signed distances from this rectangle's sides to a nested child's
    /// sides, measured inward: positive means the child has that much margin
    /// inside, negative means it overflows past that side.
    pub fn offsets_to(&self, child: &Self) -> BoundsOffsets {
        BoundsOffsets {
            top: child.top - self.top,
            left: child.left - self.left,
            right: self.right - child.right,
            bottom: self.bottom - child.bottom,
        }
    }

    pub fn side(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Center => 0.0,
        }
    }

    fn set_side(&mut self, side: Side, value: f64) {
        match side {
            Side::Top => self.top = value,
            Side::Left => self.left = value,
            Side::Right => self.right = value,
            Side::Bottom => self.bottom = value,
            Side::Center => {}
        }
    }

    /// Total surface area; zero for degenerate or inverted rectangles.
    pub fn surface(&self) -> f64 {
        (self.width * self.height).max(0.0)
    }
}

/// The four-sided signed distance between two rectangles. Positive values
/// are margin, negative values are overflow.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BoundsOffsets {
    pub top: f64,
    pub left: f64,
    pub right: f64,
    pub bottom: f64,
}

impl BoundsOffsets {
    pub fn side(&self, side: Side) -> f64 {
        match side {
            Side::Top => self.top,
            Side::Left => self.left,
            Side::Right => self.right,
            Side::Bottom => self.bottom,
            Side::Center => 0.0,
        }
    }

    /// True iff the child fits entirely inside the parent.
    pub fn all_sides_are_positive(&self) -> bool {
        BOUND_SIDES.iter().all(|&side| self.side(side) >= 0.0)
    }

    /// The sides where the child overflows, with their (negative) values.
    pub fn negative_sides(&self) -> Vec<(Side, f64)> {
        BOUND_SIDES
            .iter()
            .map(|&side| (side, self.side(side)))
            .filter(|&(_, value)| value < 0.0)
            .collect()
    }

    /// Merges several offset sets by taking the smallest (most
    /// constraining) value per side, modelling the offsets to the most
    /// restrictive of several containers.
    ///
    /// # Panics
    ///
    /// Panics on an empty slice: an empty scroll-container chain is a
    /// programmer error in the caller's measurement pass.
    pub fn merge_smallest_sides(offsets: &[Self]) -> Self {
        let (first, rest) = offsets
            .split_first()
            .expect("merge_smallest_sides requires at least one BoundsOffsets");
        rest.iter().fold(*first, |acc, other| Self {
            top: acc.top.min(other.top),
            left: acc.left.min(other.left),
            right: acc.right.min(other.right),
            bottom: acc.bottom.min(other.bottom),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn merge_with_empty_patch_is_identity() {
        let bounds = Bounds::from_measurement(10.0, 20.0, 100.0, 50.0);
        assert_eq!(bounds.merge(BoundsPatch::default()), bounds);
    }

    #[test]
    fn from_measurement_derives_far_edges() {
        let bounds = Bounds::from_measurement(100.0, 100.0, 100.0, 100.0);
        assert_eq!(bounds.right, 200.0);
        assert_eq!(bounds.bottom, 200.0);
    }

    #[test]
    fn offsets_to_nested_child() {
        let parent = Bounds::new(0.0, 0.0, 200.0, 200.0);
        let child = Bounds::new(50.0, 50.0, 150.0, 150.0);
        let offsets = parent.offsets_to(&child);
        assert_eq!(
            offsets,
            BoundsOffsets {
                top: 50.0,
                left: 50.0,
                right: 50.0,
                bottom: 50.0,
            }
        );
    }

    #[test]
    fn offsets_to_overflowing_child_are_negative() {
        let parent = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let child = Bounds::new(-10.0, 20.0, 120.0, 90.0);
        let offsets = parent.offsets_to(&child);
        assert_eq!(offsets.top, -10.0);
        assert_eq!(offsets.left, 20.0);
        assert_eq!(offsets.right, -20.0);
        assert_eq!(offsets.bottom, 10.0);
        assert!(!offsets.all_sides_are_positive());
        assert_eq!(
            offsets.negative_sides(),
            vec![(Side::Top, -10.0), (Side::Right, -20.0)]
        );
    }

    #[test]
    fn subtract_shrinks_and_rederives_size() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let shrunk = bounds.subtract(SideInsets {
            top: Some(10.0),
            left: Some(10.0),
            right: Some(10.0),
            bottom: Some(10.0),
        });
        assert_eq!(shrunk, Bounds::new(10.0, 10.0, 90.0, 90.0));
        assert_eq!(shrunk.width, 80.0);
        assert_eq!(shrunk.height, 80.0);
    }

    #[test]
    fn surface_of_degenerate_rect_is_zero() {
        assert_eq!(Bounds::empty().surface(), 0.0);
        // Inverted (over-shrunk) rectangles clamp to zero rather than
        // producing a negative area.
        let inverted = Bounds::new(0.0, 0.0, -10.0, 10.0);
        assert_eq!(inverted.surface(), 0.0);
    }

    #[test]
    fn merge_smallest_sides_takes_per_side_minimum() {
        let a = BoundsOffsets {
            top: 10.0,
            bottom: 20.0,
            left: 30.0,
            right: 40.0,
        };
        let b = BoundsOffsets {
            top: 5.0,
            bottom: 50.0,
            left: 500.0,
            right: 100.0,
        };
        let c = BoundsOffsets {
            top: 20.0,
            bottom: 10.0,
            left: 10.0,
            right: 10.0,
        };
        assert_eq!(
            BoundsOffsets::merge_smallest_sides(&[a, b, c]),
            BoundsOffsets {
                top: 5.0,
                bottom: 10.0,
                left: 10.0,
                right: 10.0,
            }
        );
    }

    #[test]
    #[should_panic(expected = "at least one BoundsOffsets")]
    fn merge_smallest_sides_rejects_empty_input() {
        let _ = BoundsOffsets::merge_smallest_sides(&[]);
    }

    #[test]
    fn map_sides_rederives_size() {
        let bounds = Bounds::new(0.0, 0.0, 100.0, 100.0);
        let grown = bounds.map_sides(|side, value| value + side.factor(-5.0));
        assert_eq!(grown, Bounds::new(-5.0, -5.0, 105.0, 105.0));
        assert_eq!(grown.width, 110.0);
    }
}
