//! Directional side model: the four cardinal sides plus the `center`
//! pseudo-side. All placement math is expressed through the lookup methods
//! here so the sign conventions live in one place.

use serde::{Deserialize, Serialize};

/// One of the four cardinal sides of a rectangle, or `Center`.
///
/// Top and left are "push" sides: moving a rectangle toward them means
/// adding to the coordinate. Bottom and right are the opposite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Top,
    Left,
    Bottom,
    Right,
    Center,
}

/// Which size dimension a side "owns".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SizeProperty {
    Width,
    Height,
}

/// The four cardinal sides, in the order rectangle math iterates them.
pub const BOUND_SIDES: [Side; 4] = [Side::Top, Side::Left, Side::Bottom, Side::Right];

impl Side {
    pub fn opposite(self) -> Self {
        match self {
            Self::Top => Self::Bottom,
            Self::Bottom => Self::Top,
            Self::Left => Self::Right,
            Self::Right => Self::Left,
            Self::Center => Self::Center,
        }
    }

    /// True for left/right. `Center` counts as horizontal so that
    /// center-anchored layers share the horizontal formulas.
    pub fn is_horizontal(self) -> bool {
        matches!(self, Self::Left | Self::Right | Self::Center)
    }

    pub fn is_center(self) -> bool {
        matches!(self, Self::Center)
    }

    /// Whether moving toward this side adds to the coordinate.
    pub fn is_push(self) -> bool {
        matches!(self, Self::Top | Self::Left | Self::Center)
    }

    /// Applies the side's sign convention to `value`: identity for push
    /// sides (top/left), negation for bottom/right.
    pub fn factor(self, value: f64) -> f64 {
        if self.is_push() { value } else { -value }
    }

    /// The size dimension along this side's own axis.
    pub fn size_prop(self) -> SizeProperty {
        if self.is_horizontal() {
            SizeProperty::Width
        } else {
            SizeProperty::Height
        }
    }

    /// The size dimension along the orthogonal axis.
    pub fn orthogonal_size_prop(self) -> SizeProperty {
        if self.is_horizontal() {
            SizeProperty::Height
        } else {
            SizeProperty::Width
        }
    }

    /// The CSS offset property this side maps to (`"top"`, `"left"`, ...).
    pub fn css_prop(self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Left => "left",
            Self::Bottom => "bottom",
            Self::Right => "right",
            Self::Center => "center",
        }
    }

    /// The leading CSS offset property of the orthogonal axis.
    pub fn orthogonal_css_prop(self) -> &'static str {
        if self.is_horizontal() { "top" } else { "left" }
    }

    /// True when the two sides lie on different axes.
    pub fn is_orthogonal(self, other: Self) -> bool {
        self.is_horizontal() != other.is_horizontal()
    }
}
