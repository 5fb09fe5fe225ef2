//! CSS-agnostic output records describing where the caller should pin the
//! layer and its arrow. Unpinned sides are `None` (CSS `auto`), so the
//! layer can keep auto-sizing away from its anchored edges.

use std::fmt;

use serde::{Serialize, Serializer};

use crate::bounds::Bounds;

/// CSS positioning scheme for the layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CssPosition {
    /// Viewport-relative; used when the layer overflows its containers.
    Fixed,
    /// Container-relative.
    Absolute,
}

/// A CSS length, either pixels or a percentage of the layer size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CssLength {
    Px(f64),
    Percent(f64),
}

impl fmt::Display for CssLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Px(value) => write!(f, "{value}px"),
            Self::Percent(value) => write!(f, "{value}%"),
        }
    }
}

impl Serialize for CssLength {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Offset style for the winning layer rectangle. Exactly two opposite-axis
/// sides are set; the other two stay `None`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct LayerStyle {
    pub position: Option<CssPosition>,
    pub top: Option<f64>,
    pub left: Option<f64>,
    pub right: Option<f64>,
    pub bottom: Option<f64>,
    pub width: Option<f64>,
    pub height: Option<f64>,
}

/// Offset style for the arrow along the layer's pinned edge. The primary
/// side carries `100%` (the arrow hangs just past that edge), the
/// orthogonal leading side carries the clamped pixel offset. Neutral (all
/// `None`) for center placements.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct ArrowStyle {
    pub top: Option<CssLength>,
    pub left: Option<CssLength>,
    pub right: Option<CssLength>,
    pub bottom: Option<CssLength>,
}

/// The style pair assembled for every result.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Styles {
    pub layer: LayerStyle,
    pub arrow: ArrowStyle,
}

/// Whether the watched subject has scrolled out of its containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Disappearance {
    /// At least one side is clipped.
    Partial,
    /// No visible overlap remains.
    Full,
}

/// The record handed back to the caller after every placement pass.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PositionResult {
    pub placement: super::anchor::AnchorType,
    /// Primary side label for orienting arrows and transitions.
    pub layer_side: crate::side::Side,
    pub styles: Styles,
    pub layer_bounds: Bounds,
    pub has_disappeared: Option<Disappearance>,
}
