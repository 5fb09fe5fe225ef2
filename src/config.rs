//! Position configuration: which anchor is preferred, how the candidate
//! search behaves, and the pixel offsets applied around the trigger,
//! containers, and arrow.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::placement::anchor::AnchorType;
use crate::side::Side;

/// Horizontal tie-break preference for the candidate search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferX {
    Left,
    Right,
}

/// Vertical tie-break preference for the candidate search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PreferY {
    Top,
    Bottom,
}

impl PreferX {
    pub fn side(self) -> Side {
        match self {
            Self::Left => Side::Left,
            Self::Right => Side::Right,
        }
    }
}

impl PreferY {
    pub fn side(self) -> Side {
        match self {
            Self::Top => Side::Top,
            Self::Bottom => Side::Bottom,
        }
    }
}

/// An anticipated layer size for one candidate primary side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerDimensions {
    pub width: f64,
    pub height: f64,
}

/// Per-side layer size predictor, consulted before each candidate is
/// evaluated so layers whose size depends on which side they land on do not
/// feed their own measurement back into the search.
pub type LayerDimensionsFn = Arc<dyn Fn(Side) -> LayerDimensions + Send + Sync>;

/// Full engine configuration. `Default` matches the documented defaults:
/// preferred anchor `top-center`, no auto-search, `container_offset` 10px,
/// all other offsets zero, colliding against the viewport.
#[derive(Clone)]
pub struct PositionConfig {
    /// Preferred anchor the search starts from.
    pub placement: AnchorType,
    /// Subset of the twelve bound anchors the search may consider; `None`
    /// allows all of them.
    pub possible_placements: Option<Vec<AnchorType>>,
    /// Whether to search for a better anchor when the preferred one does
    /// not fit.
    pub auto: bool,
    /// With `auto`: jump discretely between anchors instead of sliding the
    /// secondary offset continuously.
    pub snap: bool,
    pub prefer_x: PreferX,
    pub prefer_y: PreferY,
    /// Gap between trigger and layer, in pixels.
    pub trigger_offset: f64,
    /// Minimum distance the layer keeps from container edges, in pixels.
    pub container_offset: f64,
    /// Corner clearance for the arrow along the layer edge, in pixels.
    pub arrow_offset: f64,
    /// When true the layer lives outside its scroll containers and collides
    /// with the viewport only; when false it is constrained to the full
    /// container chain.
    pub overflow_container: bool,
    pub layer_dimensions: Option<LayerDimensionsFn>,
}

impl Default for PositionConfig {
    fn default() -> Self {
        Self {
            placement: AnchorType::TopCenter,
            possible_placements: None,
            auto: false,
            snap: false,
            prefer_x: PreferX::Right,
            prefer_y: PreferY::Bottom,
            trigger_offset: 0.0,
            container_offset: 10.0,
            arrow_offset: 0.0,
            overflow_container: true,
            layer_dimensions: None,
        }
    }
}

impl fmt::Debug for PositionConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionConfig")
            .field("placement", &self.placement)
            .field("possible_placements", &self.possible_placements)
            .field("auto", &self.auto)
            .field("snap", &self.snap)
            .field("prefer_x", &self.prefer_x)
            .field("prefer_y", &self.prefer_y)
            .field("trigger_offset", &self.trigger_offset)
            .field("container_offset", &self.container_offset)
            .field("arrow_offset", &self.arrow_offset)
            .field("overflow_container", &self.overflow_container)
            .field(
                "layer_dimensions",
                &self.layer_dimensions.as_ref().map(|_| "<fn>"),
            )
            .finish()
    }
}
