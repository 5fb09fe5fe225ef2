//! The 13-way anchor enum: 4 primary sides x {start, center, end} plus the
//! special centered-overlay anchor. Kept as explicit match tables so the
//! side mapping stays auditable.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::side::Side;

/// A candidate anchor: which side of the trigger the layer attaches to, and
/// how it aligns along the orthogonal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AnchorType {
    TopStart,
    TopCenter,
    TopEnd,
    LeftStart,
    LeftCenter,
    LeftEnd,
    RightStart,
    RightCenter,
    RightEnd,
    BottomStart,
    BottomCenter,
    BottomEnd,
    /// Layer centered over the trigger; an overlay mode with no collision
    /// avoidance.
    Center,
}

/// The twelve bound anchors, excluding [`AnchorType::Center`].
pub const BOUND_ANCHORS: [AnchorType; 12] = [
    AnchorType::TopStart,
    AnchorType::TopCenter,
    AnchorType::TopEnd,
    AnchorType::LeftStart,
    AnchorType::LeftCenter,
    AnchorType::LeftEnd,
    AnchorType::RightStart,
    AnchorType::RightCenter,
    AnchorType::RightEnd,
    AnchorType::BottomStart,
    AnchorType::BottomCenter,
    AnchorType::BottomEnd,
];

impl AnchorType {
    /// The side of the trigger the layer sits against (`Center` for the
    /// overlay anchor).
    pub fn primary(self) -> Side {
        match self {
            Self::TopStart | Self::TopCenter | Self::TopEnd => Side::Top,
            Self::LeftStart | Self::LeftCenter | Self::LeftEnd => Side::Left,
            Self::RightStart | Self::RightCenter | Self::RightEnd => Side::Right,
            Self::BottomStart | Self::BottomCenter | Self::BottomEnd => Side::Bottom,
            Self::Center => Side::Center,
        }
    }

    /// The alignment along the orthogonal axis, expressed as the side the
    /// layer's edge aligns with: start maps to the push side of that axis
    /// (left for top/bottom primaries, top for left/right primaries).
    pub fn secondary(self) -> Side {
        match self {
            Self::TopStart | Self::BottomStart => Side::Left,
            Self::TopEnd | Self::BottomEnd => Side::Right,
            Self::LeftStart | Self::RightStart => Side::Top,
            Self::LeftEnd | Self::RightEnd => Side::Bottom,
            Self::TopCenter
            | Self::BottomCenter
            | Self::LeftCenter
            | Self::RightCenter
            | Self::Center => Side::Center,
        }
    }

    pub fn is_center(self) -> bool {
        matches!(self, Self::Center)
    }

    /// Rebuilds an anchor from a primary side and a secondary alignment
    /// side. Any center input collapses to the matching centered variant.
    pub fn from_sides(primary: Side, secondary: Side) -> Self {
        match (primary, secondary) {
            (Side::Top, Side::Left) => Self::TopStart,
            (Side::Top, Side::Right) => Self::TopEnd,
            (Side::Top, _) => Self::TopCenter,
            (Side::Bottom, Side::Left) => Self::BottomStart,
            (Side::Bottom, Side::Right) => Self::BottomEnd,
            (Side::Bottom, _) => Self::BottomCenter,
            (Side::Left, Side::Top) => Self::LeftStart,
            (Side::Left, Side::Bottom) => Self::LeftEnd,
            (Side::Left, _) => Self::LeftCenter,
            (Side::Right, Side::Top) => Self::RightStart,
            (Side::Right, Side::Bottom) => Self::RightEnd,
            (Side::Right, _) => Self::RightCenter,
            (Side::Center, _) => Self::Center,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::TopStart => "top-start",
            Self::TopCenter => "top-center",
            Self::TopEnd => "top-end",
            Self::LeftStart => "left-start",
            Self::LeftCenter => "left-center",
            Self::LeftEnd => "left-end",
            Self::RightStart => "right-start",
            Self::RightCenter => "right-center",
            Self::RightEnd => "right-end",
            Self::BottomStart => "bottom-start",
            Self::BottomCenter => "bottom-center",
            Self::BottomEnd => "bottom-end",
            Self::Center => "center",
        }
    }
}

impl fmt::Display for AnchorType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AnchorType {
    type Err = String;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        BOUND_ANCHORS
            .iter()
            .copied()
            .chain(std::iter::once(Self::Center))
            .find(|anchor| anchor.as_str() == token)
            .ok_or_else(|| format!("unknown placement: {token:?}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn string_round_trip_covers_all_anchors() {
        for anchor in BOUND_ANCHORS.iter().copied().chain([AnchorType::Center]) {
            assert_eq!(anchor.as_str().parse::<AnchorType>(), Ok(anchor));
        }
        assert!("top-left".parse::<AnchorType>().is_err());
    }

    #[test]
    fn sides_round_trip() {
        for anchor in BOUND_ANCHORS {
            assert_eq!(
                AnchorType::from_sides(anchor.primary(), anchor.secondary()),
                anchor
            );
        }
    }

    #[test]
    fn secondary_is_orthogonal_to_primary() {
        for anchor in BOUND_ANCHORS {
            let secondary = anchor.secondary();
            if !secondary.is_center() {
                assert!(anchor.primary().is_orthogonal(secondary), "{anchor}");
            }
        }
    }
}
