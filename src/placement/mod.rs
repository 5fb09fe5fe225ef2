//! Candidate search and result assembly: builds the priority-ordered
//! candidate list for a configuration, picks the winner, and packages the
//! final position result.

pub mod anchor;
pub mod arrow;
pub mod candidate;
pub mod style;

pub use anchor::{AnchorType, BOUND_ANCHORS};
pub use candidate::{Placement, PlacementOffsets};
pub use style::{
    ArrowStyle, CssLength, CssPosition, Disappearance, LayerStyle, PositionResult, Styles,
};

use crate::bounds::{Bounds, BoundsOffsets};
use crate::config::PositionConfig;
use crate::side::{BOUND_SIDES, Side, SizeProperty};
use crate::subjects::SubjectsBounds;

use arrow::arrow_style;

/// One placement pass: the ordered candidate set for a snapshot and a
/// configuration. Created, evaluated, and discarded per measurement pass;
/// nothing persists across calls.
#[derive(Debug)]
pub struct Placements {
    subjects: SubjectsBounds,
    candidates: Vec<Placement>,
    auto: bool,
    snap: bool,
    overflow_container: bool,
    dictates_dimensions: bool,
}

impl Placements {
    /// Builds the priority-ordered candidate list the configuration allows.
    ///
    /// The `center` anchor bypasses the search entirely (it is an overlay
    /// mode), as does `auto = false`, which pins the search to the single
    /// requested anchor.
    pub fn create(subjects: &SubjectsBounds, config: &PositionConfig) -> Self {
        let offsets = PlacementOffsets {
            trigger: config.trigger_offset,
            container: config.container_offset,
            arrow: config.arrow_offset,
        };
        let make = |anchor: AnchorType| {
            Placement::new(
                anchor,
                subjects,
                config.layer_dimensions.as_ref(),
                offsets,
                config.overflow_container,
            )
        };

        let anchors: Vec<AnchorType> = if config.placement.is_center() || !config.auto {
            vec![config.placement]
        } else {
            let mut ordered = priority_order(
                config.placement,
                config.prefer_x.side(),
                config.prefer_y.side(),
                subjects,
            );
            if let Some(allowed) = &config.possible_placements {
                ordered.retain(|anchor| allowed.contains(anchor));
                // An over-restrictive filter must not leave the pass with
                // nothing to evaluate.
                if ordered.is_empty() {
                    ordered.push(config.placement);
                }
            }
            ordered
        };

        Self {
            subjects: subjects.clone(),
            candidates: anchors.into_iter().map(make).collect(),
            auto: config.auto,
            snap: config.snap,
            overflow_container: config.overflow_container,
            dictates_dimensions: config.layer_dimensions.is_some(),
        }
    }

    /// The candidate anchors in evaluation order.
    pub fn anchors(&self) -> Vec<AnchorType> {
        self.candidates.iter().map(Placement::anchor).collect()
    }

    /// Evaluates the candidates and assembles the final result: the first
    /// candidate that fits every collision container wins; if none fits,
    /// the one with the largest visible surface (first-seen on ties).
    pub fn result(&self) -> PositionResult {
        let winner = self.select();
        let secondary_offset = self.secondary_offset(winner);
        let layer_bounds = winner.layer_bounds(secondary_offset);
        let styles = Styles {
            layer: self.layer_style(winner, &layer_bounds),
            arrow: arrow_style(winner, &layer_bounds),
        };
        PositionResult {
            placement: winner.anchor(),
            layer_side: winner.primary(),
            styles,
            layer_bounds,
            has_disappeared: self.has_disappeared(&layer_bounds),
        }
    }

    fn select(&self) -> &Placement {
        let mut best: Option<(&Placement, f64)> = None;
        for candidate in &self.candidates {
            if candidate.fits_container() {
                return candidate;
            }
            let surface = candidate.visible_surface();
            if best.is_none_or(|(_, best_surface)| surface > best_surface) {
                best = Some((candidate, surface));
            }
        }
        best.expect("placement pass always has at least one candidate").0
    }

    /// Continuous secondary-axis offset for the sliding mode: how far the
    /// winner should shift along its secondary axis to track the scroll,
    /// instead of jumping to the next discrete anchor.
    fn secondary_offset(&self, winner: &Placement) -> f64 {
        if !self.auto || self.snap || winner.anchor().is_center() {
            return 0.0;
        }
        let first = &self.candidates[0];
        if winner.anchor() == first.anchor() && winner.fits_container() {
            return 0.0;
        }
        // The top-priority candidate tells us which edge the layer is being
        // pushed past. Sliding the winner by its own remaining margin (or
        // overflow) on that side pins the layer's edge to the container
        // edge, which interpolates continuously between the discrete
        // alignments as the trigger scrolls.
        let Some(side) = first.secondary_offset_side() else {
            return 0.0;
        };
        if !side.is_orthogonal(winner.primary()) {
            return 0.0;
        }
        side.factor(-winner.container_offsets(0.0).side(side))
    }

    fn layer_style(&self, winner: &Placement, layer_bounds: &Bounds) -> LayerStyle {
        let (position, frame) = if self.overflow_container {
            (CssPosition::Fixed, self.subjects.window)
        } else {
            (CssPosition::Absolute, self.subjects.parent)
        };

        // Pin the primary-axis side opposite the anchor so CSS auto-sizing
        // grows the layer away from the trigger; pin the secondary-axis
        // side matching the alignment.
        let (pin_a, pin_b) = if winner.anchor().is_center() {
            (Side::Top, Side::Left)
        } else {
            let primary = winner.primary();
            let secondary = match winner.anchor().secondary() {
                Side::Center => {
                    if primary.is_horizontal() {
                        Side::Top
                    } else {
                        Side::Left
                    }
                }
                side => side,
            };
            (primary.opposite(), secondary)
        };

        let mut style = LayerStyle {
            position: Some(position),
            ..Default::default()
        };
        for side in [pin_a, pin_b] {
            let value = match side {
                Side::Top => layer_bounds.top - frame.top,
                Side::Left => layer_bounds.left - frame.left,
                Side::Right => frame.right - layer_bounds.right,
                Side::Bottom => frame.bottom - layer_bounds.bottom,
                Side::Center => continue,
            };
            match side {
                Side::Top => style.top = Some(value),
                Side::Left => style.left = Some(value),
                Side::Right => style.right = Some(value),
                Side::Bottom => style.bottom = Some(value),
                Side::Center => {}
            }
        }
        if self.dictates_dimensions {
            style.width = Some(layer_bounds.width);
            style.height = Some(layer_bounds.height);
        }
        style
    }

    /// Whether the watched subject (trigger when the layer overflows its
    /// containers, else the layer itself) has scrolled partially or fully
    /// out of the most restrictive container.
    fn has_disappeared(&self, layer_bounds: &Bounds) -> Option<Disappearance> {
        let subject = if self.overflow_container {
            self.subjects.trigger
        } else {
            *layer_bounds
        };
        let offsets = BoundsOffsets::merge_smallest_sides(
            &self.subjects.offsets_to_scroll_containers(&subject),
        );
        let fully_hidden = BOUND_SIDES.iter().any(|&side| {
            let size = match side.size_prop() {
                SizeProperty::Width => subject.width,
                SizeProperty::Height => subject.height,
            };
            offsets.side(side) <= -size
        });
        if fully_hidden {
            Some(Disappearance::Full)
        } else if BOUND_SIDES.iter().any(|&side| offsets.side(side) < 0.0) {
            Some(Disappearance::Partial)
        } else {
            None
        }
    }
}

/// Builds the priority-ordered list of the twelve bound anchors for a
/// preferred anchor:
///
/// 1. the three variants of the preferred primary side (requested alignment
///    first, the axis preference breaking ties for `center`),
/// 2. the orthogonal side picked by the preferred alignment (trigger bigger
///    than layer) or the axis preference, with alignments leaning toward
///    the preferred primary,
/// 3. the mirror orthogonal side,
/// 4. the opposite side last.
fn priority_order(
    preferred: AnchorType,
    prefer_x: Side,
    prefer_y: Side,
    subjects: &SubjectsBounds,
) -> Vec<AnchorType> {
    let primary = preferred.primary();
    let secondary = preferred.secondary();

    // Alignment sides of the secondary axis (left/right for a vertical
    // primary, top/bottom for a horizontal one).
    let (axis_start, axis_end, axis_pref, trigger_bigger) = if primary.is_horizontal() {
        (
            Side::Top,
            Side::Bottom,
            prefer_y,
            subjects.trigger_has_bigger_height(),
        )
    } else {
        (
            Side::Left,
            Side::Right,
            prefer_x,
            subjects.trigger_has_bigger_width(),
        )
    };

    let secondary_order: [Side; 3] = if secondary == axis_start {
        [axis_start, Side::Center, axis_end]
    } else if secondary == axis_end {
        [axis_end, Side::Center, axis_start]
    } else {
        [Side::Center, axis_pref, axis_pref.opposite()]
    };

    // The orthogonal placements live on the same axis the secondary
    // alignment uses; the preferred alignment picks the first one when the
    // trigger dominates that axis, otherwise the axis preference does.
    let ortho_first = if trigger_bigger && !secondary.is_center() {
        secondary
    } else {
        axis_pref
    };
    // Their alignments run along the primary's own axis, leaning toward
    // the preferred primary side.
    let (own_start, own_end) = if primary.is_horizontal() {
        (Side::Left, Side::Right)
    } else {
        (Side::Top, Side::Bottom)
    };
    let ortho_secondary_order: [Side; 3] = if primary.is_push() {
        [own_end, Side::Center, own_start]
    } else {
        [own_start, Side::Center, own_end]
    };

    let mut out = Vec::with_capacity(12);
    for side in secondary_order {
        out.push(AnchorType::from_sides(primary, side));
    }
    for side in ortho_secondary_order {
        out.push(AnchorType::from_sides(ortho_first, side));
    }
    for side in ortho_secondary_order {
        out.push(AnchorType::from_sides(ortho_first.opposite(), side));
    }
    for side in secondary_order {
        out.push(AnchorType::from_sides(primary.opposite(), side));
    }
    out
}

/// Convenience entry point: one full placement pass.
pub fn position(subjects: &SubjectsBounds, config: &PositionConfig) -> PositionResult {
    Placements::create(subjects, config).result()
}
