//! Arrow offset along the layer's pinned edge: places the arrow as close to
//! the trigger's midpoint as the corner clearance allows.

use crate::bounds::Bounds;
use crate::side::Side;

use super::candidate::Placement;
use super::style::{ArrowStyle, CssLength};

/// Computes the arrow style for a chosen placement and its final layer
/// rectangle. Center placements get a neutral style; the arrow has no
/// meaningful position on an overlay.
pub fn arrow_style(placement: &Placement, layer_bounds: &Bounds) -> ArrowStyle {
    if placement.anchor().is_center() {
        return ArrowStyle::default();
    }

    let primary = placement.primary();
    let subjects = placement.subjects();
    let trigger = subjects.trigger;
    let arrow = subjects.arrow;

    let (layer_lead, layer_size, arrow_size, trigger_center) = if primary.is_horizontal() {
        (
            layer_bounds.top,
            layer_bounds.height,
            arrow.height,
            trigger.top + trigger.height / 2.0,
        )
    } else {
        (
            layer_bounds.left,
            layer_bounds.width,
            arrow.width,
            trigger.left + trigger.width / 2.0,
        )
    };

    // Keep the arrow clear of the layer's corners while aiming at the
    // trigger's midpoint. The layer may have been clamped away from the
    // trigger; measuring against the final bounds absorbs that shift.
    let clearance = placement.arrow_offset() + arrow_size / 2.0;
    let min = clearance;
    let max = layer_size - clearance;
    let raw = trigger_center - layer_lead;
    let value = if min > max {
        (min + max) / 2.0
    } else {
        raw.clamp(min, max)
    };

    let mut style = ArrowStyle::default();
    match primary {
        Side::Top => style.top = Some(CssLength::Percent(100.0)),
        Side::Bottom => style.bottom = Some(CssLength::Percent(100.0)),
        Side::Left => style.left = Some(CssLength::Percent(100.0)),
        Side::Right => style.right = Some(CssLength::Percent(100.0)),
        Side::Center => {}
    }
    if primary.is_horizontal() {
        style.top = Some(CssLength::Px(value));
    } else {
        style.left = Some(CssLength::Px(value));
    }
    style
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::placement::anchor::{AnchorType, BOUND_ANCHORS};
    use crate::placement::candidate::PlacementOffsets;
    use crate::subjects::SubjectsBounds;

    fn subjects(trigger: Bounds, layer: Bounds, arrow: Bounds) -> SubjectsBounds {
        SubjectsBounds::create(
            trigger,
            layer,
            Some(arrow),
            None,
            Bounds::new(0.0, 0.0, 1000.0, 1000.0),
            Vec::new(),
        )
    }

    fn px(length: Option<CssLength>) -> f64 {
        match length {
            Some(CssLength::Px(value)) => value,
            other => panic!("expected pixel length, got {other:?}"),
        }
    }

    #[test]
    fn arrow_stays_within_corner_clearance_for_every_anchor() {
        let arrow_offset = 4.0;
        for (trigger_w, trigger_h) in [(40.0, 30.0), (400.0, 300.0)] {
            let subjects = subjects(
                Bounds::from_measurement(200.0, 200.0, trigger_w, trigger_h),
                Bounds::from_measurement(0.0, 0.0, 120.0, 90.0),
                Bounds::from_measurement(0.0, 0.0, 12.0, 12.0),
            );
            for anchor in BOUND_ANCHORS {
                let candidate = Placement::new(
                    anchor,
                    &subjects,
                    None,
                    PlacementOffsets {
                        arrow: arrow_offset,
                        ..Default::default()
                    },
                    true,
                );
                let layer = candidate.layer_bounds(0.0);
                let style = arrow_style(&candidate, &layer);
                let (value, size) = if anchor.primary().is_horizontal() {
                    (px(style.top), layer.height)
                } else {
                    (px(style.left), layer.width)
                };
                assert!(
                    value >= arrow_offset + 6.0 && value <= size - 6.0 - arrow_offset,
                    "{anchor}: arrow at {value} outside clearance"
                );
            }
        }
    }

    #[test]
    fn arrow_aims_at_trigger_midpoint_when_unconstrained() {
        let subjects = subjects(
            Bounds::from_measurement(200.0, 200.0, 60.0, 60.0),
            Bounds::from_measurement(0.0, 0.0, 100.0, 100.0),
            Bounds::from_measurement(0.0, 0.0, 10.0, 10.0),
        );
        let candidate = Placement::new(
            AnchorType::BottomCenter,
            &subjects,
            None,
            PlacementOffsets::default(),
            true,
        );
        let layer = candidate.layer_bounds(0.0);
        let style = arrow_style(&candidate, &layer);
        // Layer centered on the trigger: the arrow lands mid-edge.
        assert_eq!(px(style.left), 50.0);
        assert_eq!(style.bottom, Some(CssLength::Percent(100.0)));
        assert_eq!(style.right, None);
    }

    #[test]
    fn center_placement_gets_a_neutral_style() {
        let subjects = subjects(
            Bounds::from_measurement(0.0, 0.0, 10.0, 10.0),
            Bounds::from_measurement(0.0, 0.0, 10.0, 10.0),
            Bounds::empty(),
        );
        let candidate = Placement::new(
            AnchorType::Center,
            &subjects,
            None,
            PlacementOffsets::default(),
            true,
        );
        let layer = candidate.layer_bounds(0.0);
        assert_eq!(arrow_style(&candidate, &layer), ArrowStyle::default());
    }
}
