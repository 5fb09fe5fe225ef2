//! Per-candidate placement geometry: given one anchor and a measured
//! snapshot, compute the layer rectangle, whether it fits the container
//! chain, and how visible it would be. One short-lived instance per
//! candidate anchor; all instances of a pass share the same snapshot.

use once_cell::unsync::OnceCell;

use crate::bounds::{Bounds, BoundsOffsets};
use crate::config::LayerDimensionsFn;
use crate::side::{Side, SizeProperty};
use crate::subjects::{SubjectsBounds, SubjectsBoundsPatch};

use super::anchor::AnchorType;

/// The configured pixel offsets a candidate computes with.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlacementOffsets {
    pub trigger: f64,
    pub container: f64,
    pub arrow: f64,
}

/// One candidate placement. Layer bounds and container offsets for the
/// dominant zero-secondary-offset call are memoized; a non-zero secondary
/// offset (used only by the sliding interpolation) always recomputes and
/// never touches the caches.
#[derive(Debug)]
pub struct Placement {
    anchor: AnchorType,
    subjects: SubjectsBounds,
    offsets: PlacementOffsets,
    overflow_container: bool,
    cached_layer_bounds: OnceCell<Bounds>,
    cached_container_offsets: OnceCell<BoundsOffsets>,
}

impl Placement {
    pub fn new(
        anchor: AnchorType,
        subjects: &SubjectsBounds,
        layer_dimensions: Option<&LayerDimensionsFn>,
        offsets: PlacementOffsets,
        overflow_container: bool,
    ) -> Self {
        // Substitute the anticipated layer size for this candidate's side
        // before any geometry runs, so side-dependent layers don't feed
        // their current measurement back into the search.
        let subjects = match layer_dimensions {
            Some(dimensions) => {
                let size = dimensions(anchor.primary());
                let layer = Bounds::from_measurement(
                    subjects.layer.top,
                    subjects.layer.left,
                    size.width,
                    size.height,
                );
                subjects.merge(SubjectsBoundsPatch {
                    layer: Some(layer),
                    ..Default::default()
                })
            }
            None => subjects.clone(),
        };
        Self {
            anchor,
            subjects,
            offsets,
            overflow_container,
            cached_layer_bounds: OnceCell::new(),
            cached_container_offsets: OnceCell::new(),
        }
    }

    pub fn anchor(&self) -> AnchorType {
        self.anchor
    }

    pub fn primary(&self) -> Side {
        self.anchor.primary()
    }

    pub fn subjects(&self) -> &SubjectsBounds {
        &self.subjects
    }

    pub fn arrow_offset(&self) -> f64 {
        self.offsets.arrow
    }

    /// True if the trigger is bigger than the layer on the secondary axis.
    pub fn trigger_is_bigger(&self) -> bool {
        match self.primary().orthogonal_size_prop() {
            SizeProperty::Width => self.subjects.trigger_has_bigger_width(),
            SizeProperty::Height => self.subjects.trigger_has_bigger_height(),
        }
    }

    /// The layer rectangle this candidate produces. `secondary_offset`
    /// shifts the layer along the secondary axis before arrow compensation;
    /// it is non-zero only during sliding interpolation.
    pub fn layer_bounds(&self, secondary_offset: f64) -> Bounds {
        if secondary_offset == 0.0 {
            *self
                .cached_layer_bounds
                .get_or_init(|| self.compute_layer_bounds(0.0))
        } else {
            self.compute_layer_bounds(secondary_offset)
        }
    }

    fn compute_layer_bounds(&self, secondary_offset: f64) -> Bounds {
        let trigger = self.subjects.trigger;
        let layer = self.subjects.layer;

        if self.anchor.is_center() {
            // Overlay mode: midpoint centering on both axes, no collision
            // avoidance.
            let top = trigger.top + trigger.height / 2.0 - layer.height / 2.0;
            let left = trigger.left + trigger.width / 2.0 - layer.width / 2.0;
            return Bounds::from_measurement(top, left, layer.width, layer.height);
        }

        let primary = self.primary();
        let trigger_offset = self.offsets.trigger;

        // Primary-axis position: the trigger's near edge plus the gap, with
        // the layer extending away from the trigger.
        let primary_lead = match primary {
            Side::Top => trigger.top - trigger_offset - layer.height,
            Side::Bottom => trigger.bottom + trigger_offset,
            Side::Left => trigger.left - trigger_offset - layer.width,
            Side::Right | Side::Center => trigger.right + trigger_offset,
        };

        // Secondary-axis position, as the leading-edge coordinate.
        let (t0, t1, layer_size) = if primary.is_horizontal() {
            (trigger.top, trigger.bottom, layer.height)
        } else {
            (trigger.left, trigger.right, layer.width)
        };
        let base = match self.anchor.secondary() {
            Side::Left | Side::Top => t0,
            Side::Right | Side::Bottom => t1 - layer_size,
            Side::Center => t0 + (t1 - t0) / 2.0 - layer_size / 2.0,
        };
        let (limit_min, limit_max) = self.secondary_limits();
        let secondary_lead = clamp_total(base + secondary_offset, limit_min, limit_max);

        if primary.is_horizontal() {
            Bounds::from_measurement(secondary_lead, primary_lead, layer.width, layer.height)
        } else {
            Bounds::from_measurement(primary_lead, secondary_lead, layer.width, layer.height)
        }
    }

    /// The range the layer's secondary leading edge may occupy while the
    /// arrow can still point at the trigger. When the trigger is bigger the
    /// layer is kept inside the trigger's span instead.
    fn secondary_limits(&self) -> (f64, f64) {
        let trigger = self.subjects.trigger;
        let layer = self.subjects.layer;
        let arrow = self.subjects.arrow;
        let (t0, t1, layer_size, arrow_size) = if self.primary().is_horizontal() {
            (trigger.top, trigger.bottom, layer.height, arrow.height)
        } else {
            (trigger.left, trigger.right, layer.width, arrow.width)
        };
        if self.trigger_is_bigger() {
            (t0, t1 - layer_size)
        } else {
            let clearance = arrow_size / 2.0 + self.offsets.arrow;
            (t0 - layer_size + clearance, t1 - clearance)
        }
    }

    /// The layer rectangle grown outward by the container offset; this is
    /// what collides with the scroll containers.
    fn collision_bounds(&self, secondary_offset: f64) -> Bounds {
        let container_offset = self.offsets.container;
        self.layer_bounds(secondary_offset)
            .map_sides(|side, value| value + side.factor(-container_offset))
    }

    /// Offsets from the most restrictive collision container to the
    /// (expanded) layer rectangle. Negative sides are where the layer is
    /// being clipped.
    pub fn container_offsets(&self, secondary_offset: f64) -> BoundsOffsets {
        if secondary_offset == 0.0 {
            *self
                .cached_container_offsets
                .get_or_init(|| self.compute_container_offsets(0.0))
        } else {
            self.compute_container_offsets(secondary_offset)
        }
    }

    fn compute_container_offsets(&self, secondary_offset: f64) -> BoundsOffsets {
        let collision = self.collision_bounds(secondary_offset);
        let offsets = if self.overflow_container {
            self.subjects.offsets_to_window(&collision)
        } else {
            self.subjects.offsets_to_scroll_containers(&collision)
        };
        BoundsOffsets::merge_smallest_sides(&offsets)
    }

    /// True iff the candidate fits every collision container.
    pub fn fits_container(&self) -> bool {
        self.container_offsets(0.0).all_sides_are_positive()
    }

    /// Surface area of the layer after clipping away whatever falls outside
    /// the most restrictive container; ranks candidates when none fits.
    pub fn visible_surface(&self) -> f64 {
        let layer = self.layer_bounds(0.0);
        let mut visible = layer;
        for (side, value) in self.container_offsets(0.0).negative_sides() {
            visible = visible.with_side(side, visible.side(side) + side.factor(-value));
        }
        visible.width.max(0.0) * visible.height.max(0.0)
    }

    /// Among the sides orthogonal to the primary, the one currently being
    /// clipped the hardest; drives the sliding interpolation.
    pub fn secondary_offset_side(&self) -> Option<Side> {
        let primary = self.primary();
        self.container_offsets(0.0)
            .negative_sides()
            .into_iter()
            .filter(|&(side, _)| side.is_orthogonal(primary))
            .min_by(|a, b| a.1.total_cmp(&b.1))
            .map(|(side, _)| side)
    }
}

/// Clamp that stays total when the range is inverted (a layer too small for
/// the requested clearances collapses to the range midpoint).
fn clamp_total(value: f64, min: f64, max: f64) -> f64 {
    if min > max {
        (min + max) / 2.0
    } else {
        value.clamp(min, max)
    }
}
