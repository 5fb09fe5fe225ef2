//! The measured-rectangle snapshot handed to the engine: trigger, layer,
//! arrow, nearest scroll container, viewport, and the full scroll-container
//! chain. One snapshot is built per measurement pass and shared by every
//! placement candidate.

use serde::{Deserialize, Serialize};

use crate::bounds::{Bounds, BoundsOffsets};

/// Immutable snapshot of all subject rectangles, in viewport pixels.
///
/// `scroll_containers` is the nearest-first chain of ancestor scroll
/// containers with the viewport appended last, so the most restrictive
/// container is always reachable by merging the whole chain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SubjectsBounds {
    pub trigger: Bounds,
    pub layer: Bounds,
    pub arrow: Bounds,
    /// Nearest scroll container, used as the frame for absolute positioning.
    pub parent: Bounds,
    pub window: Bounds,
    pub scroll_containers: Vec<Bounds>,
}

/// Partial snapshot used by [`SubjectsBounds::merge`] to substitute
/// rectangles speculatively (e.g. an anticipated layer size) without
/// re-measuring.
#[derive(Debug, Clone, Default)]
pub struct SubjectsBoundsPatch {
    pub trigger: Option<Bounds>,
    pub layer: Option<Bounds>,
    pub arrow: Option<Bounds>,
}

impl SubjectsBounds {
    /// Assembles a snapshot from raw measurements. `scroll_containers` is
    /// the nearest-first ancestor chain without the viewport; the viewport
    /// is appended here so the chain is never empty.
    pub fn create(
        trigger: Bounds,
        layer: Bounds,
        arrow: Option<Bounds>,
        parent: Option<Bounds>,
        window: Bounds,
        scroll_containers: Vec<Bounds>,
    ) -> Self {
        let mut chain = scroll_containers;
        chain.push(window);
        Self {
            trigger,
            layer,
            arrow: arrow.unwrap_or_else(Bounds::empty),
            parent: parent.unwrap_or(window),
            window,
            scroll_containers: chain,
        }
    }

    /// Returns a new snapshot with some rectangles replaced.
    pub fn merge(&self, patch: SubjectsBoundsPatch) -> Self {
        Self {
            trigger: patch.trigger.unwrap_or(self.trigger),
            layer: patch.layer.unwrap_or(self.layer),
            arrow: patch.arrow.unwrap_or(self.arrow),
            parent: self.parent,
            window: self.window,
            scroll_containers: self.scroll_containers.clone(),
        }
    }

    pub fn trigger_has_bigger_width(&self) -> bool {
        self.trigger.width > self.layer.width
    }

    pub fn trigger_has_bigger_height(&self) -> bool {
        self.trigger.height > self.layer.height
    }

    /// Offsets from every container in the chain to `subject`, in chain
    /// order (nearest first, viewport last).
    pub fn offsets_to_scroll_containers(&self, subject: &Bounds) -> Vec<BoundsOffsets> {
        self.scroll_containers
            .iter()
            .map(|container| container.offsets_to(subject))
            .collect()
    }

    /// Offsets from the viewport only, for layers rendered outside their
    /// scroll containers.
    pub fn offsets_to_window(&self, subject: &Bounds) -> Vec<BoundsOffsets> {
        vec![self.window.offsets_to(subject)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> SubjectsBounds {
        SubjectsBounds::create(
            Bounds::from_measurement(100.0, 100.0, 100.0, 50.0),
            Bounds::from_measurement(0.0, 0.0, 200.0, 150.0),
            None,
            Some(Bounds::new(0.0, 0.0, 500.0, 500.0)),
            Bounds::new(0.0, 0.0, 1024.0, 768.0),
            vec![Bounds::new(50.0, 50.0, 400.0, 400.0)],
        )
    }

    #[test]
    fn create_appends_window_to_chain() {
        let subjects = snapshot();
        assert_eq!(subjects.scroll_containers.len(), 2);
        assert_eq!(subjects.scroll_containers[1], subjects.window);
    }

    #[test]
    fn create_defaults_parent_to_window() {
        let subjects = SubjectsBounds::create(
            Bounds::empty(),
            Bounds::empty(),
            None,
            None,
            Bounds::new(0.0, 0.0, 800.0, 600.0),
            Vec::new(),
        );
        assert_eq!(subjects.parent, subjects.window);
        assert_eq!(subjects.scroll_containers, vec![subjects.window]);
    }

    #[test]
    fn merge_substitutes_without_touching_chain() {
        let subjects = snapshot();
        let layer = Bounds::from_measurement(10.0, 10.0, 50.0, 50.0);
        let merged = subjects.merge(SubjectsBoundsPatch {
            layer: Some(layer),
            ..Default::default()
        });
        assert_eq!(merged.layer, layer);
        assert_eq!(merged.trigger, subjects.trigger);
        assert_eq!(merged.scroll_containers, subjects.scroll_containers);
    }

    #[test]
    fn trigger_size_comparisons() {
        let subjects = snapshot();
        assert!(!subjects.trigger_has_bigger_width());
        let wide_trigger = subjects.merge(SubjectsBoundsPatch {
            trigger: Some(Bounds::from_measurement(0.0, 0.0, 300.0, 20.0)),
            ..Default::default()
        });
        assert!(wide_trigger.trigger_has_bigger_width());
        assert!(!wide_trigger.trigger_has_bigger_height());
    }

    #[test]
    fn chain_offsets_come_back_in_chain_order() {
        let subjects = snapshot();
        let offsets = subjects.offsets_to_scroll_containers(&subjects.trigger);
        assert_eq!(offsets.len(), 2);
        // Nearest container {50..400} first, viewport last.
        assert_eq!(offsets[0].top, 50.0);
        assert_eq!(offsets[1].top, 100.0);
    }
}
