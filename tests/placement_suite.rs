use std::path::Path;

use layerpos::placement::{CssLength, CssPosition};
use layerpos::{AnchorType, Disappearance, PositionResult, Side, load_scenario};

fn evaluate_fixture(path: &Path) -> PositionResult {
    let scenario = load_scenario(path).expect("fixture load failed");
    scenario.evaluate()
}

fn assert_sane(result: &PositionResult, fixture: &str) {
    let bounds = result.layer_bounds;
    assert!(bounds.top.is_finite(), "{fixture}: non-finite top");
    assert!(bounds.left.is_finite(), "{fixture}: non-finite left");
    assert!(bounds.width >= 0.0, "{fixture}: negative width");
    assert!(bounds.height >= 0.0, "{fixture}: negative height");
    assert_eq!(
        bounds.right - bounds.left,
        bounds.width,
        "{fixture}: width invariant broken"
    );
    assert_eq!(
        bounds.bottom - bounds.top,
        bounds.height,
        "{fixture}: height invariant broken"
    );
}

#[test]
fn evaluate_all_fixtures() {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures");

    // Keep this list explicit so new fixtures must be added intentionally.
    let candidates = [
        "basic.json5",
        "near_top.json5",
        "constrained.json5",
        "arrow.json5",
        "slide.json5",
        "unsatisfiable.json5",
        "scrolled_out.json5",
    ];

    for rel in candidates {
        let path = root.join(rel);
        assert!(path.exists(), "fixture missing: {rel}");
        let result = evaluate_fixture(&path);
        assert_sane(&result, rel);
    }
}

#[test]
fn basic_tooltip_sits_under_its_trigger() {
    let result = evaluate_fixture(&fixture_path("basic.json5"));
    assert_eq!(result.placement, AnchorType::BottomCenter);
    assert_eq!(result.layer_side, Side::Bottom);
    assert_eq!(result.layer_bounds.top, 330.0);
    assert_eq!(result.layer_bounds.left, 260.0);
    assert!(result.has_disappeared.is_none());
    // Pinned below the trigger: top + left concrete, bottom/right auto.
    let style = result.styles.layer;
    assert_eq!(style.position, Some(CssPosition::Fixed));
    assert_eq!(style.top, Some(330.0));
    assert_eq!(style.left, Some(260.0));
    assert_eq!(style.bottom, None);
}

#[test]
fn near_top_trigger_flips_the_layer_downward() {
    let result = evaluate_fixture(&fixture_path("near_top.json5"));
    assert_eq!(result.placement, AnchorType::BottomCenter);
    assert_eq!(result.layer_bounds.top, 38.0);
    assert_eq!(result.layer_bounds.left, 560.0);
}

#[test]
fn constrained_layer_reports_container_relative_offsets() {
    let result = evaluate_fixture(&fixture_path("constrained.json5"));
    assert_eq!(result.placement, AnchorType::BottomCenter);
    let style = result.styles.layer;
    assert_eq!(style.position, Some(CssPosition::Absolute));
    assert_eq!(style.top, Some(120.0));
    assert_eq!(style.left, Some(20.0));
    assert!(result.has_disappeared.is_none());
}

#[test]
fn arrow_points_at_the_trigger_midpoint() {
    let result = evaluate_fixture(&fixture_path("arrow.json5"));
    assert_eq!(result.placement, AnchorType::TopCenter);
    let arrow = result.styles.arrow;
    assert_eq!(arrow.top, Some(CssLength::Percent(100.0)));
    assert_eq!(arrow.left, Some(CssLength::Px(100.0)));
    assert_eq!(arrow.bottom, None);
}

#[test]
fn sliding_pins_the_layer_to_the_viewport_edge() {
    let result = evaluate_fixture(&fixture_path("slide.json5"));
    assert_eq!(result.layer_bounds.right, 1000.0);
    // The slid layer still hangs off the trigger's side.
    assert_eq!(result.layer_side, Side::Bottom);
}

#[test]
fn unsatisfiable_scenario_returns_best_effort() {
    let result = evaluate_fixture(&fixture_path("unsatisfiable.json5"));
    assert_eq!(result.placement, AnchorType::TopCenter);
    assert!(result.layer_bounds.surface() > 0.0);
}

#[test]
fn scrolled_out_trigger_is_flagged() {
    let result = evaluate_fixture(&fixture_path("scrolled_out.json5"));
    assert_eq!(result.has_disappeared, Some(Disappearance::Partial));
    assert_eq!(result.placement, AnchorType::BottomCenter);
}

fn fixture_path(rel: &str) -> std::path::PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(rel)
}
