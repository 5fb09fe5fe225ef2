//! Scenario files: a serializable description of one placement problem
//! (rectangles + configuration), used by the CLI and the fixture suite.
//! Files are JSON5 so fixtures can carry comments.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::bounds::Bounds;
use crate::config::{PositionConfig, PreferX, PreferY};
use crate::placement::anchor::AnchorType;
use crate::placement::{PositionResult, position};
use crate::subjects::SubjectsBounds;

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse scenario: {0}")]
    Parse(#[from] json5::Error),
}

/// A measured rectangle as scenario files express it.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct RectSpec {
    pub top: f64,
    pub left: f64,
    pub width: f64,
    pub height: f64,
}

impl RectSpec {
    pub fn to_bounds(self) -> Bounds {
        Bounds::from_measurement(self.top, self.left, self.width, self.height)
    }
}

/// The serializable subset of [`PositionConfig`]; field names follow the
/// camelCase convention of the measurement-side tooling.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScenarioConfig {
    pub placement: AnchorType,
    pub possible_placements: Option<Vec<AnchorType>>,
    pub auto: bool,
    pub snap: bool,
    pub prefer_x: PreferX,
    pub prefer_y: PreferY,
    pub trigger_offset: f64,
    pub container_offset: f64,
    pub arrow_offset: f64,
    pub overflow_container: bool,
}

impl Default for ScenarioConfig {
    fn default() -> Self {
        let config = PositionConfig::default();
        Self {
            placement: config.placement,
            possible_placements: config.possible_placements,
            auto: config.auto,
            snap: config.snap,
            prefer_x: config.prefer_x,
            prefer_y: config.prefer_y,
            trigger_offset: config.trigger_offset,
            container_offset: config.container_offset,
            arrow_offset: config.arrow_offset,
            overflow_container: config.overflow_container,
        }
    }
}

impl ScenarioConfig {
    pub fn to_position_config(&self) -> PositionConfig {
        PositionConfig {
            placement: self.placement,
            possible_placements: self.possible_placements.clone(),
            auto: self.auto,
            snap: self.snap,
            prefer_x: self.prefer_x,
            prefer_y: self.prefer_y,
            trigger_offset: self.trigger_offset,
            container_offset: self.container_offset,
            arrow_offset: self.arrow_offset,
            overflow_container: self.overflow_container,
            layer_dimensions: None,
        }
    }
}

/// One placement problem: the subject rectangles and the configuration to
/// evaluate them under.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scenario {
    pub trigger: RectSpec,
    pub layer: RectSpec,
    pub arrow: Option<RectSpec>,
    pub parent: Option<RectSpec>,
    pub window: RectSpec,
    #[serde(default)]
    pub scroll_containers: Vec<RectSpec>,
    #[serde(default)]
    pub config: ScenarioConfig,
}

impl Scenario {
    pub fn subjects_bounds(&self) -> SubjectsBounds {
        SubjectsBounds::create(
            self.trigger.to_bounds(),
            self.layer.to_bounds(),
            self.arrow.map(RectSpec::to_bounds),
            self.parent.map(RectSpec::to_bounds),
            self.window.to_bounds(),
            self.scroll_containers
                .iter()
                .map(|rect| rect.to_bounds())
                .collect(),
        )
    }

    /// Runs one full placement pass for this scenario.
    pub fn evaluate(&self) -> PositionResult {
        position(&self.subjects_bounds(), &self.config.to_position_config())
    }
}

/// Parses a scenario from JSON5 source.
pub fn parse_scenario(source: &str) -> Result<Scenario, ScenarioError> {
    Ok(json5::from_str(source)?)
}

/// Reads and parses a scenario file.
pub fn load_scenario(path: &Path) -> Result<Scenario, ScenarioError> {
    let contents = std::fs::read_to_string(path)?;
    parse_scenario(&contents)
}
