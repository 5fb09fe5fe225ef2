pub mod bounds;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod placement;
pub mod scenario;
pub mod side;
pub mod subjects;

pub use bounds::{Bounds, BoundsOffsets};
pub use config::{LayerDimensions, PositionConfig, PreferX, PreferY};
pub use placement::{
    AnchorType, Disappearance, Placements, PositionResult, Styles, position,
};
pub use scenario::{Scenario, load_scenario, parse_scenario};
pub use side::Side;
pub use subjects::SubjectsBounds;

#[cfg(feature = "cli")]
pub use cli::run;
