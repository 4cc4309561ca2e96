pub mod agent;
pub mod direction;
pub mod environment;
pub mod generator;
pub mod loader;
pub mod memory;
pub mod params;

pub use agent::{Decision, EngineState, Explorer, StepOutcome};
pub use direction::{Direction, DirectionSet};
pub use environment::{Content, Grid, Position};
