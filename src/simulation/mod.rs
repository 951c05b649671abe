pub mod config;
pub mod engine;

pub use config::{BoundaryPolicy, SimulationConfig};
pub use engine::{Edge, RunSummary, Simulation, StepOutcome};
