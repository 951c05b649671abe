//! # Langton's Ant
//!
//! A two-colour, four-direction cellular automaton on an orthogonal grid.
//!
//! The ant reads the colour under it, turns (right on white, left on black),
//! steps forward and flips the cell it left. The grid either grows when the
//! ant walks off an edge or the run stops there, depending on the
//! [`BoundaryPolicy`].

pub mod ant;
pub mod cli;
pub mod direction;
pub mod error;
pub mod grid;
pub mod logging;
pub mod simulation;

pub use ant::Ant;
pub use cli::{Args, Verbosity};
pub use direction::{resolve, Direction, GridAction, Turn};
pub use error::{Result, SimError};
pub use grid::Grid;
pub use simulation::{BoundaryPolicy, RunSummary, Simulation, SimulationConfig, StepOutcome};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, BoundaryPolicy, Direction, Grid, Result, SimError, Simulation,
        SimulationConfig, Verbosity,
    };
}
