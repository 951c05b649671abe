use crate::cli::Args;
use crate::error::{Result, SimError};
use std::fmt;
use std::str::FromStr;

/// What happens when the ant steps outside the grid
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BoundaryPolicy {
    /// Grow the grid on the violated side so the ant stays on it
    #[default]
    Extend,
    /// Stop the run; the departed cell is left unflipped
    Terminate,
}

impl FromStr for BoundaryPolicy {
    type Err = SimError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.as_bytes() {
            b"extend" => Ok(BoundaryPolicy::Extend),
            b"terminate" => Ok(BoundaryPolicy::Terminate),
            _ => Err(SimError::InvalidBoundaryPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for BoundaryPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            BoundaryPolicy::Extend => "extend",
            BoundaryPolicy::Terminate => "terminate",
        })
    }
}

/// Parameters of a single run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SimulationConfig {
    /// Side of the initial square grid, at least 1
    pub initial_size: usize,
    /// Iteration bound; zero is an empty run
    pub max_iterations: u64,
    pub boundary_policy: BoundaryPolicy,
}

impl SimulationConfig {
    pub fn new(initial_size: usize, max_iterations: u64, boundary_policy: BoundaryPolicy) -> Self {
        Self {
            initial_size,
            max_iterations,
            boundary_policy,
        }
    }
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self::new(10, 10, BoundaryPolicy::Extend)
    }
}

impl TryFrom<&Args> for SimulationConfig {
    type Error = SimError;

    /// Operator-facing validation: both size and iteration count must be positive
    fn try_from(args: &Args) -> Result<Self> {
        let initial_size = match usize::try_from(args.size) {
            Ok(size) if size > 0 => size,
            _ => return Err(SimError::InvalidGridSize(args.size)),
        };
        let max_iterations = match u64::try_from(args.iterations) {
            Ok(n) if n > 0 => n,
            _ => return Err(SimError::InvalidIterations(args.iterations)),
        };

        Ok(Self::new(initial_size, max_iterations, args.boundary))
    }
}
