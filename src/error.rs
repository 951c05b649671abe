use std::fmt;

/// Custom error types for the ant simulation
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SimError {
    /// Verbosity flag is not one of info, debug or fatal
    InvalidVerbosity(String),
    /// Boundary policy flag is not one of extend or terminate
    InvalidBoundaryPolicy(String),
    /// Initial grid side must be strictly positive
    InvalidGridSize(i64),
    /// Iteration bound must be strictly positive
    InvalidIterations(i64),
    /// Ant left the grid even though the boundary policy was applied
    AntOutOfBounds {
        row: isize,
        col: isize,
        facing: &'static str,
        height: usize,
        width: usize,
    },
}

impl fmt::Display for SimError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SimError::InvalidVerbosity(level) => write!(
                f,
                "invalid debug level {}. can be one of info, debug and fatal",
                level
            ),
            SimError::InvalidBoundaryPolicy(policy) => write!(
                f,
                "invalid boundary policy {}. can be one of extend and terminate",
                policy
            ),
            SimError::InvalidGridSize(size) => {
                write!(f, "invalid grid size {}: must be at least 1", size)
            }
            SimError::InvalidIterations(n) => {
                write!(f, "invalid number of iterations {}: must be at least 1", n)
            }
            SimError::AntOutOfBounds {
                row,
                col,
                facing,
                height,
                width,
            } => write!(
                f,
                "ant at row: {}, column: {} and pointed {} is outside the {}x{} grid",
                row, col, facing, height, width
            ),
        }
    }
}

impl std::error::Error for SimError {}

/// Result type alias for this crate
pub type Result<T> = std::result::Result<T, SimError>;
