use crate::ant::Ant;
use crate::direction::Direction;
use crate::error::{Result, SimError};
use crate::grid::Grid;
use crate::simulation::config::{BoundaryPolicy, SimulationConfig};
use tracing::{debug, info};

/// Side of the grid the ant walked off
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Edge {
    Top,
    Bottom,
    Left,
    Right,
}

/// What a single call to [`Simulation::step`] did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// Ant moved within the grid
    Moved,
    /// Ant walked off `Edge` and the grid grew on that side
    Extended(Edge),
    /// Ant walked off the grid under [`BoundaryPolicy::Terminate`]
    Terminated,
    /// Nothing happened: iteration bound reached or already terminated
    Halted,
}

/// Final state of a run, for reporting
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub iterations: u64,
    pub terminated: bool,
    pub ant: Ant,
    pub height: usize,
    pub width: usize,
    pub black_cells: usize,
}

/// Single-run Langton's ant simulation: owns its grid, its ant and its loop state
#[derive(Clone, Debug)]
pub struct Simulation {
    config: SimulationConfig,
    grid: Grid,
    ant: Ant,
    iteration: u64,
    terminated: bool,
    /// Rows and columns prepended so far
    origin: (usize, usize),
    last_in_bounds: (usize, usize),
}

impl Simulation {
    /// Fresh all-white grid with the ant at its centre facing up
    ///
    /// # Panics
    /// If `config.initial_size` is zero.
    pub fn new(config: SimulationConfig) -> Self {
        let grid = Grid::new(config.initial_size);
        let centre = config.initial_size / 2;
        let ant = Ant::new(centre as isize, centre as isize, Direction::Up);

        Self {
            config,
            grid,
            ant,
            iteration: 0,
            terminated: false,
            origin: (0, 0),
            last_in_bounds: (centre, centre),
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn ant(&self) -> &Ant {
        &self.ant
    }

    /// Iterations performed so far
    pub fn iteration(&self) -> u64 {
        self.iteration
    }

    pub fn is_terminated(&self) -> bool {
        self.terminated
    }

    /// Rows and columns prepended so far; subtract from grid coordinates to get
    /// coordinates relative to the initial grid
    pub fn origin(&self) -> (usize, usize) {
        self.origin
    }

    /// Ant position relative to the initial grid's top-left cell
    pub fn absolute_position(&self) -> (isize, isize) {
        (
            self.ant.row - self.origin.0 as isize,
            self.ant.col - self.origin.1 as isize,
        )
    }

    /// Last cell the ant occupied inside the grid
    pub fn last_in_bounds(&self) -> (usize, usize) {
        self.last_in_bounds
    }

    pub fn is_finished(&self) -> bool {
        self.terminated || self.iteration >= self.config.max_iterations
    }

    pub fn into_grid(self) -> Grid {
        self.grid
    }

    /// Advance one iteration: read, turn and move, resolve the boundary, then flip
    /// the departed cell
    pub fn step(&mut self) -> Result<StepOutcome> {
        if self.is_finished() {
            return Ok(StepOutcome::Halted);
        }
        self.iteration += 1;

        debug!(
            rows = self.grid.height(),
            cols = self.grid.width(),
            "running iteration {}",
            self.iteration
        );

        let (mut old_r, mut old_c) = self.cell_under_ant()?;
        let colour = self.grid.get(old_r, old_c);
        self.ant.step(colour, 1);
        debug!("ant new position is at {}", self.ant);

        let mut outcome = StepOutcome::Moved;
        if let Some(edge) = self.violated_edge() {
            match self.config.boundary_policy {
                BoundaryPolicy::Terminate => {
                    self.terminated = true;
                    self.last_in_bounds = (old_r, old_c);
                    info!(
                        "ant left the grid at iteration {}; last in-bounds cell row {} col {}",
                        self.iteration, old_r, old_c
                    );
                    return Ok(StepOutcome::Terminated);
                }
                BoundaryPolicy::Extend => {
                    debug!("adding {:?} edge", edge);
                    self.extend(edge);
                    match edge {
                        Edge::Left => old_c += 1,
                        Edge::Top => old_r += 1,
                        Edge::Right | Edge::Bottom => {}
                    }
                    outcome = StepOutcome::Extended(edge);
                }
            }
        }

        self.last_in_bounds = self.cell_under_ant()?;

        debug!("flipping cell at row {} col {}", old_r, old_c);
        self.grid.flip(old_r, old_c);

        Ok(outcome)
    }

    /// Step until the iteration bound or boundary termination
    pub fn run(&mut self) -> Result<RunSummary> {
        while self.step()? != StepOutcome::Halted {}
        Ok(self.summary())
    }

    pub fn summary(&self) -> RunSummary {
        RunSummary {
            iterations: self.iteration,
            terminated: self.terminated,
            ant: self.ant,
            height: self.grid.height(),
            width: self.grid.width(),
            black_cells: self.grid.black_cells(),
        }
    }

    /// Grid coordinates of the ant, or an invariant error if it is off the grid
    fn cell_under_ant(&self) -> Result<(usize, usize)> {
        if self.grid.contains(self.ant.row, self.ant.col) {
            Ok((self.ant.row as usize, self.ant.col as usize))
        } else {
            Err(SimError::AntOutOfBounds {
                row: self.ant.row,
                col: self.ant.col,
                facing: self.ant.facing.as_str(),
                height: self.grid.height(),
                width: self.grid.width(),
            })
        }
    }

    /// With unit strides at most one edge can be crossed per step
    fn violated_edge(&self) -> Option<Edge> {
        let (height, width) = self.grid.dimensions();
        if self.ant.col < 0 {
            Some(Edge::Left)
        } else if self.ant.row < 0 {
            Some(Edge::Top)
        } else if self.ant.col as usize >= width {
            Some(Edge::Right)
        } else if self.ant.row as usize >= height {
            Some(Edge::Bottom)
        } else {
            None
        }
    }

    fn extend(&mut self, edge: Edge) {
        match edge {
            Edge::Left => {
                self.grid.prepend_column();
                self.ant.col = 0;
                self.origin.1 += 1;
            }
            Edge::Top => {
                self.grid.prepend_row();
                self.ant.row = 0;
                self.origin.0 += 1;
            }
            Edge::Right => self.grid.append_column(),
            Edge::Bottom => self.grid.append_row(),
        }
    }
}
