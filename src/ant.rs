use crate::direction::{resolve, Direction, Turn};
use std::fmt;

/// The automaton's agent: a signed position (it may step off the grid) and a facing
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ant {
    pub row: isize,
    pub col: isize,
    pub facing: Direction,
}

impl Ant {
    /// Create a new ant at the given position; bounds are the grid's concern
    pub fn new(row: isize, col: isize, facing: Direction) -> Self {
        Self { row, col, facing }
    }

    /// Langton's rule: left on black, right on white
    #[inline]
    pub const fn turn_for(colour: bool) -> Turn {
        if colour {
            Turn::TurnLeft
        } else {
            Turn::TurnRight
        }
    }

    /// Turn according to the colour under the ant, then move `stride` cells forward
    pub fn step(&mut self, colour: bool, stride: isize) {
        let (action, facing) = resolve(self.facing, Self::turn_for(colour));
        let (dr, dc) = action.delta();

        *self = Self {
            row: self.row + dr * stride,
            col: self.col + dc * stride,
            facing,
        };
    }

    #[inline]
    pub fn position(&self) -> (isize, isize) {
        (self.row, self.col)
    }
}

impl fmt::Display for Ant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "row: {}, column: {} and pointed {}",
            self.row, self.col, self.facing
        )
    }
}
