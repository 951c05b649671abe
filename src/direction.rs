use std::fmt;

/// The four cardinal facings of the ant
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    Up = 0,
    Down = 1,
    Right = 2,
    Left = 3,
}

/// A 90° rotation relative to the current facing
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Turn {
    TurnLeft = 0,
    TurnRight = 1,
}

/// Unit displacement applied to the ant after a turn
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum GridAction {
    IncRow,
    DecRow,
    IncCol,
    DecCol,
}

/// (facing, turn) -> (action, new facing), indexed by `Direction::index` then `Turn::index`
const TURN_TABLE: [[(GridAction, Direction); 2]; 4] = [
    // Up
    [
        (GridAction::DecCol, Direction::Left),
        (GridAction::IncCol, Direction::Right),
    ],
    // Down
    [
        (GridAction::IncCol, Direction::Right),
        (GridAction::DecCol, Direction::Left),
    ],
    // Right
    [
        (GridAction::DecRow, Direction::Up),
        (GridAction::IncRow, Direction::Down),
    ],
    // Left
    [
        (GridAction::IncRow, Direction::Down),
        (GridAction::DecRow, Direction::Up),
    ],
];

/// Look up the displacement and new facing for turning `turn` while facing `current`
#[inline]
pub const fn resolve(current: Direction, turn: Turn) -> (GridAction, Direction) {
    TURN_TABLE[current.index()][turn.index()]
}

impl Direction {
    /// All possible directions
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Right,
        Direction::Left,
    ];

    /// Get direction index for array indexing
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Get direction name as string
    pub const fn as_str(self) -> &'static str {
        match self {
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Right => "Right",
            Direction::Left => "Left",
        }
    }

    /// The action that moves one cell along this facing
    pub const fn forward(self) -> GridAction {
        match self {
            Direction::Up => GridAction::DecRow,
            Direction::Down => GridAction::IncRow,
            Direction::Right => GridAction::IncCol,
            Direction::Left => GridAction::DecCol,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Turn {
    pub const ALL: [Turn; 2] = [Turn::TurnLeft, Turn::TurnRight];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }
}

impl GridAction {
    /// (row, col) unit vector of this action
    #[inline]
    pub const fn delta(self) -> (isize, isize) {
        match self {
            GridAction::IncRow => (1, 0),
            GridAction::DecRow => (-1, 0),
            GridAction::IncCol => (0, 1),
            GridAction::DecCol => (0, -1),
        }
    }
}
