use std::fmt;

use strum::{EnumIter, IntoEnumIterator};

use super::Maze;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

// Declaration order is the order neighbors are offered to the picker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, EnumIter)]
pub enum Direction {
    Top,
    Right,
    Bottom,
    Left,
}

impl Direction {
    pub fn opposite(self) -> Self {
        match self {
            Direction::Top => Direction::Bottom,
            Direction::Right => Direction::Left,
            Direction::Bottom => Direction::Top,
            Direction::Left => Direction::Right,
        }
    }

    /// The side of `from` that faces `to`, or `None` unless the two are
    /// exactly one step apart horizontally or vertically.
    pub fn between(from: Position, to: Position) -> Option<Self> {
        let dr = to.row as isize - from.row as isize;
        let dc = to.col as isize - from.col as isize;

        match (dr, dc) {
            (-1, 0) => Some(Direction::Top),
            (0, 1) => Some(Direction::Right),
            (1, 0) => Some(Direction::Bottom),
            (0, -1) => Some(Direction::Left),
            _ => None,
        }
    }

    fn bit(self) -> u8 {
        match self {
            Direction::Top => Walls::TOP,
            Direction::Right => Walls::RIGHT,
            Direction::Bottom => Walls::BOTTOM,
            Direction::Left => Walls::LEFT,
        }
    }
}

/// Wall bitmask: a set bit means the wall on that side is still standing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Walls(u8);

impl Walls {
    pub const TOP: u8 = 0b0001;
    pub const RIGHT: u8 = 0b0010;
    pub const BOTTOM: u8 = 0b0100;
    pub const LEFT: u8 = 0b1000;

    pub const fn all() -> Self {
        Walls(Self::TOP | Self::RIGHT | Self::BOTTOM | Self::LEFT)
    }

    pub fn bits(self) -> u8 {
        self.0
    }

    pub fn has(self, direction: Direction) -> bool {
        self.0 & direction.bit() != 0
    }

    fn remove(&mut self, direction: Direction) {
        self.0 &= !direction.bit();
    }
}

impl Default for Walls {
    fn default() -> Self {
        Self::all()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Cell {
    row: usize,
    col: usize,
    // Dimensions of the grid the cell belongs to, for bounds checks.
    rows: usize,
    columns: usize,
    visited: bool,
    walls: Walls,
}

impl Cell {
    pub fn new(row: usize, col: usize, rows: usize, columns: usize) -> Self {
        debug_assert!(row < rows && col < columns, "cell coordinates are out of bounds");

        Cell {
            row,
            col,
            rows,
            columns,
            visited: false,
            walls: Walls::all(),
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    pub fn position(&self) -> Position {
        Position::new(self.row, self.col)
    }

    pub fn is_visited(&self) -> bool {
        self.visited
    }

    pub fn walls(&self) -> Walls {
        self.walls
    }

    pub fn has_wall(&self, direction: Direction) -> bool {
        self.walls.has(direction)
    }

    pub fn neighbor(&self, direction: Direction) -> Option<Position> {
        let (row, col) = (self.row, self.col);
        match direction {
            Direction::Top if row > 0 => Some(Position::new(row - 1, col)),
            Direction::Right if col + 1 < self.columns => Some(Position::new(row, col + 1)),
            Direction::Bottom if row + 1 < self.rows => Some(Position::new(row + 1, col)),
            Direction::Left if col > 0 => Some(Position::new(row, col - 1)),
            _ => None,
        }
    }

    /// Unvisited grid neighbors in top, right, bottom, left order.
    pub fn neighbors_unvisited(&self, maze: &Maze) -> Vec<Position> {
        Direction::iter()
            .filter_map(|direction| self.neighbor(direction))
            .filter(|&position| !maze.cell(position).is_visited())
            .collect()
    }

    /// Knocks down the wall shared with `other` on both cells.
    ///
    /// Panics if `other` isn't orthogonally adjacent: the walk only ever
    /// moves one step at a time, so that would be a bug in the caller.
    pub fn remove_wall_toward(&mut self, other: &mut Cell) {
        let Some(direction) = Direction::between(self.position(), other.position()) else {
            panic!(
                "{} and {} are not orthogonally adjacent",
                self.position(),
                other.position()
            );
        };

        self.walls.remove(direction);
        other.walls.remove(direction.opposite());
    }

    pub(crate) fn visit(&mut self) {
        self.visited = true;
    }
}
