pub mod cell;
pub mod picker;
pub mod walk;

use std::{collections::VecDeque, fmt};

use strum::IntoEnumIterator;

use crate::error::MazeError;

pub use cell::{Cell, Direction, Position, Walls};
pub use picker::{FirstNeighbor, NeighborPicker, RandomNeighbor, ScriptedNeighbor};
pub use walk::{MazeWalk, StepResult, WalkState};

const WALL_SYMBOL: &str = "██";
const SPACE_SYMBOL: &str = "  ";

#[derive(Clone, PartialEq, Eq)]
pub struct Maze {
    rows: usize,
    columns: usize,
    cells: Vec<Cell>, // Row-major.
}

impl Maze {
    /// A fully walled grid with no visited cells.
    pub fn new(rows: usize, columns: usize) -> Result<Self, MazeError> {
        if rows == 0 {
            return Err(MazeError::ZeroRows);
        }
        if columns == 0 {
            return Err(MazeError::ZeroColumns);
        }

        let mut cells = Vec::with_capacity(rows * columns);
        for row in 0..rows {
            for col in 0..columns {
                cells.push(Cell::new(row, col, rows, columns));
            }
        }

        Ok(Self {
            rows,
            columns,
            cells,
        })
    }

    /// Runs a random walk to completion in one go, without animation.
    pub fn generate(rows: usize, columns: usize) -> Result<Self, MazeError> {
        let mut walk = MazeWalk::new(rows, columns)?;
        walk.run_to_completion();
        Ok(walk.into_maze())
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn start(&self) -> Position {
        Position::new(0, 0)
    }

    pub fn finish(&self) -> Position {
        Position::new(self.rows - 1, self.columns - 1)
    }

    pub fn contains(&self, position: Position) -> bool {
        position.row < self.rows && position.col < self.columns
    }

    pub fn get(&self, position: Position) -> Option<&Cell> {
        if self.contains(position) {
            Some(&self.cells[self.index(position)])
        } else {
            None
        }
    }

    /// Panics if `position` is outside the grid.
    pub fn cell(&self, position: Position) -> &Cell {
        self.get(position).unwrap_or_else(|| {
            panic!(
                "{position} is outside a {}x{} maze",
                self.rows, self.columns
            )
        })
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.cells.iter()
    }

    pub fn visited_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_visited()).count()
    }

    /// Number of walls knocked down. Each passage is shared by two cells, so
    /// only the right and bottom sides are counted.
    pub fn passage_count(&self) -> usize {
        self.cells
            .iter()
            .map(|cell| {
                [Direction::Right, Direction::Bottom]
                    .into_iter()
                    .filter(|&direction| {
                        cell.neighbor(direction).is_some() && !cell.has_wall(direction)
                    })
                    .count()
            })
            .sum()
    }

    pub fn neighbors_unvisited(&self, position: Position) -> Vec<Position> {
        self.cell(position).neighbors_unvisited(self)
    }

    /// `false` for cells that aren't adjacent.
    pub fn is_open_between(&self, a: Position, b: Position) -> bool {
        match Direction::between(a, b) {
            Some(direction) if self.contains(a) && self.contains(b) => {
                !self.cell(a).has_wall(direction)
            }
            _ => false,
        }
    }

    pub fn remove_wall_between(&mut self, a: Position, b: Position) {
        let (cell_a, cell_b) = self.pair_mut(a, b);
        cell_a.remove_wall_toward(cell_b);
    }

    pub(crate) fn visit(&mut self, position: Position) {
        let index = self.index(position);
        self.cells[index].visit();
    }

    /// A perfect maze is a spanning tree of the grid: every cell reachable from
    /// the start and exactly one fewer passages than cells.
    pub fn is_perfect(&self) -> bool {
        self.passage_count() == self.cells.len() - 1 && self.reachable_count() == self.cells.len()
    }

    fn reachable_count(&self) -> usize {
        let mut seen = vec![false; self.cells.len()];
        let mut queue = VecDeque::new();
        let start = self.start();

        seen[self.index(start)] = true;
        queue.push_back(start);
        let mut count = 0;

        while let Some(position) = queue.pop_front() {
            count += 1;
            let cell = self.cell(position);

            for direction in Direction::iter() {
                if cell.has_wall(direction) {
                    continue;
                }
                if let Some(next) = cell.neighbor(direction) {
                    let index = self.index(next);
                    if !seen[index] {
                        seen[index] = true;
                        queue.push_back(next);
                    }
                }
            }
        }

        count
    }

    fn index(&self, position: Position) -> usize {
        position.row * self.columns + position.col
    }

    fn pair_mut(&mut self, a: Position, b: Position) -> (&mut Cell, &mut Cell) {
        assert!(
            self.contains(a) && self.contains(b),
            "{a} and {b} should both be inside the maze"
        );
        let i = self.index(a);
        let j = self.index(b);
        assert_ne!(i, j, "a cell has no wall toward itself");

        if i < j {
            let (low, high) = self.cells.split_at_mut(j);
            (&mut low[i], &mut high[0])
        } else {
            let (low, high) = self.cells.split_at_mut(i);
            (&mut high[0], &mut low[j])
        }
    }

    /// Text picture of the maze on a (2R+1)x(2C+1) block grid: cells sit at
    /// odd coordinates, the walls between them at the even ones.
    pub fn log(&self) -> String {
        let height = 2 * self.rows + 1;
        let width = 2 * self.columns + 1;
        let mut blocks = vec![vec![true; width]; height];

        for cell in &self.cells {
            let z = 2 * cell.row() + 1;
            let x = 2 * cell.col() + 1;
            blocks[z][x] = false;

            if cell.neighbor(Direction::Right).is_some() && !cell.has_wall(Direction::Right) {
                blocks[z][x + 1] = false;
            }
            if cell.neighbor(Direction::Bottom).is_some() && !cell.has_wall(Direction::Bottom) {
                blocks[z + 1][x] = false;
            }
        }

        blocks
            .iter()
            .map(|row| {
                row.iter()
                    .map(|&is_wall| if is_wall { WALL_SYMBOL } else { SPACE_SYMBOL })
                    .collect::<String>()
            })
            .collect::<Vec<String>>()
            .join("\n")
    }
}

impl fmt::Debug for Maze {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

impl fmt::Display for Maze {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.log())
    }
}
