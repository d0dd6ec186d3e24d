use tracing::{debug, trace};

use super::{Maze, NeighborPicker, Position, RandomNeighbor};
use crate::error::MazeError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepResult {
    Advanced,    // Moved into a fresh cell, knocking down the wall on the way.
    Backtracked, // Dead end: went back to the previous cell on the stack.
    Done,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WalkState {
    Running,
    Complete,
}

/// Recursive backtracking, one move at a time.
///
/// Each call to [`MazeWalk::step`] either carves into an unvisited neighbor of
/// the current cell or pops the stack, so the maze is consistent between any
/// two calls and the walk can be stopped or resumed at any point.
pub struct MazeWalk<P = RandomNeighbor> {
    maze: Maze,
    current: Position,
    stack: Vec<Position>,
    picker: P,
    state: WalkState,
    advances: usize,
    backtracks: usize,
}

impl MazeWalk<RandomNeighbor> {
    pub fn new(rows: usize, columns: usize) -> Result<Self, MazeError> {
        Self::with_picker(rows, columns, RandomNeighbor::new())
    }
}

impl<P: NeighborPicker> MazeWalk<P> {
    pub fn with_picker(rows: usize, columns: usize, picker: P) -> Result<Self, MazeError> {
        let mut maze = Maze::new(rows, columns)?;
        let current = maze.start();
        maze.visit(current);

        Ok(Self {
            maze,
            current,
            stack: Vec::new(),
            picker,
            state: WalkState::Running,
            advances: 0,
            backtracks: 0,
        })
    }

    pub fn step(&mut self) -> StepResult {
        if self.state == WalkState::Complete {
            return StepResult::Done;
        }

        let candidates = self.maze.neighbors_unvisited(self.current);

        if !candidates.is_empty() {
            let i = self.picker.pick(candidates.len());
            debug_assert!(i < candidates.len(), "picker chose a missing neighbor");
            let next = candidates[i.min(candidates.len() - 1)];

            self.maze.visit(next);
            self.stack.push(self.current);
            self.maze.remove_wall_between(self.current, next);
            trace!(from = %self.current, to = %next, "advanced");

            self.current = next;
            self.advances += 1;
            return StepResult::Advanced;
        }

        if let Some(previous) = self.stack.pop() {
            trace!(from = %self.current, to = %previous, "backtracked");
            self.current = previous;
            self.backtracks += 1;
            return StepResult::Backtracked;
        }

        self.state = WalkState::Complete;
        debug!(
            rows = self.maze.rows(),
            columns = self.maze.columns(),
            advances = self.advances,
            backtracks = self.backtracks,
            "maze complete"
        );
        StepResult::Done
    }

    /// Steps until the walk is done. Returns how many steps did something.
    pub fn run_to_completion(&mut self) -> usize {
        let mut steps = 0;
        while self.step() != StepResult::Done {
            steps += 1;
        }
        steps
    }

    pub fn state(&self) -> WalkState {
        self.state
    }

    pub fn is_complete(&self) -> bool {
        self.state == WalkState::Complete
    }

    pub fn current(&self) -> Position {
        self.current
    }

    pub fn stack(&self) -> &[Position] {
        &self.stack
    }

    pub fn maze(&self) -> &Maze {
        &self.maze
    }

    pub fn into_maze(self) -> Maze {
        self.maze
    }

    pub fn advances(&self) -> usize {
        self.advances
    }

    pub fn backtracks(&self) -> usize {
        self.backtracks
    }
}
