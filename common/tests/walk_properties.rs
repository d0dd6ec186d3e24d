//! Property tests for the backtracking walk over random grid sizes and
//! neighbor choices:
//!
//! 1. A finished walk leaves a perfect maze (spanning tree of the grid).
//! 2. Walls always agree from both sides.
//! 3. The walk never advances into a visited cell.
//! 4. The same choices give the same maze.
//! 5. Stepping after `Done` changes nothing.

use common::maze::{
    Direction, Maze, MazeWalk, Position, RandomNeighbor, ScriptedNeighbor, StepResult,
};
use proptest::prelude::*;
use strum::IntoEnumIterator;

fn dimensions() -> impl Strategy<Value = (usize, usize)> {
    (1usize..=14, 1usize..=14)
}

fn assert_walls_symmetric(maze: &Maze) -> Result<(), TestCaseError> {
    for cell in maze.cells() {
        for direction in Direction::iter() {
            match cell.neighbor(direction) {
                Some(other) => {
                    prop_assert_eq!(
                        cell.has_wall(direction),
                        maze.cell(other).has_wall(direction.opposite()),
                        "{:?} side of {} disagrees with its neighbor",
                        direction,
                        cell.position()
                    );
                }
                // The border is never knocked down.
                None => {
                    prop_assert!(cell.has_wall(direction));
                }
            }
        }
    }
    Ok(())
}

proptest! {
    #[test]
    fn finished_walk_is_a_spanning_tree((rows, columns) in dimensions(), seed in any::<u64>()) {
        let mut walk = MazeWalk::with_picker(rows, columns, RandomNeighbor::seeded(seed)).unwrap();
        walk.run_to_completion();

        let maze = walk.maze();
        prop_assert_eq!(maze.visited_count(), rows * columns);
        prop_assert_eq!(maze.passage_count(), rows * columns - 1);
        prop_assert!(maze.is_perfect(), "not perfect:\n{}", maze);
        prop_assert!(walk.stack().is_empty());
    }

    #[test]
    fn walls_stay_symmetric_at_every_step(
        (rows, columns) in dimensions(),
        script in prop::collection::vec(0usize..4, 1..32),
    ) {
        let mut walk = MazeWalk::with_picker(rows, columns, ScriptedNeighbor::new(script)).unwrap();
        loop {
            assert_walls_symmetric(walk.maze())?;
            if walk.step() == StepResult::Done {
                break;
            }
        }
    }

    #[test]
    fn never_advances_into_a_visited_cell((rows, columns) in dimensions(), seed in any::<u64>()) {
        let mut walk = MazeWalk::with_picker(rows, columns, RandomNeighbor::seeded(seed)).unwrap();
        loop {
            let before = walk.maze().clone();
            let result = walk.step();
            let now = walk.current();

            match result {
                StepResult::Advanced => {
                    prop_assert!(!before.cell(now).is_visited(), "revisited {}", now);
                    prop_assert!(walk.maze().cell(now).is_visited());
                    prop_assert_eq!(walk.maze().visited_count(), before.visited_count() + 1);
                }
                StepResult::Backtracked => {
                    prop_assert_eq!(walk.maze(), &before);
                }
                StepResult::Done => break,
            }
        }
    }

    #[test]
    fn same_choices_same_maze(
        (rows, columns) in dimensions(),
        script in prop::collection::vec(any::<usize>(), 0..16),
    ) {
        let mut a =
            MazeWalk::with_picker(rows, columns, ScriptedNeighbor::new(script.clone())).unwrap();
        let mut b = MazeWalk::with_picker(rows, columns, ScriptedNeighbor::new(script)).unwrap();
        a.run_to_completion();
        b.run_to_completion();

        let walls_a: Vec<u8> = a.maze().cells().map(|cell| cell.walls().bits()).collect();
        let walls_b: Vec<u8> = b.maze().cells().map(|cell| cell.walls().bits()).collect();
        prop_assert_eq!(walls_a, walls_b);
    }

    #[test]
    fn done_is_idempotent((rows, columns) in dimensions(), extra in 1usize..8) {
        let mut walk = MazeWalk::new(rows, columns).unwrap();
        walk.run_to_completion();
        let maze = walk.maze().clone();

        for _ in 0..extra {
            prop_assert_eq!(walk.step(), StepResult::Done);
        }
        prop_assert_eq!(walk.maze(), &maze);
        prop_assert_eq!(walk.current(), Position::new(0, 0));
    }
}

#[test]
fn single_row_and_column_mazes_are_corridors() {
    for (rows, columns) in [(1, 9), (9, 1)] {
        let maze = Maze::generate(rows, columns).unwrap();
        assert!(maze.is_perfect());
        for cell in maze.cells() {
            if let Some(next) = cell.neighbor(Direction::Right).or(cell.neighbor(Direction::Bottom)) {
                assert!(maze.is_open_between(cell.position(), next));
            }
        }
    }
}
