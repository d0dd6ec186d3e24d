use tracing::info;

use crate::{
    config::MazeConfig,
    error::MazeError,
    maze::{MazeWalk, NeighborPicker, RandomNeighbor, StepResult},
    render::{Painter, Surface},
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Schedule {
    NextFrame,
    Stop,
}

/// Drives a walk one frame at a time. The host calls [`Animation::frame`] once
/// per display refresh and stops asking for frames when it returns
/// [`Schedule::Stop`].
pub struct Animation<P = RandomNeighbor> {
    walk: MazeWalk<P>,
    painter: Painter,
    steps_per_frame: usize,
    frames: u64,
    finished: bool,
}

impl Animation<RandomNeighbor> {
    pub fn from_config(config: &MazeConfig) -> Result<Self, MazeError> {
        config.validate()?;
        // Always seeded, so any maze worth keeping can be regenerated from the log.
        let seed = config.seed.unwrap_or_else(rand::random);
        info!(
            seed,
            rows = config.rows,
            columns = config.columns,
            "generating maze"
        );
        let picker = RandomNeighbor::seeded(seed);
        let walk = MazeWalk::with_picker(config.rows, config.columns, picker)?;
        Self::new(walk, Painter::new(config.size), config.steps_per_frame)
    }
}

impl<P: NeighborPicker> Animation<P> {
    pub fn new(
        walk: MazeWalk<P>,
        painter: Painter,
        steps_per_frame: usize,
    ) -> Result<Self, MazeError> {
        if steps_per_frame == 0 {
            return Err(MazeError::ZeroStepsPerFrame);
        }
        if painter.size.is_nan() || painter.size <= 0.0 {
            return Err(MazeError::ZeroSize);
        }

        Ok(Self {
            walk,
            painter,
            steps_per_frame,
            frames: 0,
            finished: false,
        })
    }

    pub fn frame(&mut self, surface: &mut impl Surface) -> Schedule {
        self.frames += 1;

        if self.finished {
            self.draw_finished(surface);
            return Schedule::Stop;
        }

        let mut done = false;
        for _ in 0..self.steps_per_frame {
            if self.walk.step() == StepResult::Done {
                done = true;
                break;
            }
        }

        if done {
            self.finished = true;
            self.draw_finished(surface);
            let maze = self.walk.maze();
            info!(
                rows = maze.rows(),
                columns = maze.columns(),
                frames = self.frames,
                "maze generated"
            );
            Schedule::Stop
        } else {
            self.painter.draw(&self.walk, surface);
            Schedule::NextFrame
        }
    }

    /// Redraws without stepping, e.g. while the host is paused.
    pub fn redraw(&self, surface: &mut impl Surface) {
        if self.finished {
            self.draw_finished(surface);
        } else {
            self.painter.draw(&self.walk, surface);
        }
    }

    fn draw_finished(&self, surface: &mut impl Surface) {
        self.painter.draw(&self.walk, surface);
        self.painter.highlight_start_and_end(self.walk.maze(), surface);
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn walk(&self) -> &MazeWalk<P> {
        &self.walk
    }

    pub fn painter(&self) -> &Painter {
        &self.painter
    }
}
