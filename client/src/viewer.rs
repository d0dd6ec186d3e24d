use tracing::info;

use common::{
    animation::{Animation, Schedule},
    config::MazeConfig,
    error::MazeError,
    render::Surface,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Quit,
    Restart,
    TogglePause,
}

/// Host-side state around one animation: pausing, restarting and knowing when
/// to stop asking the core for new steps.
pub struct Viewer {
    config: MazeConfig,
    animation: Animation,
    schedule: Schedule,
    paused: bool,
}

impl Viewer {
    pub fn new(config: MazeConfig) -> Result<Self, MazeError> {
        let animation = Animation::from_config(&config)?;
        Ok(Self {
            config,
            animation,
            schedule: Schedule::NextFrame,
            paused: false,
        })
    }

    /// Returns `false` once the viewer should close.
    pub fn apply(&mut self, command: Command) -> Result<bool, MazeError> {
        match command {
            Command::Quit => return Ok(false),
            Command::Restart => {
                // A fixed seed would just replay the same maze.
                let config = MazeConfig {
                    seed: None,
                    ..self.config
                };
                self.animation = Animation::from_config(&config)?;
                self.schedule = Schedule::NextFrame;
                self.paused = false;
            }
            Command::TogglePause => {
                self.paused = !self.paused;
                info!(paused = self.paused, "toggled pause");
            }
        }
        Ok(true)
    }

    pub fn tick(&mut self, surface: &mut impl Surface) {
        if self.paused || self.schedule == Schedule::Stop {
            // macroquad clears the screen every frame, so a finished maze has
            // to be drawn again to stay visible.
            self.animation.redraw(surface);
        } else {
            self.schedule = self.animation.frame(surface);
        }
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn is_finished(&self) -> bool {
        self.schedule == Schedule::Stop
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }
}

#[cfg(test)]
mod tests {
    use common::render::{Rgba, Vec2};

    use super::*;

    #[derive(Default)]
    struct CountingSurface {
        frames: usize,
        rects: usize,
    }

    impl Surface for CountingSurface {
        fn resize(&mut self, _width: f32, _height: f32) {
            self.frames += 1;
        }

        fn draw_line(&mut self, _from: Vec2, _to: Vec2, _thickness: f32, _color: Rgba) {}

        fn fill_rect(&mut self, _origin: Vec2, _width: f32, _height: f32, _color: Rgba) {
            self.rects += 1;
        }
    }

    fn small_config() -> MazeConfig {
        MazeConfig {
            size: 90,
            rows: 3,
            columns: 3,
            seed: Some(5),
            ..MazeConfig::default()
        }
    }

    fn tick_until_finished(viewer: &mut Viewer, surface: &mut CountingSurface) -> usize {
        let mut ticks = 0;
        while !viewer.is_finished() {
            viewer.tick(surface);
            ticks += 1;
            assert!(ticks < 1_000, "viewer never finished");
        }
        ticks
    }

    #[test]
    fn test_finishes_after_one_tick_per_move() {
        let mut viewer = Viewer::new(small_config()).unwrap();
        let mut surface = CountingSurface::default();

        // 3x3: 8 advances, 8 backtracks, one frame to see `Done`.
        assert_eq!(tick_until_finished(&mut viewer, &mut surface), 17);
        assert!(viewer.animation().walk().maze().is_perfect());
    }

    #[test]
    fn test_finished_viewer_keeps_drawing_without_stepping() {
        let mut viewer = Viewer::new(small_config()).unwrap();
        let mut surface = CountingSurface::default();
        tick_until_finished(&mut viewer, &mut surface);

        let frames = viewer.animation().frames();
        let drawn = surface.frames;
        viewer.tick(&mut surface);
        viewer.tick(&mut surface);

        assert_eq!(viewer.animation().frames(), frames);
        assert_eq!(surface.frames, drawn + 2);
    }

    #[test]
    fn test_pause_holds_the_walk() {
        let mut viewer = Viewer::new(small_config()).unwrap();
        let mut surface = CountingSurface::default();
        viewer.tick(&mut surface);

        assert!(viewer.apply(Command::TogglePause).unwrap());
        assert!(viewer.is_paused());
        let current = viewer.animation().walk().current();
        for _ in 0..5 {
            viewer.tick(&mut surface);
        }
        assert_eq!(viewer.animation().walk().current(), current);

        viewer.apply(Command::TogglePause).unwrap();
        viewer.tick(&mut surface);
        assert_ne!(viewer.animation().walk().current(), current);
    }

    #[test]
    fn test_restart_starts_a_fresh_walk() {
        let mut viewer = Viewer::new(small_config()).unwrap();
        let mut surface = CountingSurface::default();
        tick_until_finished(&mut viewer, &mut surface);
        viewer.apply(Command::TogglePause).unwrap();

        assert!(viewer.apply(Command::Restart).unwrap());
        assert!(!viewer.is_finished());
        assert!(!viewer.is_paused());
        assert_eq!(viewer.animation().frames(), 0);
        assert_eq!(viewer.animation().walk().maze().visited_count(), 1);
    }

    #[test]
    fn test_quit_closes() {
        let mut viewer = Viewer::new(small_config()).unwrap();
        assert!(!viewer.apply(Command::Quit).unwrap());
    }

    #[test]
    fn test_invalid_config_is_reported() {
        let config = MazeConfig {
            rows: 0,
            ..small_config()
        };
        assert!(matches!(Viewer::new(config), Err(MazeError::ZeroRows)));
    }
}
