// Defaults for a fresh maze, overridable through `config::MazeConfig::from_env`.
pub const DEFAULT_SIZE: u32 = 500; // Pixels, used for both width and height.
pub const DEFAULT_ROWS: usize = 12;
pub const DEFAULT_COLUMNS: usize = 12;
pub const DEFAULT_STEPS_PER_FRAME: usize = 1; // One step per frame makes every move of the walk visible.

pub const LINE_WIDTH: f32 = 2.0;

// Environment keys read by the bootstrap.
pub const SIZE_KEY: &str = "MAZE_SIZE";
pub const ROWS_KEY: &str = "MAZE_ROWS";
pub const COLUMNS_KEY: &str = "MAZE_COLUMNS";
pub const STEPS_PER_FRAME_KEY: &str = "MAZE_STEPS_PER_FRAME";
pub const SEED_KEY: &str = "MAZE_SEED";
