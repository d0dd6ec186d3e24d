pub mod run;
pub mod surface;
pub mod viewer;

use macroquad::prelude::Conf;

use common::config::MazeConfig;

pub fn window_conf(config: &MazeConfig) -> Conf {
    let side = config.size.min(i32::MAX as u32) as i32;
    Conf {
        window_title: "Backtrack".to_string(),
        window_width: side,
        window_height: side,
        window_resizable: false,
        ..Default::default()
    }
}
