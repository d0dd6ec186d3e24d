use std::process;

use macroquad::Window;
use tracing::{error, info};
use tracing_subscriber::{EnvFilter, fmt};

use client::{run::run_viewer, window_conf};
use common::config::MazeConfig;

fn main() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).init();

    let config = match MazeConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("Error: {}.", e);
            process::exit(1);
        }
    };

    info!(
        size = config.size,
        rows = config.rows,
        columns = config.columns,
        steps_per_frame = config.steps_per_frame,
        "starting maze viewer"
    );

    Window::from_config(window_conf(&config), run_viewer(config));
}
