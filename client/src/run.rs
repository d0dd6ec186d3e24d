use macroquad::prelude::*;
use tracing::{error, info};

use crate::{
    surface::MacroquadSurface,
    viewer::{Command, Viewer},
};
use common::config::MazeConfig;

pub async fn run_viewer(config: MazeConfig) {
    let mut viewer = match Viewer::new(config) {
        Ok(viewer) => viewer,
        Err(e) => {
            error!("failed to set up maze: {}", e);
            return;
        }
    };
    let mut surface = MacroquadSurface::new();

    info!("Escape quits, R starts a new maze, Space pauses.");

    'frames: loop {
        for command in poll_commands() {
            match viewer.apply(command) {
                Ok(true) => {}
                Ok(false) => break 'frames,
                Err(e) => {
                    error!("failed to restart maze: {}", e);
                    break 'frames;
                }
            }
        }

        viewer.tick(&mut surface);

        next_frame().await;
    }

    info!("Viewer shutting down.");
}

fn poll_commands() -> Vec<Command> {
    let mut commands = Vec::new();

    if is_quit_requested() || is_key_pressed(KeyCode::Escape) {
        commands.push(Command::Quit);
    }
    if is_key_pressed(KeyCode::R) {
        commands.push(Command::Restart);
    }
    if is_key_pressed(KeyCode::Space) {
        commands.push(Command::TogglePause);
    }

    commands
}
