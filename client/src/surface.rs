use macroquad::prelude::*;

use common::render::{Rgba, Surface, Vec2 as Point};

/// Draws straight onto the macroquad window.
#[derive(Default)]
pub struct MacroquadSurface {
    size: Option<(f32, f32)>,
}

impl MacroquadSurface {
    pub fn new() -> Self {
        Self::default()
    }
}

pub fn to_color(rgba: Rgba) -> Color {
    Color::new(rgba.r, rgba.g, rgba.b, rgba.a)
}

impl Surface for MacroquadSurface {
    fn resize(&mut self, width: f32, height: f32) {
        // Only ask the window to change when the maze size does; every frame
        // resizes, like a canvas being cleared.
        if self.size != Some((width, height)) {
            request_new_screen_size(width, height);
            self.size = Some((width, height));
        }
    }

    fn draw_line(&mut self, from: Point, to: Point, thickness: f32, color: Rgba) {
        draw_line(from.x, from.y, to.x, to.y, thickness, to_color(color));
    }

    fn fill_rect(&mut self, origin: Point, width: f32, height: f32, color: Rgba) {
        draw_rectangle(origin.x, origin.y, width, height, to_color(color));
    }
}
