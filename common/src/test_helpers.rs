use glam::Vec2;

use crate::render::{Rgba, Surface};

#[derive(Clone, Debug, PartialEq)]
pub enum DrawCall {
    Line {
        from: Vec2,
        to: Vec2,
        thickness: f32,
        color: Rgba,
    },
    Rect {
        origin: Vec2,
        width: f32,
        height: f32,
        color: Rgba,
    },
}

/// Records draw calls so tests can check what a frame would have shown.
#[derive(Default)]
pub struct RecordingSurface {
    pub size: Option<(f32, f32)>,
    pub calls: Vec<DrawCall>,
    pub resizes: usize,
}

impl RecordingSurface {
    pub fn lines(&self) -> impl Iterator<Item = (Vec2, Vec2, f32, Rgba)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            DrawCall::Line {
                from,
                to,
                thickness,
                color,
            } => Some((from, to, thickness, color)),
            DrawCall::Rect { .. } => None,
        })
    }

    pub fn rects(&self) -> impl Iterator<Item = (Vec2, f32, f32, Rgba)> + '_ {
        self.calls.iter().filter_map(|call| match *call {
            DrawCall::Rect {
                origin,
                width,
                height,
                color,
            } => Some((origin, width, height, color)),
            DrawCall::Line { .. } => None,
        })
    }

    pub fn clear(&mut self) {
        self.calls.clear();
    }
}

impl Surface for RecordingSurface {
    fn resize(&mut self, width: f32, height: f32) {
        self.size = Some((width, height));
        self.resizes += 1;
    }

    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba) {
        self.calls.push(DrawCall::Line {
            from,
            to,
            thickness,
            color,
        });
    }

    fn fill_rect(&mut self, origin: Vec2, width: f32, height: f32, color: Rgba) {
        self.calls.push(DrawCall::Rect {
            origin,
            width,
            height,
            color,
        });
    }
}
