pub use glam::{Vec2, vec2};

use crate::{
    constants::LINE_WIDTH,
    maze::{Cell, Direction, Maze, MazeWalk, NeighborPicker, Position},
};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const BLACK: Rgba = Rgba::new(0.0, 0.0, 0.0, 1.0);
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const RED: Rgba = Rgba::new(1.0, 0.0, 0.0, 1.0);
    pub const GREEN: Rgba = Rgba::new(0.0, 0.5, 0.0, 1.0); // CSS "green", not lime.
    pub const PURPLE: Rgba = Rgba::new(0.5, 0.0, 0.5, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

/// Whatever the maze is drawn on. Coordinates are pixels, origin top left.
pub trait Surface {
    fn resize(&mut self, width: f32, height: f32);
    fn draw_line(&mut self, from: Vec2, to: Vec2, thickness: f32, color: Rgba);
    fn fill_rect(&mut self, origin: Vec2, width: f32, height: f32, color: Rgba);
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Palette {
    pub wall: Rgba,
    pub background: Rgba,
    pub visited: Rgba,
    pub current: Rgba,
    pub start: Rgba,
    pub finish: Rgba,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            wall: Rgba::BLACK,
            background: Rgba::WHITE,
            visited: Rgba::WHITE,
            current: Rgba::PURPLE,
            start: Rgba::RED,
            finish: Rgba::GREEN,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Painter {
    pub size: f32,
    pub line_width: f32,
    pub palette: Palette,
}

impl Painter {
    pub fn new(size: u32) -> Self {
        Self {
            size: size as f32,
            line_width: LINE_WIDTH,
            palette: Palette::default(),
        }
    }

    /// Redraws the whole maze, highlighting the current cell while the walk is
    /// still going.
    pub fn draw<P: NeighborPicker>(&self, walk: &MazeWalk<P>, surface: &mut impl Surface) {
        let maze = walk.maze();

        surface.resize(self.size, self.size);
        surface.fill_rect(Vec2::ZERO, self.size, self.size, self.palette.background);

        for cell in maze.cells() {
            self.show(maze, cell, surface);
        }

        if !walk.is_complete() {
            self.highlight(maze, walk.current(), surface);
        }
    }

    pub fn highlight_start_and_end(&self, maze: &Maze, surface: &mut impl Surface) {
        self.fill_cell(maze, maze.start(), self.palette.start, surface);
        self.fill_cell(maze, maze.finish(), self.palette.finish, surface);
    }

    pub fn cell_size(&self, maze: &Maze) -> Vec2 {
        vec2(
            self.size / maze.columns() as f32,
            self.size / maze.rows() as f32,
        )
    }

    pub fn cell_origin(&self, maze: &Maze, position: Position) -> Vec2 {
        let cell_size = self.cell_size(maze);
        vec2(
            position.col as f32 * cell_size.x,
            position.row as f32 * cell_size.y,
        )
    }

    fn show(&self, maze: &Maze, cell: &Cell, surface: &mut impl Surface) {
        let origin = self.cell_origin(maze, cell.position());
        let Vec2 { x: w, y: h } = self.cell_size(maze);

        if cell.is_visited() {
            surface.fill_rect(
                origin + Vec2::ONE,
                inset(w, 2.0),
                inset(h, 2.0),
                self.palette.visited,
            );
        }

        let top_left = origin;
        let top_right = origin + vec2(w, 0.0);
        let bottom_right = origin + vec2(w, h);
        let bottom_left = origin + vec2(0.0, h);

        for (direction, from, to) in [
            (Direction::Top, top_left, top_right),
            (Direction::Right, top_right, bottom_right),
            (Direction::Bottom, bottom_left, bottom_right),
            (Direction::Left, top_left, bottom_left),
        ] {
            if cell.has_wall(direction) {
                surface.draw_line(from, to, self.line_width, self.palette.wall);
            }
        }
    }

    fn highlight(&self, maze: &Maze, position: Position, surface: &mut impl Surface) {
        let origin = self.cell_origin(maze, position);
        let Vec2 { x: w, y: h } = self.cell_size(maze);
        surface.fill_rect(
            origin + Vec2::ONE,
            inset(w, 3.0),
            inset(h, 3.0),
            self.palette.current,
        );
    }

    fn fill_cell(&self, maze: &Maze, position: Position, color: Rgba, surface: &mut impl Surface) {
        let origin = self.cell_origin(maze, position);
        let Vec2 { x: w, y: h } = self.cell_size(maze);
        surface.fill_rect(origin + Vec2::ONE, inset(w, 2.0), inset(h, 2.0), color);
    }
}

// Cells thinner than the inset collapse to nothing rather than flip over.
fn inset(extent: f32, by: f32) -> f32 {
    (extent - by).max(0.0)
}
