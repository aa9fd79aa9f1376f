//! Rendering module
//!
//! The simulation only ever talks to a [`Surface`]: "clear this rect" and
//! "fill this rect with a color", in canvas pixels (origin top-left, y down).
//! [`DrawList`] records those calls; the WebGPU backend replays a recorded
//! list as triangles.

pub mod pipeline;
pub mod shapes;
pub mod vertex;

pub use pipeline::RenderState;
pub use vertex::{Color, Vertex, colors};

use glam::Vec2;

/// Axis-aligned rectangle in canvas pixels
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Top-left corner
    pub pos: Vec2,
    pub size: Vec2,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            size: Vec2::new(w, h),
        }
    }

    pub fn from_pos_size(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    /// Bottom-right corner
    #[inline]
    pub fn max(&self) -> Vec2 {
        self.pos + self.size
    }
}

/// A 2D drawing target
pub trait Surface {
    /// Erase a region back to the background
    fn clear(&mut self, rect: Rect);
    /// Fill a region with a solid color
    fn fill_rect(&mut self, rect: Rect, color: Color);
}

/// Anything that can paint itself onto a [`Surface`]
pub trait Drawable {
    fn draw(&self, surface: &mut dyn Surface);
}

/// One recorded surface call
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DrawCommand {
    Clear(Rect),
    FillRect { rect: Rect, color: Color },
}

/// A surface that records every call in order
#[derive(Debug, Clone, Default)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
}

impl DrawList {
    pub fn new() -> Self {
        Self {
            commands: Vec::new(),
        }
    }

    /// Drop recorded commands, keeping the allocation
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Filled rects in draw order
    pub fn filled(&self) -> impl Iterator<Item = (&Rect, &Color)> {
        self.commands.iter().filter_map(|cmd| match cmd {
            DrawCommand::FillRect { rect, color } => Some((rect, color)),
            DrawCommand::Clear(_) => None,
        })
    }

    /// Filled rects of one color in draw order
    pub fn filled_with(&self, color: Color) -> impl Iterator<Item = &Rect> {
        self.filled()
            .filter(move |(_, c)| **c == color)
            .map(|(rect, _)| rect)
    }
}

impl Surface for DrawList {
    fn clear(&mut self, rect: Rect) {
        self.commands.push(DrawCommand::Clear(rect));
    }

    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }
}
