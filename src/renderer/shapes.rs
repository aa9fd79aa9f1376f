//! Shape generation for 2D primitives

use glam::Vec2;

use super::vertex::{Color, Vertex};
use super::{DrawCommand, DrawList, Rect};

/// Generate the two triangles covering a rectangle
pub fn rect(rect: &Rect, color: Color) -> [Vertex; 6] {
    let min = rect.pos;
    let max = rect.max();

    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Flatten a recorded frame into triangles, in draw order.
///
/// A `Clear` drops everything drawn before it inside its region; the GPU
/// backend clears the whole target each frame, so only full clears matter
/// and partial ones are skipped.
pub fn tessellate(list: &DrawList, viewport: Vec2) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(list.len() * 6);

    for cmd in &list.commands {
        match cmd {
            DrawCommand::Clear(area) => {
                if area.pos.cmple(Vec2::ZERO).all() && area.max().cmpge(viewport).all() {
                    vertices.clear();
                }
            }
            DrawCommand::FillRect { rect: r, color } => {
                vertices.extend_from_slice(&rect(r, *color));
            }
        }
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::{Surface, colors};

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), colors::WHITE);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 40.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 60.0);
    }

    #[test]
    fn test_tessellate_full_clear_drops_earlier_rects() {
        let viewport = Vec2::new(500.0, 500.0);
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), colors::BLACK);
        list.clear(Rect::new(0.0, 0.0, 500.0, 500.0));
        list.fill_rect(Rect::new(0.0, 0.0, 2.0, 2.0), colors::YELLOW);
        list.fill_rect(Rect::new(0.0, 0.0, 3.0, 3.0), colors::WHITE);

        let verts = tessellate(&list, viewport);
        assert_eq!(verts.len(), 12);
        assert_eq!(verts[0].color, colors::YELLOW);
        assert_eq!(verts[6].color, colors::WHITE);
    }

    #[test]
    fn test_tessellate_partial_clear_is_ignored() {
        let mut list = DrawList::new();
        list.fill_rect(Rect::new(0.0, 0.0, 1.0, 1.0), colors::BLACK);
        list.clear(Rect::new(0.0, 0.0, 10.0, 10.0));
        assert_eq!(tessellate(&list, Vec2::new(500.0, 500.0)).len(), 6);
    }
}
