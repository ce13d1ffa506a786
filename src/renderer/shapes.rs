//! Shape generation for 2D primitives

use glam::Vec2;
use std::f32::consts::PI;

use super::DrawCommand;
use super::vertex::Vertex;
use crate::sim::rect::Rect;

/// Segments used for ellipses
pub const ELLIPSE_SEGMENTS: u32 = 24;

/// Generate vertices for a filled rectangle (two triangles)
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (l, b, rt, t) = (r.left(), r.bottom(), r.right(), r.top());
    vec![
        Vertex::new(l, b, color),
        Vertex::new(rt, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, t, color),
    ]
}

/// Generate vertices for a filled ellipse inscribed in `bounds`
pub fn ellipse(bounds: &Rect, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let segments = segments.max(3);
    let center = bounds.center();
    let radii = bounds.size * 0.5;
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    let point = |i: u32| {
        let theta = (i as f32 / segments as f32) * 2.0 * PI;
        center + Vec2::new(radii.x * theta.cos(), radii.y * theta.sin())
    };

    for i in 0..segments {
        let p1 = point(i);
        let p2 = point(i + 1);

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(p1.x, p1.y, color));
        vertices.push(Vertex::new(p2.x, p2.y, color));
    }

    vertices
}

/// Turn a frame's shapes into one triangle list, in draw order
///
/// Text commands produce no geometry; the host lays out glyphs itself.
pub fn tessellate(commands: &[DrawCommand]) -> Vec<Vertex> {
    let mut vertices = Vec::new();
    for command in commands {
        match command {
            DrawCommand::Rect { rect: r, color } => vertices.extend(rect(r, *color)),
            DrawCommand::Ellipse { bounds, color } => {
                vertices.extend(ellipse(bounds, *color, ELLIPSE_SEGMENTS))
            }
            DrawCommand::Text { .. } => {}
        }
    }
    vertices
}
