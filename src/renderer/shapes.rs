//! Shape generation for 2D primitives
//!
//! Shapes are built in window pixels (origin top-left, y down) and mapped to
//! NDC just before upload.

use glam::Vec2;

use super::vertex::Vertex;
use crate::sim::Rect;

/// Map a pixel position to normalized device coordinates for a
/// `width`×`height` target. (0, 0) lands on (-1, 1).
pub fn pixel_to_ndc(p: Vec2, width: u32, height: u32) -> Vec2 {
    let size = Vec2::new(width.max(1) as f32, height.max(1) as f32);
    let unit = p / size;
    Vec2::new(unit.x * 2.0 - 1.0, 1.0 - unit.y * 2.0)
}

/// Two triangles covering `rect`
pub fn rect(rect: Rect, color: [f32; 4]) -> [Vertex; 6] {
    let min = rect.pos.as_vec2();
    let max = (rect.pos + rect.size).as_vec2();

    [
        Vertex::new(min.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(max.x, min.y, color),
        Vertex::new(min.x, max.y, color),
        Vertex::new(max.x, max.y, color),
    ]
}

/// Convert pixel-space vertices to NDC
pub fn to_ndc(vertices: &[Vertex], width: u32, height: u32) -> Vec<Vertex> {
    vertices
        .iter()
        .map(|v| {
            let p = pixel_to_ndc(Vec2::from(v.position), width, height);
            Vertex::new(p.x, p.y, v.color)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pixel_to_ndc_corners() {
        assert_eq!(pixel_to_ndc(Vec2::ZERO, 1280, 720), Vec2::new(-1.0, 1.0));
        assert_eq!(pixel_to_ndc(Vec2::new(1280.0, 720.0), 1280, 720), Vec2::new(1.0, -1.0));
        assert_eq!(pixel_to_ndc(Vec2::new(640.0, 360.0), 1280, 720), Vec2::ZERO);
    }

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(Rect::new(10, 20, 100, 50), [1.0; 4]);
        let xs: Vec<f32> = verts.iter().map(|v| v.position[0]).collect();
        let ys: Vec<f32> = verts.iter().map(|v| v.position[1]).collect();
        assert_eq!(xs.iter().cloned().fold(f32::MAX, f32::min), 10.0);
        assert_eq!(xs.iter().cloned().fold(f32::MIN, f32::max), 110.0);
        assert_eq!(ys.iter().cloned().fold(f32::MAX, f32::min), 20.0);
        assert_eq!(ys.iter().cloned().fold(f32::MIN, f32::max), 70.0);
    }

    #[test]
    fn test_to_ndc_keeps_color() {
        let verts = to_ndc(&rect(Rect::new(0, 0, 1280, 720), [0.0, 1.0, 0.0, 1.0]), 1280, 720);
        assert_eq!(verts.len(), 6);
        assert_eq!(verts[0].position, [-1.0, 1.0]);
        assert_eq!(verts[5].position, [1.0, -1.0]);
        assert!(verts.iter().all(|v| v.color == [0.0, 1.0, 0.0, 1.0]));
    }
}
