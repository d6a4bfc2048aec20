//! Draws the badge frame with glium: two filled circles and the elastic
//! connector, all in one solid color.

use cgmath::{EuclideanSpace, Matrix4, Point2};
use glium::index::{NoIndices, PrimitiveType};
use glium::{Surface, VertexBuffer};

mod shaders;

use crate::badge::{Badge, BlobOutline, Circle};

/// Number of rim segments used to tessellate a filled circle.
const CIRCLE_SEGMENTS: usize = 64;
/// Number of line segments each quadratic edge of the blob is flattened into.
const BLOB_CURVE_STEPS: usize = 24;

/// Badge fill color.
const FILL_COLOR: [f32; 4] = [0.88, 0.11, 0.14, 1.0];
/// Background clear color.
const CLEAR_COLOR: (f32, f32, f32, f32) = (1.0, 1.0, 1.0, 1.0);

#[derive(Debug, Copy, Clone)]
struct Vertex2D {
    pos: [f32; 2],
}
glium::implement_vertex!(Vertex2D, pos);

/// Draws one frame of the badge onto `target`.
pub fn draw_badge(target: &mut glium::Frame, badge: &mut Badge) {
    // Keep the origin anchored to the current window center.
    let dimensions = target.get_dimensions();
    badge.set_layout_size(dimensions);
    let transform: [[f32; 4]; 4] = pixel_matrix(dimensions).into();

    let (r, g, b, a) = CLEAR_COLOR;
    target.clear_color_srgb(r, g, b, a);

    let frame = badge.frame();
    if let Some(blob) = &frame.blob {
        draw_fan(target, &blob_fan(blob), transform);
    }
    if let Some(circle) = &frame.origin_circle {
        draw_fan(target, &circle_fan(circle), transform);
    }
    draw_fan(target, &circle_fan(&frame.drag_circle), transform);
}

fn vertex(p: Point2<f64>) -> Vertex2D {
    Vertex2D {
        pos: [p.x as f32, p.y as f32],
    }
}

fn circle_fan(circle: &Circle) -> Vec<Vertex2D> {
    let mut verts = Vec::with_capacity(CIRCLE_SEGMENTS + 2);
    verts.push(vertex(circle.center));
    for i in 0..=CIRCLE_SEGMENTS {
        let angle = std::f64::consts::PI * 2.0 * i as f64 / CIRCLE_SEGMENTS as f64;
        verts.push(vertex(Point2::new(
            circle.center.x + circle.radius * angle.cos(),
            circle.center.y + circle.radius * angle.sin(),
        )));
    }
    verts
}

fn blob_fan(blob: &BlobOutline) -> Vec<Vertex2D> {
    // The blob is star-shaped around the midpoint of its two control points,
    // so a fan from there covers it without self-intersection.
    let hub = blob.c1.midpoint(blob.c2);
    let outline = blob.flatten(BLOB_CURVE_STEPS);
    let mut verts = Vec::with_capacity(outline.len() + 2);
    verts.push(vertex(hub));
    verts.extend(outline.iter().map(|&p| vertex(p)));
    verts.push(vertex(outline[0]));
    verts
}

fn draw_fan(target: &mut glium::Frame, verts: &[Vertex2D], transform: [[f32; 4]; 4]) {
    let vbo = VertexBuffer::new(&**crate::gui::DISPLAY, verts)
        .expect("Failed to create vertex buffer");

    let draw_params = glium::DrawParameters {
        blend: glium::Blend::alpha_blending(),
        ..glium::DrawParameters::default()
    };

    target
        .draw(
            &vbo,
            NoIndices(PrimitiveType::TriangleFan),
            &shaders::FILL_PROGRAM,
            &glium::uniform! {
                transform: transform,
                fill_color: FILL_COLOR,
            },
            &draw_params,
        )
        .expect("Failed to draw badge");
}

/// Maps pixel coordinates (origin top-left, y down) to OpenGL clip space.
fn pixel_matrix((width, height): (u32, u32)) -> Matrix4<f32> {
    Matrix4::from_translation(cgmath::vec3(-1.0, 1.0, 0.0))
        * Matrix4::from_nonuniform_scale(2.0 / width as f32, -2.0 / height as f32, 1.0)
}
