//! Draw list → triangle list.
//!
//! Every command becomes plain textured triangles in device pixels. Shapes
//! sample a 1×1 white texture, so one pipeline draws everything and paint
//! order is simply vertex order. Consecutive commands that use the same
//! texture share a [`Batch`].

use std::f32::consts::TAU;
use std::ops::Range;

use bytemuck::{Pod, Zeroable};

use crate::assets::{Bitmap, BitmapId};
use crate::coords::{Rect, Vec2};
use crate::paint::Color;
use crate::scene::{BitmapCmd, DrawCmd, DrawList, EllipseCmd, RectCmd, ShapeStyle, TriangleCmd};

/// Maximum distance between a true curve and its polygon, in device pixels.
const CURVE_TOLERANCE: f32 = 0.25;
const MIN_SEGMENTS: u32 = 12;
const MAX_SEGMENTS: u32 = 256;

/// Vertex layout (32 bytes):
///
///  offset  0  pos    [f32; 2]   loc 0  device pixels
///  offset  8  uv     [f32; 2]   loc 1
///  offset 16  color  [f32; 4]   loc 2  linear, premultiplied
#[repr(C)]
#[derive(Debug, Copy, Clone, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub pos: [f32; 2],
    pub uv: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    const ATTRS: [wgpu::VertexAttribute; 3] = wgpu::vertex_attr_array![
        0 => Float32x2, // pos
        1 => Float32x2, // uv
        2 => Float32x4  // color
    ];

    pub(crate) fn layout() -> wgpu::VertexBufferLayout<'static> {
        wgpu::VertexBufferLayout {
            array_stride: std::mem::size_of::<Vertex>() as u64,
            step_mode: wgpu::VertexStepMode::Vertex,
            attributes: &Self::ATTRS,
        }
    }
}

/// A run of vertices drawn with one texture. `None` is the white texture.
#[derive(Debug, Clone)]
pub struct Batch {
    pub texture: Option<Bitmap>,
    pub vertices: Range<u32>,
}

impl Batch {
    #[inline]
    pub fn texture_id(&self) -> Option<BitmapId> {
        self.texture.as_ref().map(Bitmap::id)
    }
}

/// Tessellated frame. Reused across frames to keep its allocations.
#[derive(Debug, Default)]
pub struct Mesh {
    pub vertices: Vec<Vertex>,
    pub batches: Vec<Batch>,
}

impl Mesh {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.vertices.clear();
        self.batches.clear();
    }

    /// Switches to `texture` if the open batch uses a different one.
    fn bind(&mut self, texture: Option<&Bitmap>) {
        let id = texture.map(Bitmap::id);
        if self.batches.last().is_some_and(|b| b.texture_id() == id) {
            return;
        }
        let start = self.vertices.len() as u32;
        self.batches.push(Batch { texture: texture.cloned(), vertices: start..start });
    }

    fn tri(&mut self, a: Vec2, b: Vec2, c: Vec2, color: [f32; 4]) {
        for p in [a, b, c] {
            self.vertices.push(Vertex { pos: [p.x, p.y], uv: [0.0, 0.0], color });
        }
    }

    /// Two triangles over the quad `a b c d` (in order around the edge).
    fn quad(&mut self, a: Vec2, b: Vec2, c: Vec2, d: Vec2, color: [f32; 4]) {
        self.tri(a, b, c, color);
        self.tri(a, c, d, color);
    }

    fn rect(&mut self, r: Rect, color: [f32; 4]) {
        if r.is_empty() {
            return;
        }
        let (min, max) = (r.min(), r.max());
        self.quad(min, Vec2::new(max.x, min.y), max, Vec2::new(min.x, max.y), color);
    }

    fn close_batch(&mut self) {
        let end = self.vertices.len() as u32;
        if let Some(b) = self.batches.last_mut() {
            b.vertices.end = end;
        }
    }
}

/// Tessellates `list` into `mesh`, replacing its previous contents.
pub fn tessellate(list: &DrawList, mesh: &mut Mesh) {
    mesh.clear();

    for cmd in list.items() {
        match cmd {
            DrawCmd::Rect(c) => {
                mesh.bind(None);
                rect(mesh, c);
            }
            DrawCmd::Triangle(c) => {
                mesh.bind(None);
                triangle(mesh, c);
            }
            DrawCmd::Line(c) => {
                mesh.bind(None);
                line(mesh, c.from, c.to, c.thickness, c.color.to_linear_premul());
            }
            DrawCmd::Ellipse(c) => {
                mesh.bind(None);
                ellipse(mesh, c);
            }
            DrawCmd::Bitmap(c) => {
                mesh.bind(Some(&c.bitmap));
                bitmap(mesh, c);
            }
        }
        mesh.close_batch();
    }

    mesh.batches.retain(|b| !b.vertices.is_empty());
}

fn rect(mesh: &mut Mesh, c: &RectCmd) {
    let color = c.color.to_linear_premul();
    let r = c.rect.normalized();

    let t = match c.style {
        ShapeStyle::Stroke(t) if t > 0.0 && 2.0 * t < r.size.x.min(r.size.y) => t,
        ShapeStyle::Stroke(t) if t <= 0.0 => return,
        _ => return mesh.rect(r, color),
    };

    let (min, max) = (r.min(), r.max());
    // Top and bottom bands span the full width; side bands fill between them.
    mesh.rect(Rect::new(min.x, min.y, r.size.x, t), color);
    mesh.rect(Rect::new(min.x, max.y - t, r.size.x, t), color);
    mesh.rect(Rect::new(min.x, min.y + t, t, r.size.y - 2.0 * t), color);
    mesh.rect(Rect::new(max.x - t, min.y + t, t, r.size.y - 2.0 * t), color);
}

fn triangle(mesh: &mut Mesh, c: &TriangleCmd) {
    let color = c.color.to_linear_premul();
    let [a, b, p] = c.points;
    match c.style {
        ShapeStyle::Fill => mesh.tri(a, b, p, color),
        ShapeStyle::Stroke(t) => {
            line(mesh, a, b, t, color);
            line(mesh, b, p, t, color);
            line(mesh, p, a, t, color);
        }
    }
}

fn line(mesh: &mut Mesh, from: Vec2, to: Vec2, thickness: f32, color: [f32; 4]) {
    if thickness <= 0.0 {
        return;
    }
    let half = thickness * 0.5;
    let dir = (to - from).normalized();

    if dir == Vec2::zero() {
        // Degenerate segment: a dot as wide as the line.
        mesh.rect(Rect::new(from.x - half, from.y - half, thickness, thickness), color);
        return;
    }

    let n = dir.perp() * half;
    mesh.quad(from + n, to + n, to - n, from - n, color);
}

/// Segments needed so the polygon stays within [`CURVE_TOLERANCE`] of a
/// circle of radius `r`.
pub(crate) fn arc_segments(r: f32) -> u32 {
    if r <= CURVE_TOLERANCE {
        return MIN_SEGMENTS;
    }
    let step = 2.0 * (1.0 - CURVE_TOLERANCE / r).acos();
    ((TAU / step).ceil() as u32).clamp(MIN_SEGMENTS, MAX_SEGMENTS)
}

fn ellipse_point(center: Vec2, radii: Vec2, i: u32, n: u32) -> Vec2 {
    let a = TAU * i as f32 / n as f32;
    Vec2::new(center.x + radii.x * a.cos(), center.y + radii.y * a.sin())
}

fn ellipse(mesh: &mut Mesh, c: &EllipseCmd) {
    let color = c.color.to_linear_premul();
    let radii = Vec2::new(c.radii.x.abs(), c.radii.y.abs());
    if radii.x <= 0.0 || radii.y <= 0.0 {
        return;
    }

    let n = arc_segments(radii.x.max(radii.y));
    let inner_radii = match c.style {
        ShapeStyle::Stroke(t) if t <= 0.0 => return,
        ShapeStyle::Stroke(t) if t < radii.x.min(radii.y) => {
            Some(Vec2::new(radii.x - t, radii.y - t))
        }
        _ => None,
    };

    for i in 0..n {
        let o0 = ellipse_point(c.center, radii, i, n);
        let o1 = ellipse_point(c.center, radii, i + 1, n);
        match inner_radii {
            None => mesh.tri(c.center, o0, o1, color),
            Some(inner) => {
                let i0 = ellipse_point(c.center, inner, i, n);
                let i1 = ellipse_point(c.center, inner, i + 1, n);
                mesh.quad(o0, o1, i1, i0, color);
            }
        }
    }
}

fn bitmap(mesh: &mut Mesh, c: &BitmapCmd) {
    let r = c.dst.normalized();
    if r.is_empty() {
        return;
    }
    let white = Color::WHITE.to_linear_premul();
    let (min, max) = (r.min(), r.max());
    let corners = [
        (min, [0.0, 0.0]),
        (Vec2::new(max.x, min.y), [1.0, 0.0]),
        (max, [1.0, 1.0]),
        (Vec2::new(min.x, max.y), [0.0, 1.0]),
    ];
    for i in [0, 1, 2, 0, 2, 3] {
        let (p, uv) = corners[i];
        mesh.vertices.push(Vertex { pos: [p.x, p.y], uv, color: white });
    }
}

#[cfg(test)]
mod tests {
    use ::image::RgbaImage;

    use super::*;

    fn mesh_of(list: &DrawList) -> Mesh {
        let mut mesh = Mesh::new();
        tessellate(list, &mut mesh);
        mesh
    }

    fn bmp(w: u32, h: u32) -> Bitmap {
        Bitmap::new(RgbaImage::new(w, h))
    }

    fn bounds(mesh: &Mesh) -> Rect {
        let (mut min, mut max) = (Vec2::new(f32::MAX, f32::MAX), Vec2::new(f32::MIN, f32::MIN));
        for v in &mesh.vertices {
            min = Vec2::new(min.x.min(v.pos[0]), min.y.min(v.pos[1]));
            max = Vec2::new(max.x.max(v.pos[0]), max.y.max(v.pos[1]));
        }
        Rect::from_corners(min, max)
    }

    // ── rects ─────────────────────────────────────────────────────────────

    #[test]
    fn filled_rect_is_two_triangles() {
        let mut list = DrawList::new();
        list.push_solid_rect(Rect::new(10.0, 20.0, 30.0, 40.0), Color::RED);
        let mesh = mesh_of(&list);
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(bounds(&mesh), Rect::new(10.0, 20.0, 30.0, 40.0));
        assert!(mesh.vertices.iter().all(|v| v.color == Color::RED.to_linear_premul()));
    }

    #[test]
    fn stroked_rect_stays_inside_its_edge() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(0.0, 0.0, 50.0, 30.0), Color::WHITE, ShapeStyle::Stroke(4.0));
        let mesh = mesh_of(&list);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(bounds(&mesh), Rect::new(0.0, 0.0, 50.0, 30.0));
    }

    #[test]
    fn stroke_wider_than_the_rect_fills_it() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(0.0, 0.0, 6.0, 6.0), Color::WHITE, ShapeStyle::Stroke(3.0));
        assert_eq!(mesh_of(&list).vertices.len(), 6);
    }

    #[test]
    fn zero_stroke_draws_nothing() {
        let mut list = DrawList::new();
        list.push_rect(Rect::new(0.0, 0.0, 6.0, 6.0), Color::WHITE, ShapeStyle::Stroke(0.0));
        let mesh = mesh_of(&list);
        assert!(mesh.vertices.is_empty());
        assert!(mesh.batches.is_empty());
    }

    // ── lines & triangles ─────────────────────────────────────────────────

    #[test]
    fn horizontal_line_spans_its_thickness() {
        let mut list = DrawList::new();
        list.push_line(Vec2::new(0.0, 10.0), Vec2::new(100.0, 10.0), Color::WHITE, 4.0);
        let mesh = mesh_of(&list);
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(bounds(&mesh), Rect::new(0.0, 8.0, 100.0, 4.0));
    }

    #[test]
    fn zero_length_line_is_a_dot() {
        let mut list = DrawList::new();
        list.push_line(Vec2::new(5.0, 5.0), Vec2::new(5.0, 5.0), Color::WHITE, 2.0);
        assert_eq!(bounds(&mesh_of(&list)), Rect::new(4.0, 4.0, 2.0, 2.0));
    }

    #[test]
    fn triangle_fill_and_stroke() {
        let pts = [Vec2::new(0.0, 0.0), Vec2::new(10.0, 0.0), Vec2::new(0.0, 10.0)];
        let mut list = DrawList::new();
        list.push_triangle(pts, Color::GREEN, ShapeStyle::Fill);
        assert_eq!(mesh_of(&list).vertices.len(), 3);

        list.clear(Color::BLACK);
        list.push_triangle(pts, Color::GREEN, ShapeStyle::Stroke(1.0));
        assert_eq!(mesh_of(&list).vertices.len(), 18);
    }

    // ── ellipses ──────────────────────────────────────────────────────────

    #[test]
    fn circle_fits_its_bounding_box() {
        let mut list = DrawList::new();
        list.push_circle(Vec2::new(50.0, 50.0), 20.0, Color::BLUE, ShapeStyle::Fill);
        let mesh = mesh_of(&list);
        let n = arc_segments(20.0) as usize;
        assert_eq!(mesh.vertices.len(), 3 * n);
        let b = bounds(&mesh);
        assert!((b.max().x - 70.0).abs() < 0.01);
        assert!(b.min().x >= 30.0 - 0.01 && b.min().x < 30.5);
        assert!(b.min().y >= 30.0 - 0.01 && b.max().y <= 70.0 + 0.01);
    }

    #[test]
    fn stroked_ellipse_is_a_ring() {
        let mut list = DrawList::new();
        list.push_ellipse(Vec2::zero(), Vec2::new(40.0, 20.0), Color::WHITE, ShapeStyle::Stroke(2.0));
        let mesh = mesh_of(&list);
        let n = arc_segments(40.0) as usize;
        assert_eq!(mesh.vertices.len(), 6 * n);
        // Inner edge stays at least (radius - thickness) from the center.
        for v in &mesh.vertices {
            let (x, y) = (v.pos[0] / 38.0, v.pos[1] / 18.0);
            assert!(x * x + y * y >= 0.99);
        }
    }

    #[test]
    fn segment_count_grows_with_radius() {
        assert_eq!(arc_segments(0.1), MIN_SEGMENTS);
        assert!(arc_segments(100.0) > arc_segments(10.0));
        assert_eq!(arc_segments(1.0e6), MAX_SEGMENTS);
    }

    #[test]
    fn degenerate_ellipse_draws_nothing() {
        let mut list = DrawList::new();
        list.push_ellipse(Vec2::zero(), Vec2::new(0.0, 10.0), Color::WHITE, ShapeStyle::Fill);
        assert!(mesh_of(&list).vertices.is_empty());
    }

    // ── bitmaps & batching ────────────────────────────────────────────────

    #[test]
    fn bitmap_quad_covers_the_texture() {
        let mut list = DrawList::new();
        list.push_bitmap(bmp(8, 4), Vec2::new(3.0, 5.0));
        let mesh = mesh_of(&list);
        assert_eq!(bounds(&mesh), Rect::new(3.0, 5.0, 8.0, 4.0));
        assert!(mesh.vertices.iter().all(|v| v.color == [1.0; 4]));
        assert!(mesh.vertices.iter().any(|v| v.uv == [1.0, 1.0]));
    }

    #[test]
    fn shapes_share_one_batch() {
        let mut list = DrawList::new();
        list.push_solid_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED);
        list.push_line(Vec2::zero(), Vec2::new(5.0, 0.0), Color::RED, 1.0);
        list.push_triangle([Vec2::zero(), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)], Color::RED, ShapeStyle::Fill);
        let mesh = mesh_of(&list);
        assert_eq!(mesh.batches.len(), 1);
        assert_eq!(mesh.batches[0].vertices, 0..15);
        assert!(mesh.batches[0].texture.is_none());
    }

    #[test]
    fn textures_split_batches_in_paint_order() {
        let a = bmp(2, 2);
        let mut list = DrawList::new();
        list.push_solid_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED);
        list.push_bitmap(a.clone(), Vec2::zero());
        list.push_bitmap(a.clone(), Vec2::new(4.0, 0.0));
        list.push_solid_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED);
        let mesh = mesh_of(&list);

        let ids: Vec<_> = mesh.batches.iter().map(Batch::texture_id).collect();
        assert_eq!(ids, vec![None, Some(a.id()), None]);
        assert_eq!(mesh.batches[1].vertices, 6..18);
        assert_eq!(mesh.batches[2].vertices, 18..24);
    }

    #[test]
    fn mesh_is_rebuilt_each_call() {
        let mut list = DrawList::new();
        list.push_solid_rect(Rect::new(0.0, 0.0, 1.0, 1.0), Color::RED);
        let mut mesh = Mesh::new();
        tessellate(&list, &mut mesh);
        tessellate(&list, &mut mesh);
        assert_eq!(mesh.vertices.len(), 6);
        assert_eq!(mesh.batches.len(), 1);
    }
}
