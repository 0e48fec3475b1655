pub(crate) mod bitmap;
pub(crate) mod ellipse;
pub(crate) mod line;
pub(crate) mod rect;
pub(crate) mod triangle;

/// Whether a closed shape is filled or outlined.
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum ShapeStyle {
    Fill,
    /// Outline of the given thickness in device pixels. Rectangles and
    /// ellipses grow the outline inward from their edge; triangle edges are
    /// centered on the edge like lines.
    Stroke(f32),
}

impl ShapeStyle {
    #[inline]
    pub fn is_fill(self) -> bool {
        matches!(self, ShapeStyle::Fill)
    }
}
