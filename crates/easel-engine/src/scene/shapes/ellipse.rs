use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::ShapeStyle;

/// Axis-aligned ellipse draw payload. A circle has equal radii.
#[derive(Debug, Clone, PartialEq)]
pub struct EllipseCmd {
    pub center: Vec2,
    pub radii: Vec2,
    pub color: Color,
    pub style: ShapeStyle,
}

impl DrawList {
    #[inline]
    pub fn push_ellipse(&mut self, center: Vec2, radii: Vec2, color: Color, style: ShapeStyle) {
        self.push(DrawCmd::Ellipse(EllipseCmd { center, radii, color, style }));
    }

    #[inline]
    pub fn push_circle(&mut self, center: Vec2, radius: f32, color: Color, style: ShapeStyle) {
        self.push_ellipse(center, Vec2::new(radius, radius), color, style);
    }
}
