use crate::coords::Vec2;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::ShapeStyle;

/// Triangle draw payload. Winding does not matter.
#[derive(Debug, Clone, PartialEq)]
pub struct TriangleCmd {
    pub points: [Vec2; 3],
    pub color: Color,
    pub style: ShapeStyle,
}

impl DrawList {
    #[inline]
    pub fn push_triangle(&mut self, points: [Vec2; 3], color: Color, style: ShapeStyle) {
        self.push(DrawCmd::Triangle(TriangleCmd { points, color, style }));
    }
}
