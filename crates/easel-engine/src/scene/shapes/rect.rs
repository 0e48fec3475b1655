use crate::coords::Rect;
use crate::paint::Color;
use crate::scene::{DrawCmd, DrawList};

use super::ShapeStyle;

/// Axis-aligned rectangle draw payload.
#[derive(Debug, Clone, PartialEq)]
pub struct RectCmd {
    pub rect: Rect,
    pub color: Color,
    pub style: ShapeStyle,
}

impl RectCmd {
    #[inline]
    pub fn new(rect: Rect, color: Color, style: ShapeStyle) -> Self {
        Self { rect, color, style }
    }
}

impl DrawList {
    #[inline]
    pub fn push_rect(&mut self, rect: Rect, color: Color, style: ShapeStyle) {
        self.push(DrawCmd::Rect(RectCmd::new(rect.normalized(), color, style)));
    }

    #[inline]
    pub fn push_solid_rect(&mut self, rect: Rect, color: Color) {
        self.push_rect(rect, color, ShapeStyle::Fill);
    }
}
