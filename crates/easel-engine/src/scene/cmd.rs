use crate::scene::shapes::bitmap::BitmapCmd;
use crate::scene::shapes::ellipse::EllipseCmd;
use crate::scene::shapes::line::LineCmd;
use crate::scene::shapes::rect::RectCmd;
use crate::scene::shapes::triangle::TriangleCmd;

/// Renderer-agnostic draw command, in device pixels.
///
/// Extending the scene:
/// - add a new shape module under `scene::shapes::*`
/// - add a new variant here
/// - implement push helpers inside that shape module
/// - teach `render::tessellate` to turn it into triangles
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCmd {
    Rect(RectCmd),
    Triangle(TriangleCmd),
    Line(LineCmd),
    Ellipse(EllipseCmd),
    Bitmap(BitmapCmd),
}
