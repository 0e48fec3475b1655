//! Scene (draw stream) types.
//!
//! - `DrawList` stores device-space draw commands in paint order
//! - shape payloads and their push helpers live per shape under `scene::shapes`

mod cmd;
mod list;

pub mod shapes;

pub use cmd::DrawCmd;
pub use list::DrawList;
pub use shapes::ShapeStyle;
pub use shapes::bitmap::BitmapCmd;
pub use shapes::ellipse::EllipseCmd;
pub use shapes::line::LineCmd;
pub use shapes::rect::RectCmd;
pub use shapes::triangle::TriangleCmd;
