//! Coordinate spaces, geometry types and the resize policy.
//!
//! Two spaces exist:
//! - logical: origin at the window center, +X right, +Y up (what apps draw in)
//! - device: physical pixels, origin top-left, +X right, +Y down (what wgpu renders)
//!
//! [`CoordMapper`] converts between them. Renderers only ever see device space.

mod align;
mod mapper;
mod rect;
mod resize;
mod vec2;
mod viewport;

pub use align::Align;
pub use mapper::CoordMapper;
pub use rect::Rect;
pub use resize::ResizePolicy;
pub use vec2::Vec2;
pub use viewport::{ResizeOutcome, Viewport};
