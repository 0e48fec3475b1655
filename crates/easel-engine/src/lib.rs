//! easel engine crate.
//!
//! A 2D drawing layer with a centered, Y-up coordinate system on top of
//! winit + wgpu. Applications implement [`App`], draw shapes, images and text
//! on a [`Canvas`], and hand themselves to [`Runtime`].
//!
//! ```rust,ignore
//! struct Hello;
//!
//! impl App for Hello {
//!     fn draw(&mut self, canvas: &mut Canvas) {
//!         canvas.fill_circle((0.0, 0.0), 50.0, Color::RED);
//!     }
//! }
//!
//! Runtime::launch(AppConfig::new("hello"), Hello);
//! ```

pub mod assets;
pub mod coords;
pub mod core;
pub mod device;
pub mod input;
pub mod logging;
pub mod paint;
pub mod render;
pub mod scene;
pub mod text;
pub mod time;
pub mod window;

pub use crate::assets::{Bitmap, Image};
pub use crate::coords::{Align, ResizePolicy, Vec2};
pub use crate::core::{App, AppCtx, Canvas, ImageOptions};
pub use crate::input::{Key, MouseButton};
pub use crate::paint::Color;
pub use crate::text::{FontSpec, TextStyle};
pub use crate::window::{AppConfig, Runtime};
