//! Application-facing contracts.
//!
//! The runtime drives an [`App`]: `initialize` once, then `update` and `draw`
//! every tick. `update` sees input and time through [`AppCtx`]; `draw`
//! records primitives in logical coordinates on the [`Canvas`].

mod app;
mod canvas;
mod ctx;

pub use app::App;
pub use canvas::{Canvas, ImageOptions};
pub use ctx::AppCtx;
