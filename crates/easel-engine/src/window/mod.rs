//! Window + frame loop.
//!
//! Owns the `winit` EventLoop and the single window, wires them to the GPU
//! layer, and paces `update`/`draw` ticks.

mod config;
mod frame;
mod runtime;

pub use config::AppConfig;
pub use runtime::Runtime;
pub use crate::coords::ResizePolicy;
